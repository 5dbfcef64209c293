#[macro_use]
extern crate diesel;
#[macro_use]
extern crate diesel_migrations;
#[macro_use]
extern crate log;

use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use r2d2::Error as PoolError;

use errors::Error;

pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;
pub type Connection = PooledConnection<ConnectionManager<SqliteConnection>>;
pub mod models;
pub mod schema;

embed_migrations!("migrations");

pub fn get_conn(pool: &SqlitePool) -> Result<Connection, PoolError> {
    pool.get().map_err(|err| {
        error!("Failed to get connection - {}", err.to_string());
        err
    })
}

const MEMORY_DATABASE_URL: &str = ":memory:";

/// Every connection to `:memory:` opens a fresh database, so an in-memory
/// pool is pinned to one connection that is never recycled.
pub fn new_pool(database_url: &str) -> Result<SqlitePool, Error> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);

    let builder = if database_url == MEMORY_DATABASE_URL {
        Pool::builder()
            .max_size(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        Pool::builder()
    };

    let pool = builder.build(manager).map_err(|err| {
        error!("Failed to create db pool - {}", err.to_string());
        err
    })?;

    Ok(pool)
}

/// Pool over a private in-memory database, already migrated.
pub fn new_memory_pool() -> Result<SqlitePool, Error> {
    let pool = new_pool(MEMORY_DATABASE_URL)?;

    {
        let conn = get_conn(&pool)?;
        run_migrations(&conn)?;
    }

    Ok(pool)
}

pub fn run_migrations(conn: &SqliteConnection) -> Result<(), Error> {
    embedded_migrations::run(conn).map_err(|err| {
        error!("Failed to run migrations - {}", err.to_string());
        Error::InternalServerError(err.to_string())
    })
}
