#[macro_use]
extern crate log;

use std::{env, io};

use actix_cors::Cors;
use actix_web::{http, middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;

mod routes;
mod tests;

use crate::routes::{not_found, routes};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

fn io_error<E: ToString>(err: E) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err.to_string())
}

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let database_url =
        env::var("DATABASE_URL").map_err(|_| io_error("DATABASE_URL must be set"))?;
    let bind_address =
        env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
    let client_host = env::var("CLIENT_HOST").ok();

    let pool = db::new_pool(&database_url).map_err(io_error)?;
    {
        let conn = db::get_conn(&pool).map_err(io_error)?;
        db::run_migrations(&conn).map_err(io_error)?;
    }

    info!("Serving polls from {} on {}", database_url, bind_address);

    HttpServer::new(move || {
        let cors = match &client_host {
            Some(host) => Cors::default().allowed_origin(host),
            None => Cors::default().allow_any_origin(),
        }
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::ACCEPT, http::header::CONTENT_TYPE])
        .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .configure(routes)
            .default_service(web::route().to(not_found))
    })
    .bind(bind_address)?
    .run()
    .await
}
