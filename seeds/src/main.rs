#[macro_use]
extern crate log;

use std::env;

use chrono::{Duration, Utc};
use dotenv::dotenv;

use db::{
    get_conn, new_pool,
    models::{Choice, Question},
    run_migrations,
};
use errors::Error;

fn main() -> Result<(), Error> {
    dotenv().ok();
    env_logger::init();

    let database_url = env::var("DATABASE_URL")
        .map_err(|_| Error::InternalServerError("DATABASE_URL must be set".into()))?;

    let pool = new_pool(&database_url)?;
    let conn = get_conn(&pool)?;
    run_migrations(&conn)?;

    let now = Utc::now();
    let polls = [
        (
            "What's new?",
            now - Duration::hours(2),
            vec!["Not much", "The sky", "Just hacking again"],
        ),
        (
            "Which editor do you use?",
            now - Duration::days(12),
            vec!["vim", "emacs", "Something else"],
        ),
        (
            "Will this show up yet?",
            now + Duration::days(7),
            vec!["Yes", "No"],
        ),
    ];

    for (text, dt_published, choices) in polls.iter() {
        let question = Question::create(&conn, text.to_string(), *dt_published)?;
        for choice_text in choices {
            Choice::create(&conn, question.id, choice_text.to_string())?;
        }
        info!("Seeded question {} - {}", question.id, question);
    }

    Ok(())
}
