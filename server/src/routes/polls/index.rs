use actix_web::web::{block, Data, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{get_conn, models::Question, SqlitePool};
use errors::Error;

pub const NO_POLLS_MESSAGE: &str = "No polls are available.";

#[derive(Debug, Deserialize, Serialize)]
pub struct IndexResponse {
    pub latest_question_list: Vec<Question>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub async fn index(pool: Data<SqlitePool>) -> Result<Json<IndexResponse>, Error> {
    let now = Utc::now();
    let latest_question_list = block(move || {
        let conn = get_conn(&pool)?;
        Question::get_published(&conn, now)
    })
    .await??;

    let message = if latest_question_list.is_empty() {
        Some(NO_POLLS_MESSAGE.to_string())
    } else {
        None
    };

    Ok(Json(IndexResponse {
        latest_question_list,
        message,
    }))
}
