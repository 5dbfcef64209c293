use actix_web::web::{block, Data, Json, Path};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{
    get_conn,
    models::{Choice, Question},
    SqlitePool,
};
use errors::Error;

#[derive(Debug, Deserialize, Serialize)]
pub struct ResultsResponse {
    pub id: i32,
    pub text: String,
    pub choices: Vec<Choice>,
}

pub async fn results(
    question_id: Path<i32>,
    pool: Data<SqlitePool>,
) -> Result<Json<ResultsResponse>, Error> {
    let question_id = question_id.into_inner();
    let now = Utc::now();

    let (question, choices) = block(move || -> Result<_, Error> {
        let conn = get_conn(&pool)?;
        let question = Question::find_published(&conn, question_id, now)?;
        let choices = Choice::get_by_question_id(&conn, question.id)?;

        Ok((question, choices))
    })
    .await??;

    Ok(Json(ResultsResponse {
        id: question.id,
        text: question.text,
        choices,
    }))
}
