use actix_web::web::{block, Data, Json, Path};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use db::{
    get_conn,
    models::{Choice, ChoiceDetails, Question},
    SqlitePool,
};
use errors::Error;

#[derive(Debug, Deserialize, Serialize)]
pub struct DetailResponse {
    pub id: i32,
    pub text: String,
    pub dt_published: DateTime<Utc>,
    pub is_recent: bool,
    pub choices: Vec<ChoiceDetails>,
}

pub async fn detail(
    question_id: Path<i32>,
    pool: Data<SqlitePool>,
) -> Result<Json<DetailResponse>, Error> {
    let question_id = question_id.into_inner();
    let now = Utc::now();

    let (question, choices) = block(move || -> Result<_, Error> {
        let conn = get_conn(&pool)?;
        let question = Question::find_published(&conn, question_id, now)?;
        let choices = Choice::get_details_by_question_id(&conn, question.id)?;

        Ok((question, choices))
    })
    .await??;

    Ok(Json(DetailResponse {
        is_recent: question.is_recent_at(now),
        id: question.id,
        text: question.text,
        dt_published: question.dt_published,
        choices,
    }))
}

#[cfg(test)]
mod tests {
    use super::DetailResponse;
    use crate::tests::helpers::tests::{create_choice, create_question, test_get};
    use db::new_memory_pool;
    use errors::ErrorResponse;

    #[actix_rt::test]
    async fn test_future_question() {
        let pool = new_memory_pool().unwrap();
        let future_question = create_question(&pool, "Future question.", 5);

        let res: (u16, ErrorResponse) =
            test_get(&pool, &format!("/polls/{}/", future_question.id)).await;
        assert_eq!(res.0, 404);
        assert_eq!(res.1.errors, vec!["Record not found".to_string()]);
    }

    #[actix_rt::test]
    async fn test_past_question() {
        let pool = new_memory_pool().unwrap();
        let past_question = create_question(&pool, "Past Question.", -5);

        let res: (u16, DetailResponse) =
            test_get(&pool, &format!("/polls/{}/", past_question.id)).await;
        assert_eq!(res.0, 200);

        assert_eq!(res.1.id, past_question.id);
        assert_eq!(res.1.text, past_question.text);
        assert_eq!(res.1.is_recent, false);
        assert!(res.1.choices.is_empty());
    }

    #[actix_rt::test]
    async fn test_recent_question_with_choices() {
        let pool = new_memory_pool().unwrap();
        let question = create_question(&pool, "What's new?", 0);
        create_choice(&pool, question.id, "Not much");
        create_choice(&pool, question.id, "The sky");

        let res: (u16, DetailResponse) =
            test_get(&pool, &format!("/polls/{}/", question.id)).await;
        assert_eq!(res.0, 200);

        assert_eq!(res.1.is_recent, true);
        let choice_texts: Vec<&str> = res
            .1
            .choices
            .iter()
            .map(|choice| choice.choice_text.as_str())
            .collect();
        assert_eq!(choice_texts, vec!["Not much", "The sky"]);
    }

    #[actix_rt::test]
    async fn test_missing_question() {
        let pool = new_memory_pool().unwrap();

        let res: (u16, ErrorResponse) = test_get(&pool, "/polls/42/").await;
        assert_eq!(res.0, 404);
    }

    #[actix_rt::test]
    async fn test_non_numeric_id() {
        let pool = new_memory_pool().unwrap();

        let res: (u16, ErrorResponse) = test_get(&pool, "/polls/abc/").await;
        assert_eq!(res.0, 404);
        assert_eq!(res.1.errors, vec!["Not Found".to_string()]);
    }
}
