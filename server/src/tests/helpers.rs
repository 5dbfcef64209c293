#[cfg(test)]
pub mod tests {
    use actix_web::{test, web, App};
    use chrono::{Duration, Utc};
    use serde::de::DeserializeOwned;

    use db::{
        get_conn,
        models::{Choice, Question},
        SqlitePool,
    };

    use crate::routes::{not_found, routes};

    /// Helper for HTTP GET integration tests
    pub async fn test_get<R>(pool: &SqlitePool, route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pool.clone()))
                .configure(routes)
                .default_service(web::route().to(not_found)),
        )
        .await;
        let req = test::TestRequest::get().uri(route).to_request();

        let res = test::call_service(&app, req).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;
        let json_body = serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        });

        (status, json_body)
    }

    /// Creates a question published `days` away from now, negative for the past.
    pub fn create_question(pool: &SqlitePool, text: &str, days: i64) -> Question {
        let conn = get_conn(pool).unwrap();
        Question::create(&conn, text.to_string(), Utc::now() + Duration::days(days)).unwrap()
    }

    pub fn create_choice(pool: &SqlitePool, question_id: i32, choice_text: &str) -> Choice {
        let conn = get_conn(pool).unwrap();
        Choice::create(&conn, question_id, choice_text.to_string()).unwrap()
    }
}
