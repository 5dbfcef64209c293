use diesel::sqlite::SqliteConnection;
use diesel::{self, Connection, ExpressionMethods, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::choices;

#[derive(Debug, Deserialize, Identifiable, Queryable, Serialize, PartialEq)]
#[table_name = "choices"]
pub struct Choice {
    pub id: i32,
    pub question_id: i32,
    pub choice_text: String,
    pub votes: i32,
}

#[derive(Debug, Deserialize, Queryable, Serialize, PartialEq)]
pub struct ChoiceDetails {
    pub id: i32,
    pub choice_text: String,
}

#[derive(Insertable)]
#[table_name = "choices"]
pub struct NewChoice {
    pub question_id: i32,
    pub choice_text: String,
}

impl Choice {
    pub fn create(
        conn: &SqliteConnection,
        question_id: i32,
        choice_text: String,
    ) -> Result<Choice, Error> {
        use crate::schema::choices::dsl::{choices as choices_table, id};

        conn.transaction::<_, Error, _>(|| {
            diesel::insert_into(choices::table)
                .values(NewChoice {
                    question_id,
                    choice_text,
                })
                .execute(conn)?;

            let choice = choices_table.order(id.desc()).first::<Choice>(conn)?;

            Ok(choice)
        })
    }

    pub fn get_by_question_id(
        conn: &SqliteConnection,
        question_id: i32,
    ) -> Result<Vec<Choice>, Error> {
        use crate::schema::choices::dsl::{choices as choices_table, id, question_id as question_id_field};

        let results = choices_table
            .filter(question_id_field.eq(question_id))
            .order(id)
            .load::<Choice>(conn)?;

        Ok(results)
    }

    pub fn get_details_by_question_id(
        conn: &SqliteConnection,
        question_id: i32,
    ) -> Result<Vec<ChoiceDetails>, Error> {
        use crate::schema::choices::dsl::{
            choice_text, choices as choices_table, id, question_id as question_id_field,
        };

        let results = choices_table
            .filter(question_id_field.eq(question_id))
            .select((id, choice_text))
            .order(id)
            .load::<ChoiceDetails>(conn)?;

        Ok(results)
    }
}
