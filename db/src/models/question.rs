use std::fmt;

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use diesel::sqlite::SqliteConnection;
use diesel::{self, Connection, ExpressionMethods, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::questions;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Question {
    pub id: i32,
    pub text: String,
    pub dt_published: DateTime<Utc>,
}

// sqlite keeps timestamps without an offset, rows are always UTC
#[derive(Queryable)]
struct QuestionRow {
    id: i32,
    text: String,
    dt_published: NaiveDateTime,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Question {
            id: row.id,
            text: row.text,
            dt_published: Utc.from_utc_datetime(&row.dt_published),
        }
    }
}

#[derive(Insertable)]
#[table_name = "questions"]
pub struct NewQuestion {
    pub text: String,
    pub dt_published: NaiveDateTime,
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl Question {
    /// A question is visible once its publication time has been reached.
    pub fn is_published_at(&self, now: DateTime<Utc>) -> bool {
        self.dt_published <= now
    }

    /// True when published within the 24 hours leading up to `now`.
    /// The window is open at the old end: exactly one day ago is not recent.
    pub fn is_recent_at(&self, now: DateTime<Utc>) -> bool {
        now - Duration::days(1) < self.dt_published && self.is_published_at(now)
    }

    pub fn is_recent(&self) -> bool {
        self.is_recent_at(Utc::now())
    }

    pub fn create(
        conn: &SqliteConnection,
        text: String,
        dt_published: DateTime<Utc>,
    ) -> Result<Question, Error> {
        use crate::schema::questions::dsl::{id, questions as questions_table};

        let row = conn.transaction::<_, Error, _>(|| {
            diesel::insert_into(questions::table)
                .values(NewQuestion {
                    text,
                    dt_published: dt_published.naive_utc(),
                })
                .execute(conn)?;

            let row = questions_table.order(id.desc()).first::<QuestionRow>(conn)?;

            Ok(row)
        })?;

        Ok(row.into())
    }

    /// Questions published at or before `now`, newest first.
    pub fn get_published(
        conn: &SqliteConnection,
        now: DateTime<Utc>,
    ) -> Result<Vec<Question>, Error> {
        use crate::schema::questions::dsl::{dt_published, id, questions as questions_table};

        let rows = questions_table
            .filter(dt_published.le(now.naive_utc()))
            .order((dt_published.desc(), id.desc()))
            .load::<QuestionRow>(conn)?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    /// Fails with `Error::NotFound` for unknown ids and for questions
    /// that are not yet published.
    pub fn find_published(
        conn: &SqliteConnection,
        question_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Question, Error> {
        use crate::schema::questions::dsl::{dt_published, id, questions as questions_table};

        debug!("Looking up published question {}", question_id);

        let row = questions_table
            .filter(id.eq(question_id))
            .filter(dt_published.le(now.naive_utc()))
            .first::<QuestionRow>(conn)?;

        Ok(row.into())
    }
}
