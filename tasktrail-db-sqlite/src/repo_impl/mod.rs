// NOTE:
// All columns with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use diesel::{self, prelude::*, result::Error as DieselError};

use tasktrail_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod activity;
mod board;
mod column;
mod task;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        _ => repo::Error::Other(err.into()),
    }
}

fn resolve_board_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::boards::dsl;
    schema::boards::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

fn resolve_task_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::tasks::dsl;
    schema::tasks::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}
