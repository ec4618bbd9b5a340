// NOTE:
// All columns with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use tasktrail_core::entities;

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct UserRow {
    pub rowid: i64,
    pub id: String,
    pub name: String,
}

impl From<UserRow> for entities::User {
    fn from(from: UserRow) -> Self {
        let UserRow { rowid: _, id, name } = from;
        Self {
            id: id.into(),
            name,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = boards)]
pub struct NewBoard<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct BoardRow {
    pub rowid: i64,
    pub id: String,
    pub name: String,
}

impl From<BoardRow> for entities::Board {
    fn from(from: BoardRow) -> Self {
        let BoardRow { rowid: _, id, name } = from;
        Self {
            id: id.into(),
            name,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = board_columns)]
pub struct NewBoardColumn<'a> {
    pub id: &'a str,
    pub board_rowid: i64,
    pub name: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTask<'a> {
    pub id: &'a str,
    pub board_rowid: i64,
    pub column_id: Option<&'a str>,
    pub title: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = activities)]
pub struct NewActivityRow<'a> {
    pub id: &'a str,
    pub created_at: i64,
    pub created_by: &'a str,
    pub board_rowid: i64,
    pub task_rowid: Option<i64>,
    pub kind: i16,
    pub old_column_id: Option<&'a str>,
    pub new_column_id: Option<&'a str>,
    pub original_column_id: Option<&'a str>,
    pub target_user_id: Option<&'a str>,
    pub depends_on_task_id: Option<&'a str>,
    pub label: Option<&'a str>,
    pub due_at: Option<i64>,
    pub content: Option<&'a str>,
}

#[derive(Queryable)]
pub struct JoinedActivityRow {
    pub id: String,
    pub created_at: i64,
    pub created_by: String,
    pub kind: i16,
    pub old_column_id: Option<String>,
    pub new_column_id: Option<String>,
    pub original_column_id: Option<String>,
    pub target_user_id: Option<String>,
    pub depends_on_task_id: Option<String>,
    pub label: Option<String>,
    pub due_at: Option<i64>,
    pub content: Option<String>,
    // Joined columns
    pub board_id: String,
    pub task_id: Option<String>,
}
