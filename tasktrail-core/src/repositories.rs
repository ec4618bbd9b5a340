// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

/// Inclusive creation-time bounds for feed queries.
#[derive(Clone, Debug, Copy, Default, PartialEq, Eq)]
pub struct ActivityTimeRange {
    pub since: Option<TimestampMs>,
    pub until: Option<TimestampMs>,
}

pub trait ActivityRepo {
    /// Appends one event. Existing rows are never touched by this method.
    fn create_activity(&self, _: ActivityEvent) -> Result<()>;

    fn load_activity(&self, id: &str) -> Result<ActivityEvent>;

    // All feed queries return events newest first.
    fn activities_of_board(
        &self,
        board_id: &str,
        range: &ActivityTimeRange,
        pagination: &Pagination,
    ) -> Result<Vec<ActivityEvent>>;
    fn activities_of_task(
        &self,
        task_id: &str,
        range: &ActivityTimeRange,
        pagination: &Pagination,
    ) -> Result<Vec<ActivityEvent>>;
    fn activities_of_user(
        &self,
        user_id: &str,
        range: &ActivityTimeRange,
        pagination: &Pagination,
    ) -> Result<Vec<ActivityEvent>>;

    fn count_activities(&self) -> Result<usize>;

    // Rewrites the content of the single comment event matched by both the
    // event id and the owning user id, leaving every other attribute alone.
    // Returns the number of matched rows, i.e. 0 if the event does not
    // exist, is no comment or is owned by somebody else.
    fn update_comment_content(&self, id: &str, owner_id: &str, content: &str) -> Result<usize>;

    // Same matching rule as `update_comment_content`.
    fn delete_comment_of_owner(&self, id: &str, owner_id: &str) -> Result<usize>;

    fn delete_activities_of_task(&self, task_id: &str) -> Result<usize>;
    fn delete_activities_of_board(&self, board_id: &str) -> Result<usize>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user(&self, id: &str) -> Result<Option<User>>;
    fn delete_user(&self, id: &str) -> Result<()>;
}

pub trait BoardRepo {
    fn create_board(&self, board: &Board) -> Result<()>;
    fn get_board(&self, id: &str) -> Result<Board>;
    fn delete_board(&self, id: &str) -> Result<()>;
}

pub trait ColumnRepo {
    fn create_column(&self, column: &Column) -> Result<()>;
    fn try_get_column(&self, id: &str) -> Result<Option<Column>>;
    fn delete_column(&self, id: &str) -> Result<()>;
}

pub trait TaskRepo {
    fn create_task(&self, task: &Task) -> Result<()>;
    fn get_task(&self, id: &str) -> Result<Task>;
    fn try_get_task(&self, id: &str) -> Result<Option<Task>>;
    fn delete_task(&self, id: &str) -> Result<()>;
}
