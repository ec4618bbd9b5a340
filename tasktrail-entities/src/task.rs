use crate::id::*;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id        : Id,
    pub board_id  : Id,
    // None while the task is not placed on any column, e.g. in the backlog.
    pub column_id : Option<Id>,
    pub title     : String,
}
