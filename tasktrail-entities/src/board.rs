use crate::id::*;

/// A kanban board. Owns its columns, tasks and activity events.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub id   : Id,
    pub name : String,
}
