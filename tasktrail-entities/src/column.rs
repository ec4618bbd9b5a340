use crate::id::*;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub id       : Id,
    pub board_id : Id,
    pub name     : String,
}
