use crate::id::*;

/// A user as far as the activity trail is concerned: an id to attribute
/// actions to and a name to display. Accounts, credentials and sessions
/// are managed elsewhere.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id   : Id,
    pub name : String,
}
