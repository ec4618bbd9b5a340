mod delete_comment;
mod edit_comment;
mod error;
mod query_activities;
mod record_activity;
mod resolve_names;


pub use self::{
    delete_comment::*, edit_comment::*, error::Error, query_activities::*, record_activity::*,
    resolve_names::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
