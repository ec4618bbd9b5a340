#[macro_use]
extern crate log;

mod activity_feed;
mod comment;
mod record_activity;

pub mod prelude {
    pub use super::{activity_feed::*, comment::*, record_activity::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use tasktrail_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use tasktrail_db_sqlite::Connections;
}
