use thiserror::Error;

use crate::{
    repositories,
    util::validate::{ActivityInvalidation, CommentInvalidation},
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid actor id")]
    Actor,
    #[error("Invalid board id")]
    Board,
    #[error("Invalid task id")]
    Task,
    #[error("Empty comment")]
    EmptyComment,
    #[error("The comment is too long")]
    CommentTooLong,
    // One merged error for "does not exist" and "not yours": probing for
    // foreign comment ids must not reveal whether they exist.
    #[error("The comment could not be found")]
    CommentNotFound,
    #[error("Missing feed scope")]
    MissingScope,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<ActivityInvalidation> for Error {
    fn from(err: ActivityInvalidation) -> Self {
        match err {
            ActivityInvalidation::Actor => Self::Actor,
            ActivityInvalidation::Board => Self::Board,
            ActivityInvalidation::Task => Self::Task,
            ActivityInvalidation::Comment(err) => err.into(),
        }
    }
}

impl From<CommentInvalidation> for Error {
    fn from(err: CommentInvalidation) -> Self {
        match err {
            CommentInvalidation::Empty => Self::EmptyComment,
            CommentInvalidation::TooLong => Self::CommentTooLong,
        }
    }
}
