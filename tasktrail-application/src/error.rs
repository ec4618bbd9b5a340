use std::io;

use thiserror::Error;

use tasktrail_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

pub use tasktrail_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<String> for BError {
    fn from(s: String) -> Self {
        Self::Internal(s)
    }
}

/// The message shown to the end user when an operation fails.
///
/// Validation failures list every violated constraint; anything touching
/// the store is reduced to a generic message that leaks no internals.
pub fn user_facing_message(err: &AppError) -> String {
    match err {
        AppError::Business(BError::Parameter(err)) => violated_constraints(err).join(", "),
        _ => "Something went wrong, please try again later".to_string(),
    }
}

fn violated_constraints(err: &ParameterError) -> Vec<String> {
    match err {
        ParameterError::Repo(_) => {
            vec!["Something went wrong, please try again later".to_string()]
        }
        err => vec![err.to_string()],
    }
}
