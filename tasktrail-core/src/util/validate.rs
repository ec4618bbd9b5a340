use thiserror::Error;

use crate::entities::*;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

// Creating a comment caps the content more tightly than editing it later.
pub const NEW_COMMENT_MAX_CHARS: usize = 2000;
pub const EDITED_COMMENT_MAX_CHARS: usize = 10_000;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CommentInvalidation {
    #[error("Empty comment")]
    Empty,
    #[error("The comment is too long")]
    TooLong,
}

/// Checks the trimmed content against the given character limit.
pub fn comment_content(content: &str, max_chars: usize) -> Result<&str, CommentInvalidation> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(CommentInvalidation::Empty);
    }
    if trimmed.chars().count() > max_chars {
        return Err(CommentInvalidation::TooLong);
    }
    Ok(trimmed)
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ActivityInvalidation {
    #[error("Invalid actor id")]
    Actor,
    #[error("Invalid board id")]
    Board,
    #[error("Invalid task id")]
    Task,
    #[error(transparent)]
    Comment(CommentInvalidation),
}

impl Validate for ActivityEvent {
    type Error = ActivityInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !self.by.is_valid() {
            return Err(Self::Error::Actor);
        }
        if !self.board_id.is_valid() {
            return Err(Self::Error::Board);
        }
        if let Some(task_id) = self.payload.task_id() {
            if !task_id.is_valid() {
                return Err(Self::Error::Task);
            }
        }
        if let ActivityPayload::CommentAdded { ref content, .. } = self.payload {
            comment_content(content, NEW_COMMENT_MAX_CHARS).map_err(Self::Error::Comment)?;
        }
        Ok(())
    }
}

impl AutoCorrect for ActivityPayload {
    fn auto_correct(self) -> Self {
        match self {
            Self::CommentAdded { task_id, content } => Self::CommentAdded {
                task_id,
                content: content.trim().to_owned(),
            },
            Self::LabelAttached { task_id, label } => Self::LabelAttached {
                task_id,
                label: label.trim().to_owned(),
            },
            Self::LabelDetached { task_id, label } => Self::LabelDetached {
                task_id,
                label: label.trim().to_owned(),
            },
            other => other,
        }
    }
}
