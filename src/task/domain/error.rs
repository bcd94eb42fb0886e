//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while validating task field values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title exceeds the storage limit.
    #[error("task title is {actual} characters, limit is {max}")]
    TitleTooLong {
        /// Maximum accepted length in characters.
        max: usize,
        /// Length of the rejected value in characters.
        actual: usize,
    },

    /// The description exceeds the storage limit.
    #[error("task description is {actual} characters, limit is {max}")]
    DescriptionTooLong {
        /// Maximum accepted length in characters.
        max: usize,
        /// Length of the rejected value in characters.
        actual: usize,
    },
}

/// Error returned while parsing task statuses from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
