//! Error types for payload validation and status parsing

use thiserror::Error;

/// The API payload does not have the expected shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    /// The payload is not a JSON object
    #[error("API response is not an object (got {0})")]
    NotAnObject(&'static str),

    /// The payload has no `homeworks` key
    #[error("API response has no 'homeworks' key")]
    MissingHomeworks,

    /// `homeworks` is present but is not a list
    #[error("'homeworks' in API response is not a list (got {0})")]
    HomeworksNotAList(&'static str),
}

/// A homework record cannot be turned into a notification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    /// A required field is absent or null
    #[error("homework record has no '{0}' field")]
    MissingField(&'static str),

    /// A required field has the wrong type
    #[error("homework record field '{field}' is not a string (got {found})")]
    InvalidField {
        field: &'static str,
        found: &'static str,
    },

    /// The status is not in the verdict table
    #[error("unknown homework status '{0}'")]
    UnknownStatus(String),
}
