//! Error types for task status parsing.

use thiserror::Error;

/// Error returned while parsing a task status from requests or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
