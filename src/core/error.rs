//! # Errors
//!
//! Every failure a user can trigger ends up as one console line. The line is
//! the error's tag followed by its `Display` text:
//!
//! ```text
//! ZNTH_ERROR: Thought ID: 4 not found.
//! ZNTH_USAGE: VIEW_THOUGHT [ID]
//! ```
//!
//! None of these are fatal. The reducer decides whether the mode survives.

use thiserror::Error;

use crate::core::thought::ThoughtId;

/// Failures of the storage adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store has not finished opening yet.
    #[error("DB not ready.")]
    NotReady,
    #[error("{0}")]
    Io(String),
    /// The store file exists but could not be decoded.
    #[error("corrupt store: {0}")]
    Corrupt(String),
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Corrupt(e.to_string())
    }
}

/// User-facing errors of the command interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JournalError {
    /// An id prompt received something that is not a non-negative integer.
    #[error("Invalid ID.")]
    Parse,
    /// `view_thought` with a non-numeric argument.
    #[error("Invalid ID for VIEW_THOUGHT.")]
    ParseViewId,
    #[error("Thought ID: {0} not found.")]
    NotFound(ThoughtId),
    /// Missing required argument; carries the usage line.
    #[error("{0}")]
    Usage(&'static str),
    #[error("Command not found: {0}")]
    UnknownCommand(String),
    /// The store could not be reached at all (e.g. still opening).
    #[error("{0}")]
    Storage(StoreError),
    /// A store call failed; `action` reads as "Could not <action>."
    #[error("Could not {action}. {source}")]
    OperationFailed {
        action: &'static str,
        source: StoreError,
    },
    #[error("Theme \"{0}\" not found.")]
    ThemeNotFound(String),
}

impl JournalError {
    pub fn tag(&self) -> &'static str {
        match self {
            JournalError::Usage(_) => "ZNTH_USAGE",
            _ => "ZNTH_ERROR",
        }
    }

    /// The single console line this error renders as.
    pub fn line(&self) -> String {
        format!("{}: {}", self.tag(), self)
    }
}

impl From<StoreError> for JournalError {
    fn from(e: StoreError) -> Self {
        JournalError::Storage(e)
    }
}

impl JournalError {
    /// Failure of a store call. "Not ready" keeps its short message, anything
    /// else names the operation that failed.
    pub fn from_store(action: &'static str, e: StoreError) -> Self {
        match e {
            StoreError::NotReady => JournalError::Storage(StoreError::NotReady),
            source => JournalError::OperationFailed { action, source },
        }
    }
}
