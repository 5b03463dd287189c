//! Error types for board domain validation and parsing.

use super::Status;
use thiserror::Error;

/// Error returned when a positional task reference does not resolve.
///
/// Carries the column length observed at the time of the failed lookup so
/// callers can log how stale the offending index was.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("task index {index} out of range for column '{status}' holding {len} tasks")]
pub struct TaskIndexOutOfRange {
    /// Column the lookup targeted.
    pub status: Status,
    /// Requested zero-based position.
    pub index: usize,
    /// Number of tasks the column held.
    pub len: usize,
}

/// Error returned while parsing column statuses from external input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown column status: {0}")]
pub struct ParseStatusError(pub String);
