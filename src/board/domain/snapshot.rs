//! Whole-board snapshots for persistence.
//!
//! A snapshot is a single JSON document keyed by column status, with each
//! column as an ordered task array. The whole board travels together:
//! decoding either yields a complete, internally consistent board or fails,
//! so a torn or tampered blob can never half-populate state.

use super::{Board, TaskId};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

/// Errors returned while decoding a stored board snapshot.
#[derive(Debug, Clone, Error)]
pub enum SnapshotError {
    /// The blob is not a JSON document in the board shape.
    #[error("snapshot is not a valid board document: {0}")]
    Malformed(Arc<serde_json::Error>),

    /// The same task identifier appears more than once in the document.
    #[error("snapshot repeats task id {0}")]
    DuplicateTaskId(TaskId),
}

/// Serialises the board into its snapshot document.
///
/// # Errors
///
/// Returns any error raised by the JSON serialiser.
pub fn encode(board: &Board) -> Result<String, serde_json::Error> {
    serde_json::to_string(board)
}

/// Parses and validates a stored snapshot document.
///
/// A valid snapshot carries exactly the three known columns and no task
/// identifier more than once. Anything else, including documents with
/// missing or unrecognised columns, is rejected whole.
///
/// # Errors
///
/// Returns [`SnapshotError::Malformed`] when the blob does not parse as a
/// board document, and [`SnapshotError::DuplicateTaskId`] when two tasks
/// share an identifier.
pub fn decode(blob: &str) -> Result<Board, SnapshotError> {
    let board: Board =
        serde_json::from_str(blob).map_err(|err| SnapshotError::Malformed(Arc::new(err)))?;

    let mut seen: HashSet<TaskId> = HashSet::with_capacity(board.task_count());
    for (_, column) in board.columns() {
        for task in column.tasks() {
            if !seen.insert(task.id()) {
                return Err(SnapshotError::DuplicateTaskId(task.id()));
            }
        }
    }

    Ok(board)
}
