//! Task aggregate for the board domain.

use super::TaskId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A single card on the board.
///
/// A task carries no column of its own; membership and ordering live in the
/// column that holds it. The optional title records what the user typed when
/// renaming the task. Tasks that were never renamed have no stored title and
/// present a positional one through [`Task::display_title`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new untitled task stamped with the clock's current time.
    #[must_use]
    pub fn new(clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            title: None,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a task from its stored parts.
    #[must_use]
    pub const fn from_parts(id: TaskId, title: Option<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the user-assigned title, if the task has been renamed.
    #[must_use]
    pub fn custom_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns whether the task carries a user-assigned title.
    #[must_use]
    pub const fn has_custom_title(&self) -> bool {
        self.title.is_some()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the task's title with user-provided text, stored verbatim.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Returns the title to present at the given one-based column position.
    ///
    /// Renamed tasks keep their stored title wherever they sit; untitled
    /// tasks derive `Task N` from the position, so their numbering follows
    /// every reorder, insertion, and removal in the column.
    #[must_use]
    pub fn display_title(&self, position: usize) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("Task {position}"))
    }
}
