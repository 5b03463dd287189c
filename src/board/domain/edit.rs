//! Inline-edit session tracking for board tasks.

use super::{Board, Status, TaskId};

/// The board's single inline-edit session.
///
/// At most one task has its edit field open at a time. The session tracks
/// the task by identifier rather than by position, so drags and deletions
/// that reshuffle a column while the field is open never silently retarget
/// the edit onto a different task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    /// No task is being edited.
    #[default]
    Idle,
    /// The identified task has its edit field open.
    Editing(TaskId),
}

impl EditMode {
    /// Opens an edit session on the task at the given position.
    ///
    /// Starting a session while another is open simply retargets it; there
    /// is no nesting. Returns `false` and leaves the session untouched when
    /// the position names no task.
    pub fn begin(&mut self, board: &Board, status: Status, index: usize) -> bool {
        let Some(task) = board.column(status).task(index) else {
            return false;
        };
        *self = Self::Editing(task.id());
        true
    }

    /// Closes the session unconditionally, whatever it was targeting.
    ///
    /// Blurring an idle session is a no-op, so callers can forward every
    /// focus-loss signal without checking state first.
    pub const fn blur(&mut self) {
        *self = Self::Idle;
    }

    /// Returns the identifier of the task being edited, if any.
    #[must_use]
    pub const fn editing(&self) -> Option<TaskId> {
        match self {
            Self::Idle => None,
            Self::Editing(id) => Some(*id),
        }
    }

    /// Returns whether no edit session is open.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Resolves the edited task to its current column and position.
    ///
    /// Returns `None` when the session is idle or the task has left the
    /// board since the session opened.
    #[must_use]
    pub fn location(&self, board: &Board) -> Option<(Status, usize)> {
        self.editing().and_then(|id| board.locate(id))
    }
}
