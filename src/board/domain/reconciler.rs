//! Splice-based reconciliation of finished drag gestures.

use super::{Board, Status};
use serde::{Deserialize, Serialize};

/// A position on the board: a column plus a zero-based index within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragLocation {
    /// Column the position refers to.
    pub status: Status,
    /// Zero-based index within the column.
    pub index: usize,
}

impl DragLocation {
    /// Creates a location from a column status and index.
    #[must_use]
    pub const fn new(status: Status, index: usize) -> Self {
        Self { status, index }
    }
}

/// A finished drag gesture as reported by the capture layer.
///
/// The source is where the gesture picked the task up. The destination is
/// where it was released, or `None` when the drop happened outside any
/// droppable area and the gesture should leave the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEndEvent {
    /// Position the dragged task was picked up from.
    pub source: DragLocation,
    /// Position the task was released at, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<DragLocation>,
}

impl DragEndEvent {
    /// Creates a drag-end event from a source and optional destination.
    #[must_use]
    pub const fn new(source: DragLocation, destination: Option<DragLocation>) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Creates an event for a gesture released outside any droppable area.
    #[must_use]
    pub const fn cancelled(source: DragLocation) -> Self {
        Self {
            source,
            destination: None,
        }
    }
}

/// What reconciling a drag-end event did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// The task was removed from `from` and reinserted at `to`.
    Moved {
        /// Position the task was removed from.
        from: DragLocation,
        /// Position the task landed at, after clamping.
        to: DragLocation,
    },
    /// The gesture had no destination; the board is unchanged.
    Cancelled,
    /// The source position named no task; the board is unchanged.
    SourceOutOfRange {
        /// The stale source position from the event.
        source: DragLocation,
        /// Length of the source column at reconciliation time.
        len: usize,
    },
}

/// Applies a finished drag gesture to the board with list-splice semantics.
///
/// The task at the source position is removed first, then reinserted at the
/// destination index. Because the removal happens before the insertion, a
/// same-column destination index already accounts for the vacated slot,
/// which is exactly how drag-and-drop capture layers report it. Destination
/// indices past the end of the target column are clamped to an append; the
/// returned [`DragOutcome::Moved`] carries the position the task actually
/// landed at.
///
/// Events with no destination and events whose source position is stale
/// leave the board exactly as it was.
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use triptych::board::domain::{
///     Board, DragEndEvent, DragLocation, DragOutcome, Status, reconcile,
/// };
///
/// let mut board = Board::new();
/// let clock = DefaultClock;
/// board.add_task(Status::Pending, &clock);
/// board.add_task(Status::Pending, &clock);
///
/// let event = DragEndEvent::new(
///     DragLocation::new(Status::Pending, 0),
///     Some(DragLocation::new(Status::Done, 0)),
/// );
/// let outcome = reconcile(&mut board, event);
///
/// assert!(matches!(outcome, DragOutcome::Moved { .. }));
/// assert_eq!(board.column(Status::Pending).len(), 1);
/// assert_eq!(board.column(Status::Done).len(), 1);
/// ```
pub fn reconcile(board: &mut Board, event: DragEndEvent) -> DragOutcome {
    let Some(destination) = event.destination else {
        return DragOutcome::Cancelled;
    };

    let source = event.source;
    let Some(task) = board.column_mut(source.status).remove_at(source.index) else {
        let len = board.column(source.status).len();
        return DragOutcome::SourceOutOfRange { source, len };
    };

    let landing = board
        .column_mut(destination.status)
        .insert_clamped(destination.index, task);

    DragOutcome::Moved {
        from: source,
        to: DragLocation::new(destination.status, landing),
    }
}
