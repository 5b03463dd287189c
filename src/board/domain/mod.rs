//! Domain model for board state management.
//!
//! The board domain models the three fixed columns, ordered tasks with
//! positional display titles, splice-based drag reconciliation, and the
//! inline-edit session, while keeping all infrastructure concerns outside
//! of the domain boundary.

mod board;
mod column;
mod edit;
mod error;
mod ids;
mod reconciler;
pub mod snapshot;
mod status;
mod task;

pub use board::Board;
pub use column::Column;
pub use edit::EditMode;
pub use error::{ParseStatusError, TaskIndexOutOfRange};
pub use ids::TaskId;
pub use reconciler::{DragEndEvent, DragLocation, DragOutcome, reconcile};
pub use snapshot::SnapshotError;
pub use status::Status;
pub use task::Task;
