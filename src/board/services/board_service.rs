//! Service layer orchestrating board mutations and persistence.

use crate::board::{
    domain::{
        Board, DragEndEvent, DragOutcome, EditMode, Status, Task, TaskId, reconcile, snapshot,
    },
    ports::{BlobStore, BlobStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Storage key the board snapshot is persisted under by default.
pub const DEFAULT_STORAGE_KEY: &str = "tasks";

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Blob store operation failed.
    #[error(transparent)]
    Store(#[from] BlobStoreError),
    /// Board snapshot could not be encoded.
    #[error("failed to encode board snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Board orchestration service.
///
/// Owns the live board state and the inline-edit session, applies every
/// mutation to the in-memory board first, and then writes a fresh snapshot
/// through the blob store port, so the store always converges on the latest
/// observed state. Stale positional references are absorbed here as logged
/// no-ops rather than surfaced as errors; the rendered board and the real
/// board drift apart only momentarily, and dropping the late gesture is the
/// behaviour the user observes as nothing happening.
pub struct BoardService<S, C>
where
    S: BlobStore,
    C: Clock + Send + Sync,
{
    board: Board,
    edit: EditMode,
    store: Arc<S>,
    clock: Arc<C>,
    storage_key: String,
}

impl<S, C> BoardService<S, C>
where
    S: BlobStore,
    C: Clock + Send + Sync,
{
    /// Loads the board stored under [`DEFAULT_STORAGE_KEY`] and builds a
    /// service around it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the blob store cannot be
    /// read. An absent or unreadable snapshot is not an error; it yields an
    /// empty board.
    pub async fn load(store: Arc<S>, clock: Arc<C>) -> BoardServiceResult<Self> {
        Self::load_with_key(store, clock, DEFAULT_STORAGE_KEY).await
    }

    /// Loads the board stored under the given key and builds a service
    /// around it.
    ///
    /// A snapshot that fails to decode is discarded whole and replaced by
    /// an empty board; there is no partial recovery of individual columns.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the blob store cannot be
    /// read.
    pub async fn load_with_key(
        store: Arc<S>,
        clock: Arc<C>,
        storage_key: impl Into<String>,
    ) -> BoardServiceResult<Self> {
        let key = storage_key.into();
        let board = match store.load(&key).await? {
            Some(blob) => match snapshot::decode(&blob) {
                Ok(board) => board,
                Err(err) => {
                    tracing::warn!(
                        storage_key = key.as_str(),
                        error = %err,
                        "Stored board snapshot is unreadable, starting from an empty board"
                    );
                    Board::new()
                }
            },
            None => Board::new(),
        };

        Ok(Self {
            board,
            edit: EditMode::Idle,
            store,
            clock,
            storage_key: key,
        })
    }

    /// Returns the live board state.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current inline-edit session.
    #[must_use]
    pub const fn edit_mode(&self) -> EditMode {
        self.edit
    }

    /// Returns the storage key snapshots are persisted under.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Appends a fresh untitled task to the given column and persists the
    /// board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError`] when the updated snapshot cannot be
    /// written.
    pub async fn add_task(&mut self, status: Status) -> BoardServiceResult<TaskId> {
        let id = self.board.add_task(status, &*self.clock);
        tracing::debug!(column = %status, task_id = %id, "Task added");
        self.persist().await?;
        Ok(id)
    }

    /// Replaces the title of the task at the given position and persists
    /// the board.
    ///
    /// Returns whether a task was renamed; a stale position is logged and
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError`] when the updated snapshot cannot be
    /// written.
    pub async fn rename_task(
        &mut self,
        status: Status,
        index: usize,
        title: impl Into<String>,
    ) -> BoardServiceResult<bool> {
        match self.board.rename_task(status, index, title) {
            Ok(()) => {
                tracing::debug!(column = %status, index, "Task renamed");
                self.persist().await?;
                Ok(true)
            }
            Err(stale) => {
                tracing::warn!(error = %stale, "Ignoring rename aimed at a stale position");
                Ok(false)
            }
        }
    }

    /// Removes the task at the given position and persists the board.
    ///
    /// Returns the removed task, or `None` when the position was stale and
    /// the board was left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError`] when the updated snapshot cannot be
    /// written.
    pub async fn delete_task(
        &mut self,
        status: Status,
        index: usize,
    ) -> BoardServiceResult<Option<Task>> {
        match self.board.delete_task(status, index) {
            Ok(task) => {
                tracing::debug!(column = %status, index, task_id = %task.id(), "Task deleted");
                self.persist().await?;
                Ok(Some(task))
            }
            Err(stale) => {
                tracing::warn!(error = %stale, "Ignoring delete aimed at a stale position");
                Ok(None)
            }
        }
    }

    /// Reconciles a finished drag gesture into the board and persists the
    /// result when the gesture moved a task.
    ///
    /// Cancelled gestures and gestures with stale sources leave both the
    /// board and the stored snapshot untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError`] when the updated snapshot cannot be
    /// written.
    pub async fn handle_drag_end(
        &mut self,
        event: DragEndEvent,
    ) -> BoardServiceResult<DragOutcome> {
        let outcome = reconcile(&mut self.board, event);
        match outcome {
            DragOutcome::Moved { from, to } => {
                tracing::debug!(
                    from_column = %from.status,
                    from_index = from.index,
                    to_column = %to.status,
                    to_index = to.index,
                    "Task moved"
                );
                self.persist().await?;
            }
            DragOutcome::Cancelled => {
                tracing::debug!("Drag released outside any column, board unchanged");
            }
            DragOutcome::SourceOutOfRange { source, len } => {
                tracing::warn!(
                    column = %source.status,
                    index = source.index,
                    len,
                    "Ignoring drag from a stale position"
                );
            }
        }
        Ok(outcome)
    }

    /// Opens an inline-edit session on the task at the given position.
    ///
    /// Returns whether a session is now open on that task; a stale position
    /// is logged and ignored, leaving any existing session in place.
    pub fn begin_edit(&mut self, status: Status, index: usize) -> bool {
        let opened = self.edit.begin(&self.board, status, index);
        if opened {
            tracing::debug!(column = %status, index, "Edit session opened");
        } else {
            tracing::warn!(
                column = %status,
                index,
                "Ignoring edit request aimed at a stale position"
            );
        }
        opened
    }

    /// Replaces the edited task's title with the given text and persists
    /// the board.
    ///
    /// Returns whether a task was renamed. Text arriving while no session
    /// is open is dropped; a session whose task has left the board is
    /// closed and the text dropped.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError`] when the updated snapshot cannot be
    /// written.
    pub async fn rename_edited_task(
        &mut self,
        title: impl Into<String>,
    ) -> BoardServiceResult<bool> {
        let Some(id) = self.edit.editing() else {
            tracing::debug!("Dropping edit text arriving outside any edit session");
            return Ok(false);
        };
        let Some(task) = self.board.task_by_id_mut(id) else {
            tracing::warn!(task_id = %id, "Edited task left the board, closing the session");
            self.edit.blur();
            return Ok(false);
        };
        task.set_title(title);
        tracing::debug!(task_id = %id, "Edited task renamed");
        self.persist().await?;
        Ok(true)
    }

    /// Closes the inline-edit session, whatever it was targeting.
    pub fn end_edit(&mut self) {
        if !self.edit.is_idle() {
            tracing::debug!("Edit session closed");
        }
        self.edit.blur();
    }

    async fn persist(&self) -> BoardServiceResult<()> {
        let blob = snapshot::encode(&self.board)?;
        self.store.save(&self.storage_key, &blob).await?;
        Ok(())
    }
}
