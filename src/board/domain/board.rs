//! Board aggregate holding the three fixed columns.

use super::{Column, Status, Task, TaskId, TaskIndexOutOfRange};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// The whole board: one ordered task list per workflow status.
///
/// The column set is fixed at construction and never changes; columns are
/// addressed by [`Status`], so every lookup is total. The board is a plain
/// value with no interior mutability, intended to be owned by whichever
/// layer drives it (see [`crate::board::services::BoardService`]) and
/// handed to the reconciler by mutable reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Board {
    pending: Column,
    in_progress: Column,
    done: Column,
}

impl Board {
    /// Creates a board with three empty columns.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: Column::new(),
            in_progress: Column::new(),
            done: Column::new(),
        }
    }

    /// Returns the column for the given status.
    #[must_use]
    pub const fn column(&self, status: Status) -> &Column {
        match status {
            Status::Pending => &self.pending,
            Status::InProgress => &self.in_progress,
            Status::Done => &self.done,
        }
    }

    /// Returns a mutable reference to the column for the given status.
    pub const fn column_mut(&mut self, status: Status) -> &mut Column {
        match status {
            Status::Pending => &mut self.pending,
            Status::InProgress => &mut self.in_progress,
            Status::Done => &mut self.done,
        }
    }

    /// Returns every column paired with its status, in display order.
    pub fn columns(&self) -> impl Iterator<Item = (Status, &Column)> + '_ {
        Status::ALL
            .into_iter()
            .map(|status| (status, self.column(status)))
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub const fn task_count(&self) -> usize {
        self.pending.len() + self.in_progress.len() + self.done.len()
    }

    /// Returns whether every column is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.task_count() == 0
    }

    /// Appends a fresh untitled task to the end of the given column and
    /// returns its identifier.
    pub fn add_task(&mut self, status: Status, clock: &impl Clock) -> TaskId {
        let task = Task::new(clock);
        let id = task.id();
        self.column_mut(status).push(task);
        id
    }

    /// Replaces the title of the task at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`TaskIndexOutOfRange`] when the position does not resolve
    /// to a task; the board is left untouched.
    pub fn rename_task(
        &mut self,
        status: Status,
        index: usize,
        title: impl Into<String>,
    ) -> Result<(), TaskIndexOutOfRange> {
        let column = self.column_mut(status);
        let stale = column.out_of_range(status, index);
        column
            .task_mut(index)
            .map(|task| task.set_title(title))
            .ok_or(stale)
    }

    /// Removes and returns the task at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`TaskIndexOutOfRange`] when the position does not resolve
    /// to a task; the board is left untouched.
    pub fn delete_task(
        &mut self,
        status: Status,
        index: usize,
    ) -> Result<Task, TaskIndexOutOfRange> {
        let column = self.column_mut(status);
        let stale = column.out_of_range(status, index);
        column.remove_at(index).ok_or(stale)
    }

    /// Finds the column and position currently holding the given task.
    #[must_use]
    pub fn locate(&self, id: TaskId) -> Option<(Status, usize)> {
        self.columns().find_map(|(status, column)| {
            column
                .tasks()
                .iter()
                .position(|task| task.id() == id)
                .map(|index| (status, index))
        })
    }

    /// Returns the task with the given identifier, wherever it sits.
    #[must_use]
    pub fn task_by_id(&self, id: TaskId) -> Option<&Task> {
        self.columns()
            .find_map(|(_, column)| column.tasks().iter().find(|task| task.id() == id))
    }

    /// Returns a mutable reference to the task with the given identifier.
    pub fn task_by_id_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        let (status, index) = self.locate(id)?;
        self.column_mut(status).task_mut(index)
    }
}
