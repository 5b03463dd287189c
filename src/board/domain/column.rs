//! Ordered task list backing one board column.

use super::{Status, Task, TaskIndexOutOfRange};
use serde::{Deserialize, Serialize};

/// Ordered list of tasks within a single column.
///
/// Positions are zero-based and dense; removing or inserting a task shifts
/// everything after it, exactly like a list splice. All positional accessors
/// are checked and return `Option` rather than panicking on stale indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Column {
    tasks: Vec<Task>,
}

impl Column {
    /// Creates an empty column.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the column holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task at the given position, if one exists.
    #[must_use]
    pub fn task(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Returns a mutable reference to the task at the given position.
    pub fn task_mut(&mut self, index: usize) -> Option<&mut Task> {
        self.tasks.get_mut(index)
    }

    /// Appends a task to the end of the column.
    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Removes and returns the task at the given position.
    ///
    /// Returns `None` and leaves the column untouched when the position is
    /// out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<Task> {
        if index < self.tasks.len() {
            Some(self.tasks.remove(index))
        } else {
            None
        }
    }

    /// Inserts a task at the given position, clamping past-the-end targets
    /// to an append. Returns the position the task actually landed at.
    pub fn insert_clamped(&mut self, index: usize, task: Task) -> usize {
        let landing = index.min(self.tasks.len());
        self.tasks.insert(landing, task);
        landing
    }

    /// Returns the display title of the task at the given position.
    #[must_use]
    pub fn display_title_at(&self, index: usize) -> Option<String> {
        self.tasks
            .get(index)
            .map(|task| task.display_title(index + 1))
    }

    /// Returns the display titles of every task, in column order.
    pub fn display_titles(&self) -> impl Iterator<Item = String> + '_ {
        self.tasks
            .iter()
            .enumerate()
            .map(|(index, task)| task.display_title(index + 1))
    }

    /// Builds the lookup error for a positional reference this column
    /// cannot resolve.
    pub(crate) const fn out_of_range(&self, status: Status, index: usize) -> TaskIndexOutOfRange {
        TaskIndexOutOfRange {
            status,
            index,
            len: self.tasks.len(),
        }
    }
}
