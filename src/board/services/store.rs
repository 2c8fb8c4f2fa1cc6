//! Observable in-memory task store.

use crate::board::domain::{Task, TaskId, TaskStatus};
use std::fmt;
use tracing::debug;

/// Callback invoked with the full task sequence after every mutation.
pub type TaskListener = Box<dyn FnMut(&[Task])>;

/// Outcome of [`TaskStore::change_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    /// The status was updated and subscribers were notified.
    Changed,
    /// The task already had the requested status.
    Unchanged,
    /// No task has the given identifier.
    NotFound,
}

/// Authoritative holder of every task on the board.
///
/// The application creates one store and hands it by reference to the
/// views that need it. Mutations notify subscribers synchronously, in
/// registration order, with the complete task sequence before returning.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use taskboard::board::domain::{TaskId, TaskStatus};
/// use taskboard::board::services::{StatusChange, TaskStore};
///
/// let mut store = TaskStore::new();
/// let seen = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&seen);
/// store.subscribe(move |tasks| counter.set(tasks.len()));
///
/// store.add_task("t1", "Buy milk", "Get milk from store", "2999-01-01");
/// assert_eq!(seen.get(), 1);
///
/// let outcome = store.change_status(&TaskId::from("t1"), TaskStatus::Finished);
/// assert_eq!(outcome, StatusChange::Changed);
/// ```
#[derive(Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    listeners: Vec<TaskListener>,
}

impl TaskStore {
    /// Creates an empty store with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for every future mutation.
    ///
    /// The listener is not called with the current tasks; it first runs on
    /// the next mutation. Listeners cannot be removed.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&[Task]) + 'static,
    {
        self.listeners.push(Box::new(listener));
        debug!(subscribers = self.listeners.len(), "listener subscribed");
    }

    /// Appends a new active task and notifies subscribers.
    ///
    /// No validation happens here; callers validate input beforehand.
    pub fn add_task(
        &mut self,
        id: impl Into<TaskId>,
        title: impl Into<String>,
        description: impl Into<String>,
        deadline: impl Into<String>,
    ) {
        let task = Task::new_active(id.into(), title.into(), description.into(), deadline.into());
        debug!(task_id = %task.id(), "task added");
        self.tasks.push(task);
        self.notify();
    }

    /// Moves the first task with `task_id` to `new_status`.
    ///
    /// Subscribers are notified only when the status actually changes.
    /// Unknown identifiers and redundant changes are silent no-ops.
    pub fn change_status(&mut self, task_id: &TaskId, new_status: TaskStatus) -> StatusChange {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == task_id) else {
            debug!(%task_id, "status change ignored: unknown task");
            return StatusChange::NotFound;
        };
        if task.status() == new_status {
            debug!(%task_id, status = %new_status, "status change ignored: unchanged");
            return StatusChange::Unchanged;
        }
        task.set_status(new_status);
        debug!(%task_id, status = %new_status, "task status changed");
        self.notify();
        StatusChange::Changed
    }

    /// Returns every task in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the first task with the given identifier.
    #[must_use]
    pub fn get(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    /// Returns the tasks with `status`, in insertion order.
    pub fn tasks_with_status(&self, status: TaskStatus) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |task| task.status() == status)
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) {
        let tasks = self.tasks.as_slice();
        for listener in &mut self.listeners {
            listener(tasks);
        }
    }
}

impl fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
