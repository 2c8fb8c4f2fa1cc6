//! Per-status task list.

use super::drag::{DragPayload, DragTarget};
use super::item::TaskItem;
use super::templates::{RenderError, TASK_LIST, Templates};
use crate::board::domain::{Task, TaskId, TaskStatus};
use crate::board::services::TaskStore;
use minijinja::context;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

#[derive(Debug, Default)]
struct ListState {
    displayed: Vec<Task>,
    droppable: bool,
}

/// List of the tasks with one status.
///
/// The list subscribes to the store when attached and replaces its
/// displayed tasks on every notification. Until the first mutation after
/// attaching it shows nothing.
#[derive(Debug)]
pub struct TaskList {
    status: TaskStatus,
    state: Rc<RefCell<ListState>>,
}

impl TaskList {
    /// Creates the list for `status` and subscribes it to `store`.
    #[must_use]
    pub fn attach(status: TaskStatus, store: &mut TaskStore) -> Self {
        let state = Rc::new(RefCell::new(ListState::default()));
        let listener_state = Rc::clone(&state);
        store.subscribe(move |tasks: &[Task]| {
            let displayed: Vec<Task> = tasks
                .iter()
                .filter(|task| task.status() == status)
                .cloned()
                .collect();
            debug!(%status, count = displayed.len(), "list refreshed");
            listener_state.borrow_mut().displayed = displayed;
        });
        Self { status, state }
    }

    /// Returns the status this list shows.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the list heading.
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        match self.status {
            TaskStatus::Active => "In progress",
            TaskStatus::Finished => "Finished",
        }
    }

    /// Returns the id of the list's section element.
    #[must_use]
    pub fn element_id(&self) -> String {
        format!("{}-tasks", self.status)
    }

    /// Returns the id of the list's `<ul>` element.
    #[must_use]
    pub fn list_id(&self) -> String {
        format!("{}-list", self.status)
    }

    /// Returns a snapshot of the tasks currently displayed.
    #[must_use]
    pub fn displayed_tasks(&self) -> Vec<Task> {
        self.state.borrow().displayed.clone()
    }

    /// Returns the ids of the displayed tasks.
    #[must_use]
    pub fn displayed_ids(&self) -> Vec<TaskId> {
        self.state
            .borrow()
            .displayed
            .iter()
            .map(|task| task.id().clone())
            .collect()
    }

    /// Returns one row view per displayed task.
    #[must_use]
    pub fn items(&self) -> Vec<TaskItem> {
        self.displayed_tasks().into_iter().map(TaskItem::new).collect()
    }

    /// Returns `true` while a payload hovers over the list.
    #[must_use]
    pub fn is_droppable(&self) -> bool {
        self.state.borrow().droppable
    }

    /// Renders the list section with all of its rows.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when a template fails to render.
    pub fn render(&self) -> Result<String, RenderError> {
        let templates = Templates::load()?;
        let items = self
            .items()
            .iter()
            .map(|item| item.render_with(&templates))
            .collect::<Result<Vec<_>, _>>()?;
        templates.render(
            TASK_LIST,
            context! {
                status => self.status.as_str(),
                heading => self.heading(),
                droppable => self.is_droppable(),
                items => items,
            },
        )
    }

    fn set_droppable(&self, droppable: bool) {
        self.state.borrow_mut().droppable = droppable;
    }
}

impl DragTarget for TaskList {
    fn drag_over(&mut self, payload: &DragPayload) -> bool {
        if !payload.is_text() {
            return false;
        }
        self.set_droppable(true);
        true
    }

    fn drop_payload(&mut self, payload: &DragPayload, store: &mut TaskStore) {
        self.set_droppable(false);
        if !payload.is_text() {
            debug!(media_type = payload.media_type(), "non-text payload dropped");
            return;
        }
        let task_id = TaskId::from(payload.data());
        let outcome = store.change_status(&task_id, self.status);
        debug!(%task_id, status = %self.status, ?outcome, "payload dropped");
    }

    fn drag_leave(&mut self) {
        self.set_droppable(false);
    }
}
