//! Single draggable task row.

use super::drag::{DragPayload, Draggable};
use super::templates::{RenderError, TASK_ITEM, Templates};
use crate::board::domain::Task;
use minijinja::context;

/// View of one task inside a [`super::TaskList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    task: Task,
}

impl TaskItem {
    /// Creates a row for `task`.
    #[must_use]
    pub const fn new(task: Task) -> Self {
        Self { task }
    }

    /// Returns the displayed task.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the element id, which is the task id.
    #[must_use]
    pub fn element_id(&self) -> &str {
        self.task.id().as_str()
    }

    /// Renders the `<li>` fragment showing title, deadline and description.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the template fails to render.
    pub fn render(&self) -> Result<String, RenderError> {
        self.render_with(&Templates::load()?)
    }

    pub(super) fn render_with(&self, templates: &Templates) -> Result<String, RenderError> {
        templates.render(TASK_ITEM, context! { task => &self.task })
    }
}

impl Draggable for TaskItem {
    fn drag_start(&self) -> DragPayload {
        DragPayload::text(self.task.id().as_str())
    }
}
