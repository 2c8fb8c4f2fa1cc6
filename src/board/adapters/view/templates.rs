//! Markup templates for the board views.

use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;

pub(super) const TASK_INPUT: &str = "task_input.html";
pub(super) const TASK_LIST: &str = "task_list.html";
pub(super) const TASK_ITEM: &str = "task_item.html";

const TASK_INPUT_SOURCE: &str = r#"<form id="user-input">
  <div class="form-control">
    <label for="title">Title</label>
    <input type="text" id="title" value="{{ title }}">
  </div>
  <div class="form-control">
    <label for="description">Description</label>
    <textarea id="description" rows="3">{{ description }}</textarea>
  </div>
  <div class="form-control">
    <label for="deadline">Deadline</label>
    <input type="date" id="deadline" value="{{ deadline }}">
  </div>
  <button type="submit">Add task</button>
</form>"#;

const TASK_LIST_SOURCE: &str = r#"<section class="tasks" id="{{ status }}-tasks">
  <header>
    <h2>{{ heading }}</h2>
  </header>
  <ul id="{{ status }}-list"{% if droppable %} class="droppable"{% endif %}>
{%- for item in items %}
    {{ item|safe }}
{%- endfor %}
  </ul>
</section>"#;

const TASK_ITEM_SOURCE: &str = r#"<li id="{{ task.id }}" draggable="true">
      <h2>{{ task.title }}</h2>
      <h3>{{ task.deadline }}</h3>
      <p>{{ task.description }}</p>
    </li>"#;

/// Error returned when a view fails to render.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to render template '{template}': {reason}")]
pub struct RenderError {
    /// Name of the template that failed.
    pub template: String,
    /// Description of the failure.
    pub reason: String,
}

impl RenderError {
    fn new(template: &str, error: &minijinja::Error) -> Self {
        Self {
            template: template.to_owned(),
            reason: error.to_string(),
        }
    }
}

/// The board templates, parsed once and reused for a whole render.
///
/// Templates ending in `.html` are auto-escaped.
pub(super) struct Templates {
    environment: Environment<'static>,
}

impl Templates {
    /// Parses every board template.
    pub(super) fn load() -> Result<Self, RenderError> {
        let mut environment = Environment::new();
        for (name, source) in [
            (TASK_INPUT, TASK_INPUT_SOURCE),
            (TASK_LIST, TASK_LIST_SOURCE),
            (TASK_ITEM, TASK_ITEM_SOURCE),
        ] {
            environment
                .add_template(name, source)
                .map_err(|error| RenderError::new(name, &error))?;
        }
        Ok(Self { environment })
    }

    /// Renders a named board template with `context`.
    pub(super) fn render(
        &self,
        template: &str,
        context: impl Serialize,
    ) -> Result<String, RenderError> {
        self.environment
            .get_template(template)
            .and_then(|compiled| compiled.render(context))
            .map_err(|error| RenderError::new(template, &error))
    }
}
