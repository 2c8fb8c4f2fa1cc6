//! Task creation form.

use super::config::TaskFormConfig;
use super::templates::{RenderError, TASK_INPUT, Templates};
use crate::board::domain::{TaskId, Validatable, ValidationError};
use crate::board::services::TaskStore;
use crate::board::validation;
use minijinja::context;
use mockable::Clock;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

/// Form field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    /// The task title.
    Title,
    /// The task description.
    Description,
    /// The task deadline.
    Deadline,
}

impl TaskField {
    /// Returns the field's element id.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Deadline => "deadline",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validation failure attributed to one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The offending field.
    pub field: TaskField,
    /// What was wrong with it.
    pub error: ValidationError,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

/// Errors returned by [`TaskInput`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskInputError {
    /// One or more fields failed validation.
    #[error("invalid task input: {}", format_field_errors(.0))]
    InvalidInput(Vec<FieldError>),
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl TaskInputError {
    /// Returns the fields that failed validation.
    #[must_use]
    pub fn fields(&self) -> Vec<TaskField> {
        match self {
            Self::InvalidInput(errors) => errors.iter().map(|error| error.field).collect(),
        }
    }
}

/// Validated form values ready to become a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Entered title.
    pub title: String,
    /// Entered description.
    pub description: String,
    /// Entered deadline.
    pub deadline: String,
}

/// The task creation form.
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use taskboard::board::adapters::view::TaskInput;
/// use taskboard::board::services::TaskStore;
///
/// let mut store = TaskStore::new();
/// let mut form = TaskInput::new();
/// form.set_title("Buy milk");
/// form.set_description("Get milk from store");
/// form.set_deadline("2999-01-01");
///
/// let id = form.submit(&mut store, &DefaultClock).expect("valid input");
/// assert_eq!(store.get(&id).map(|task| task.title()), Some("Buy milk"));
/// assert!(form.title().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskInput {
    config: TaskFormConfig,
    title: String,
    description: String,
    deadline: String,
}

impl TaskInput {
    /// Creates an empty form with the default constraints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty form with custom constraints.
    #[must_use]
    pub fn with_config(config: TaskFormConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the form constraints.
    #[must_use]
    pub const fn config(&self) -> &TaskFormConfig {
        &self.config
    }

    /// Returns the entered title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the entered description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the entered deadline.
    #[must_use]
    pub fn deadline(&self) -> &str {
        &self.deadline
    }

    /// Replaces the title field.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replaces the description field.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replaces the deadline field.
    pub fn set_deadline(&mut self, deadline: impl Into<String>) {
        self.deadline = deadline.into();
    }

    /// Validates every field and returns the entered values.
    ///
    /// # Errors
    ///
    /// Returns [`TaskInputError::InvalidInput`] listing each failing field.
    pub fn gather_user_input(&self, clock: &impl Clock) -> Result<TaskDraft, TaskInputError> {
        let checks = [
            (TaskField::Title, self.config.title_rule(&self.title)),
            (
                TaskField::Description,
                self.config.description_rule(&self.description),
            ),
            (TaskField::Deadline, self.config.deadline_rule(&self.deadline)),
        ];
        let errors: Vec<FieldError> = checks
            .iter()
            .filter_map(|(field, rule)| field_error(*field, rule, clock))
            .collect();

        if !errors.is_empty() {
            return Err(TaskInputError::InvalidInput(errors));
        }

        Ok(TaskDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            deadline: self.deadline.clone(),
        })
    }

    /// Validates the form, adds the task to `store`, and clears the fields.
    ///
    /// The new task gets a freshly generated id. On failure the fields keep
    /// their values and the store is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskInputError::InvalidInput`] when validation fails.
    pub fn submit(
        &mut self,
        store: &mut TaskStore,
        clock: &impl Clock,
    ) -> Result<TaskId, TaskInputError> {
        let draft = self.gather_user_input(clock).inspect_err(|error| {
            debug!(%error, "task input rejected");
        })?;
        let id = TaskId::generate();
        info!(task_id = %id, title = %draft.title, "task submitted");
        store.add_task(id.clone(), draft.title, draft.description, draft.deadline);
        self.clear_inputs();
        Ok(id)
    }

    /// Empties every field.
    pub fn clear_inputs(&mut self) {
        self.title.clear();
        self.description.clear();
        self.deadline.clear();
    }

    /// Renders the form with the current field values.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the template fails to render.
    pub fn render(&self) -> Result<String, RenderError> {
        Templates::load()?.render(
            TASK_INPUT,
            context! {
                title => &self.title,
                description => &self.description,
                deadline => &self.deadline,
            },
        )
    }
}

fn field_error(field: TaskField, rule: &Validatable, clock: &impl Clock) -> Option<FieldError> {
    validation::check(rule, clock)
        .err()
        .map(|error| FieldError { field, error })
}
