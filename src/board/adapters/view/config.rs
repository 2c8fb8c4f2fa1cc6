//! Constraints applied by the task input form.

use crate::board::domain::Validatable;
use serde::{Deserialize, Serialize};

/// Configuration for task form validation.
///
/// # Examples
///
/// ```
/// use taskboard::board::adapters::view::TaskFormConfig;
///
/// let config = TaskFormConfig::default();
/// assert_eq!(config.description_min_length, Some(5));
///
/// let loaded = TaskFormConfig::from_json(r#"{"description_min_length": 2}"#)
///     .expect("valid config");
/// assert_eq!(loaded.description_min_length, Some(2));
/// assert!(loaded.require_future_deadline);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskFormConfig {
    /// Maximum title length in characters.
    pub title_max_length: Option<usize>,
    /// Minimum description length in characters.
    pub description_min_length: Option<usize>,
    /// Maximum description length in characters.
    pub description_max_length: Option<usize>,
    /// Whether the deadline must not lie in the past.
    pub require_future_deadline: bool,
}

impl Default for TaskFormConfig {
    fn default() -> Self {
        Self {
            title_max_length: None,
            description_min_length: Some(5),
            description_max_length: None,
            require_future_deadline: true,
        }
    }
}

impl TaskFormConfig {
    /// Only requires each field to be non-blank.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            title_max_length: None,
            description_min_length: None,
            description_max_length: None,
            require_future_deadline: false,
        }
    }

    /// Bounds every text field and requires a future deadline.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            title_max_length: Some(100),
            description_min_length: Some(10),
            description_max_length: Some(1_000),
            require_future_deadline: true,
        }
    }

    /// Parses a configuration from JSON, filling absent keys with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when the input is not a valid
    /// configuration object.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub(crate) fn title_rule(&self, title: &str) -> Validatable {
        let rule = Validatable::new(title).required();
        match self.title_max_length {
            Some(max) => rule.max_length(max),
            None => rule,
        }
    }

    pub(crate) fn description_rule(&self, description: &str) -> Validatable {
        let mut rule = Validatable::new(description).required();
        if let Some(min) = self.description_min_length {
            rule = rule.min_length(min);
        }
        if let Some(max) = self.description_max_length {
            rule = rule.max_length(max);
        }
        rule
    }

    pub(crate) fn deadline_rule(&self, deadline: &str) -> Validatable {
        let rule = Validatable::new(deadline).required();
        if self.require_future_deadline {
            rule.must_be_future_date()
        } else {
            rule
        }
    }
}
