//! Error types for task parsing and input validation.

use thiserror::Error;

/// Error returned while parsing a task status string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// A constraint that a [`super::Validatable`] value failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The value is empty after trimming.
    #[error("value is required")]
    Required,

    /// The text is shorter than the minimum length.
    #[error("length {actual} is below the minimum of {min}")]
    TooShort {
        /// Minimum accepted length.
        min: usize,
        /// Actual length of the value.
        actual: usize,
    },

    /// The text is longer than the maximum length.
    #[error("length {actual} exceeds the maximum of {max}")]
    TooLong {
        /// Maximum accepted length.
        max: usize,
        /// Actual length of the value.
        actual: usize,
    },

    /// The text could not be parsed as a date.
    #[error("'{0}' is not a valid date")]
    InvalidDate(String),

    /// The date lies before the current instant.
    #[error("date '{0}' is in the past")]
    DateInPast(String),

    /// Several constraints failed.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Combines collected errors into one.
    ///
    /// Returns `None` when `errors` is empty and the single error unwrapped
    /// when there is exactly one.
    #[must_use]
    pub fn combine(errors: Vec<Self>) -> Option<Self> {
        if errors.len() > 1 {
            return Some(Self::Multiple(errors));
        }
        errors.into_iter().next()
    }

    /// Returns the individual failures, flattening [`Self::Multiple`].
    #[must_use]
    pub fn failures(&self) -> Vec<&Self> {
        match self {
            Self::Multiple(errors) => errors.iter().flat_map(Self::failures).collect(),
            other => vec![other],
        }
    }
}
