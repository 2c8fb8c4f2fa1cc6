//! Transient validation request.

use std::fmt;

/// The value carried by a [`Validatable`].
///
/// Length and date constraints only apply to [`ValidatableValue::Text`].
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatableValue {
    /// Free text as entered by the user.
    Text(String),
    /// A numeric value.
    Number(f64),
}

impl ValidatableValue {
    /// Returns the text when the value is textual.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }
}

impl fmt::Display for ValidatableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for ValidatableValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ValidatableValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for ValidatableValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for ValidatableValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// A value plus the constraints it must satisfy.
///
/// Built fresh for every validation attempt and checked with
/// [`crate::board::validation::validate`].
///
/// # Examples
///
/// ```
/// use taskboard::board::domain::Validatable;
///
/// let request = Validatable::new("Write report").required().min_length(5);
/// assert!(request.is_required());
/// assert_eq!(request.min_length_bound(), Some(5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    value: ValidatableValue,
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    must_be_future_date: bool,
}

impl Validatable {
    /// Creates a request with no constraints enabled.
    #[must_use]
    pub fn new(value: impl Into<ValidatableValue>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            must_be_future_date: false,
        }
    }

    /// Requires a non-blank value.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets an inclusive lower bound on text length.
    #[must_use]
    pub const fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Sets an inclusive upper bound on text length.
    #[must_use]
    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Requires text that parses as a date no earlier than now.
    #[must_use]
    pub const fn must_be_future_date(mut self) -> Self {
        self.must_be_future_date = true;
        self
    }

    /// Returns the value under validation.
    #[must_use]
    pub const fn value(&self) -> &ValidatableValue {
        &self.value
    }

    /// Returns whether the value is required.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the minimum length, if enabled.
    #[must_use]
    pub const fn min_length_bound(&self) -> Option<usize> {
        self.min_length
    }

    /// Returns the maximum length, if enabled.
    #[must_use]
    pub const fn max_length_bound(&self) -> Option<usize> {
        self.max_length
    }

    /// Returns whether the value must be a future date.
    #[must_use]
    pub const fn requires_future_date(&self) -> bool {
        self.must_be_future_date
    }
}
