//! Applies every enabled constraint of a validation request.

use super::rules;
use crate::board::domain::{Validatable, ValidationError};
use mockable::Clock;
use tracing::trace;

/// Checks a request and reports every failed constraint.
///
/// Length and date constraints are skipped for numeric values. A request
/// with no constraints enabled always passes.
///
/// # Errors
///
/// Returns the single failure, or [`ValidationError::Multiple`] when more
/// than one constraint fails.
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use taskboard::board::domain::{Validatable, ValidationError};
/// use taskboard::board::validation::check;
///
/// let request = Validatable::new("abc").required().min_length(5);
/// assert_eq!(
///     check(&request, &DefaultClock),
///     Err(ValidationError::TooShort { min: 5, actual: 3 })
/// );
/// ```
pub fn check(request: &Validatable, clock: &impl Clock) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    if request.is_required() {
        collect(&mut errors, rules::check_required(request.value()));
    }

    if let Some(text) = request.value().as_text() {
        if let Some(min) = request.min_length_bound() {
            collect(&mut errors, rules::check_min_length(text, min));
        }
        if let Some(max) = request.max_length_bound() {
            collect(&mut errors, rules::check_max_length(text, max));
        }
        if request.requires_future_date() {
            collect(&mut errors, rules::check_future_date(text, clock.utc()));
        }
    }

    match ValidationError::combine(errors) {
        None => Ok(()),
        Some(error) => {
            trace!(%error, "validation failed");
            Err(error)
        }
    }
}

/// Returns `true` when every enabled constraint holds.
///
/// Date constraints are evaluated against `clock` at call time, so the same
/// request may pass now and fail later.
#[must_use]
pub fn validate(request: &Validatable, clock: &impl Clock) -> bool {
    check(request, clock).is_ok()
}

fn collect(errors: &mut Vec<ValidationError>, result: Result<(), ValidationError>) {
    if let Err(error) = result {
        errors.push(error);
    }
}
