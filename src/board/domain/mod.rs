//! Domain model for the task board.
//!
//! The domain holds the task record, its status, and the transient
//! validation request. None of these types know about the store or views.

mod error;
mod ids;
mod task;
mod validatable;

pub use error::{ParseTaskStatusError, ValidationError};
pub use ids::TaskId;
pub use task::{Task, TaskStatus};
pub use validatable::{Validatable, ValidatableValue};
