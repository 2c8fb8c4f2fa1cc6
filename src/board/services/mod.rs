//! Application services for the task board.

mod store;

pub use store::{StatusChange, TaskListener, TaskStore};
