//! Headless view models for the board.
//!
//! Each view keeps the state a rendered component would hold, talks to the
//! [`crate::board::services::TaskStore`] the same way a browser component
//! does, and renders its markup through [`minijinja`] templates.
//!
//! - [`TaskInput`]: the task creation form
//! - [`TaskList`]: one list per [`crate::board::domain::TaskStatus`]
//! - [`TaskItem`]: a single draggable task row

mod config;
mod drag;
mod input;
mod item;
mod list;
mod templates;

pub use config::TaskFormConfig;
pub use drag::{DragPayload, DragTarget, Draggable, DropEffect, TEXT_PLAIN};
pub use input::{FieldError, TaskDraft, TaskField, TaskInput, TaskInputError};
pub use item::TaskItem;
pub use list::TaskList;
pub use templates::RenderError;
