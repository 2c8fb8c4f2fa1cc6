//! Taskboard: the state and validation core of a drag-and-drop task board.
//!
//! Users create tasks with a title, description and deadline. New tasks
//! land in the active list and are dragged into the finished list when
//! done. Every view reads from one observable task store that notifies its
//! subscribers synchronously after each change.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: task records and validation requests
//! - **Services**: the observable task store
//! - **Adapters**: headless views that render HTML and handle drag and drop
//!
//! # Modules
//!
//! - [`board`]: task domain, validation, store and views

pub mod board;
