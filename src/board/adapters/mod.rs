//! Adapters connecting the task board core to its surroundings.

pub mod view;
