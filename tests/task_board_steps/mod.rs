//! Step definitions for task board BDD scenarios.

pub mod world;

mod given;
mod then;
mod when;
