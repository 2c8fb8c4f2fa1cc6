//! Task board core.
//!
//! Tasks are created through a validated input form, held by a single
//! observable [`services::TaskStore`], and moved between the active and
//! finished lists by drag and drop. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Validation rules in [`validation`]
//! - The task store in [`services`]
//! - Headless view adapters in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
