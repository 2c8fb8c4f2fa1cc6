//! Input validation.
//!
//! Individual constraints live in [`rules`]; [`validate`] and [`check`]
//! apply every constraint a [`crate::board::domain::Validatable`] enables.

pub mod rules;
mod validator;

pub use validator::{check, validate};
