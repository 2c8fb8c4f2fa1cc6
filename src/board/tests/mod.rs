//! Unit tests for the task board module.
//!
//! Tests are organised by component, covering happy paths, no-op cases,
//! and the time-dependent behaviour of deadline validation.
