//! Framework-agnostic HTTP handlers.
//!
//! These take the core HTTP traits instead of framework types, so every
//! web integration shares the same response shapes.

pub mod evaluate_step_up;

pub use evaluate_step_up::{handle_evaluate_rule, handle_step_up_query};
