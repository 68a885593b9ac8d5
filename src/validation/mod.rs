//! Validation Engine
//!
//! Clean separation of validation logic from lexing concerns.

pub mod engine;

pub use engine::{ValidationError, validate};
