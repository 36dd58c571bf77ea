//! Function call evaluation.
//!
//! # Responsibilities
//! - Route calls to builtins or user-defined functions.
//! - Implement the builtin library.

/// Builtins operating on arrays.
pub mod array;
/// The builtin table and the call paths.
pub mod core;
/// The `log` builtin feeding the host's output.
pub mod log;
/// Numeric builtins.
pub mod math;
/// Builtins operating on text.
pub mod text;
