//! Tree-walking evaluation.
//!
//! # Responsibilities
//! - Hold the interpreter state and drive statement evaluation.
//! - Implement operator coercions, casts, control flow and calls.

/// Binary operators and their cross-kind coercions.
pub mod binary;
/// Cast expressions between kinds.
pub mod cast;
/// Conditionals, loops and `change`.
pub mod control;
/// The evaluation context and statement driver.
pub mod core;
/// Builtin and user-defined function calls.
pub mod function;
/// The parent-linked scope chain.
pub mod scope;
/// Unary operators.
pub mod unary;
/// Reserved-name checks shared with the parser.
pub mod utils;
