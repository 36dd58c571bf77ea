//! Binary operator evaluation.
//!
//! # Responsibilities
//! - Route each binary operator to its kind-aware implementation.
//! - Keep the cross-kind coercion rules for each operator family in one
//!   place per operator.

/// Exponentiation across kinds.
pub mod caret;
/// Ordering, equality and kind comparators.
pub mod comparison;
/// The routing table shared by all binary operators.
pub mod core;
/// True and flooring division across kinds.
pub mod divide;
/// Boolean connectives over truthiness.
pub mod logic;
/// Subtraction and removal across kinds.
pub mod minus;
/// Remainder across kinds.
pub mod percent;
/// Addition, concatenation and array building across kinds.
pub mod plus;
/// Multiplication, repetition and tiling across kinds.
pub mod times;

pub use self::core::eval_binary;
