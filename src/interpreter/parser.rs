/// Expression parsing.
///
/// Implements the right-associative precedence ladder from the boolean
/// connectives down to exponentiation.
pub mod core;

/// Statement parsing.
///
/// Parses declarations, assignments, function definitions, control flow and
/// blocks, and enforces the `!!` terminator rules.
pub mod statement;

/// Unary and primary expression parsing.
///
/// Handles prefix operators, literals, casts, grouping, array literals and
/// call syntax.
pub mod unary;

/// Utility functions for the parser.
///
/// Small shared helpers for expected tokens and identifiers.
pub mod utils;
