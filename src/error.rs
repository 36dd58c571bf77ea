/// Accumulating error collector.
///
/// Holds all syntax errors found while lexing and parsing a source file.
/// Syntax errors do not abort parsing; they are collected here and rendered
/// after the whole file has been read.
pub mod diagnostics;
/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include syntax mistakes, unexpected tokens, invalid
/// literals, and any other issues detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and
/// execution. Runtime errors include type mismatches, invalid operations and
/// failed name resolution; the latter form the reference-error class which the
/// host reports with its own exit code.
pub mod runtime_error;

pub use diagnostics::{Diagnostics, paint_runtime, paint_syntax};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
