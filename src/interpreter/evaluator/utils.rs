use crate::interpreter::evaluator::function::core::BUILTIN_FUNCTIONS;

/// Reserved identifiers that do not fall into any other category, such as
/// the implicit loop counter.
pub const EXTRA_RESERVED: &[&str] = &["count"];

/// Whether a name is off-limits for variables and user-defined functions.
///
/// Builtin names and the implicit loop counter cannot be declared or
/// shadowed. Keywords never reach this check; the lexer claims them first.
///
/// # Example
/// ```
/// use sigma::interpreter::evaluator::utils::is_reserved_identifier;
///
/// assert!(is_reserved_identifier("log"));
/// assert!(is_reserved_identifier("count"));
/// assert!(!is_reserved_identifier("total"));
/// ```
#[must_use]
pub fn is_reserved_identifier(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name) || EXTRA_RESERVED.contains(&name)
}
