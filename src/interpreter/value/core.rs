use std::rc::Rc;

use crate::{
    ast::{FunctionDef, LiteralValue},
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, scope::Scope},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible kinds that can appear in expressions,
/// assignments, function returns, and conditional evaluations.
#[derive(Debug, Clone)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A text value.
    Text(String),
    /// A boolean value (`true` or `fals`).
    Bool(bool),
    /// An array of `Value` elements.
    Array(Rc<Vec<Self>>),
    /// A user-defined function together with its defining scope.
    Function(Rc<Closure>),
    /// The absent value.
    Nothing,
}

/// A function value: the definition plus the scope it was defined in.
///
/// Calls bind parameters in a child of the captured scope, which is what
/// makes functions close over their defining environment.
#[derive(Debug)]
pub struct Closure {
    /// The parsed definition.
    pub def:   FunctionDef,
    /// The scope the function was defined in.
    pub scope: Rc<Scope>,
}

/// Scalars compare by value and functions by identity. Two arrays are equal
/// when each side's elements all appear somewhere in the other, regardless
/// of order or multiplicity; this is the membership notion `contains`,
/// array subtraction and the `array * array` merge are built on.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(l), Self::Number(r)) => l == r,
            (Self::Text(l), Self::Text(r)) => l == r,
            (Self::Bool(l), Self::Bool(r)) => l == r,
            (Self::Array(l), Self::Array(r)) => {
                l.iter().all(|element| r.contains(element))
                && r.iter().all(|element| l.contains(element))
            },
            (Self::Function(l), Self::Function(r)) => Rc::ptr_eq(l, r),
            (Self::Nothing, Self::Nothing) => true,
            _ => false,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

/// Renders a boolean the way Sigma spells it.
#[must_use]
pub const fn bool_text(value: bool) -> &'static str {
    if value { "true" } else { "fals" }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a number.
    /// - `Err(RuntimeError::ExpectedNumber)`: Otherwise.
    ///
    /// # Example
    /// ```
    /// use sigma::interpreter::value::core::Value;
    ///
    /// let x = Value::Number(10.0);
    /// assert_eq!(x.as_number(42).unwrap(), 10.0);
    /// ```
    pub const fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(RuntimeError::ExpectedNumber { line }),
        }
    }

    /// Borrows the value as text, or returns an error if it is another kind.
    pub fn as_text(&self, line: usize) -> EvalResult<&str> {
        match self {
            Self::Text(t) => Ok(t),
            _ => Err(RuntimeError::ExpectedText { line }),
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    pub const fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::TypeError { details: String::new(), line }),
        }
    }

    /// Borrows the value as an array, or returns an error if it is another
    /// kind.
    pub fn as_array(&self, line: usize) -> EvalResult<&Vec<Self>> {
        match self {
            Self::Array(v) => Ok(v),
            _ => Err(RuntimeError::ExpectedArray { line }),
        }
    }

    /// Whether the value counts as true in a condition.
    ///
    /// `nothing` is false; numbers are true when nonzero; text is true when
    /// non-empty; arrays and functions are always true.
    ///
    /// # Example
    /// ```
    /// use sigma::interpreter::value::core::Value;
    ///
    /// assert!(Value::Number(2.0).is_truthy());
    /// assert!(!Value::Text(String::new()).is_truthy());
    /// assert!(!Value::Nothing.is_truthy());
    /// assert!(Value::from(vec![]).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0,
            Self::Text(t) => !t.is_empty(),
            Self::Bool(b) => *b,
            Self::Array(_) | Self::Function(_) => true,
            Self::Nothing => false,
        }
    }

    /// The kind tag used by the `??` comparator and in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "num",
            Self::Text(_) => "str",
            Self::Bool(_) => "tf",
            Self::Array(_) => "arr",
            Self::Function(_) => "func",
            Self::Nothing => "nothing",
        }
    }

    /// The comparison rank of the value.
    ///
    /// Scalars sit at level 0 and compare by magnitude: a number by itself,
    /// text by its length, a boolean as 0 or 1. Arrays sit at level 1 and
    /// compare by element count, so any array outranks any scalar.
    ///
    /// # Errors
    /// `nothing` and functions have no rank and cannot be ordered.
    #[allow(clippy::cast_precision_loss)]
    pub fn rank(&self, line: usize) -> EvalResult<(u8, f64)> {
        match self {
            Self::Number(n) => Ok((0, *n)),
            Self::Text(t) => Ok((0, t.chars().count() as f64)),
            Self::Bool(b) => Ok((0, if *b { 1.0 } else { 0.0 })),
            Self::Array(a) => Ok((1, a.len() as f64)),
            Self::Function(_) | Self::Nothing => {
                Err(RuntimeError::TypeError { details: format!("Cannot compare {}", self.kind_name()),
                                              line })
            },
        }
    }

    /// Returns `true` if the value is [`Nothing`].
    #[must_use]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Returns `true` if the value is [`Array`].
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(t) => write!(f, "{t}"),
            Self::Bool(b) => write!(f, "{}", bool_text(*b)),
            Self::Array(a) => {
                write!(f, "(")?;

                for (index, value) in a.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, ")")
            },
            Self::Function(c) => write!(f, "func {}", c.def.name),
            Self::Nothing => write!(f, "nothing"),
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Number(n) => (*n).into(),
            LiteralValue::Text(t) => t.clone().into(),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Nothing => Self::Nothing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn arrays_equal_by_mutual_containment() {
        let ordered = Value::from(vec![Value::Number(1.0), Value::Number(2.0)]);
        let shuffled = Value::from(vec![Value::Number(2.0), Value::Number(1.0), Value::Number(2.0)]);
        assert_eq!(ordered, shuffled);

        let shorter = Value::from(vec![Value::Number(1.0)]);
        assert_ne!(ordered, shorter);
    }

    #[test]
    fn kinds_never_compare_equal_across() {
        assert_ne!(Value::Number(1.0), Value::Bool(true));
        assert_ne!(Value::Text(String::new()), Value::Nothing);
    }
}
