#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
///
/// A subset of these are reference errors: failures to resolve or introduce a
/// name. The host reports those separately from ordinary runtime errors, see
/// [`RuntimeError::is_reference`].
pub enum RuntimeError {
    /// Tried to use a variable that is not bound in any reachable scope.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that is neither builtin nor in scope.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to declare a name that is already bound in a reachable scope.
    Redeclaration {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible kind.
    TypeError {
        /// Details about the kind mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A numeric value was expected, but not found.
    ExpectedNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A text value was expected, but not found.
    ExpectedText {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An array value was expected, but not found.
    ExpectedArray {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An argument was invalid or out of range.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function being called.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to access an array or text element outside the allowed bounds.
    IndexOutOfBounds {
        /// The largest valid index.
        max:   usize,
        /// The index that was actually requested.
        found: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Tried to cast the `nothing` value.
    CannotCastNothing {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The call depth limit was exceeded.
    RecursionLimit {
        /// The configured maximum depth.
        max:  usize,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// Whether this error is a reference error: a failed name lookup or a
    /// rejected declaration. The host exits with a dedicated code for these.
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(self,
                 Self::UnknownVariable { .. } | Self::UnknownFunction { .. } | Self::Redeclaration { .. })
    }

    /// Gets the source line this error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::UnknownFunction { line, .. }
            | Self::Redeclaration { line, .. }
            | Self::TypeError { line, .. }
            | Self::ExpectedNumber { line }
            | Self::ExpectedText { line }
            | Self::ExpectedArray { line }
            | Self::InvalidArgument { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::IndexOutOfBounds { line, .. }
            | Self::CannotCastNothing { line }
            | Self::RecursionLimit { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Unknown function '{name}'.")
            },
            Self::Redeclaration { name, line } => write!(f,
                                                         "Error on line {line}: '{name}' is already declared in a reachable scope."),

            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::ExpectedNumber { line } => write!(f, "Error on line {line}: Expected number."),
            Self::ExpectedText { line } => write!(f, "Error on line {line}: Expected text."),
            Self::ExpectedArray { line } => write!(f, "Error on line {line}: Expected array."),
            Self::InvalidArgument { details, line } => {
                write!(f, "Error on line {line}: Invalid argument: {details}.")
            },
            Self::ArgumentCountMismatch { name, line } => {
                write!(f, "Error on line {line}: Wrong number of arguments for '{name}'.")
            },
            Self::IndexOutOfBounds { max, found, line } => write!(f,
                                                                  "Error on line {line}: Index out of bounds. Maximum is {max}, but found {found} instead."),
            Self::CannotCastNothing { line } => {
                write!(f, "Error on line {line}: 'nothing' cannot be cast.")
            },
            Self::RecursionLimit { max, line } => {
                write!(f, "Error on line {line}: Call depth exceeded the limit of {max}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
