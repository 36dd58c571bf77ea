#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A statement terminator `!!` was expected but not found.
    ExpectedTerminator {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A block delimiter `|` was expected but not found.
    ExpectedBlock {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing brace `}` was expected but not found.
    ExpectedClosingBrace {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The assignment arrow `<-` was expected but not found.
    ExpectedAssignArrow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found `=` where `<-` was required.
    EqualsIsNotAssignment {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal was not closed before the end of input.
    UnterminatedString {
        /// The source line where the string starts.
        line: usize,
    },
    /// A block comment `\.` was not closed with `.\` before the end of input.
    UnterminatedComment {
        /// The source line where the comment starts.
        line: usize,
    },
    /// The function definition syntax was invalid.
    InvalidFunctionDefinition {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `change` statement had no cases.
    EmptyChange {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to use a reserved identifier name.
    IdentifierReserved {
        /// The reserved identifier name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Gets the source line this error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::ExpectedTerminator { line }
            | Self::ExpectedBlock { line }
            | Self::ExpectedClosingBrace { line }
            | Self::ExpectedClosingParen { line }
            | Self::ExpectedAssignArrow { line }
            | Self::EqualsIsNotAssignment { line }
            | Self::UnterminatedString { line }
            | Self::UnterminatedComment { line }
            | Self::InvalidFunctionDefinition { line }
            | Self::EmptyChange { line }
            | Self::IdentifierReserved { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedTerminator { line } => write!(f,
                                                        "Error on line {line}: Expected '!!' after statement but none found."),

            Self::ExpectedBlock { line } => {
                write!(f, "Error on line {line}: Expected block delimiter '|' but none found.")
            },

            Self::ExpectedClosingBrace { line } => {
                write!(f, "Error on line {line}: Expected closing brace '}}' but none found.")
            },

            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),

            Self::ExpectedAssignArrow { line } => {
                write!(f, "Error on line {line}: Expected '<-' but none found.")
            },

            Self::EqualsIsNotAssignment { line } => {
                write!(f, "Error on line {line}: '=' is not valid here. Use '<-' to assign.")
            },

            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: String is never terminated.")
            },

            Self::UnterminatedComment { line } => {
                write!(f, "Error on line {line}: Block comment is never terminated.")
            },

            Self::InvalidFunctionDefinition { line } => write!(f,
                                                               "Error on line {line}: Invalid function definition syntax. Example: func double <- var n | n * 2 |!!"),

            Self::EmptyChange { line } => {
                write!(f, "Error on line {line}: 'change' needs at least one case.")
            },

            Self::IdentifierReserved { name, line } => {
                write!(f, "Error on line {line}: Identifier {name} is reserved.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
