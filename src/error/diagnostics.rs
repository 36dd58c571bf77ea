use crate::error::{ParseError, RuntimeError};

/// ANSI escape for syntax error rendering.
pub const ANSI_YELLOW: &str = "\u{1B}[33m";
/// ANSI escape for runtime error rendering.
pub const ANSI_RED_BACKGROUND: &str = "\u{1B}[41m";
/// ANSI escape for reference error rendering.
pub const ANSI_RED: &str = "\u{1B}[31m";
/// ANSI reset escape.
pub const ANSI_RESET: &str = "\u{1B}[0m";

/// Collects syntax errors across a whole source file.
///
/// The parser reports into this collector and keeps going, so a single run
/// surfaces every syntax mistake at once. Evaluation is only attempted when
/// the collector is clean.
#[derive(Debug, Default)]
pub struct Diagnostics {
    syntax: Vec<ParseError>,
}

impl Diagnostics {
    /// Creates an empty collector.
    #[must_use]
    pub const fn new() -> Self {
        Self { syntax: Vec::new(), }
    }

    /// Records a syntax error.
    pub fn report(&mut self, error: ParseError) {
        self.syntax.push(error);
    }

    /// Whether no syntax errors have been recorded.
    ///
    /// ## Example
    /// ```
    /// use sigma::error::{Diagnostics, ParseError};
    ///
    /// let mut diagnostics = Diagnostics::new();
    /// assert!(diagnostics.is_clean());
    ///
    /// diagnostics.report(ParseError::UnexpectedEndOfInput { line: 1 });
    /// assert!(!diagnostics.is_clean());
    /// ```
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.syntax.is_empty()
    }

    /// The recorded syntax errors, in source order.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.syntax
    }

    /// Consumes the collector, yielding the recorded errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.syntax
    }
}

/// Renders a syntax error for the terminal.
#[must_use]
pub fn paint_syntax(error: &ParseError) -> String {
    format!("{ANSI_YELLOW}{error}{ANSI_RESET}")
}

/// Renders a runtime or reference error for the terminal, colored by class.
#[must_use]
pub fn paint_runtime(error: &RuntimeError) -> String {
    let color = if error.is_reference() { ANSI_RED } else { ANSI_RED_BACKGROUND };
    format!("{color}{error}{ANSI_RESET}")
}
