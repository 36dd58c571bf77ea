//! # sigma
//!
//! sigma is a tree-walking interpreter for the Sigma scripting language.
//! It tokenizes, parses, and evaluates Sigma scripts with support for
//! variables, first-class functions, loops, cross-kind arithmetic, and more.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    error::{Diagnostics, ParseError, RuntimeError},
    interpreter::{
        evaluator::core::{Context, DEFAULT_MAX_DEPTH},
        lexer::{LexerExtras, Token},
        parser::statement::parse_statement,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code, plus the diagnostics collector and the terminal
/// rendering used by the host.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Separates reference errors from ordinary runtime errors.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and error handling to provide a complete runtime for
/// Sigma scripts.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Everything a finished run hands back to the host.
///
/// Syntax errors and the runtime error are mutually exclusive: when the
/// source fails to parse, nothing is evaluated.
#[derive(Debug)]
pub struct RunReport {
    /// The value of the last evaluated statement.
    pub value:         Value,
    /// Lines produced by `log`, in order.
    pub output:        Vec<String>,
    /// Every syntax error found in the source.
    pub syntax_errors: Vec<ParseError>,
    /// The error that stopped evaluation, if any.
    pub runtime_error: Option<RuntimeError>,
}

impl RunReport {
    /// Whether the run finished without any error.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.syntax_errors.is_empty() && self.runtime_error.is_none()
    }
}

/// Runs a Sigma script with the default call depth limit.
///
/// The whole source is tokenized and parsed first; every syntax error is
/// collected before evaluation is attempted, and any syntax error at all
/// suppresses evaluation. Output produced by `log` is buffered in the
/// report for the host to flush.
///
/// # Examples
/// ```
/// use sigma::run;
///
/// let report = run("var x <- 5!!\nvar y <- x + 3!!\nlog{y}!!");
/// assert!(report.is_ok());
/// assert_eq!(report.output, vec!["8".to_string()]);
///
/// let report = run("var y <- x + 1!!"); // 'x' is not defined
/// assert!(report.runtime_error.is_some());
/// ```
#[must_use]
pub fn run(source: &str) -> RunReport {
    run_with_depth(source, DEFAULT_MAX_DEPTH)
}

/// Runs a Sigma script with an explicit call depth limit.
#[must_use]
pub fn run_with_depth(source: &str, max_depth: usize) -> RunReport {
    let mut diagnostics = Diagnostics::new();
    let tokens = tokenize(source, &mut diagnostics);

    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while iter.peek().is_some() {
        match parse_statement(&mut iter) {
            Ok(statement) => statements.push(statement),
            Err(error) => {
                diagnostics.report(error);

                // Resynchronize at the next statement boundary.
                for (token, _) in iter.by_ref() {
                    if matches!(token, Token::BangBang) {
                        break;
                    }
                }
            },
        }
    }

    if !diagnostics.is_clean() {
        return RunReport { value:         Value::Nothing,
                           output:        Vec::new(),
                           syntax_errors: diagnostics.into_errors(),
                           runtime_error: None, };
    }

    let mut context = Context::with_max_depth(max_depth);
    let globals = context.globals.clone();

    let mut value = Value::Nothing;
    let mut runtime_error = None;

    for statement in &statements {
        match context.eval_statement(statement, &globals) {
            Ok(result) => value = result,
            Err(error) => {
                runtime_error = Some(error);
                break;
            },
        }
    }

    RunReport { value,
                output: context.output,
                syntax_errors: Vec::new(),
                runtime_error }
}

/// Tokenizes the whole source, reporting lexical problems into the
/// diagnostics collector instead of stopping at the first one.
fn tokenize(source: &str, diagnostics: &mut Diagnostics) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1, token_newlines: 0 });

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line - std::mem::take(&mut lexer.extras.token_newlines);

        match token {
            Ok(Token::UnterminatedText) => {
                diagnostics.report(ParseError::UnterminatedString { line });
            },
            Ok(Token::UnterminatedComment) => {
                diagnostics.report(ParseError::UnterminatedComment { line });
            },
            Ok(token) => tokens.push((token, line)),
            Err(()) => diagnostics.report(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                                        line }),
        }
    }

    tokens
}
