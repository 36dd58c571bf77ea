/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates statements and expressions,
/// applies the cross-kind operator coercions, manages the scope chain, and
/// runs builtin and user-defined functions.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, loops and conditionals.
/// - Reports runtime and reference errors with source lines.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, text, identifiers, operators, delimiters, and keywords. This is
/// the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Handles literals, identifiers, keywords and both comment forms.
/// - Surfaces malformed input so the driver can report it.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of statements
/// and expressions. This enables the evaluator to execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Validates grammar and syntax, reporting errors with location info.
/// - Enforces statement terminators and the right-associative operator
///   ladder.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the `Value` enum used during execution: numbers,
/// text, booleans, arrays, function values and `nothing`. It also provides
/// truthiness, comparison ranking and rendering.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements accessors, truthiness and display formatting.
pub mod value;
