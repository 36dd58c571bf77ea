use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Consumes the next token and requires it to be an identifier.
///
/// `line` is used for the error when the input ends instead.
///
/// # Returns
/// The identifier text and the line it appeared on.
pub fn parse_identifier<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Identifier(name), name_line)) => Ok((name.clone(), *name_line)),
        Some((token, token_line)) => Err(ParseError::UnexpectedToken { token: token_text(token),
                                                                       line:  *token_line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Consumes the next token and requires it to equal `expected`.
///
/// The error is chosen to fit the expectation: a missing `}` or `)` or `|`
/// gets its dedicated variant, a missing `<-` reports the assignment arrow,
/// and `=` in place of `<-` gets the dedicated hint.
///
/// # Returns
/// The line the expected token appeared on.
pub fn expect<'a, I>(tokens: &mut Peekable<I>, expected: &Token, line: usize) -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((token, token_line)) if token == expected => Ok(*token_line),
        Some((token, token_line)) => Err(mismatch(expected, token, *token_line)),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

fn mismatch(expected: &Token, found: &Token, line: usize) -> ParseError {
    match expected {
        Token::RBrace => ParseError::ExpectedClosingBrace { line },
        Token::RParen => ParseError::ExpectedClosingParen { line },
        Token::Pipe => ParseError::ExpectedBlock { line },
        Token::Assign => {
            if matches!(found, Token::Equals) {
                ParseError::EqualsIsNotAssignment { line }
            } else {
                ParseError::ExpectedAssignArrow { line }
            }
        },
        _ => ParseError::UnexpectedToken { token: token_text(found), line },
    }
}

/// Renders a token for error messages.
pub fn token_text(token: &Token) -> String {
    match token {
        Token::Number(n) => format!("{n}"),
        Token::Text(t) => format!("\"{t}\""),
        Token::Identifier(name) => name.clone(),
        other => format!("{other:?}"),
    }
}
