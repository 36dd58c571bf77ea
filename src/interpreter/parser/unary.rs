use std::iter::Peekable;

use crate::{
    ast::{CastKind, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils,
        },
    },
};

/// Parses a unary expression.
///
/// Prefix operators are `-`, `!` (or `not`), `++` and `--`, and they nest:
/// `--x` steps a variable down, `- -x` negates twice. Anything else falls
/// through to [`parse_primary`].
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Minus, _)) => Some(UnaryOperator::Negate),
        Some((Token::Bang | Token::Not, _)) => Some(UnaryOperator::Not),
        Some((Token::PlusPlus, _)) => Some(UnaryOperator::Increment),
        Some((Token::MinusMinus, _)) => Some(UnaryOperator::Decrement),
        _ => None,
    };

    if let Some(op) = op
        && let Some((_, line)) = tokens.next()
    {
        let line = *line;
        let expr = parse_unary(tokens)?;

        return Ok(Expr::UnaryOp { op,
                                  expr: Box::new(expr),
                                  line });
    }

    parse_primary(tokens)
}

/// Parses a primary expression.
///
/// Primaries are literals, `nothing`, `count`, variables, calls written
/// `name{args}`, casts written `kind.primary`, `{...}` grouping and
/// `( ... )` array literals.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, line)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };
    let line = *line;

    match token {
        Token::Number(n) => Ok(Expr::Literal { value: (*n).into(),
                                               line }),
        Token::Text(t) => Ok(Expr::Literal { value: t.clone().into(),
                                             line }),
        Token::Bool(b) => Ok(Expr::Literal { value: (*b).into(),
                                             line }),
        Token::Nothing => Ok(Expr::Literal { value: crate::ast::LiteralValue::Nothing,
                                             line }),
        Token::Count => Ok(Expr::Variable { name: "count".to_string(),
                                            line }),

        Token::KwNum => parse_cast(tokens, CastKind::Number, line),
        Token::KwStr => parse_cast(tokens, CastKind::Text, line),
        Token::KwTf => parse_cast(tokens, CastKind::Bool, line),
        Token::KwArr => parse_cast(tokens, CastKind::Array, line),

        Token::Identifier(name) => {
            if let Some((Token::LBrace, _)) = tokens.peek() {
                tokens.next();
                let arguments = parse_call_arguments(tokens, line)?;

                return Ok(Expr::FunctionCall { name: name.clone(),
                                               arguments,
                                               line });
            }

            Ok(Expr::Variable { name: name.clone(),
                                line })
        },

        Token::LBrace => {
            let expr = parse_expression(tokens)?;
            utils::expect(tokens, &Token::RBrace, line)?;
            Ok(expr)
        },

        Token::LParen => {
            let mut elements = Vec::new();

            loop {
                match tokens.peek() {
                    Some((Token::RParen, _)) => {
                        tokens.next();
                        break;
                    },
                    None => return Err(ParseError::ExpectedClosingParen { line }),
                    _ => elements.push(parse_unary(tokens)?),
                }
            }

            Ok(Expr::ArrayLiteral { elements, line })
        },

        other => Err(ParseError::UnexpectedToken { token: utils::token_text(other),
                                                   line }),
    }
}

/// Parses the operand of a cast: the `.` and a primary expression.
fn parse_cast<'a, I>(tokens: &mut Peekable<I>, kind: CastKind, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    utils::expect(tokens, &Token::Period, line)?;
    let expr = parse_primary(tokens)?;

    Ok(Expr::Cast { kind,
                    expr: Box::new(expr),
                    line })
}

/// Parses space-separated call arguments up to the closing `}`.
///
/// Each argument binds at the unary level, so compound arguments need their
/// own braces: `f{{a + b} c}` passes two arguments.
fn parse_call_arguments<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut arguments = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            None => return Err(ParseError::ExpectedClosingBrace { line }),
            _ => arguments.push(parse_unary(tokens)?),
        }
    }

    Ok(arguments)
}
