use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{lexer::Token, parser::unary::parse_unary},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, the `or` family, and recursively descends
/// through the precedence ladder. Every level is right-associative: the
/// right operand of an operator reaches back into the same level, so
/// `2 - 3 - 4` reads as `2 - (3 - 4)`.
///
/// Grammar: `expression := or_level`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_or(tokens)
}

/// One rung of the ladder: parse a left operand at the tighter level, then
/// an optional operator of this level with a right operand from this same
/// level.
macro_rules! precedence_level {
    ($(#[$doc:meta])* $name:ident, $next:ident, $operator:ident) => {
        $(#[$doc])*
        fn $name<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
            where I: Iterator<Item = &'a (Token, usize)> + Clone
        {
            let left = $next(tokens)?;

            if let Some((token, line)) = tokens.peek()
                && let Some(op) = $operator(token)
            {
                let line = *line;
                tokens.next();
                let right = $name(tokens)?;

                return Ok(Expr::BinaryOp { left: Box::new(left),
                                           op,
                                           right: Box::new(right),
                                           line });
            }

            Ok(left)
        }
    };
}

precedence_level! {
    /// `or`, `nor` and `implies`.
    parse_or, parse_xor, or_operator
}
precedence_level! {
    /// `xor` and `xnor`.
    parse_xor, parse_and, xor_operator
}
precedence_level! {
    /// `and` and `nand`.
    parse_and, parse_kindship, and_operator
}
precedence_level! {
    /// The kind and closeness comparators `??`, `!??`, `~` and `!~`.
    parse_kindship, parse_equality, kindship_operator
}
precedence_level! {
    /// The equality comparators `?` and `!?`.
    parse_equality, parse_relational, equality_operator
}
precedence_level! {
    /// The relational comparators `<`, `>`, `<?` and `>?`.
    parse_relational, parse_additive, relational_operator
}
precedence_level! {
    /// `+` and binary `-`.
    parse_additive, parse_multiplicative, additive_operator
}
precedence_level! {
    /// `*`, `/`, `//` and `%`.
    parse_multiplicative, parse_power, multiplicative_operator
}
precedence_level! {
    /// `^`, the tightest binary level above the unary operators.
    parse_power, parse_unary, power_operator
}

const fn or_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Or => Some(BinaryOperator::Or),
        Token::Nor => Some(BinaryOperator::Nor),
        Token::Implies => Some(BinaryOperator::Implies),
        _ => None,
    }
}

const fn xor_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Xor => Some(BinaryOperator::Xor),
        Token::Xnor => Some(BinaryOperator::Xnor),
        _ => None,
    }
}

const fn and_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::And => Some(BinaryOperator::And),
        Token::Nand => Some(BinaryOperator::Nand),
        _ => None,
    }
}

const fn kindship_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::DoubleQuestion => Some(BinaryOperator::SameKind),
        Token::BangDoubleQuestion => Some(BinaryOperator::NotSameKind),
        Token::Tilde => Some(BinaryOperator::ApproxEqual),
        Token::BangTilde => Some(BinaryOperator::NotApproxEqual),
        _ => None,
    }
}

const fn equality_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Question => Some(BinaryOperator::Equal),
        Token::BangQuestion => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}

const fn relational_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        _ => None,
    }
}

const fn additive_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        _ => None,
    }
}

const fn multiplicative_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::SlashSlash => Some(BinaryOperator::FloorDiv),
        Token::Percent => Some(BinaryOperator::Mod),
        _ => None,
    }
}

const fn power_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use logos::Logos;

    use super::parse_expression;
    use crate::{
        ast::{BinaryOperator, Expr},
        interpreter::lexer::{LexerExtras, Token},
    };

    fn parse(source: &str) -> Expr {
        let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1, token_newlines: 0 });
        let mut tokens = Vec::new();
        while let Some(token) = lexer.next() {
            let line = lexer.extras.line - std::mem::take(&mut lexer.extras.token_newlines);
            tokens.push((token.expect("lexable input"), line));
        }
        parse_expression(&mut tokens.iter().peekable()).expect("parsable input")
    }

    #[test]
    fn every_level_is_right_associative() {
        let Expr::BinaryOp { left, op, right, .. } = parse("2 - 3 - 4") else {
            panic!("expected a binary expression");
        };

        assert_eq!(op, BinaryOperator::Sub);
        assert!(matches!(*left, Expr::Literal { .. }));
        assert!(matches!(*right, Expr::BinaryOp { op: BinaryOperator::Sub, .. }));
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let Expr::BinaryOp { op, right, .. } = parse("1 + 2 * 3") else {
            panic!("expected a binary expression");
        };

        assert_eq!(op, BinaryOperator::Add);
        assert!(matches!(*right, Expr::BinaryOp { op: BinaryOperator::Mul, .. }));
    }

    #[test]
    fn comparators_sit_between_logic_and_arithmetic() {
        let Expr::BinaryOp { op, left, right, .. } = parse("1 + 1 ? 2 and 3 < 4") else {
            panic!("expected a binary expression");
        };

        assert_eq!(op, BinaryOperator::And);
        assert!(matches!(*left, Expr::BinaryOp { op: BinaryOperator::Equal, .. }));
        assert!(matches!(*right, Expr::BinaryOp { op: BinaryOperator::Less, .. }));
    }
}
