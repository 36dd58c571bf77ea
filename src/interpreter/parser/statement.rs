use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Block, Expr, FunctionDef, LiteralValue, Statement},
    error::ParseError,
    interpreter::{
        evaluator::utils::is_reserved_identifier,
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            unary::parse_unary,
            utils,
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a variable declaration,
/// - a function definition,
/// - an `if` chain,
/// - one of the four loop forms,
/// - a `change` statement,
/// - an assignment (plain or compound),
/// - an expression used as a statement.
///
/// Parsing is attempted in that order; the first matching construct is
/// returned. If none match, the input is parsed as an expression statement.
///
/// Declarations, assignments, expression statements, function definitions
/// and `change` require the `!!` terminator, which may be left off directly
/// before a closing `|` or the end of input. Conditionals and loops take no
/// terminator.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(statement) = parse_variable_declaration(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_function_definition(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_if(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_for(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_foreach(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_when(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_loop(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_change(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }

    let line = tokens.peek().map_or(0, |(_, l)| *l);
    let expr = parse_expression(tokens)?;
    consume_terminator(tokens)?;

    Ok(Statement::Expression { expr, line })
}

/// Parses a block delimited by `|` on both sides.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Block>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::Pipe, line)) => *line,
        Some((_, line)) => return Err(ParseError::ExpectedBlock { line: *line }),
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::Pipe, _)) => {
                tokens.next();
                break;
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
            _ => statements.push(parse_statement(tokens)?),
        }
    }

    Ok(Block { statements, line })
}

/// Consumes a statement terminator.
///
/// A `!!` is consumed. Directly before a closing `|` or at the end of input
/// the terminator may be left off. Anything else is an error.
pub fn consume_terminator<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::BangBang, _)) => {
            tokens.next();
            Ok(())
        },
        Some((Token::Pipe, _)) | None => Ok(()),
        Some((Token::Equals, line)) => Err(ParseError::EqualsIsNotAssignment { line: *line }),
        Some((_, line)) => Err(ParseError::ExpectedTerminator { line: *line }),
    }
}

/// Parses a variable declaration: `var name <- expression!!`.
///
/// The initializer may be left off; a bare `var name!!` binds `nothing`.
///
/// Returns `Ok(None)` when the input does not start with `var`.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Var, line)) = tokens.peek() else {
        return Ok(None);
    };
    let line = *line;
    tokens.next();

    let name = declared_name(tokens, line)?;

    let value = match tokens.peek() {
        Some((Token::Assign, _)) => {
            tokens.next();
            parse_expression(tokens)?
        },
        Some((Token::Equals, equals_line)) => {
            return Err(ParseError::EqualsIsNotAssignment { line: *equals_line });
        },
        _ => Expr::Literal { value: LiteralValue::Nothing, line },
    };

    consume_terminator(tokens)?;

    Ok(Some(Statement::VariableDeclaration { name, value, line }))
}

/// Parses a function definition:
/// `func name <- var a var b [var c] | body |!!`.
///
/// Returns `Ok(None)` when the input does not start with `func`.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Func, line)) = tokens.peek() else {
        return Ok(None);
    };
    let line = *line;
    tokens.next();

    let name = declared_name(tokens, line)?;
    utils::expect(tokens, &Token::Assign, line)?;

    let mut params = Vec::new();

    while let Some((Token::Var, _)) = tokens.peek() {
        tokens.next();
        params.push(declared_name(tokens, line)?);
    }

    let mut optional_params = Vec::new();

    if let Some((Token::LBracket, _)) = tokens.peek() {
        tokens.next();

        while let Some((Token::Var, _)) = tokens.peek() {
            tokens.next();
            optional_params.push(declared_name(tokens, line)?);
        }

        match tokens.next() {
            Some((Token::RBracket, _)) => {},
            _ => return Err(ParseError::InvalidFunctionDefinition { line }),
        }
    }

    let body = parse_block(tokens)?;
    consume_terminator(tokens)?;

    Ok(Some(Statement::Function(FunctionDef { name,
                                              params,
                                              optional_params,
                                              body,
                                              line })))
}

/// Parses an `if` chain: `if{cond} |...|` with any number of `butif` arms
/// and an optional trailing `but |...|`. No terminator follows.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::If, line)) = tokens.peek() else {
        return Ok(None);
    };
    let line = *line;
    tokens.next();

    let condition = parse_braced(tokens, line)?;
    let block = parse_block(tokens)?;
    let mut arms = vec![(condition, block)];

    while let Some((Token::Butif, butif_line)) = tokens.peek() {
        let butif_line = *butif_line;
        tokens.next();

        let condition = parse_braced(tokens, butif_line)?;
        let block = parse_block(tokens)?;
        arms.push((condition, block));
    }

    let otherwise = if let Some((Token::But, _)) = tokens.peek() {
        tokens.next();
        Some(parse_block(tokens)?)
    } else {
        None
    };

    Ok(Some(Statement::If { arms, otherwise, line }))
}

/// Parses a counted loop:
/// `for{var i <- 0!! i < 10!! i +<- 1} | body |`.
fn parse_for<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::For, line)) = tokens.peek() else {
        return Ok(None);
    };
    let line = *line;
    tokens.next();

    utils::expect(tokens, &Token::LBrace, line)?;

    let Some(init) = parse_variable_declaration(tokens)? else {
        let found = tokens.peek().map_or(line, |(_, l)| *l);
        return Err(ParseError::UnexpectedToken { token: "expected a declaration in 'for'".to_string(),
                                                 line:  found, });
    };

    let condition = parse_expression(tokens)?;
    consume_terminator(tokens)?;
    let step = parse_step(tokens, line)?;

    utils::expect(tokens, &Token::RBrace, line)?;
    let body = parse_block(tokens)?;

    Ok(Some(Statement::For { init: Box::new(init),
                             condition,
                             step: Box::new(step),
                             body,
                             line }))
}

/// Parses the step of a `for` header: an assignment without its terminator,
/// or a prefix `++`/`--` expression.
fn parse_step<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Identifier(_), _)) => parse_assignment_body(tokens, line),
        Some((Token::PlusPlus | Token::MinusMinus, step_line)) => {
            let step_line = *step_line;
            let expr = parse_unary(tokens)?;

            Ok(Statement::Expression { expr,
                                       line: step_line })
        },
        Some((token, token_line)) => Err(ParseError::UnexpectedToken { token: utils::token_text(token),
                                                                       line:  *token_line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses `foreach{var name of collection} | body |`.
fn parse_foreach<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Foreach, line)) = tokens.peek() else {
        return Ok(None);
    };
    let line = *line;
    tokens.next();

    utils::expect(tokens, &Token::LBrace, line)?;
    utils::expect(tokens, &Token::Var, line)?;
    let name = declared_name(tokens, line)?;
    utils::expect(tokens, &Token::Of, line)?;
    let (collection, _) = utils::parse_identifier(tokens, line)?;
    utils::expect(tokens, &Token::RBrace, line)?;

    let body = parse_block(tokens)?;

    Ok(Some(Statement::Foreach { name,
                                 collection,
                                 body,
                                 line }))
}

/// Parses `when{condition} | body |`.
fn parse_when<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::When, line)) = tokens.peek() else {
        return Ok(None);
    };
    let line = *line;
    tokens.next();

    let condition = parse_braced(tokens, line)?;
    let body = parse_block(tokens)?;

    Ok(Some(Statement::When { condition, body, line }))
}

/// Parses `loop{bound} | body |`.
fn parse_loop<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Loop, line)) = tokens.peek() else {
        return Ok(None);
    };
    let line = *line;
    tokens.next();

    let bound = parse_braced(tokens, line)?;
    let body = parse_block(tokens)?;

    Ok(Some(Statement::Loop { bound, body, line }))
}

/// Parses a `change` statement:
/// `change{subject} | case{v} |...| case{w} |...| nocase |...| |!!`.
fn parse_change<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Change, line)) = tokens.peek() else {
        return Ok(None);
    };
    let line = *line;
    tokens.next();

    let subject = parse_braced(tokens, line)?;
    utils::expect(tokens, &Token::Pipe, line)?;

    let mut cases = Vec::new();

    while let Some((Token::Case, case_line)) = tokens.peek() {
        let case_line = *case_line;
        tokens.next();

        let value = parse_braced(tokens, case_line)?;
        let block = parse_block(tokens)?;
        cases.push((value, block));
    }

    let nocase = if let Some((Token::Nocase, _)) = tokens.peek() {
        tokens.next();
        Some(parse_block(tokens)?)
    } else {
        None
    };

    utils::expect(tokens, &Token::Pipe, line)?;

    if cases.is_empty() {
        return Err(ParseError::EmptyChange { line });
    }

    consume_terminator(tokens)?;

    Ok(Some(Statement::Change { subject,
                                cases,
                                nocase,
                                line }))
}

/// Parses an assignment statement, plain or compound, with its terminator.
///
/// Uses a cloned lookahead: returns `Ok(None)` without consuming anything
/// unless the input starts with an identifier followed by an assignment
/// operator (or `=`, which gets the dedicated error).
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();

    let Some((Token::Identifier(_), line)) = lookahead.next() else {
        return Ok(None);
    };
    let line = *line;

    match lookahead.next() {
        Some((token, _))
            if matches!(token, Token::Assign | Token::Equals)
               || assignment_operator(token).is_some() => {},
        _ => return Ok(None),
    }

    let statement = parse_assignment_body(tokens, line)?;
    consume_terminator(tokens)?;

    Ok(Some(statement))
}

/// Parses `name <- expr`, `name +<- expr` and the other compound forms,
/// without a terminator. The caller has verified the leading identifier.
fn parse_assignment_body<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = utils::parse_identifier(tokens, line)?;

    let op = match tokens.next() {
        Some((Token::Assign, _)) => None,
        Some((Token::Equals, equals_line)) => {
            return Err(ParseError::EqualsIsNotAssignment { line: *equals_line });
        },
        Some((token, token_line)) => match assignment_operator(token) {
            Some(op) => Some(op),
            None => {
                return Err(ParseError::ExpectedAssignArrow { line: *token_line });
            },
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    };

    let value = parse_expression(tokens)?;

    Ok(match op {
        None => Statement::Assignment { name, value, line },
        Some(op) => Statement::CompoundAssignment { name, op, value, line },
    })
}

/// Maps an assignment operator token to the binary operator it applies.
/// Plain `<-` maps to `None` by way of the caller; this covers the compound
/// forms.
const fn assignment_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Assign => None,
        Token::PlusAssign => Some(BinaryOperator::Add),
        Token::MinusAssign => Some(BinaryOperator::Sub),
        Token::TimesAssign => Some(BinaryOperator::Mul),
        Token::DivideAssign => Some(BinaryOperator::Div),
        Token::FloorDivideAssign => Some(BinaryOperator::FloorDiv),
        Token::PowAssign => Some(BinaryOperator::Pow),
        Token::ModAssign => Some(BinaryOperator::Mod),
        _ => None,
    }
}

/// Parses a braced header expression: `{` expression `}`.
fn parse_braced<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    utils::expect(tokens, &Token::LBrace, line)?;
    let expr = parse_expression(tokens)?;
    utils::expect(tokens, &Token::RBrace, line)?;
    Ok(expr)
}

/// Consumes an identifier that introduces a binding and rejects reserved
/// names.
fn declared_name<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, name_line) = utils::parse_identifier(tokens, line)?;

    if is_reserved_identifier(&name) {
        return Err(ParseError::IdentifierReserved { name,
                                                    line: name_line });
    }

    Ok(name)
}
