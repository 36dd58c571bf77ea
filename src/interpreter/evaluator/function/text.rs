use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Shared handler for the `lowercase` and `uppercase` builtins.
pub fn recase(name: &str, _context: &mut Context, args: &[Value], line: usize) -> EvalResult<Value> {
    let text = args[0].as_text(line)?;

    let result = match name {
        "lowercase" => text.to_lowercase(),
        "uppercase" => text.to_uppercase(),
        _ => unreachable!("unknown case builtin"),
    };

    Ok(result.into())
}

/// The `getchar` builtin: the character of `args[0]` at index `args[1]`, as
/// one-character text.
pub fn getchar(_context: &mut Context, args: &[Value], line: usize) -> EvalResult<Value> {
    let text = args[0].as_text(line)?;
    let index = char_index(&args[1], text.chars().count(), line)?;

    let character = text.chars()
                        .nth(index)
                        .ok_or(RuntimeError::IndexOutOfBounds { max:   text.chars().count().saturating_sub(1),
                                                                found: index,
                                                                line })?;
    Ok(character.to_string().into())
}

/// The `substring` builtin: the characters of `args[0]` from index `args[1]`
/// up to but not including `args[2]`.
pub fn substring(_context: &mut Context, args: &[Value], line: usize) -> EvalResult<Value> {
    let text = args[0].as_text(line)?;
    let chars = text.chars().count();

    let start = char_index(&args[1], chars + 1, line)?;
    let end = char_index(&args[2], chars + 1, line)?;

    if start > end {
        return Err(RuntimeError::InvalidArgument { details: format!("substring bounds are reversed: {start} > {end}"),
                                                   line });
    }

    Ok(text.chars().skip(start).take(end - start).collect::<String>().into())
}

/// Converts an index argument to a checked `usize` below `len`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn char_index(value: &Value, len: usize, line: usize) -> EvalResult<usize> {
    let n = value.as_number(line)?;

    if n < 0.0 {
        return Err(RuntimeError::InvalidArgument { details: format!("index cannot be negative: {n}"),
                                                   line });
    }

    let index = n.floor() as usize;

    if index >= len {
        return Err(RuntimeError::IndexOutOfBounds { max: len.saturating_sub(1), found: index, line });
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::{getchar, substring};
    use crate::interpreter::{evaluator::core::Context, value::core::Value};

    #[test]
    fn getchar_counts_characters_not_bytes() {
        let mut context = Context::new();
        let value = getchar(&mut context, &[Value::from("héllo"), Value::Number(1.0)], 1).unwrap();
        assert_eq!(value, Value::from("é"));
    }

    #[test]
    fn substring_is_half_open() {
        let mut context = Context::new();
        let args = [Value::from("sigma"), Value::Number(1.0), Value::Number(4.0)];
        assert_eq!(substring(&mut context, &args, 1).unwrap(), Value::from("igm"));

        let empty = [Value::from("sigma"), Value::Number(2.0), Value::Number(2.0)];
        assert_eq!(substring(&mut context, &empty, 1).unwrap(), Value::from(""));
    }

    #[test]
    fn out_of_bounds_indexes_fail() {
        let mut context = Context::new();
        assert!(getchar(&mut context, &[Value::from("ab"), Value::Number(2.0)], 1).is_err());
    }
}
