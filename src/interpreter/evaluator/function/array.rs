use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// The `length` builtin: character count for text, element count for arrays.
#[allow(clippy::cast_precision_loss)]
pub fn length(_context: &mut Context, args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Text(t) => Ok(Value::Number(t.chars().count() as f64)),
        Value::Array(a) => Ok(Value::Number(a.len() as f64)),
        value => Err(RuntimeError::TypeError { details: format!("'length' needs text or an array, got {}",
                                                                value.kind_name()),
                                               line }),
    }
}

/// The `get` builtin: the element of `args[0]` at index `args[1]`.
pub fn get(_context: &mut Context, args: &[Value], line: usize) -> EvalResult<Value> {
    let elements = args[0].as_array(line)?;
    let index = element_index(&args[1], elements.len(), line)?;
    Ok(elements[index].clone())
}

/// The `set` builtin: a copy of `args[0]` with index `args[1]` replaced by
/// `args[2]`. The original array is untouched.
pub fn set(_context: &mut Context, args: &[Value], line: usize) -> EvalResult<Value> {
    let elements = args[0].as_array(line)?;
    let index = element_index(&args[1], elements.len(), line)?;

    let mut values = elements.clone();
    values[index] = args[2].clone();
    Ok(values.into())
}

/// The `add` builtin: a copy of `args[0]` with `args[2]` inserted at index
/// `args[1]`. Inserting at the length appends.
pub fn add(_context: &mut Context, args: &[Value], line: usize) -> EvalResult<Value> {
    let elements = args[0].as_array(line)?;
    let index = insertion_index(&args[1], elements.len(), line)?;

    let mut values = elements.clone();
    values.insert(index, args[2].clone());
    Ok(values.into())
}

/// The `remove` builtin: a copy of `args[0]` without the element at index
/// `args[1]`.
pub fn remove(_context: &mut Context, args: &[Value], line: usize) -> EvalResult<Value> {
    let elements = args[0].as_array(line)?;
    let index = element_index(&args[1], elements.len(), line)?;

    let mut values = elements.clone();
    values.remove(index);
    Ok(values.into())
}

/// The `contains` builtin: whether `args[0]` holds an element equal to
/// `args[1]`.
pub fn contains(_context: &mut Context, args: &[Value], line: usize) -> EvalResult<Value> {
    let elements = args[0].as_array(line)?;
    Ok(Value::Bool(elements.contains(&args[1])))
}

/// Converts an index argument to a checked `usize` below `len`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn element_index(value: &Value, len: usize, line: usize) -> EvalResult<usize> {
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

/// Converts an insertion index argument to a checked `usize`. Unlike
/// [`element_index`], the length itself is a valid position.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn insertion_index(value: &Value, len: usize, line: usize) -> EvalResult<usize> {
    let n = value.as_number(line)?;

    if n < 0.0 {
        return Err(RuntimeError::InvalidArgument { details: format!("index cannot be negative: {n}"),
                                                   line });
    }

    let index = n.floor() as usize;

    if index > len {
        return Err(RuntimeError::IndexOutOfBounds { max: len, found: index, line });
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::{add, length, remove, set};
    use crate::interpreter::{evaluator::core::Context, value::core::Value};

    fn sample() -> Value {
        Value::from(vec![Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)])
    }

    #[test]
    fn set_returns_a_copy() {
        let mut context = Context::new();
        let original = sample();

        let updated = set(&mut context,
                          &[original.clone(), Value::Number(0.0), Value::Number(9.0)],
                          1).unwrap();

        assert_eq!(updated,
                   Value::from(vec![Value::Number(9.0), Value::Number(2.0), Value::Number(3.0)]));
        assert_eq!(original, sample());
    }

    #[test]
    fn add_inserts_at_the_index() {
        let mut context = Context::new();
        let pair = Value::from(vec![Value::Number(1.0), Value::Number(3.0)]);

        let filled = add(&mut context, &[pair.clone(), Value::Number(1.0), Value::Number(2.0)], 1).unwrap();
        assert_eq!(filled, sample());

        let appended = add(&mut context, &[pair.clone(), Value::Number(2.0), Value::Number(9.0)], 1).unwrap();
        assert_eq!(appended,
                   Value::from(vec![Value::Number(1.0), Value::Number(3.0), Value::Number(9.0)]));

        assert!(add(&mut context, &[pair, Value::Number(3.0), Value::Number(9.0)], 1).is_err());
    }

    #[test]
    fn remove_checks_bounds() {
        let mut context = Context::new();
        assert!(remove(&mut context, &[sample(), Value::Number(3.0)], 1).is_err());
    }

    #[test]
    fn length_covers_text_and_arrays() {
        let mut context = Context::new();
        assert_eq!(length(&mut context, &[sample()], 1).unwrap(), Value::Number(3.0));
        assert_eq!(length(&mut context, &[Value::from("abcd")], 1).unwrap(), Value::Number(4.0));
        assert!(length(&mut context, &[Value::Bool(true)], 1).is_err());
    }
}
