use crate::{
    ast::CastKind,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{bool_text, Value},
    },
};

/// Applies a cast expression such as `num.x` or `str.(1 2 3)`.
///
/// Every kind converts to every other kind: sizes stand in for numbers
/// (`num.` of text is its length, of an array its element count), emptiness
/// stands in for booleans, and `arr.` wraps scalars into one-element arrays.
/// `str.` of an array renders `(e1 e2 ...)` with elements cast recursively.
///
/// # Errors
/// Casting `nothing` or a function value fails.
#[allow(clippy::cast_precision_loss)]
pub fn eval_cast(kind: CastKind, value: &Value, line: usize) -> EvalResult<Value> {
    match value {
        Value::Nothing => return Err(RuntimeError::CannotCastNothing { line }),
        Value::Function(_) => {
            return Err(RuntimeError::TypeError { details: format!("Cannot cast a function to '{kind}'"),
                                                 line });
        },
        _ => {},
    }

    Ok(match kind {
        CastKind::Number => match value {
            Value::Number(n) => Value::Number(*n),
            Value::Text(t) => Value::Number(t.chars().count() as f64),
            Value::Bool(b) => Value::Number(f64::from(*b)),
            Value::Array(a) => Value::Number(a.len() as f64),
            Value::Function(_) | Value::Nothing => unreachable!("rejected above"),
        },
        CastKind::Text => match value {
            Value::Number(n) => format!("{n}").into(),
            Value::Text(t) => t.clone().into(),
            Value::Bool(b) => bool_text(*b).into(),
            Value::Array(_) => value.to_string().into(),
            Value::Function(_) | Value::Nothing => unreachable!("rejected above"),
        },
        CastKind::Bool => Value::Bool(match value {
            Value::Number(n) => *n != 0.0,
            Value::Text(t) => !t.is_empty(),
            Value::Bool(b) => *b,
            Value::Array(a) => !a.is_empty(),
            Value::Function(_) | Value::Nothing => unreachable!("rejected above"),
        }),
        CastKind::Array => match value {
            Value::Array(_) => value.clone(),
            scalar => vec![scalar.clone()].into(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::eval_cast;
    use crate::{ast::CastKind, interpreter::value::core::Value};

    #[test]
    fn sizes_stand_in_for_numbers() {
        let value = eval_cast(CastKind::Number, &Value::from("sigma"), 1).unwrap();
        assert_eq!(value, Value::Number(5.0));

        let array = Value::from(vec![Value::Number(1.0), Value::Number(2.0)]);
        let value = eval_cast(CastKind::Number, &array, 1).unwrap();
        assert_eq!(value, Value::Number(2.0));
    }

    #[test]
    fn arrays_render_recursively_as_text() {
        let nested = Value::from(vec![Value::Number(1.0),
                                      Value::from(vec![Value::from("x"), Value::Bool(false)])]);
        let value = eval_cast(CastKind::Text, &nested, 1).unwrap();
        assert_eq!(value, Value::from("(1 (x fals))"));
    }

    #[test]
    fn nothing_cannot_be_cast() {
        assert!(eval_cast(CastKind::Bool, &Value::Nothing, 1).is_err());
    }

    #[test]
    fn scalars_wrap_into_one_element_arrays() {
        let value = eval_cast(CastKind::Array, &Value::Number(3.0), 1).unwrap();
        assert_eq!(value, Value::from(vec![Value::Number(3.0)]));
    }
}
