use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{bool_text, Value},
    },
};

/// Applies `+` across kinds.
///
/// Numbers add, text concatenates (numbers and booleans render into the
/// text), booleans OR. A scalar added to an array is prepended; an array
/// plus a scalar appends; two arrays concatenate.
pub fn eval_plus(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    use Value::{Array, Bool, Number, Text};

    Ok(match (left, right) {
        (Number(l), Number(r)) => Number(l + r),
        (Number(l), Text(r)) => format!("{l}{r}").into(),
        (Number(l), Bool(r)) => Number(l + f64::from(*r)),
        (Text(l), Number(r)) => format!("{l}{r}").into(),
        (Text(l), Text(r)) => format!("{l}{r}").into(),
        (Text(l), Bool(r)) => format!("{l}{}", bool_text(*r)).into(),
        (Bool(l), Number(r)) => Number(f64::from(*l) + r),
        (Bool(l), Text(r)) => format!("{}{r}", bool_text(*l)).into(),
        (Bool(l), Bool(r)) => Bool(*l || *r),
        (scalar @ (Number(_) | Text(_) | Bool(_)), Array(r)) => prepend(scalar, r),
        (Array(l), scalar @ (Number(_) | Text(_) | Bool(_))) => append(l, scalar),
        (Array(l), Array(r)) => l.iter().chain(r.iter()).cloned().collect::<Vec<_>>().into(),
        (l, r) => {
            return Err(RuntimeError::TypeError { details: format!("Cannot use '+' on {} and {}",
                                                                  l.kind_name(),
                                                                  r.kind_name()),
                                                 line });
        },
    })
}

fn prepend(value: &Value, elements: &[Value]) -> Value {
    let mut values = Vec::with_capacity(elements.len() + 1);
    values.push(value.clone());
    values.extend_from_slice(elements);
    values.into()
}

fn append(elements: &[Value], value: &Value) -> Value {
    let mut values = Vec::with_capacity(elements.len() + 1);
    values.extend_from_slice(elements);
    values.push(value.clone());
    values.into()
}

#[cfg(test)]
mod tests {
    use super::eval_plus;
    use crate::interpreter::value::core::Value;

    #[test]
    fn numbers_render_without_trailing_zeroes_in_text() {
        let value = eval_plus(&Value::Number(3.0), &Value::from(" apples"), 1).unwrap();
        assert_eq!(value, Value::from("3 apples"));
    }

    #[test]
    fn scalars_prepend_and_append_to_arrays() {
        let array = Value::from(vec![Value::Number(2.0)]);

        let prepended = eval_plus(&Value::Number(1.0), &array, 1).unwrap();
        assert_eq!(prepended, Value::from(vec![Value::Number(1.0), Value::Number(2.0)]));

        let appended = eval_plus(&array, &Value::Number(3.0), 1).unwrap();
        assert_eq!(appended, Value::from(vec![Value::Number(2.0), Value::Number(3.0)]));
    }

    #[test]
    fn booleans_or_under_plus() {
        let value = eval_plus(&Value::Bool(false), &Value::Bool(true), 1).unwrap();
        assert_eq!(value, Value::Bool(true));
    }
}
