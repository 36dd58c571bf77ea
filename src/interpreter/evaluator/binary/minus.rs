use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{bool_text, Value},
    },
};

/// Applies binary `-` across kinds.
///
/// Numbers subtract, with text weighed by its length and booleans as 0/1.
/// Text minus a number drops that many characters from the end; text minus
/// text removes every occurrence. Arrays remove matching elements.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn eval_minus(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    use Value::{Array, Bool, Number, Text};

    Ok(match (left, right) {
        (Number(l), Number(r)) => Number(l - r),
        (Number(l), Text(r)) => Number(l - r.chars().count() as f64),
        (Number(l), Bool(r)) => Number(l - f64::from(*r)),
        (Number(_), Array(r)) => {
            r.iter().rev().filter(|element| *element != left).cloned().collect::<Vec<_>>().into()
        },
        (Text(l), Number(r)) => {
            let drop = r.max(0.0).floor() as usize;
            let keep = l.chars().count().saturating_sub(drop);
            l.chars().take(keep).collect::<String>().into()
        },
        (Text(l), Text(r)) => l.replace(r.as_str(), "").into(),
        (Text(l), Bool(r)) => {
            if *r {
                let keep = l.chars().count().saturating_sub(1);
                l.chars().take(keep).collect::<String>().into()
            } else {
                l.clone().into()
            }
        },
        (Bool(l), Number(r)) => Number(f64::from(*l) - r),
        (Bool(l), Text(r)) => bool_text(*l).replace(r.as_str(), "").into(),
        (Bool(l), Bool(r)) => Bool(l != r),
        (Array(l), Array(r)) => {
            l.iter().cloned().filter(|element| !r.contains(element)).collect::<Vec<_>>().into()
        },
        (Array(l), scalar @ (Number(_) | Text(_) | Bool(_))) => {
            l.iter().cloned().filter(|element| element != scalar).collect::<Vec<_>>().into()
        },
        (l, r) => {
            return Err(RuntimeError::TypeError { details: format!("Cannot use '-' on {} and {}",
                                                                  l.kind_name(),
                                                                  r.kind_name()),
                                                 line });
        },
    })
}

#[cfg(test)]
mod tests {
    use super::eval_minus;
    use crate::interpreter::value::core::Value;

    #[test]
    fn text_minus_number_truncates_from_the_end() {
        let value = eval_minus(&Value::from("sigma"), &Value::Number(2.0), 1).unwrap();
        assert_eq!(value, Value::from("sig"));

        let clamped = eval_minus(&Value::from("ab"), &Value::Number(9.0), 1).unwrap();
        assert_eq!(clamped, Value::from(""));
    }

    #[test]
    fn text_minus_text_removes_every_occurrence() {
        let value = eval_minus(&Value::from("banana"), &Value::from("an"), 1).unwrap();
        assert_eq!(value, Value::from("ba"));
    }

    #[test]
    fn array_minus_scalar_removes_matching_elements() {
        let array = Value::from(vec![Value::Number(1.0), Value::Number(2.0), Value::Number(1.0)]);
        let value = eval_minus(&array, &Value::Number(1.0), 1).unwrap();
        assert_eq!(value, Value::from(vec![Value::Number(2.0)]));
    }

    #[test]
    fn number_minus_array_reverses_and_removes() {
        let array = Value::from(vec![Value::Number(3.0), Value::Number(5.0), Value::Number(7.0)]);
        let value = eval_minus(&Value::Number(5.0), &array, 1).unwrap();
        assert_eq!(value, Value::from(vec![Value::Number(7.0), Value::Number(3.0)]));
    }
}
