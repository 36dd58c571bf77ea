use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::{broadcast_left, broadcast_right},
            core::EvalResult,
        },
        value::core::Value,
    },
};

/// Applies `^` across kinds.
///
/// Numbers exponentiate, with text weighed by its length and booleans as
/// 0/1. Text raised to a size repeats each character that many times.
/// Boolean results follow `l or r-is-zero` style rules. Arrays broadcast on
/// either side; two arrays raise each left element to the right's length.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn eval_caret(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    use Value::{Array, Bool, Number, Text};

    Ok(match (left, right) {
        (Number(l), Number(r)) => Number(l.powf(*r)),
        (Number(l), Text(r)) => Number(l.powf(r.chars().count() as f64)),
        (Number(l), Bool(r)) => Number(l.powf(f64::from(*r))),
        (Text(l), Number(r)) => stutter(l, r.max(0.0).floor() as usize).into(),
        (Text(l), Text(r)) => stutter(l, r.chars().count()).into(),
        (Text(l), Bool(r)) => Text(if *r { l.clone() } else { String::new() }),
        (Bool(l), Number(r)) => Bool(*l || *r == 0.0),
        (Bool(l), Text(r)) => Bool(*l || r.is_empty()),
        (Bool(l), Bool(r)) => Bool(*l || !r),
        (scalar @ (Number(_) | Text(_) | Bool(_)), Array(r)) => {
            return broadcast_right(eval_caret, scalar, r, line);
        },
        (Array(l), scalar @ (Number(_) | Text(_) | Bool(_))) => {
            return broadcast_left(eval_caret, l, scalar, line);
        },
        (Array(l), Array(r)) => {
            return broadcast_left(eval_caret, l, &Number(r.len() as f64), line);
        },
        (l, r) => {
            return Err(RuntimeError::TypeError { details: format!("Cannot use '^' on {} and {}",
                                                                  l.kind_name(),
                                                                  r.kind_name()),
                                                 line });
        },
    })
}

/// Repeats each character of `text` `times` in place.
fn stutter(text: &str, times: usize) -> String {
    text.chars().flat_map(|c| std::iter::repeat(c).take(times)).collect()
}

#[cfg(test)]
mod tests {
    use super::eval_caret;
    use crate::interpreter::value::core::Value;

    #[test]
    fn text_to_a_power_stutters_characters() {
        let value = eval_caret(&Value::from("ab"), &Value::Number(3.0), 1).unwrap();
        assert_eq!(value, Value::from("aaabbb"));
    }

    #[test]
    fn bool_to_a_power_is_true_when_the_exponent_vanishes() {
        let value = eval_caret(&Value::Bool(false), &Value::Number(0.0), 1).unwrap();
        assert_eq!(value, Value::Bool(true));
    }

    #[test]
    fn arrays_broadcast_on_either_side() {
        let array = Value::from(vec![Value::Number(2.0), Value::Number(3.0)]);

        let value = eval_caret(&array, &Value::Number(2.0), 1).unwrap();
        assert_eq!(value, Value::from(vec![Value::Number(4.0), Value::Number(9.0)]));

        let value = eval_caret(&Value::Number(2.0), &array, 1).unwrap();
        assert_eq!(value, Value::from(vec![Value::Number(4.0), Value::Number(8.0)]));
    }
}
