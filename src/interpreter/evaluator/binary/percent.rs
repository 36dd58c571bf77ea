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

/// Applies `%` across kinds.
///
/// Numbers take the IEEE remainder. Text modulo a size keeps the remainder
/// prefix. Mixed forms with booleans collapse to boolean tests. Arrays
/// broadcast the same way `^` does.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn eval_percent(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    use Value::{Array, Bool, Number, Text};

    Ok(match (left, right) {
        (Number(l), Number(r)) => Number(l % r),
        (Number(l), Text(r)) => Number(l % r.chars().count() as f64),
        (Number(l), Bool(r)) => Bool(*l != 0.0 && *r),
        (Text(l), Number(r)) => {
            let keep = remainder_prefix(l.chars().count(), r.max(0.0).floor() as usize, line)?;
            l.chars().take(keep).collect::<String>().into()
        },
        (Text(l), Text(r)) => {
            let keep = remainder_prefix(l.chars().count(), r.chars().count(), line)?;
            l.chars().take(keep).collect::<String>().into()
        },
        (Text(l), Bool(r)) => Bool(!l.is_empty() && *r),
        (Bool(l), Number(_) | Text(_)) => Bool(*l),
        (Bool(l), Bool(r)) => Bool(*l && !r),
        (scalar @ (Number(_) | Text(_) | Bool(_)), Array(r)) => {
            return broadcast_right(eval_percent, scalar, r, line);
        },
        (Array(l), scalar @ (Number(_) | Text(_) | Bool(_))) => {
            return broadcast_left(eval_percent, l, scalar, line);
        },
        (Array(l), Array(r)) => {
            return broadcast_left(eval_percent, l, &Number(r.len() as f64), line);
        },
        (l, r) => {
            return Err(RuntimeError::TypeError { details: format!("Cannot use '%' on {} and {}",
                                                                  l.kind_name(),
                                                                  r.kind_name()),
                                                 line });
        },
    })
}

fn remainder_prefix(len: usize, size: usize, line: usize) -> EvalResult<usize> {
    if size == 0 {
        return Err(RuntimeError::InvalidArgument { details: "modulo by an empty operand".to_string(),
                                                   line });
    }

    Ok(len % size)
}

#[cfg(test)]
mod tests {
    use super::eval_percent;
    use crate::interpreter::value::core::Value;

    #[test]
    fn text_modulo_number_keeps_the_remainder_prefix() {
        let value = eval_percent(&Value::from("abcde"), &Value::Number(3.0), 1).unwrap();
        assert_eq!(value, Value::from("ab"));
    }

    #[test]
    fn number_modulo_bool_tests_both_sides() {
        let value = eval_percent(&Value::Number(2.0), &Value::Bool(true), 1).unwrap();
        assert_eq!(value, Value::Bool(true));

        let value = eval_percent(&Value::Number(0.0), &Value::Bool(true), 1).unwrap();
        assert_eq!(value, Value::Bool(false));
    }
}
