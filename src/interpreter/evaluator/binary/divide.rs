use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::broadcast_right,
            core::EvalResult,
        },
        value::core::Value,
    },
};

/// Applies `/` across kinds.
///
/// Number division is IEEE true division, so dividing by zero yields an
/// infinity. Text and arrays divided by a size keep a prefix scaled by the
/// divisor. A scalar divided by an array broadcasts element-wise.
pub fn eval_divide(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    divide_impl(left, right, line, false)
}

/// Applies `//`: as [`eval_divide`], with numeric results floored.
pub fn eval_floor_divide(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    divide_impl(left, right, line, true)
}

#[allow(clippy::cast_precision_loss)]
fn divide_impl(left: &Value, right: &Value, line: usize, floored: bool) -> EvalResult<Value> {
    use Value::{Array, Bool, Number, Text};

    Ok(match (left, right) {
        (Number(l), Number(r)) => Number(floor_if(l / r, floored)),
        (Number(l), Text(r)) => Number(floor_if(l / r.chars().count() as f64, floored)),
        (Number(l), Bool(r)) => Number(floor_if(l / f64::from(*r), floored)),
        (scalar @ (Number(_) | Text(_) | Bool(_)), Array(r)) => {
            let f = if floored { eval_floor_divide } else { eval_divide };
            return broadcast_right(f, scalar, r, line);
        },
        (Text(l), Number(r)) => {
            let keep = scaled_prefix(l.chars().count(), *r);
            l.chars().take(keep).collect::<String>().into()
        },
        (Text(l), Text(r)) => {
            let keep = sized_prefix(l.chars().count(), r.chars().count(), line)?;
            l.chars().take(keep).collect::<String>().into()
        },
        (Text(l), Bool(r)) => Text(if *r { l.clone() } else { String::new() }),
        (Bool(l), Number(_)) => Bool(*l),
        (Bool(l), Text(r)) => Bool(*l ^ r.is_empty()),
        (Bool(l), Bool(r)) => Bool(l == r),
        (Array(l), Number(r)) => {
            let keep = scaled_prefix(l.len(), *r);
            l[..keep].to_vec().into()
        },
        (Array(l), Text(r)) => {
            let keep = sized_prefix(l.len(), r.chars().count(), line)?;
            l[..keep].to_vec().into()
        },
        (Array(l), Bool(r)) => Value::from(if *r { l.as_slice().to_vec() } else { Vec::new() }),
        (Array(l), Array(r)) => {
            let keep = sized_prefix(l.len(), r.len(), line)?;
            l[..keep].to_vec().into()
        },
        (l, r) => {
            return Err(RuntimeError::TypeError { details: format!("Cannot use '/' on {} and {}",
                                                                  l.kind_name(),
                                                                  r.kind_name()),
                                                 line });
        },
    })
}

fn floor_if(value: f64, floored: bool) -> f64 {
    if floored { value.floor() } else { value }
}

/// The prefix length of a sequence of `len` items divided by a number.
/// Non-positive and non-finite ratios keep nothing.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled_prefix(len: usize, divisor: f64) -> usize {
    let ratio = len as f64 / divisor;

    if ratio.is_finite() && ratio > 0.0 {
        (ratio.floor() as usize).min(len)
    } else {
        0
    }
}

/// The prefix length of a sequence of `len` items divided by another size.
fn sized_prefix(len: usize, size: usize, line: usize) -> EvalResult<usize> {
    if size == 0 {
        return Err(RuntimeError::InvalidArgument { details: "cannot divide by an empty operand".to_string(),
                                                   line });
    }

    Ok(len / size)
}

#[cfg(test)]
mod tests {
    use super::{eval_divide, eval_floor_divide};
    use crate::interpreter::value::core::Value;

    #[test]
    fn division_by_zero_follows_ieee() {
        let value = eval_divide(&Value::Number(1.0), &Value::Number(0.0), 1).unwrap();
        assert_eq!(value, Value::Number(f64::INFINITY));
    }

    #[test]
    fn floor_division_floors_numeric_results() {
        let value = eval_floor_divide(&Value::Number(7.0), &Value::Number(2.0), 1).unwrap();
        assert_eq!(value, Value::Number(3.0));
    }

    #[test]
    fn text_divided_by_number_keeps_a_prefix() {
        let value = eval_divide(&Value::from("abcdef"), &Value::Number(2.0), 1).unwrap();
        assert_eq!(value, Value::from("abc"));
    }

    #[test]
    fn scalar_over_array_broadcasts() {
        let array = Value::from(vec![Value::Number(2.0), Value::Number(4.0)]);
        let value = eval_divide(&Value::Number(8.0), &array, 1).unwrap();
        assert_eq!(value, Value::from(vec![Value::Number(4.0), Value::Number(2.0)]));
    }
}
