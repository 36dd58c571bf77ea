use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies `*` across kinds.
///
/// Numbers multiply. A number times text or an array repeats it, with the
/// fractional part contributing a proportional prefix. Text times text
/// yields the sorted characters of the concatenation; text times a number
/// appends the text's mirror image. Booleans gate their other operand, and
/// two booleans AND.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn eval_times(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    use Value::{Array, Bool, Number, Text};

    Ok(match (left, right) {
        (Number(l), Number(r)) => Number(l * r),
        (Number(l), Text(r)) => repeat_text(*l, r).into(),
        (Number(_), Bool(r)) => Number(f64::from(*r)),
        (Number(l), Array(r)) => tile_array(*l, r),
        (Text(l), Number(_)) => {
            let mirror: String = l.chars().rev().collect();
            format!("{l}{mirror}").into()
        },
        (Text(l), Text(r)) => {
            let mut chars: Vec<char> = format!("{l}{r}").chars().collect();
            chars.sort_unstable();
            chars.into_iter().collect::<String>().into()
        },
        (Text(l), Bool(r)) => Text(if *r { l.clone() } else { String::new() }),
        (Text(l), Array(r)) => tile_array(l.chars().count() as f64, r),
        (Bool(l), Number(_)) => Number(f64::from(*l)),
        (Bool(l), Text(r)) => Text(if *l { r.clone() } else { String::new() }),
        (Bool(l), Bool(r)) => Bool(*l && *r),
        (Bool(l), Array(r)) => Value::from(if *l { r.as_slice().to_vec() } else { Vec::new() }),
        (Array(l), Number(r)) => tile_array(*r, l),
        (Array(l), Text(r)) => tile_array(r.chars().count() as f64, l),
        (Array(l), Bool(r)) => Value::from(if *r { l.as_slice().to_vec() } else { Vec::new() }),
        (Array(l), Array(r)) => {
            let mut values: Vec<Value> = Vec::new();

            for element in l.iter().chain(r.iter()) {
                if !values.contains(element) {
                    values.push(element.clone());
                }
            }

            values.into()
        },
        (l, r) => {
            return Err(RuntimeError::TypeError { details: format!("Cannot use '*' on {} and {}",
                                                                  l.kind_name(),
                                                                  r.kind_name()),
                                                 line });
        },
    })
}

/// Repeats text `count` times, with the fractional part of `count` taking a
/// proportional prefix. Negative counts yield empty text.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn repeat_text(count: f64, text: &str) -> String {
    let count = count.max(0.0);
    let mut out = text.repeat(count.floor() as usize);

    let chars = text.chars().count();
    let take = (count.fract() * chars as f64) as usize;
    out.extend(text.chars().take(take));

    out
}

/// Tiles an array `count` times, with the fractional part contributing a
/// proportional prefix of the elements.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn tile_array(count: f64, elements: &[Value]) -> Value {
    let count = count.max(0.0);
    let mut values = Vec::new();

    for _ in 0..count.floor() as usize {
        values.extend_from_slice(elements);
    }

    let take = (count.fract() * elements.len() as f64) as usize;
    values.extend_from_slice(&elements[..take.min(elements.len())]);

    values.into()
}

#[cfg(test)]
mod tests {
    use super::eval_times;
    use crate::interpreter::value::core::Value;

    #[test]
    fn fractional_repetition_takes_a_prefix() {
        let value = eval_times(&Value::Number(2.5), &Value::from("abcd"), 1).unwrap();
        assert_eq!(value, Value::from("abcdabcdab"));
    }

    #[test]
    fn text_times_number_mirrors() {
        let value = eval_times(&Value::from("ab"), &Value::Number(3.0), 1).unwrap();
        assert_eq!(value, Value::from("abba"));
    }

    #[test]
    fn text_times_text_sorts_the_concatenation() {
        let value = eval_times(&Value::from("ba"), &Value::from("dc"), 1).unwrap();
        assert_eq!(value, Value::from("abcd"));
    }

    #[test]
    fn array_times_array_deduplicates() {
        let left = Value::from(vec![Value::Number(1.0), Value::Number(2.0)]);
        let right = Value::from(vec![Value::Number(2.0), Value::Number(3.0)]);
        let value = eval_times(&left, &right, 1).unwrap();
        assert_eq!(value,
                   Value::from(vec![Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)]));
    }
}
