use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies a comparator to two evaluated operands.
///
/// Ordering and equality go through [`Value::rank`]: values compare by level
/// first, so any array outranks any scalar, and by magnitude within a level.
/// `??` compares kind tags only and works for every value.
pub fn eval_comparison(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    use BinaryOperator::{
        ApproxEqual, Equal, Greater, GreaterEqual, Less, LessEqual, NotApproxEqual, NotEqual,
        NotSameKind, SameKind,
    };

    let result = match op {
        Equal => values_equal(left, right, line)?,
        NotEqual => !values_equal(left, right, line)?,
        SameKind => left.kind_name() == right.kind_name(),
        NotSameKind => left.kind_name() != right.kind_name(),
        ApproxEqual => close(left, right, line)?,
        NotApproxEqual => !close(left, right, line)?,
        Less => order(left, right, line)? == Ordering::Less,
        Greater => order(left, right, line)? == Ordering::Greater,
        LessEqual => order(left, right, line)? != Ordering::Greater,
        GreaterEqual => order(left, right, line)? != Ordering::Less,
        _ => unreachable!("non-comparator routed to comparison"),
    };

    Ok(Value::Bool(result))
}

/// The `?` comparator: same level, same comparison value.
pub fn values_equal(left: &Value, right: &Value, line: usize) -> EvalResult<bool> {
    let (left_level, left_value) = left.rank(line)?;
    let (right_level, right_value) = right.rank(line)?;

    Ok(left_level == right_level && left_value == right_value)
}

/// The `~` comparator: same level, and the values differ by less than five
/// percent of their mean.
fn close(left: &Value, right: &Value, line: usize) -> EvalResult<bool> {
    let (left_level, left_value) = left.rank(line)?;
    let (right_level, right_value) = right.rank(line)?;

    let tolerance = (left_value + right_value) / 2.0 * 0.05;
    Ok(left_level == right_level && (left_value - right_value).abs() < tolerance)
}

fn order(left: &Value, right: &Value, line: usize) -> EvalResult<Ordering> {
    let (left_level, left_value) = left.rank(line)?;
    let (right_level, right_value) = right.rank(line)?;

    if left_level == right_level {
        Ok(left_value.partial_cmp(&right_value).unwrap_or(Ordering::Equal))
    } else {
        Ok(left_level.cmp(&right_level))
    }
}

#[cfg(test)]
mod tests {
    use super::eval_comparison;
    use crate::{ast::BinaryOperator, interpreter::value::core::Value};

    fn compare(op: BinaryOperator, left: &Value, right: &Value) -> bool {
        eval_comparison(op, left, right, 1).unwrap() == Value::Bool(true)
    }

    #[test]
    fn text_compares_by_length() {
        let left = Value::from("abc");
        let right = Value::Number(3.0);
        assert!(compare(BinaryOperator::Equal, &left, &right));
        assert!(compare(BinaryOperator::NotSameKind, &left, &right));
    }

    #[test]
    fn arrays_outrank_scalars() {
        let array = Value::from(vec![Value::Number(1.0)]);
        assert!(compare(BinaryOperator::Greater, &array, &Value::Number(1000.0)));
        assert!(compare(BinaryOperator::Less, &Value::from("long text"), &array));
    }

    #[test]
    fn approximate_equality_uses_a_relative_window() {
        let ten = Value::Number(10.0);
        assert!(compare(BinaryOperator::ApproxEqual, &ten, &Value::Number(10.4)));
        assert!(!compare(BinaryOperator::ApproxEqual, &ten, &Value::Number(11.0)));
    }

    #[test]
    fn nothing_has_no_rank() {
        assert!(eval_comparison(BinaryOperator::Less, &Value::Nothing, &Value::Number(0.0), 1).is_err());
        assert!(compare(BinaryOperator::SameKind, &Value::Nothing, &Value::Nothing));
    }
}
