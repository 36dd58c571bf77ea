use crate::{ast::BinaryOperator, interpreter::value::core::Value};

/// Applies a boolean connective over the truthiness of both operands.
///
/// Connectives never fail: every value has a truth value, with `nothing`
/// counting as false.
#[must_use]
pub fn eval_logic(op: BinaryOperator, left: &Value, right: &Value) -> Value {
    use BinaryOperator::{And, Implies, Nand, Nor, Or, Xnor, Xor};

    let l = left.is_truthy();
    let r = right.is_truthy();

    Value::Bool(match op {
        And => l && r,
        Or => l || r,
        Nand => !(l && r),
        Nor => !(l || r),
        Xor => l != r,
        Xnor => l == r,
        Implies => !l || r,
        _ => unreachable!("non-connective routed to logic"),
    })
}

#[cfg(test)]
mod tests {
    use super::eval_logic;
    use crate::{ast::BinaryOperator, interpreter::value::core::Value};

    #[test]
    fn connectives_work_over_truthiness() {
        let empty = Value::from("");
        let number = Value::Number(2.0);

        assert_eq!(eval_logic(BinaryOperator::And, &empty, &number), Value::Bool(false));
        assert_eq!(eval_logic(BinaryOperator::Or, &empty, &number), Value::Bool(true));
        assert_eq!(eval_logic(BinaryOperator::Xor, &empty, &number), Value::Bool(true));
    }

    #[test]
    fn implication_is_vacuously_true() {
        assert_eq!(eval_logic(BinaryOperator::Implies, &Value::Nothing, &Value::Number(0.0)),
                   Value::Bool(true));
    }
}
