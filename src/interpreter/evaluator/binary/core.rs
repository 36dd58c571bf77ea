use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{caret, comparison, divide, logic, minus, percent, plus, times},
            core::EvalResult,
        },
        value::core::Value,
    },
};

/// Applies a binary operator to two evaluated operands.
///
/// Arithmetic operators are total over numbers, text, booleans and arrays;
/// an operand of `nothing` or a function value is a runtime error there.
/// Comparators and boolean connectives have their own rules.
///
/// # Errors
/// Any [`RuntimeError`] the operator raises for the operand kinds.
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    use BinaryOperator::{
        Add, And, ApproxEqual, Div, Equal, FloorDiv, Greater, GreaterEqual, Implies, Less,
        LessEqual, Mod, Mul, Nand, Nor, NotApproxEqual, NotEqual, NotSameKind, Or, Pow, SameKind,
        Sub, Xnor, Xor,
    };

    match op {
        Add | Sub | Mul | Div | FloorDiv | Pow | Mod => {
            check_arithmetic_operand(left, op, line)?;
            check_arithmetic_operand(right, op, line)?;

            match op {
                Add => plus::eval_plus(left, right, line),
                Sub => minus::eval_minus(left, right, line),
                Mul => times::eval_times(left, right, line),
                Div => divide::eval_divide(left, right, line),
                FloorDiv => divide::eval_floor_divide(left, right, line),
                Pow => caret::eval_caret(left, right, line),
                Mod => percent::eval_percent(left, right, line),
                _ => unreachable!("non-arithmetic operator in arithmetic arm"),
            }
        },

        Equal | NotEqual | SameKind | NotSameKind | ApproxEqual | NotApproxEqual | Less
        | Greater | LessEqual | GreaterEqual => comparison::eval_comparison(op, left, right, line),

        And | Or | Nand | Nor | Xor | Xnor | Implies => Ok(logic::eval_logic(op, left, right)),
    }
}

/// Rejects operands arithmetic cannot coerce.
fn check_arithmetic_operand(value: &Value, op: BinaryOperator, line: usize) -> EvalResult<()> {
    match value {
        Value::Nothing | Value::Function(_) => {
            Err(RuntimeError::TypeError { details: format!("Cannot use '{op}' on {}", value.kind_name()),
                                          line })
        },
        _ => Ok(()),
    }
}

/// Applies `f(left, element)` across the elements of an array.
pub(super) fn broadcast_right(f: fn(&Value, &Value, usize) -> EvalResult<Value>,
                              left: &Value,
                              elements: &[Value],
                              line: usize)
                              -> EvalResult<Value> {
    let values = elements.iter()
                         .map(|element| f(left, element, line))
                         .collect::<EvalResult<Vec<_>>>()?;
    Ok(values.into())
}

/// Applies `f(element, right)` across the elements of an array.
pub(super) fn broadcast_left(f: fn(&Value, &Value, usize) -> EvalResult<Value>,
                             elements: &[Value],
                             right: &Value,
                             line: usize)
                             -> EvalResult<Value> {
    let values = elements.iter()
                         .map(|element| f(element, right, line))
                         .collect::<EvalResult<Vec<_>>>()?;
    Ok(values.into())
}
