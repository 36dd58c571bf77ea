use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary,
            core::{Context, EvalResult},
            scope::Scope,
        },
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a unary operation in the given scope.
    pub(crate) fn eval_unary(&mut self,
                             op: UnaryOperator,
                             expr: &Expr,
                             line: usize,
                             scope: &Rc<Scope>)
                             -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => {
                let value = self.eval(expr, scope)?;
                eval_negate(&value, line)
            },
            UnaryOperator::Not => {
                let value = self.eval(expr, scope)?;
                eval_not(&value, line)
            },
            UnaryOperator::Increment => self.eval_step(expr, BinaryOperator::Add, line, scope),
            UnaryOperator::Decrement => self.eval_step(expr, BinaryOperator::Sub, line, scope),
        }
    }

    /// Applies `++` or `--`: rebinds the named variable to itself plus or
    /// minus one and yields the new value.
    fn eval_step(&mut self,
                 expr: &Expr,
                 op: BinaryOperator,
                 line: usize,
                 scope: &Rc<Scope>)
                 -> EvalResult<Value> {
        let Expr::Variable { name, .. } = expr else {
            return Err(RuntimeError::TypeError { details: "'++' and '--' need a variable".to_string(),
                                                 line });
        };

        let current = scope.lookup(name, line)?;
        let value = binary::eval_binary(op, &current, &Value::Number(1.0), line)?;
        scope.update(name, value.clone(), line)?;
        Ok(value)
    }
}

/// Negation per kind: numbers flip sign, text and arrays reverse, booleans
/// invert. `nothing` stays `nothing`.
fn eval_negate(value: &Value, line: usize) -> EvalResult<Value> {
    Ok(match value {
        Value::Number(n) => Value::Number(-n),
        Value::Text(t) => t.chars().rev().collect::<String>().into(),
        Value::Bool(b) => Value::Bool(!b),
        Value::Array(a) => a.iter().rev().cloned().collect::<Vec<_>>().into(),
        Value::Nothing => Value::Nothing,
        Value::Function(_) => {
            return Err(RuntimeError::TypeError { details: "Cannot negate a function".to_string(),
                                                 line });
        },
    })
}

/// Logical NOT per kind: numbers test for zero, text and arrays for
/// emptiness, booleans invert. `nothing` stays `nothing`.
fn eval_not(value: &Value, line: usize) -> EvalResult<Value> {
    Ok(match value {
        Value::Number(n) => Value::Bool(*n == 0.0),
        Value::Text(t) => Value::Bool(t.is_empty()),
        Value::Bool(b) => Value::Bool(!b),
        Value::Array(a) => Value::Bool(a.is_empty()),
        Value::Nothing => Value::Nothing,
        Value::Function(_) => {
            return Err(RuntimeError::TypeError { details: "Cannot apply 'not' to a function".to_string(),
                                                 line });
        },
    })
}
