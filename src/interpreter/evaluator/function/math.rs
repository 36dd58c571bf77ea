use rand::Rng;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// The `random` builtin: a uniform number in the half-open range
/// `[args[0], args[1])`. Equal bounds yield the bound itself.
///
/// # Errors
/// The bounds must be numbers with the lower one first.
pub fn random(_context: &mut Context, args: &[Value], line: usize) -> EvalResult<Value> {
    let low = args[0].as_number(line)?;
    let high = args[1].as_number(line)?;

    if low > high {
        return Err(RuntimeError::InvalidArgument { details: format!("random bounds are reversed: {low} > {high}"),
                                                   line });
    }

    if low == high {
        return Ok(Value::Number(low));
    }

    Ok(Value::Number(rand::thread_rng().gen_range(low..high)))
}

/// Shared handler for the one-argument numeric builtins `abs`, `floor`,
/// `ceil` and `round`.
pub fn unary_number(name: &str, _context: &mut Context, args: &[Value], line: usize) -> EvalResult<Value> {
    let n = args[0].as_number(line)?;

    let result = match name {
        "abs" => n.abs(),
        "floor" => n.floor(),
        "ceil" => n.ceil(),
        "round" => n.round(),
        _ => unreachable!("unknown numeric builtin"),
    };

    Ok(Value::Number(result))
}

/// The `sqrt` builtin.
///
/// # Errors
/// Negative arguments fail instead of yielding NaN.
pub fn sqrt(_context: &mut Context, args: &[Value], line: usize) -> EvalResult<Value> {
    let n = args[0].as_number(line)?;

    if n < 0.0 {
        return Err(RuntimeError::InvalidArgument { details: format!("sqrt of a negative number: {n}"),
                                                   line });
    }

    Ok(Value::Number(n.sqrt()))
}

/// Shared handler for the `min` and `max` builtins over two numbers.
pub fn min_max(name: &str, _context: &mut Context, args: &[Value], line: usize) -> EvalResult<Value> {
    let left = args[0].as_number(line)?;
    let right = args[1].as_number(line)?;

    let result = match name {
        "min" => left.min(right),
        "max" => left.max(right),
        _ => unreachable!("unknown extremum builtin"),
    };

    Ok(Value::Number(result))
}

#[cfg(test)]
mod tests {
    use super::{random, sqrt, unary_number};
    use crate::interpreter::{evaluator::core::Context, value::core::Value};

    #[test]
    fn random_stays_inside_its_half_open_bounds() {
        let mut context = Context::new();

        for _ in 0..100 {
            let value = random(&mut context, &[Value::Number(1.0), Value::Number(2.0)], 1).unwrap();
            let Value::Number(n) = value else { panic!("random returned a non-number") };
            assert!((1.0..2.0).contains(&n));
        }
    }

    #[test]
    fn random_with_equal_bounds_yields_the_bound() {
        let mut context = Context::new();
        let value = random(&mut context, &[Value::Number(2.0), Value::Number(2.0)], 1).unwrap();
        assert_eq!(value, Value::Number(2.0));
    }

    #[test]
    fn random_rejects_reversed_bounds() {
        let mut context = Context::new();
        assert!(random(&mut context, &[Value::Number(2.0), Value::Number(1.0)], 1).is_err());
    }

    #[test]
    fn sqrt_rejects_negatives() {
        let mut context = Context::new();
        assert!(sqrt(&mut context, &[Value::Number(-4.0)], 1).is_err());
        assert_eq!(sqrt(&mut context, &[Value::Number(9.0)], 1).unwrap(), Value::Number(3.0));
    }

    #[test]
    fn rounding_builtins_dispatch_by_name() {
        let mut context = Context::new();
        let args = [Value::Number(-1.5)];
        assert_eq!(unary_number("abs", &mut context, &args, 1).unwrap(), Value::Number(1.5));
        assert_eq!(unary_number("floor", &mut context, &args, 1).unwrap(), Value::Number(-2.0));
        assert_eq!(unary_number("ceil", &mut context, &args, 1).unwrap(), Value::Number(-1.0));
    }
}
