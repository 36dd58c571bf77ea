use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    value::core::Value,
};

/// The `log` builtin.
///
/// Renders every argument, joins them with single spaces and appends the
/// line to the context's output buffer. The host decides when to flush.
/// Accepts any number of arguments, including none, and yields `nothing`.
pub fn log(context: &mut Context, args: &[Value], _line: usize) -> EvalResult<Value> {
    let rendered = args.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
    context.output.push(rendered);
    Ok(Value::Nothing)
}

#[cfg(test)]
mod tests {
    use super::log;
    use crate::interpreter::{evaluator::core::Context, value::core::Value};

    #[test]
    fn arguments_join_with_spaces() {
        let mut context = Context::new();
        log(&mut context, &[Value::from("score:"), Value::Number(8.0)], 1).unwrap();
        assert_eq!(context.output, vec!["score: 8".to_string()]);
    }
}
