use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{array, log, math, text},
            scope::Scope,
        },
        value::core::{Closure, Value},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluation context, a slice of evaluated argument
/// values and the line number.
type BuiltinFn = fn(&mut Context, &[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
#[derive(Clone, Copy)]
enum Arity {
    /// The builtin must receive exactly this many arguments.
    Exact(usize),
    /// The builtin accepts this many arguments or more.
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "log"       => { arity: Arity::AtLeast(0), func: log::log },
    "random"    => { arity: Arity::Exact(2), func: math::random },
    "abs"       => { arity: Arity::Exact(1), func: |ctx, args, line| math::unary_number("abs", ctx, args, line) },
    "floor"     => { arity: Arity::Exact(1), func: |ctx, args, line| math::unary_number("floor", ctx, args, line) },
    "ceil"      => { arity: Arity::Exact(1), func: |ctx, args, line| math::unary_number("ceil", ctx, args, line) },
    "round"     => { arity: Arity::Exact(1), func: |ctx, args, line| math::unary_number("round", ctx, args, line) },
    "sqrt"      => { arity: Arity::Exact(1), func: math::sqrt },
    "min"       => { arity: Arity::Exact(2), func: |ctx, args, line| math::min_max("min", ctx, args, line) },
    "max"       => { arity: Arity::Exact(2), func: |ctx, args, line| math::min_max("max", ctx, args, line) },
    "lowercase" => { arity: Arity::Exact(1), func: |ctx, args, line| text::recase("lowercase", ctx, args, line) },
    "uppercase" => { arity: Arity::Exact(1), func: |ctx, args, line| text::recase("uppercase", ctx, args, line) },
    "getchar"   => { arity: Arity::Exact(2), func: text::getchar },
    "substring" => { arity: Arity::Exact(3), func: text::substring },
    "length"    => { arity: Arity::Exact(1), func: array::length },
    "get"       => { arity: Arity::Exact(2), func: array::get },
    "set"       => { arity: Arity::Exact(3), func: array::set },
    "add"       => { arity: Arity::Exact(3), func: array::add },
    "remove"    => { arity: Arity::Exact(2), func: array::remove },
    "contains"  => { arity: Arity::Exact(2), func: array::contains },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    const fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::AtLeast(m) => n >= *m,
        }
    }
}

impl Context {
    /// Evaluates a function call.
    ///
    /// Arguments are evaluated in the caller's scope first. The name is then
    /// matched against the builtin table; builtins cannot be shadowed by
    /// user definitions. Anything else resolves through the scope chain to a
    /// function value.
    ///
    /// # Errors
    /// Fails when the name resolves to nothing callable, the argument count
    /// is wrong, or the body itself fails.
    pub(crate) fn eval_call(&mut self,
                            name: &str,
                            arguments: &[Expr],
                            line: usize,
                            scope: &Rc<Scope>)
                            -> EvalResult<Value> {
        let args = arguments.iter()
                            .map(|argument| self.eval(argument, scope))
                            .collect::<EvalResult<Vec<_>>>()?;

        if let Some(builtin) = BUILTIN_TABLE.iter().find(|builtin| builtin.name == name) {
            if !builtin.arity.check(args.len()) {
                return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(), line });
            }

            return (builtin.func)(self, &args, line);
        }

        let value = scope.lookup(name, line)
                         .map_err(|_| RuntimeError::UnknownFunction { name: name.to_string(), line })?;

        let Value::Function(closure) = value else {
            return Err(RuntimeError::TypeError { details: format!("'{name}' is not a function"),
                                                 line });
        };

        self.call_closure(&closure, args, line)
    }

    /// Runs a user-defined function.
    ///
    /// The call scope is a child of the function's defining scope, never of
    /// the caller's. Optional parameters with no matching argument are bound
    /// to `nothing`.
    fn call_closure(&mut self, closure: &Closure, args: Vec<Value>, line: usize) -> EvalResult<Value> {
        let def = &closure.def;
        let required = def.params.len();
        let accepted = required + def.optional_params.len();

        if args.len() < required || args.len() > accepted {
            return Err(RuntimeError::ArgumentCountMismatch { name: def.name.clone(), line });
        }

        self.enter_call(line)?;

        let call_scope = closure.scope.child();
        let mut args = args.into_iter();

        for param in def.params.iter().chain(def.optional_params.iter()) {
            call_scope.insert(param, args.next().unwrap_or(Value::Nothing));
        }

        let result = self.eval_statements(&def.body.statements, &call_scope);
        self.leave_call();
        result
    }
}
