use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionDef, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary, cast, scope::Scope},
        value::core::{Closure, Value},
    },
};

/// A type alias for results during evaluation and runtime.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The default cap on nested user-function calls.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Holds the state of the interpreter during evaluation.
///
/// The context owns the global scope, collects `log` output for the host to
/// flush, and tracks user-function call depth against the configured limit.
#[derive(Debug)]
pub struct Context {
    /// The root scope holding top-level bindings.
    pub globals: Rc<Scope>,
    /// Lines produced by the `log` builtin, in order.
    pub output:  Vec<String>,
    max_depth:   usize,
    call_depth:  usize,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a fresh context with the default call depth limit.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Creates a fresh context with an explicit call depth limit.
    #[must_use]
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { globals: Scope::root(),
               output: Vec::new(),
               max_depth,
               call_depth: 0, }
    }

    /// Evaluates an expression in the given scope.
    ///
    /// # Errors
    /// Any [`RuntimeError`] raised by the expression or its operands.
    pub fn eval(&mut self, expr: &Expr, scope: &Rc<Scope>) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(value.into()),
            Expr::Variable { name, line } => scope.lookup(name, *line),
            Expr::UnaryOp { op, expr, line } => self.eval_unary(*op, expr, *line, scope),
            Expr::BinaryOp { left, op, right, line } => {
                let left = self.eval(left, scope)?;
                let right = self.eval(right, scope)?;
                binary::eval_binary(*op, &left, &right, *line)
            },
            Expr::FunctionCall { name, arguments, line } => {
                self.eval_call(name, arguments, *line, scope)
            },
            Expr::ArrayLiteral { elements, .. } => {
                let values = elements.iter()
                                     .map(|element| self.eval(element, scope))
                                     .collect::<EvalResult<Vec<_>>>()?;
                Ok(values.into())
            },
            Expr::Cast { kind, expr, line } => {
                let value = self.eval(expr, scope)?;
                cast::eval_cast(*kind, &value, *line)
            },
        }
    }

    /// Evaluates a single statement in the given scope and yields its value.
    ///
    /// # Errors
    /// Any [`RuntimeError`] raised while evaluating the statement.
    pub fn eval_statement(&mut self, statement: &Statement, scope: &Rc<Scope>) -> EvalResult<Value> {
        match statement {
            Statement::VariableDeclaration { name, value, line } => {
                let value = self.eval(value, scope)?;
                scope.declare(name, value.clone(), *line)?;
                Ok(value)
            },
            Statement::Assignment { name, value, line } => {
                let value = self.eval(value, scope)?;
                scope.update(name, value.clone(), *line)?;
                Ok(value)
            },
            Statement::CompoundAssignment { name, op, value, line } => {
                let current = scope.lookup(name, *line)?;
                let operand = self.eval(value, scope)?;
                let value = binary::eval_binary(*op, &current, &operand, *line)?;
                scope.update(name, value.clone(), *line)?;
                Ok(value)
            },
            Statement::Function(def) => self.eval_function_definition(def, scope),
            Statement::If { arms, otherwise, .. } => self.eval_if(arms, otherwise.as_ref(), scope),
            Statement::For { init, condition, step, body, .. } => {
                self.eval_for(init, condition, step, body, scope)
            },
            Statement::Foreach { name, collection, body, line } => {
                self.eval_foreach(name, collection, body, *line, scope)
            },
            Statement::When { condition, body, .. } => self.eval_when(condition, body, scope),
            Statement::Loop { bound, body, .. } => self.eval_loop(bound, body, scope),
            Statement::Change { subject, cases, nocase, line } => {
                self.eval_change(subject, cases, nocase.as_ref(), *line, scope)
            },
            Statement::Expression { expr, .. } => self.eval(expr, scope),
        }
    }

    /// Evaluates a statement sequence and yields the value of the last one,
    /// or `nothing` for an empty sequence.
    ///
    /// # Errors
    /// Stops at the first failing statement and returns its error.
    pub fn eval_statements(&mut self, statements: &[Statement], scope: &Rc<Scope>) -> EvalResult<Value> {
        let mut value = Value::Nothing;

        for statement in statements {
            value = self.eval_statement(statement, scope)?;
        }

        Ok(value)
    }

    fn eval_function_definition(&mut self, def: &FunctionDef, scope: &Rc<Scope>) -> EvalResult<Value> {
        let closure = Closure { def:   def.clone(),
                                scope: Rc::clone(scope), };
        let value = Value::Function(Rc::new(closure));
        scope.declare(&def.name, value.clone(), def.line)?;
        Ok(value)
    }

    /// Steps one level deeper into user-function calls.
    pub(crate) const fn enter_call(&mut self, line: usize) -> EvalResult<()> {
        if self.call_depth >= self.max_depth {
            return Err(RuntimeError::RecursionLimit { max: self.max_depth, line });
        }

        self.call_depth += 1;
        Ok(())
    }

    /// Steps back out of a user-function call.
    pub(crate) const fn leave_call(&mut self) {
        self.call_depth -= 1;
    }
}
