use std::rc::Rc;

use crate::{
    ast::{Block, Expr, Statement},
    interpreter::{
        evaluator::{
            binary::comparison,
            core::{Context, EvalResult},
            scope::Scope,
        },
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a block in a fresh child of `scope`.
    pub(crate) fn eval_block(&mut self, block: &Block, scope: &Rc<Scope>) -> EvalResult<Value> {
        let inner = scope.child();
        self.eval_statements(&block.statements, &inner)
    }

    /// Walks the `if`/`butif` arms in order and runs the first one whose
    /// condition holds, falling back to the `but` block if none does.
    pub(crate) fn eval_if(&mut self,
                          arms: &[(Expr, Block)],
                          otherwise: Option<&Block>,
                          scope: &Rc<Scope>)
                          -> EvalResult<Value> {
        for (condition, block) in arms {
            if self.eval(condition, scope)?.is_truthy() {
                return self.eval_block(block, scope);
            }
        }

        match otherwise {
            Some(block) => self.eval_block(block, scope),
            None => Ok(Value::Nothing),
        }
    }

    /// Runs a counted `for` loop.
    ///
    /// The declaration, condition and step live in a loop-level scope that
    /// also binds `count`. Each pass runs the body in a fresh child scope,
    /// then bumps `count` and applies the step.
    pub(crate) fn eval_for(&mut self,
                           init: &Statement,
                           condition: &Expr,
                           step: &Statement,
                           body: &Block,
                           scope: &Rc<Scope>)
                           -> EvalResult<Value> {
        let loop_scope = scope.child();
        self.eval_statement(init, &loop_scope)?;
        loop_scope.insert("count", Value::Number(0.0));

        let mut value = Value::Nothing;

        while self.eval(condition, &loop_scope)?.is_truthy() {
            value = self.eval_block(body, &loop_scope)?;
            bump_count(&loop_scope);
            self.eval_statement(step, &loop_scope)?;
        }

        Ok(value)
    }

    /// Runs a `foreach` loop over the elements of an array variable.
    ///
    /// The collection is resolved once, up front. Each element is bound in a
    /// fresh child scope, so the element name does not leak between passes.
    pub(crate) fn eval_foreach(&mut self,
                               name: &str,
                               collection: &str,
                               body: &Block,
                               line: usize,
                               scope: &Rc<Scope>)
                               -> EvalResult<Value> {
        let elements = {
            let value = scope.lookup(collection, line)?;
            value.as_array(line)?.clone()
        };

        let loop_scope = scope.child();
        loop_scope.insert("count", Value::Number(0.0));

        let mut value = Value::Nothing;

        for element in elements {
            let element_scope = loop_scope.child();
            element_scope.insert(name, element);

            value = self.eval_statements(&body.statements, &element_scope)?;
            bump_count(&loop_scope);
        }

        Ok(value)
    }

    /// Runs a `when` loop: repeat while the condition holds.
    ///
    /// The condition is evaluated in the enclosing scope, so bindings the
    /// body introduces never influence it.
    pub(crate) fn eval_when(&mut self, condition: &Expr, body: &Block, scope: &Rc<Scope>) -> EvalResult<Value> {
        let loop_scope = scope.child();
        loop_scope.insert("count", Value::Number(0.0));

        let mut value = Value::Nothing;

        while self.eval(condition, scope)?.is_truthy() {
            value = self.eval_block(body, &loop_scope)?;
            bump_count(&loop_scope);
        }

        Ok(value)
    }

    /// Runs a `loop` statement: repeat while `count` stays below the bound.
    ///
    /// The bound is re-evaluated before every pass and floored. The body runs
    /// directly in the loop scope, so its bindings persist across passes.
    pub(crate) fn eval_loop(&mut self, bound: &Expr, body: &Block, scope: &Rc<Scope>) -> EvalResult<Value> {
        let loop_scope = scope.child();
        loop_scope.insert("count", Value::Number(0.0));

        let mut value = Value::Nothing;
        let mut count = 0.0;

        loop {
            let bound = self.eval(bound, &loop_scope)?.as_number(body.line)?.floor();

            if count >= bound {
                break;
            }

            value = self.eval_statements(&body.statements, &loop_scope)?;
            count += 1.0;
            loop_scope.insert("count", Value::Number(count));
        }

        Ok(value)
    }

    /// Runs a `change` statement.
    ///
    /// The subject is evaluated once; cases are tested in order with the `?`
    /// comparator. The first matching case's block runs in a fresh child
    /// scope. With no match, the `nocase` block runs if present.
    pub(crate) fn eval_change(&mut self,
                              subject: &Expr,
                              cases: &[(Expr, Block)],
                              nocase: Option<&Block>,
                              line: usize,
                              scope: &Rc<Scope>)
                              -> EvalResult<Value> {
        let subject = self.eval(subject, scope)?;

        for (case, block) in cases {
            let candidate = self.eval(case, scope)?;

            if comparison::values_equal(&subject, &candidate, line)? {
                return self.eval_block(block, scope);
            }
        }

        match nocase {
            Some(block) => self.eval_block(block, scope),
            None => Ok(Value::Nothing),
        }
    }
}

/// Advances the `count` binding in a loop scope by one.
fn bump_count(loop_scope: &Rc<Scope>) {
    if let Ok(Value::Number(count)) = loop_scope.lookup("count", 0) {
        loop_scope.insert("count", Value::Number(count + 1.0));
    }
}
