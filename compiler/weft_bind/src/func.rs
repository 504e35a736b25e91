//! Callables produced by binding synthesis.

use std::fmt;
use std::sync::Arc;

use weft_ir::errors::read_only_binding;
use weft_ir::{EvalResult, ExprFrame, Locals, SharedExpr, SharedNamespace, Value};

/// A compiled unit closed over a captured namespace.
///
/// Cloning is cheap: the name, unit and namespace are all shared.
#[derive(Clone)]
pub struct ExprFunction {
    name: Arc<str>,
    code: SharedExpr,
    globals: SharedNamespace,
}

impl ExprFunction {
    pub fn new(name: Arc<str>, code: SharedExpr, globals: SharedNamespace) -> Self {
        ExprFunction {
            name,
            code,
            globals,
        }
    }

    /// The binding name this function was created for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The wrapped unit.
    pub fn code(&self) -> &SharedExpr {
        &self.code
    }

    pub fn globals(&self) -> &SharedNamespace {
        &self.globals
    }

    /// Evaluate the unit with `locals`, plus `argument` for update functions.
    pub fn call(&self, locals: &Locals, argument: Option<&Value>) -> EvalResult {
        let mut frame = ExprFrame::new(&self.name, &self.globals, locals);
        if let Some(value) = argument {
            frame = frame.with_argument(value);
        }
        self.code.evaluate(&frame)
    }
}

impl fmt::Debug for ExprFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExprFunction")
            .field("name", &self.name)
            .field("module", &self.globals.module_name())
            .finish_non_exhaustive()
    }
}

/// The callable attached to a synthesized binding.
///
/// Read bindings carry only `primary`. Delegate bindings also carry the
/// `update` function that receives values written back to the attribute.
#[derive(Clone, Debug)]
pub struct BindingFunc {
    primary: ExprFunction,
    update: Option<ExprFunction>,
}

impl BindingFunc {
    pub fn read(primary: ExprFunction) -> Self {
        BindingFunc {
            primary,
            update: None,
        }
    }

    pub fn delegate(subscribe: ExprFunction, update: ExprFunction) -> Self {
        BindingFunc {
            primary: subscribe,
            update: Some(update),
        }
    }

    pub fn name(&self) -> &str {
        self.primary.name()
    }

    /// The read (or subscription) function.
    pub fn primary(&self) -> &ExprFunction {
        &self.primary
    }

    /// The update function of a delegate binding.
    pub fn update(&self) -> Option<&ExprFunction> {
        self.update.as_ref()
    }

    pub fn is_delegate(&self) -> bool {
        self.update.is_some()
    }

    /// Evaluate the binding's value.
    pub fn call(&self, locals: &Locals) -> EvalResult {
        self.primary.call(locals, None)
    }

    /// Push `value` through the update function.
    ///
    /// Fails for read bindings, which have nothing to write back to.
    pub fn write_back(&self, locals: &Locals, value: &Value) -> EvalResult {
        match &self.update {
            Some(update) => update.call(locals, Some(value)),
            None => Err(read_only_binding(self.name())),
        }
    }
}

#[cfg(test)]
mod tests;
