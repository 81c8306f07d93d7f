use std::fmt;
use std::rc::Rc;

use crate::embedding::function_args::FunctionArgs;
use crate::errors::RuntimeError;
use crate::runtime::value::Value;

type Body = dyn Fn(FunctionArgs) -> Result<Value, RuntimeError>;

/// A host closure stored as a property value. Clones share the closure, and two
/// values are equal only when they share it.
#[derive(Clone)]
pub struct NativeFunction {
    body: Rc<Body>,
}

impl NativeFunction {
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(FunctionArgs) -> Result<Value, RuntimeError> + 'static,
    {
        Self { body: Rc::new(body) }
    }

    pub fn call(&self, args: FunctionArgs) -> Result<Value, RuntimeError> {
        (self.body)(args)
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NativeFunction(..)")
    }
}
