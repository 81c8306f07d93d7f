//! Equivalents of JavaScript's `in` and `delete` operators, plus function values.

use crate::embedding::callback::NativeFunction;
use crate::embedding::function_args::FunctionArgs;
use crate::errors::RuntimeError;
use crate::runtime::value::Value;
use crate::runtime::value::object::ObjectRef;
use crate::runtime::value::object::prototype;

/// True when `key` is own on `obj` or own on its immediate prototype.
///
/// Only one hop is checked; deeper ancestors are reached by `get`, not by this test.
pub fn contains(obj: &ObjectRef, key: &str) -> bool {
    !prototype::resolve(obj, key, Some(1)).is_absent()
}

/// Removes an own property and returns its value.
///
/// Deleting an inherited key leaves every table as it was: reads on `obj` keep
/// resolving through the chain, so the inherited value stays visible.
pub fn delete(obj: &ObjectRef, key: &str) -> Option<Value> {
    obj.delete(key)
}

/// Wraps a closure as a callable property value. The receiver is passed as `this`
/// when the value is invoked through [`ObjectRef::call`].
pub fn function<F>(body: F) -> Value
where
    F: Fn(FunctionArgs) -> Result<Value, RuntimeError> + 'static,
{
    Value::Function(NativeFunction::new(body))
}
