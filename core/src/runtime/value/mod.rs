mod coercion;
mod display;
mod equality;
pub mod object;

use crate::embedding::callback::NativeFunction;
use object::ObjectRef;

/// A dynamic value stored in a property table.
///
/// A missing property is never a `Value`; read paths return `Option<Value>` and use
/// `None` for "absent". `Null` is an ordinary value (JSON `null`).
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(ObjectRef),
    Function(NativeFunction),
}

/// Objects compare by own tables, functions by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        equality::values_equal(self, other, &mut equality::Visited::new())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<ObjectRef> for Value {
    fn from(value: ObjectRef) -> Self {
        Value::Object(value)
    }
}

impl From<&ObjectRef> for Value {
    fn from(value: &ObjectRef) -> Self {
        Value::Object(value.clone())
    }
}

impl From<NativeFunction> for Value {
    fn from(value: NativeFunction) -> Self {
        Value::Function(value)
    }
}
