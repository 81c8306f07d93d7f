use crate::runtime::value::Value;
use crate::runtime::value::object::ObjectRef;

#[derive(Debug, Clone)]
pub struct FunctionArgs {
    this_value: Option<ObjectRef>,
    values: Vec<Value>,
}

impl FunctionArgs {
    pub fn new(this_value: Option<ObjectRef>, values: Vec<Value>) -> Self {
        Self { this_value, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// The object the function was resolved on, if it was called as a property.
    pub fn this(&self) -> Option<&ObjectRef> {
        self.this_value.as_ref()
    }
}
