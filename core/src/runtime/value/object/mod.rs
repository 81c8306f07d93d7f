mod mapping;
mod property;
pub mod prototype;

pub use mapping::AsMapping;
pub use property::PropertyTable;
pub use prototype::Resolution;

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use indexmap::IndexSet;

use super::Value;
use crate::embedding::function_args::FunctionArgs;
use crate::errors::RuntimeError;
use crate::runtime::chain::ChainWalker;

/// One node of a prototype chain: a local property table plus an optional link to the
/// object it delegates to.
#[derive(Debug, Clone, Default)]
pub struct ProtoObject {
    pub properties: PropertyTable,
    prototype: Option<ObjectRef>,
}

impl ProtoObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_parts(properties: PropertyTable, prototype: Option<ObjectRef>) -> Self {
        Self {
            properties,
            prototype,
        }
    }

    pub fn prototype(&self) -> Option<&ObjectRef> {
        self.prototype.as_ref()
    }

    pub fn get_own(&self, key: &str) -> Option<Value> {
        self.properties.get(key).cloned()
    }

    pub fn set(&mut self, key: String, value: Value) {
        self.properties.insert(key, value);
    }
}

/// Shared handle to a [`ProtoObject`].
///
/// Cloning the handle aliases the object; a prototype may be held by any number of
/// objects and lives as long as its longest holder. `==` compares own tables (see
/// [`ObjectRef::equals`]); use [`ObjectRef::ptr_eq`] for identity.
#[derive(Clone, Default)]
pub struct ObjectRef(Rc<RefCell<ProtoObject>>);

impl ObjectRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prototype(prototype: &ObjectRef) -> Self {
        Self::from_object(ProtoObject::with_parts(
            PropertyTable::new(),
            Some(prototype.clone()),
        ))
    }

    /// Builds an object whose own table is `pairs`, delegating to `prototype`.
    pub fn from_pairs<K, V, I>(pairs: I, prototype: Option<&ObjectRef>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from_object(ProtoObject::with_parts(
            pairs.into_iter().collect(),
            prototype.cloned(),
        ))
    }

    pub fn from_object(object: ProtoObject) -> Self {
        Self(Rc::new(RefCell::new(object)))
    }

    pub fn borrow(&self) -> Ref<'_, ProtoObject> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, ProtoObject> {
        self.0.borrow_mut()
    }

    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn addr(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }

    pub fn prototype(&self) -> Option<ObjectRef> {
        self.borrow().prototype.clone()
    }

    /// Replaces the prototype link. Rejected when `prototype` already chains back to
    /// `self`; the old link is kept in that case.
    pub fn set_prototype(&self, prototype: Option<&ObjectRef>) -> Result<(), RuntimeError> {
        if let Some(candidate) = prototype
            && let Some(depth) = ChainWalker::new(candidate).position(|node| node.ptr_eq(self))
        {
            return Err(RuntimeError::CyclicPrototype { depth });
        }
        self.borrow_mut().prototype = prototype.cloned();
        Ok(())
    }

    /// Reads `key` from the own table, falling back to the prototype chain.
    pub fn get(&self, key: &str) -> Option<Value> {
        prototype::get_property(self, key)
    }

    pub fn resolve(&self, key: &str) -> Resolution {
        prototype::resolve(self, key, None)
    }

    /// Writes `key` into the own table. Prototypes are never touched.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.borrow_mut().set(key.into(), value.into());
    }

    /// Own-only membership test.
    pub fn has(&self, key: &str) -> bool {
        prototype::resolve(self, key, Some(0)).is_own()
    }

    /// Removes an own property. Inherited and missing keys are left alone.
    pub fn delete(&self, key: &str) -> Option<Value> {
        self.borrow_mut().properties.remove(key)
    }

    /// Structural equality of own tables against anything with a mapping view.
    /// Prototype chains are not compared.
    pub fn equals<M: AsMapping + ?Sized>(&self, other: &M) -> bool {
        match other.as_mapping() {
            Some(table) => self.borrow().properties == table,
            None => false,
        }
    }

    pub fn own_keys(&self) -> Vec<String> {
        self.borrow().properties.keys().cloned().collect()
    }

    /// Shallow copy of the own table.
    pub fn to_mapping(&self) -> PropertyTable {
        self.borrow().properties.clone()
    }

    pub fn clear(&self) {
        self.borrow_mut().properties.clear();
    }

    pub fn len(&self) -> usize {
        self.borrow().properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.borrow().properties.is_empty()
    }

    /// Every key readable through attribute-style access: own keys first, then each
    /// ancestor's keys not already seen. Recomputed on every call.
    pub fn capabilities(&self) -> Vec<String> {
        let mut names = IndexSet::new();
        for node in ChainWalker::new(self) {
            names.extend(node.own_keys());
        }
        names.into_iter().collect()
    }

    /// Resolves `name` through [`ObjectRef::get`] and calls it with `self` as receiver.
    pub fn call(&self, name: &str, args: Vec<Value>) -> Result<Value, RuntimeError> {
        match self.get(name) {
            Some(Value::Function(function)) => {
                function.call(FunctionArgs::new(Some(self.clone()), args))
            }
            _ => Err(RuntimeError::NotAFunction {
                name: name.to_string(),
            }),
        }
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let obj = self.borrow();
        f.debug_struct("ObjectRef")
            .field("addr", &format_args!("{:#x}", self.addr()))
            .field("keys", &obj.properties.keys().collect::<Vec<_>>())
            .field("prototype", &obj.prototype.as_ref().map(ObjectRef::addr))
            .finish()
    }
}

impl<M: AsMapping + ?Sized> PartialEq<M> for ObjectRef {
    fn eq(&self, other: &M) -> bool {
        self.equals(other)
    }
}
