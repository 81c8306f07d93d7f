//! Introspection helpers over objects and their chains.

use crate::errors::RuntimeError;
use crate::runtime::chain::chain_of;
use crate::runtime::value::object::{ObjectRef, PropertyTable, ProtoObject};

pub fn prototype_of(obj: &ObjectRef) -> Option<ObjectRef> {
    obj.prototype()
}

pub fn set_prototype_of(
    obj: &ObjectRef,
    prototype: Option<&ObjectRef>,
) -> Result<(), RuntimeError> {
    obj.set_prototype(prototype)
}

/// Own keys in insertion order.
pub fn properties_of(obj: &ObjectRef) -> Vec<String> {
    obj.own_keys()
}

pub fn table_of(obj: &ObjectRef) -> PropertyTable {
    obj.to_mapping()
}

/// Own-only membership; `false` when there is no object to ask.
pub fn property(obj: Option<&ObjectRef>, key: &str) -> bool {
    obj.is_some_and(|obj| obj.has(key))
}

/// Copies the own properties of each source into `target`, in order. Later sources
/// overwrite earlier ones.
pub fn assign<'a, I>(target: &ObjectRef, sources: I) -> ObjectRef
where
    I: IntoIterator<Item = &'a ObjectRef>,
{
    for source in sources {
        for (key, value) in source.to_mapping() {
            target.set(key, value);
        }
    }
    target.clone()
}

/// Copies `obj` and the first `depth` ancestors into fresh objects linked the same
/// way. The deepest copy delegates to the original chain beyond the copied prefix.
/// Values are copied shallowly: nested objects stay shared.
pub fn dup(obj: &ObjectRef, depth: Option<usize>) -> ObjectRef {
    let chain = chain_of(obj, depth);
    let beyond = chain.last().and_then(ObjectRef::prototype);
    let prototype = chain
        .iter()
        .skip(1)
        .rev()
        .fold(beyond, |prototype, original| Some(copy_node(original, prototype)));
    copy_node(obj, prototype)
}

fn copy_node(original: &ObjectRef, prototype: Option<ObjectRef>) -> ObjectRef {
    let properties = original.to_mapping();
    ObjectRef::from_object(ProtoObject::with_parts(properties, prototype))
}
