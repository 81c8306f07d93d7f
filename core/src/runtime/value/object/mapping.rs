use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use super::{ObjectRef, PropertyTable};
use crate::runtime::json;
use crate::runtime::value::Value;

/// Anything that can expose a key/value view for structural comparison.
///
/// `None` means "not a mapping"; comparing an object against such a value is `false`.
pub trait AsMapping {
    fn as_mapping(&self) -> Option<PropertyTable>;
}

impl AsMapping for PropertyTable {
    fn as_mapping(&self) -> Option<PropertyTable> {
        Some(self.clone())
    }
}

impl AsMapping for ObjectRef {
    fn as_mapping(&self) -> Option<PropertyTable> {
        Some(self.to_mapping())
    }
}

impl AsMapping for Value {
    fn as_mapping(&self) -> Option<PropertyTable> {
        match self {
            Value::Object(obj) => Some(obj.to_mapping()),
            _ => None,
        }
    }
}

impl AsMapping for JsonValue {
    fn as_mapping(&self) -> Option<PropertyTable> {
        match self {
            JsonValue::Object(map) => map.as_mapping(),
            _ => None,
        }
    }
}

impl AsMapping for serde_json::Map<String, JsonValue> {
    fn as_mapping(&self) -> Option<PropertyTable> {
        Some(
            self.iter()
                .map(|(key, value)| (key.clone(), json::from_json_value(value)))
                .collect(),
        )
    }
}

impl<T: AsMapping> AsMapping for Option<T> {
    fn as_mapping(&self) -> Option<PropertyTable> {
        self.as_ref().and_then(AsMapping::as_mapping)
    }
}

impl<T: AsMapping + ?Sized> AsMapping for &T {
    fn as_mapping(&self) -> Option<PropertyTable> {
        (**self).as_mapping()
    }
}

impl<K, V, S> AsMapping for HashMap<K, V, S>
where
    K: AsRef<str>,
    V: Clone + Into<Value>,
    S: BuildHasher,
{
    fn as_mapping(&self) -> Option<PropertyTable> {
        Some(collect_pairs(self.iter()))
    }
}

impl<K, V, S> AsMapping for IndexMap<K, V, S>
where
    K: AsRef<str>,
    V: Clone + Into<Value>,
{
    fn as_mapping(&self) -> Option<PropertyTable> {
        Some(collect_pairs(self.iter()))
    }
}

impl<K, V> AsMapping for BTreeMap<K, V>
where
    K: AsRef<str>,
    V: Clone + Into<Value>,
{
    fn as_mapping(&self) -> Option<PropertyTable> {
        Some(collect_pairs(self.iter()))
    }
}

impl<K, V, const N: usize> AsMapping for [(K, V); N]
where
    K: AsRef<str>,
    V: Clone + Into<Value>,
{
    fn as_mapping(&self) -> Option<PropertyTable> {
        Some(collect_pairs(self.iter().map(|(k, v)| (k, v))))
    }
}

impl<K, V> AsMapping for [(K, V)]
where
    K: AsRef<str>,
    V: Clone + Into<Value>,
{
    fn as_mapping(&self) -> Option<PropertyTable> {
        Some(collect_pairs(self.iter().map(|(k, v)| (k, v))))
    }
}

fn collect_pairs<'a, K, V, I>(pairs: I) -> PropertyTable
where
    K: AsRef<str> + 'a,
    V: Clone + Into<Value> + 'a,
    I: Iterator<Item = (&'a K, &'a V)>,
{
    pairs
        .map(|(key, value)| (key.as_ref().to_string(), value.clone().into()))
        .collect()
}
