use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter, Keys};

use crate::runtime::value::Value;
use crate::runtime::value::equality;

/// Ordered string-keyed storage owned by one object.
///
/// Insertion order is preserved and is the order enumeration observes. Removing a key
/// shifts the later keys down, so the remaining order is unchanged. Equality ignores
/// order.
#[derive(Debug, Clone, Default)]
pub struct PropertyTable {
    entries: IndexMap<String, Value>,
}

impl PropertyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Inserts or overwrites `key`. Overwriting keeps the key's original position.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.entries.insert(key, value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> Keys<'_, String, Value> {
        self.entries.keys()
    }

    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl PartialEq for PropertyTable {
    fn eq(&self, other: &Self) -> bool {
        equality::tables_equal(self, other, &mut equality::Visited::new())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for PropertyTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = PropertyTable::new();
        table.extend(iter);
        table
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for PropertyTable {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.entries.insert(key.into(), value.into());
        }
    }
}

impl IntoIterator for PropertyTable {
    type Item = (String, Value);
    type IntoIter = IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a PropertyTable {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_position_and_remove_keeps_order() {
        let mut table: PropertyTable = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        table.insert("a".into(), Value::from(10));
        table.remove("b");
        let keys: Vec<&String> = table.keys().collect();
        assert_eq!(keys, vec!["a", "c"]);
        assert_eq!(table.get("a"), Some(&Value::Number(10.0)));
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let left: PropertyTable = [("x", 1), ("y", 2)].into_iter().collect();
        let right: PropertyTable = [("y", 2), ("x", 1)].into_iter().collect();
        assert_eq!(left, right);
    }
}
