//! Structural equality that terminates on self-referencing values.
//!
//! A pair of objects already under comparison is assumed equal when it is reached
//! again, so cycles of any length end instead of recursing.

use std::collections::HashSet;

use super::Value;
use super::object::PropertyTable;

pub(crate) type Visited = HashSet<(usize, usize)>;

pub(crate) fn values_equal(left: &Value, right: &Value, visited: &mut Visited) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Boolean(a), Value::Boolean(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| values_equal(x, y, visited))
        }
        (Value::Object(a), Value::Object(b)) => {
            if a.ptr_eq(b) || !visited.insert((a.addr(), b.addr())) {
                return true;
            }
            let (a, b) = (a.borrow(), b.borrow());
            tables_equal(&a.properties, &b.properties, visited)
        }
        (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
        _ => false,
    }
}

/// Same keys with equal values, in any order.
pub(crate) fn tables_equal(
    left: &PropertyTable,
    right: &PropertyTable,
    visited: &mut Visited,
) -> bool {
    left.len() == right.len()
        && left.iter().all(|(key, value)| {
            right
                .get(key)
                .is_some_and(|other| values_equal(value, other, visited))
        })
}
