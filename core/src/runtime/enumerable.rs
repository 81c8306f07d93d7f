//! Traversal and transformation over an object and its prototype chain.
//!
//! Every operation takes a `depth` bound (`None` walks the whole chain, `Some(0)` only
//! the object itself) and visits objects closest first, own keys in insertion order.
//! Keys shadowed at several levels are visited once per level.
//!
//! `map`, `select` and `reject` work on a copy of the visited chain and leave the
//! original untouched. The `_in_place` variants mutate the real chain, including any
//! prototype shared with other objects that falls within `depth`.

use std::vec;

use crate::runtime::chain::chain_of;
use crate::runtime::keywords;
use crate::runtime::reflect;
use crate::runtime::value::Value;
use crate::runtime::value::object::ObjectRef;
use crate::runtime::value::object::prototype::{self, Resolution};

/// Lazy `(owner, key, value)` walk over a chain.
///
/// The chain is captured when the iterator is created; an object's keys are captured
/// when the walk reaches it. Keys deleted before they are reached are skipped.
pub struct EntriesWithOwner {
    chain: vec::IntoIter<ObjectRef>,
    current: Option<(ObjectRef, vec::IntoIter<String>)>,
}

impl EntriesWithOwner {
    fn new(obj: &ObjectRef, depth: Option<usize>) -> Self {
        Self {
            chain: chain_of(obj, depth).into_iter(),
            current: None,
        }
    }
}

impl Iterator for EntriesWithOwner {
    type Item = (ObjectRef, String, Value);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((owner, keys)) = &mut self.current {
                for key in keys.by_ref() {
                    if let Resolution::Own(value) = prototype::resolve(owner, &key, Some(0)) {
                        return Some((owner.clone(), key, value));
                    }
                }
            }
            let owner = self.chain.next()?;
            let keys = owner.own_keys().into_iter();
            self.current = Some((owner, keys));
        }
    }
}

/// Lazy `(key, value)` walk over a chain.
pub struct Entries {
    inner: EntriesWithOwner,
}

impl Iterator for Entries {
    type Item = (String, Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, key, value)| (key, value))
    }
}

pub fn each(obj: &ObjectRef, depth: Option<usize>) -> Entries {
    Entries {
        inner: EntriesWithOwner::new(obj, depth),
    }
}

pub fn each_with_owner(obj: &ObjectRef, depth: Option<usize>) -> EntriesWithOwner {
    EntriesWithOwner::new(obj, depth)
}

pub fn map<F>(obj: &ObjectRef, depth: Option<usize>, transform: F) -> ObjectRef
where
    F: FnMut(&str, &Value) -> Value,
{
    map_in_place(&reflect::dup(obj, depth), depth, transform)
}

/// Replaces every visited value with `transform(key, value)` at the level that owns it.
pub fn map_in_place<F>(obj: &ObjectRef, depth: Option<usize>, mut transform: F) -> ObjectRef
where
    F: FnMut(&str, &Value) -> Value,
{
    for (owner, key, value) in each_with_owner(obj, depth) {
        let mapped = transform(&key, &value);
        owner.set(key, mapped);
    }
    obj.clone()
}

pub fn select<F>(obj: &ObjectRef, depth: Option<usize>, predicate: F) -> ObjectRef
where
    F: FnMut(&str, &Value) -> bool,
{
    select_in_place(&reflect::dup(obj, depth), depth, predicate)
}

/// Deletes every visited pair the predicate rejects from the object that owns it.
pub fn select_in_place<F>(obj: &ObjectRef, depth: Option<usize>, predicate: F) -> ObjectRef
where
    F: FnMut(&str, &Value) -> bool,
{
    retain(obj, depth, predicate)
}

pub fn reject<F>(obj: &ObjectRef, depth: Option<usize>, predicate: F) -> ObjectRef
where
    F: FnMut(&str, &Value) -> bool,
{
    reject_in_place(&reflect::dup(obj, depth), depth, predicate)
}

pub fn reject_in_place<F>(obj: &ObjectRef, depth: Option<usize>, mut predicate: F) -> ObjectRef
where
    F: FnMut(&str, &Value) -> bool,
{
    retain(obj, depth, |key, value| !predicate(key, value))
}

pub fn any<F>(obj: &ObjectRef, depth: Option<usize>, mut predicate: F) -> bool
where
    F: FnMut(&str, &Value) -> bool,
{
    each(obj, depth).any(|(key, value)| predicate(&key, &value))
}

pub fn all<F>(obj: &ObjectRef, depth: Option<usize>, mut predicate: F) -> bool
where
    F: FnMut(&str, &Value) -> bool,
{
    each(obj, depth).all(|(key, value)| predicate(&key, &value))
}

/// The object owning the first visited pair that satisfies `predicate`.
pub fn find<F>(obj: &ObjectRef, depth: Option<usize>, mut predicate: F) -> Option<ObjectRef>
where
    F: FnMut(&str, &Value) -> bool,
{
    each_with_owner(obj, depth)
        .find(|(_, key, value)| predicate(key.as_str(), value))
        .map(|(owner, _, _)| owner)
}

fn retain<F>(obj: &ObjectRef, depth: Option<usize>, mut keep: F) -> ObjectRef
where
    F: FnMut(&str, &Value) -> bool,
{
    for (owner, key, value) in each_with_owner(obj, depth) {
        if !keep(&key, &value) {
            keywords::delete(&owner, &key);
        }
    }
    obj.clone()
}
