use std::collections::HashSet;

use crate::runtime::value::object::ObjectRef;

/// Iterator over an object and its ancestors, closest first.
///
/// `depth` bounds how many ancestors are visited: `Some(0)` yields only the starting
/// object, `Some(1)` adds its prototype, and `None` walks to the root. Every object is
/// yielded at most once.
pub struct ChainWalker {
    next: Option<ObjectRef>,
    remaining: Option<usize>,
    seen: HashSet<usize>,
}

impl ChainWalker {
    pub fn new(obj: &ObjectRef) -> Self {
        Self::with_depth(obj, None)
    }

    pub fn with_depth(obj: &ObjectRef, depth: Option<usize>) -> Self {
        Self {
            next: Some(obj.clone()),
            remaining: depth,
            seen: HashSet::new(),
        }
    }
}

impl Iterator for ChainWalker {
    type Item = ObjectRef;

    fn next(&mut self) -> Option<ObjectRef> {
        let current = self.next.take()?;
        if !self.seen.insert(current.addr()) {
            return None;
        }
        self.next = match self.remaining {
            Some(0) => None,
            Some(n) => {
                self.remaining = Some(n - 1);
                current.prototype()
            }
            None => current.prototype(),
        };
        Some(current)
    }
}

/// `[obj, obj.prototype, obj.prototype.prototype, ...]`, truncated to `depth + 1`
/// objects when `depth` is given.
pub fn chain_of(obj: &ObjectRef, depth: Option<usize>) -> Vec<ObjectRef> {
    ChainWalker::with_depth(obj, depth).collect()
}
