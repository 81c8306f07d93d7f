use super::ObjectRef;
use crate::runtime::chain::ChainWalker;
use crate::runtime::value::Value;

/// Outcome of looking a key up along a prototype chain.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The key is an own property of the receiver.
    Own(Value),
    /// The key was found on an ancestor; `owner` is the closest one holding it.
    Inherited { owner: ObjectRef, value: Value },
    Absent,
}

impl Resolution {
    pub fn value(self) -> Option<Value> {
        match self {
            Resolution::Own(value) | Resolution::Inherited { value, .. } => Some(value),
            Resolution::Absent => None,
        }
    }

    pub fn is_own(&self) -> bool {
        matches!(self, Resolution::Own(_))
    }

    pub fn is_inherited(&self) -> bool {
        matches!(self, Resolution::Inherited { .. })
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Resolution::Absent)
    }
}

pub fn get_property(obj: &ObjectRef, key: &str) -> Option<Value> {
    resolve(obj, key, None).value()
}

/// Looks `key` up on `obj` and at most `depth` of its ancestors (`None` = whole chain).
pub fn resolve(obj: &ObjectRef, key: &str, depth: Option<usize>) -> Resolution {
    for candidate in ChainWalker::with_depth(obj, depth) {
        let Some(value) = candidate.borrow().get_own(key) else {
            continue;
        };
        if candidate.ptr_eq(obj) {
            return Resolution::Own(value);
        }
        return Resolution::Inherited {
            owner: candidate,
            value,
        };
    }
    Resolution::Absent
}
