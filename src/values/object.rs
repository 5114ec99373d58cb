use std::rc::Rc;

use miette::Result;

use crate::shared::symbols::Sym;

use super::{ArrayValue, HashValue};

// Which keys a hash pattern is about to look at. Keys lets a subject skip
// materializing an expensive full view, All is requested whenever the
// pattern must see every key (closed hashes and named hash rests).
#[derive(Debug, Clone, Copy)]
pub enum KeyRequest<'a> {
    All,
    Keys(&'a [Sym]),
}

impl KeyRequest<'_> {
    pub fn wants(&self, key: Sym) -> bool {
        match self {
            KeyRequest::All => true,
            KeyRequest::Keys(keys) => keys.contains(&key),
        }
    }
}

// Deconstruction capability a subject type may implement. None means the
// capability is absent and the matcher treats it as an ordinary match
// failure. Some(Err(..)) comes from the subject's own deconstruction code
// and aborts the whole match statement.
pub trait Deconstruct: std::fmt::Debug {
    // hashed class name, used for is-a tests against Type::Custom
    fn class_name(&self) -> Sym;

    fn deconstruct(&self) -> Option<Result<ArrayValue>> {
        None
    }

    fn deconstruct_keys(&self, _request: KeyRequest<'_>) -> Option<Result<HashValue>> {
        None
    }
}

// Opaque subject value. Equality is identity, matching what pinning an
// object reference means.
#[derive(Debug, Clone)]
pub struct ObjectValue(pub Rc<dyn Deconstruct>);

impl PartialEq for ObjectValue {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
