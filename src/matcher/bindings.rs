use crate::{
    shared::symbols::{Sym, SymMap},
    values::Value,
};

// No snapshot/rollback on purpose: bindings written by a sub-pattern stay
// in place even when the enclosing pattern, a later guard or the whole arm
// fails afterwards. That leak is the documented contract, not a bug.
#[derive(Debug, Default)]
pub struct Bindings {
    table: SymMap<Value>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: Sym, value: Value) {
        self.table.insert(name, value);
    }

    pub fn get(&self, name: Sym) -> Option<&Value> {
        self.table.get(&name)
    }

    pub fn contains(&self, name: Sym) -> bool {
        self.table.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Sym, &Value)> {
        self.table.iter().map(|(name, value)| (*name, value))
    }
}
