use std::{
    collections::HashMap,
    hash::{BuildHasher, Hasher},
};

use rustc_hash::FxHasher;

// Names pre-hashed with FxHasher. Binding names, hash-pattern keys and
// symbol values are all Syms, so the matcher never touches strings on its
// hot path. Spellings are kept in Symbols for diagnostics.
pub type Sym = u64;

#[derive(Debug, Clone, Copy, Default)]
pub struct NoHasher {
    value: u64,
}

impl Hasher for NoHasher {
    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.value = i;
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.value
    }

    fn write(&mut self, _: &[u8]) {
        panic!("NoHasher only supports u64 as key type");
    }
}

impl BuildHasher for NoHasher {
    type Hasher = Self;
    fn build_hasher(&self) -> Self::Hasher {
        *self
    }
}

// keys are already hashed, no rehashing on lookup
pub type SymMap<V> = HashMap<Sym, V, NoHasher>;

// Remembers spellings so errors can name variables instead of printing raw hashes
#[derive(Default)]
pub struct Symbols {
    names: SymMap<String>,
}

impl std::fmt::Debug for Symbols {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.names)
    }
}

impl Symbols {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sym(&mut self, name: &str) -> Sym {
        let hash = hash_name(name);
        self.names.entry(hash).or_insert_with(|| name.into());
        hash
    }

    pub fn name(&self, sym: Sym) -> Option<&str> {
        self.names.get(&sym).map(String::as_str)
    }

    // falls back to the raw hash for syms never registered here
    pub fn name_or_hash(&self, sym: Sym) -> String {
        match self.name(sym) {
            Some(name) => name.to_string(),
            None => format!("#{sym:x}"),
        }
    }
}

pub fn hash_name(name: &str) -> Sym {
    let mut hasher = FxHasher::default();
    hasher.write(name.as_bytes());
    hasher.finish()
}

// hash a name without going through a Symbols table
#[macro_export]
macro_rules! sym {
    ($name:expr) => {
        $crate::shared::symbols::hash_name($name)
    };
}
