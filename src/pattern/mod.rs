pub mod errors;
pub mod validate;

pub use validate::validate;

use miette::Result;

use crate::{
    host::ExprRef,
    shared::{
        symbols::{Sym, Symbols},
        types::Type,
    },
    values::Value,
};

// Parsed pattern tree, immutable once built. The parser producing these
// lives in the host interpreter, the matcher only reads them.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    // case-equality against a literal or a Class descriptor
    Value(Value),
    // is-a test, then optionally a deconstructing array/hash pattern
    Constrained(Type, Option<Box<Pattern>>),
    Array(ArrayPattern),
    Hash(HashPattern),
    // binds subject to the name, with an inner pattern only after it succeeded
    Bind(Sym, Option<Box<Pattern>>),
    // equality against a value captured from the enclosing scope before the attempt
    Pin(ExprRef),
    // first alternative that succeeds wins, no bindings allowed anywhere below,
    // build through Pattern::alternation to get that checked
    Alternation(Box<[Pattern]>),
}

// leading, then an optional rest, then trailing matched from the end
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayPattern {
    pub leading: Box<[Pattern]>,
    pub rest: Option<RestSpec>,
    pub trailing: Box<[Pattern]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestSpec {
    // `*`, middle slice discarded
    Unnamed,
    // `*name`, middle slice bound as a fresh array
    Named(Sym),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HashPattern {
    pub entries: Box<[HashEntry]>,
    pub rest: RestMode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HashEntry {
    pub key: Sym,
    // None is the shorthand form: the key's own name gets bound
    pub pattern: Option<Pattern>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestMode {
    // extra keys permitted and ignored
    Open,
    // `**nil`, subject's key set must equal the explicit key set
    Closed,
    // `**name`, extra pairs collected into a fresh hash bound to the name
    Named(Sym),
}

impl Pattern {
    // Rejects alternatives that would introduce bindings. The matcher relies
    // on this having run and never re-checks.
    pub fn alternation(alternatives: Vec<Pattern>, symbols: &Symbols) -> Result<Pattern> {
        let pattern = Pattern::Alternation(alternatives.into());
        validate(&pattern, symbols)?;
        Ok(pattern)
    }
}
