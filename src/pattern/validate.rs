use miette::Result;

use crate::shared::symbols::{Sym, Symbols};

use super::{
    errors::IllegalBindingInAlternation, ArrayPattern, HashPattern, Pattern, RestMode, RestSpec,
};

// Construction-time pass. The only structural rule patterns carry is that no
// alternative of an alternation may introduce a binding, enforcing it here
// keeps the matcher free of the check entirely.
pub fn validate(pattern: &Pattern, symbols: &Symbols) -> Result<()> {
    match pattern {
        Pattern::Value(_) | Pattern::Pin(_) => {}
        Pattern::Constrained(_, inner) | Pattern::Bind(_, inner) => {
            if let Some(inner) = inner {
                validate(inner, symbols)?;
            }
        }
        Pattern::Array(ArrayPattern {
            leading, trailing, ..
        }) => {
            for subpattern in leading.iter().chain(trailing.iter()) {
                validate(subpattern, symbols)?;
            }
        }
        Pattern::Hash(HashPattern { entries, .. }) => {
            for entry in entries.iter() {
                if let Some(subpattern) = &entry.pattern {
                    validate(subpattern, symbols)?;
                }
            }
        }
        Pattern::Alternation(alternatives) => {
            for alternative in alternatives.iter() {
                if let Some(binder) = first_binder(alternative) {
                    return Err(IllegalBindingInAlternation {
                        binder: symbols.name_or_hash(binder),
                    }
                    .into());
                }
            }
            // The binder scan covered every node below, including nested
            // alternations, so no further recursion is needed here.
        }
    }

    Ok(())
}

// First name a pattern would bind, in declaration order. Named rests and
// hash-entry shorthands count, they write to the environment too.
fn first_binder(pattern: &Pattern) -> Option<Sym> {
    match pattern {
        Pattern::Bind(name, _) => Some(*name),
        Pattern::Value(_) | Pattern::Pin(_) => None,
        Pattern::Constrained(_, inner) => inner.as_deref().and_then(first_binder),
        Pattern::Array(ArrayPattern {
            leading,
            rest,
            trailing,
        }) => {
            if let Some(RestSpec::Named(name)) = rest {
                return Some(*name);
            }
            leading.iter().chain(trailing.iter()).find_map(first_binder)
        }
        Pattern::Hash(HashPattern { entries, rest }) => {
            if let RestMode::Named(name) = rest {
                return Some(*name);
            }
            entries.iter().find_map(|entry| match &entry.pattern {
                None => Some(entry.key),
                Some(subpattern) => first_binder(subpattern),
            })
        }
        Pattern::Alternation(alternatives) => alternatives.iter().find_map(first_binder),
    }
}
