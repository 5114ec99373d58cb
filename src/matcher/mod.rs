pub mod bindings;
pub mod case;
pub mod deconstruct;
pub mod errors;

use miette::{bail, Result};

use crate::{
    host::Host,
    pattern::{ArrayPattern, HashEntry, HashPattern, Pattern, RestMode, RestSpec},
    shared::symbols::{Sym, SymMap},
    values::{ArrayValue, HashValue, KeyRequest, Value},
};

use self::{
    bindings::Bindings,
    deconstruct::{as_mapping, as_sequence, DeconstructError},
};

// Recursive matcher for a single top-level attempt. Shares one Bindings
// table across every recursive call (no private copies, no rollback) and
// captures pinned values exactly once before descent starts.
pub struct Matcher<'h, H: Host> {
    host: &'h mut H,
    // pinned values captured before descent, keyed by ExprRef
    pins: SymMap<Value>,
}

impl<'h, H: Host> Matcher<'h, H> {
    pub fn new(host: &'h mut H) -> Self {
        Self {
            host,
            pins: SymMap::default(),
        }
    }

    // On Ok(false) the environment keeps whatever partial bindings the
    // failed descent already wrote.
    pub fn attempt(
        &mut self,
        pattern: &Pattern,
        subject: &Value,
        env: &mut Bindings,
    ) -> Result<bool> {
        self.pins.clear();
        self.capture_pins(pattern, env)?;
        self.attempt_match(pattern, subject, env)
    }

    // Evaluates every pinned expression once, against the environment as it
    // stands before the attempt. Recursive visits then only look values up.
    fn capture_pins(&mut self, pattern: &Pattern, env: &Bindings) -> Result<()> {
        match pattern {
            Pattern::Pin(expr) => {
                let key = u64::from(expr.0);
                if !self.pins.contains_key(&key) {
                    let value = self.host.eval_expr(*expr, env)?;
                    self.pins.insert(key, value);
                }
            }
            Pattern::Value(_) => {}
            Pattern::Constrained(_, inner) | Pattern::Bind(_, inner) => {
                if let Some(inner) = inner {
                    self.capture_pins(inner, env)?;
                }
            }
            Pattern::Array(ArrayPattern {
                leading, trailing, ..
            }) => {
                for subpattern in leading.iter().chain(trailing.iter()) {
                    self.capture_pins(subpattern, env)?;
                }
            }
            Pattern::Hash(HashPattern { entries, .. }) => {
                for entry in entries.iter() {
                    if let Some(subpattern) = &entry.pattern {
                        self.capture_pins(subpattern, env)?;
                    }
                }
            }
            Pattern::Alternation(alternatives) => {
                for alternative in alternatives.iter() {
                    self.capture_pins(alternative, env)?;
                }
            }
        }

        Ok(())
    }

    fn attempt_match(
        &mut self,
        pattern: &Pattern,
        subject: &Value,
        env: &mut Bindings,
    ) -> Result<bool> {
        Ok(match pattern {
            Pattern::Value(operand) => self.host.matches(operand, subject)?,

            Pattern::Constrained(value_type, inner) => {
                if !self.host.matches(&Value::Class(*value_type), subject)? {
                    return Ok(false);
                }
                // A failed inner match fails the whole pattern even though
                // the is-a test passed.
                match inner {
                    Some(inner) => self.attempt_match(inner, subject, env)?,
                    None => true,
                }
            }

            Pattern::Array(array_pattern) => self.match_array(array_pattern, subject, env)?,
            Pattern::Hash(hash_pattern) => self.match_hash(hash_pattern, subject, env)?,

            Pattern::Bind(name, inner) => {
                if let Some(inner) = inner {
                    // Constrained binds never introduce their name on
                    // failure; the unconstrained leaf has no failure path
                    // and binds unconditionally.
                    if !self.attempt_match(inner, subject, env)? {
                        return Ok(false);
                    }
                }
                env.set(*name, subject.clone());
                true
            }

            Pattern::Pin(expr) => {
                let Some(pinned) = self.pins.get(&u64::from(expr.0)) else {
                    bail!("pinned expression {expr:?} was not captured before the attempt");
                };
                let pinned = pinned.clone();
                self.host.matches(&pinned, subject)?
            }

            Pattern::Alternation(alternatives) => {
                // Same env for every alternative; construction-time
                // validation guarantees none of them binds.
                for alternative in alternatives.iter() {
                    if self.attempt_match(alternative, subject, env)? {
                        return Ok(true);
                    }
                }
                false
            }
        })
    }

    fn match_array(
        &mut self,
        pattern: &ArrayPattern,
        subject: &Value,
        env: &mut Bindings,
    ) -> Result<bool> {
        let elements = match as_sequence(subject) {
            Ok(elements) => elements,
            // Missing capability fails this arm only; the arm loop moves on.
            Err(DeconstructError::NotDeconstructable(_)) => return Ok(false),
            Err(DeconstructError::Subject(report)) => return Err(report),
        };
        let ArrayValue(elements) = &*elements;

        let ArrayPattern {
            leading,
            rest,
            trailing,
        } = pattern;

        let needed = leading.len() + trailing.len();
        let fits = match rest {
            // No rest marker: exact length
            None => elements.len() == needed,
            Some(_) => elements.len() >= needed,
        };
        if !fits {
            return Ok(false);
        }

        // Left to right, short-circuiting; bindings made before the failing
        // element stay in env.
        for (subpattern, element) in leading.iter().zip(elements.iter()) {
            if !self.attempt_match(subpattern, element, env)? {
                return Ok(false);
            }
        }

        let tail_start = elements.len() - trailing.len();
        for (subpattern, element) in trailing.iter().zip(elements[tail_start..].iter()) {
            if !self.attempt_match(subpattern, element, env)? {
                return Ok(false);
            }
        }

        // Without a rest spec the middle slice is empty by the length check
        if let Some(RestSpec::Named(name)) = rest {
            let middle = elements[leading.len()..tail_start].to_vec();
            env.set(*name, Value::Array(ArrayValue(middle)));
        }

        Ok(true)
    }

    fn match_hash(
        &mut self,
        pattern: &HashPattern,
        subject: &Value,
        env: &mut Bindings,
    ) -> Result<bool> {
        let HashPattern { entries, rest } = pattern;

        let explicit: Vec<Sym> = entries.iter().map(|entry| entry.key).collect();
        // Closed and named rests need the full view; otherwise the subject
        // only has to materialize the keys the pattern names.
        let request = match rest {
            RestMode::Closed | RestMode::Named(_) => KeyRequest::All,
            RestMode::Open => KeyRequest::Keys(&explicit),
        };

        let mapping = match as_mapping(subject, request) {
            Ok(mapping) => mapping,
            Err(DeconstructError::NotDeconstructable(_)) => return Ok(false),
            Err(DeconstructError::Subject(report)) => return Err(report),
        };
        let mapping = &*mapping;

        for HashEntry { key, pattern } in entries.iter() {
            // Absent key fails immediately; earlier entries' bindings stay.
            let Some(value) = mapping.get(*key) else {
                return Ok(false);
            };

            match pattern {
                Some(subpattern) => {
                    if !self.attempt_match(subpattern, value, env)? {
                        return Ok(false);
                    }
                }
                // Shorthand entry binds the key's own name unconditionally
                None => env.set(*key, value.clone()),
            }
        }

        match rest {
            RestMode::Open => {}
            RestMode::Closed => {
                if mapping.keys().any(|key| !explicit.contains(&key)) {
                    return Ok(false);
                }
            }
            RestMode::Named(name) => {
                let extras = mapping
                    .0
                    .iter()
                    .filter(|(key, _)| !explicit.contains(key))
                    .cloned()
                    .collect();
                env.set(*name, Value::Hash(HashValue(extras)));
            }
        }

        Ok(true)
    }
}
