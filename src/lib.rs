// Structural pattern matching runtime. Takes an already-parsed Pattern tree
// and a subject Value, tests whether the subject's shape satisfies the
// pattern and extracts named sub-values into a Bindings environment.
// run_case drives a whole multi-arm match statement, try_match is the
// standalone form. Pattern-syntax parsing and the evaluator for guards,
// pinned expressions and arm bodies live in the host interpreter, behind
// the Host trait.

pub mod host;
pub mod matcher;
pub mod pattern;
pub mod shared;
pub mod values;

pub use host::{case_eq, BodyRef, ExprRef, Host};
pub use matcher::{
    bindings::Bindings,
    case::{run_case, try_match, Arm, CaseStatement, Guard, GuardKind},
    deconstruct::{as_mapping, as_sequence, DeconstructError},
    errors::{NoMatchingPatternError, NotDeconstructable},
    Matcher,
};
pub use pattern::{
    errors::IllegalBindingInAlternation, validate, ArrayPattern, HashEntry, HashPattern, Pattern,
    RestMode, RestSpec,
};
pub use shared::{
    symbols::{Sym, Symbols},
    types::Type,
};
pub use values::{
    ArrayValue, Deconstruct, HashValue, KeyRequest, ObjectValue, RangeValue, Value,
};
