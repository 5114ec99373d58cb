use std::borrow::Cow;

use thiserror::Error;

use crate::values::{ArrayValue, HashValue, KeyRequest, ObjectValue, Value};

use super::errors::NotDeconstructable;

#[derive(Error, Debug)]
pub enum DeconstructError {
    // capability absent, becomes an ordinary failure of the current arm
    #[error(transparent)]
    NotDeconstructable(#[from] NotDeconstructable),
    // raised by the subject's own deconstruction code, aborts the statement
    #[error("{0}")]
    Subject(miette::Report),
}

// Sequence view of a subject. Native arrays are borrowed, anything else gets
// one fresh deconstruct call, side effects included. Nothing is cached, a
// second arm matching the same subject calls again.
pub fn as_sequence(subject: &Value) -> Result<Cow<'_, ArrayValue>, DeconstructError> {
    match subject {
        Value::Array(array) => Ok(Cow::Borrowed(array)),
        Value::Object(ObjectValue(object)) => match object.deconstruct() {
            Some(Ok(array)) => Ok(Cow::Owned(array)),
            Some(Err(report)) => Err(DeconstructError::Subject(report)),
            None => Err(NotDeconstructable { wanted: "sequence" }.into()),
        },
        _ => Err(NotDeconstructable { wanted: "sequence" }.into()),
    }
}

// Mapping view of a subject. `request` narrows what an object has to
// materialize, native hashes ignore it since their view is free.
pub fn as_mapping<'v>(
    subject: &'v Value,
    request: KeyRequest<'_>,
) -> Result<Cow<'v, HashValue>, DeconstructError> {
    match subject {
        Value::Hash(hash) => Ok(Cow::Borrowed(hash)),
        Value::Object(ObjectValue(object)) => match object.deconstruct_keys(request) {
            Some(Ok(hash)) => Ok(Cow::Owned(hash)),
            Some(Err(report)) => Err(DeconstructError::Subject(report)),
            None => Err(NotDeconstructable { wanted: "mapping" }.into()),
        },
        _ => Err(NotDeconstructable { wanted: "mapping" }.into()),
    }
}
