use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone)]
#[error("no-matching-pattern")]
#[diagnostic(
	code(matcher::no_matching_pattern),
	help("{} matched no arm and the case statement has no else clause", self.subject),
)]
pub struct NoMatchingPatternError {
    // inspect-style rendering of the subject
    pub subject: String,
}

#[derive(Error, Debug, Diagnostic, Clone)]
#[error("not-deconstructable")]
#[diagnostic(
	code(matcher::not_deconstructable),
	help("the subject exposes no {} capability", self.wanted),
)]
pub struct NotDeconstructable {
    // "sequence" or "mapping"
    pub wanted: &'static str,
}
