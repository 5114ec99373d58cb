use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone)]
#[error("illegal-binding-in-alternation")]
#[diagnostic(
	code(pattern::illegal_binding_in_alternation),
	help("`{}` would only be bound by some alternatives; no binding is allowed anywhere under an alternation", self.binder),
)]
pub struct IllegalBindingInAlternation {
    pub binder: String,
}
