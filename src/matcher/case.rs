use miette::Result;

use crate::{
    host::{BodyRef, ExprRef, Host},
    pattern::{validate, Pattern},
    shared::symbols::Symbols,
    values::Value,
};

use super::{bindings::Bindings, errors::NoMatchingPatternError, Matcher};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardKind {
    If,
    Unless,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guard {
    pub kind: GuardKind,
    pub expr: ExprRef,
}

// one `pattern [guard] => body` branch of a case statement
#[derive(Debug, Clone, PartialEq)]
pub struct Arm {
    pub pattern: Pattern,
    pub guard: Option<Guard>,
    pub body: BodyRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseStatement {
    pub arms: Box<[Arm]>,
    pub else_body: Option<BodyRef>,
}

impl CaseStatement {
    // runs construction-time validation over every arm's pattern
    pub fn new(arms: Vec<Arm>, else_body: Option<BodyRef>, symbols: &Symbols) -> Result<Self> {
        for arm in &arms {
            validate(&arm.pattern, symbols)?;
        }

        Ok(Self {
            arms: arms.into(),
            else_body,
        })
    }
}

// Standalone pattern test (`in`). Never raises on a plain mismatch.
// Bindings go straight into `env`, the caller's scope, and a failed attempt
// leaves whatever partial bindings its descent already wrote.
pub fn try_match<H: Host>(
    host: &mut H,
    subject: &Value,
    pattern: &Pattern,
    env: &mut Bindings,
) -> Result<bool> {
    Matcher::new(host).attempt(pattern, subject, env)
}

// Multi-arm match statement driver. Arms are tried in order, the first one
// whose pattern and guard both succeed has its body evaluated and nothing
// further is attempted. Failed arms do not undo the bindings they wrote.
// When every arm fails the else body runs, otherwise it's
// no-matching-pattern with an inspect rendering of the subject.
pub fn run_case<H: Host>(
    host: &mut H,
    subject: &Value,
    case: &CaseStatement,
    env: &mut Bindings,
    symbols: &Symbols,
) -> Result<Value> {
    for arm in case.arms.iter() {
        if !Matcher::new(host).attempt(&arm.pattern, subject, env)? {
            continue;
        }

        if let Some(guard) = &arm.guard {
            // Pattern binds first, guard sees the bound environment.
            // Guard errors (an unbound name, say) propagate and abort the
            // whole statement; they are not a silent "false".
            let condition = host.eval_expr(guard.expr, env)?;
            let passed = match guard.kind {
                GuardKind::If => condition.is_truthy(),
                GuardKind::Unless => !condition.is_truthy(),
            };
            if !passed {
                // Rejected arm, but its pattern's bindings stay in env
                continue;
            }
        }

        return host.eval_body(arm.body, env);
    }

    if let Some(else_body) = case.else_body {
        return host.eval_body(else_body, env);
    }

    Err(NoMatchingPatternError {
        subject: subject.render(symbols),
    }
    .into())
}
