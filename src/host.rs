use miette::Result;

use crate::{
    matcher::bindings::Bindings,
    values::{RangeValue, Value},
};

// Opaque handle to a host expression (a guard condition or a pinned
// expression), resolved by the host against its own AST
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExprRef(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyRef(pub u32);

// Seam to the interpreter the matcher is embedded in. Guards, pinned
// expressions and arm bodies are host code, the matcher only holds handles
// and calls back through here. Errors propagate unmodified and abort the
// whole match statement.
pub trait Host {
    fn eval_expr(&mut self, expr: ExprRef, env: &Bindings) -> Result<Value>;

    fn eval_body(&mut self, body: BodyRef, env: &Bindings) -> Result<Value>;

    // used for value patterns, the is-a half of constrained patterns and pins
    fn matches(&mut self, operand: &Value, subject: &Value) -> Result<bool> {
        case_eq(operand, subject)
    }
}

// Default comparator: class operands test is-a, ranges test membership,
// everything else is structural equality.
pub fn case_eq(operand: &Value, subject: &Value) -> Result<bool> {
    Ok(match operand {
        Value::Class(value_type) => subject.is_type_of(value_type),
        Value::Range(range) => range_includes(range, subject),
        operand => operand == subject,
    })
}

fn range_includes(range: &RangeValue, subject: &Value) -> bool {
    match subject {
        Value::Integer(value) => range.contains_int(*value),
        Value::Float(value) => range.contains_float(*value),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::shared::types::Type;
    use crate::values::ArrayValue;

    use super::*;

    fn eq(operand: &Value, subject: &Value) -> bool {
        case_eq(operand, subject).unwrap()
    }

    #[test]
    fn class_operand_tests_is_a() {
        assert!(eq(&Value::Class(Type::Integer), &Value::Integer(5)));
        assert!(!eq(&Value::Class(Type::String), &Value::Integer(5)));
        assert!(eq(&Value::Class(Type::Array), &Value::Array(ArrayValue(vec![]))));
    }

    #[test]
    fn range_operand_tests_membership() {
        let range = Value::Range(RangeValue(1, 10, false));
        assert!(eq(&range, &Value::Integer(9)));
        assert!(!eq(&range, &Value::Integer(10)));
        assert!(eq(&range, &Value::Float(1.5)));
        assert!(!eq(&range, &Value::String("9".into())));
    }

    #[test]
    fn literal_operand_is_structural_equality() {
        assert!(eq(&Value::Integer(5), &Value::Integer(5)));
        assert!(!eq(&Value::Integer(5), &Value::Float(5.0)));
        assert!(eq(&Value::Nil, &Value::Nil));
    }
}
