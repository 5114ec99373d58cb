use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::symbols::{hash_name, Sym, Symbols};

// Type descriptor, the operand of is-a tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Nil,
    Boolean,
    Integer,
    Float,
    String,
    Symbol,
    Range,
    Array,
    Hash,

    // User-defined class, identified by its hashed name
    Custom(Sym),
}

static BUILTIN_TYPES: Lazy<HashMap<&'static str, Type>> = Lazy::new(|| {
    HashMap::from([
        ("nil", Type::Nil),
        ("Boolean", Type::Boolean),
        ("Integer", Type::Integer),
        ("Float", Type::Float),
        ("String", Type::String),
        ("Symbol", Type::Symbol),
        ("Range", Type::Range),
        ("Array", Type::Array),
        ("Hash", Type::Hash),
    ])
});

impl From<&str> for Type {
    fn from(type_str: &str) -> Self {
        let type_str = type_str.trim();

        match BUILTIN_TYPES.get(type_str) {
            Some(builtin) => *builtin,
            None => Type::Custom(hash_name(type_str)),
        }
    }
}

impl Type {
    pub fn render(&self, symbols: &Symbols) -> String {
        match self {
            Type::Nil => "nil".into(),
            Type::Boolean => "Boolean".into(),
            Type::Integer => "Integer".into(),
            Type::Float => "Float".into(),
            Type::String => "String".into(),
            Type::Symbol => "Symbol".into(),
            Type::Range => "Range".into(),
            Type::Array => "Array".into(),
            Type::Hash => "Hash".into(),
            Type::Custom(name) => symbols.name_or_hash(*name),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::sym;

    use super::*;

    #[test]
    fn builtin_type_names() {
        assert_eq!(Type::from("Integer"), Type::Integer);
        assert_eq!(Type::from(" Hash "), Type::Hash);
        assert_eq!(Type::from("nil"), Type::Nil);
    }

    #[test]
    fn unknown_name_becomes_custom() {
        assert_eq!(Type::from("Point"), Type::Custom(sym!("Point")));
    }

    #[test]
    fn render_custom_uses_symbol_table() {
        let mut symbols = Symbols::new();
        let point = symbols.sym("Point");
        assert_eq!(Type::Custom(point).render(&symbols), "Point");
    }
}
