mod object;

pub use object::{Deconstruct, KeyRequest, ObjectValue};

use crate::shared::{
    symbols::{Sym, Symbols},
    types::Type,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrayValue(pub Vec<Value>);

// Insertion-ordered mapping, rest bindings reproduce the subject's key order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HashValue(pub Vec<(Sym, Value)>);

impl HashValue {
    pub fn get(&self, key: Sym) -> Option<&Value> {
        self.0
            .iter()
            .find_map(|(k, value)| (*k == key).then_some(value))
    }

    pub fn contains_key(&self, key: Sym) -> bool {
        self.0.iter().any(|(k, _)| *k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = Sym> + '_ {
        self.0.iter().map(|(k, _)| *k)
    }

    pub fn insert(&mut self, key: Sym, value: Value) {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeValue(pub i64, pub i64, pub bool); // from, to, inclusive

impl RangeValue {
    // integers stay i64, casting through f64 would round above 2^53
    pub fn contains_int(&self, value: i64) -> bool {
        let RangeValue(from, to, inclusive) = *self;
        if inclusive {
            value >= from && value <= to
        } else {
            value >= from && value < to
        }
    }

    pub fn contains_float(&self, value: f64) -> bool {
        let RangeValue(from, to, inclusive) = *self;
        if inclusive {
            value >= from as f64 && value <= to as f64
        } else {
            value >= from as f64 && value < to as f64
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Nil,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Symbol(Sym),
    Range(RangeValue),
    // Built-in collections
    Array(ArrayValue),
    Hash(HashValue),
    // First-class type descriptor, the operand of is-a tests
    Class(Type),
    // Opaque subject carrying deconstruction capabilities
    Object(ObjectValue),
}

impl Value {
    // only nil and false are falsey
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Boolean(false))
    }

    pub fn is_type_of(&self, value_type: &Type) -> bool {
        match self {
            Value::Nil => *value_type == Type::Nil,
            Value::Boolean(_) => *value_type == Type::Boolean,
            Value::Integer(_) => *value_type == Type::Integer,
            Value::Float(_) => *value_type == Type::Float,
            Value::String(_) => *value_type == Type::String,
            Value::Symbol(_) => *value_type == Type::Symbol,
            Value::Range(_) => *value_type == Type::Range,
            Value::Array(_) => *value_type == Type::Array,
            Value::Hash(_) => *value_type == Type::Hash,
            Value::Object(ObjectValue(object)) => {
                *value_type == Type::Custom(object.class_name())
            }
            // Classes are descriptors, not instances of the kinds above
            Value::Class(_) => false,
        }
    }

    // inspect-style rendering for diagnostics
    pub fn render(&self, symbols: &Symbols) -> String {
        match self {
            Value::Nil => "nil".into(),
            Value::Boolean(value) => value.to_string(),
            Value::Integer(value) => value.to_string(),
            Value::Float(value) => value.to_string(),
            Value::String(value) => format!("{value:?}"),
            Value::Symbol(sym) => format!(":{}", symbols.name_or_hash(*sym)),
            Value::Range(RangeValue(from, to, inclusive)) => {
                if *inclusive {
                    format!("{from}..={to}")
                } else {
                    format!("{from}..{to}")
                }
            }
            Value::Array(ArrayValue(values)) => {
                let joined = values
                    .iter()
                    .map(|value| value.render(symbols))
                    .collect::<Vec<_>>()
                    .join(", ");

                format!("[{joined}]")
            }
            Value::Hash(HashValue(entries)) => {
                let joined = entries
                    .iter()
                    .map(|(key, value)| {
                        format!("{}: {}", symbols.name_or_hash(*key), value.render(symbols))
                    })
                    .collect::<Vec<_>>()
                    .join(", ");

                format!("{{{joined}}}")
            }
            Value::Class(value_type) => value_type.render(symbols),
            Value::Object(ObjectValue(object)) => {
                format!("#<{}>", symbols.name_or_hash(object.class_name()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::sym;

    use super::*;

    #[test]
    fn truthiness() {
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::Boolean(false).is_truthy());
        assert!(Value::Boolean(true).is_truthy());
        assert!(Value::Integer(0).is_truthy());
        assert!(Value::String(String::new()).is_truthy());
    }

    #[test]
    fn hash_value_preserves_insertion_order() {
        let mut hash = HashValue::default();
        hash.insert(sym!("b"), Value::Integer(2));
        hash.insert(sym!("a"), Value::Integer(1));
        hash.insert(sym!("b"), Value::Integer(3));

        assert_eq!(hash.len(), 2);
        assert_eq!(hash.keys().collect::<Vec<_>>(), vec![sym!("b"), sym!("a")]);
        assert_eq!(hash.get(sym!("b")), Some(&Value::Integer(3)));
    }

    #[test]
    fn range_membership() {
        let exclusive = RangeValue(1, 5, false);
        assert!(exclusive.contains_int(1));
        assert!(exclusive.contains_float(4.9));
        assert!(!exclusive.contains_int(5));

        let inclusive = RangeValue(1, 5, true);
        assert!(inclusive.contains_int(5));
    }

    #[test]
    fn range_membership_above_f64_precision() {
        // 2^60 and its neighbors collapse to the same f64
        let huge = 1i64 << 60;
        let range = RangeValue(i64::MIN, huge, false);
        assert!(range.contains_int(huge - 1));
        assert!(!range.contains_int(huge));
        assert!(!range.contains_int(huge + 1));
    }

    #[test]
    fn render_values() {
        let mut symbols = Symbols::new();
        let a = symbols.sym("a");

        let value = Value::Hash(HashValue(vec![
            (a, Value::Array(ArrayValue(vec![Value::Integer(1), Value::Nil]))),
        ]));
        assert_eq!(value.render(&symbols), "{a: [1, nil]}");

        assert_eq!(Value::String("hi".into()).render(&symbols), "\"hi\"");
        assert_eq!(
            Value::Range(RangeValue(1, 3, false)).render(&symbols),
            "1..3"
        );
    }

    #[test]
    fn is_type_of_builtins() {
        assert!(Value::Integer(1).is_type_of(&Type::Integer));
        assert!(!Value::Integer(1).is_type_of(&Type::Float));
        assert!(Value::Nil.is_type_of(&Type::Nil));
        assert!(Value::Hash(HashValue::default()).is_type_of(&Type::Hash));
    }
}
