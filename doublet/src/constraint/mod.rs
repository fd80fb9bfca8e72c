mod predicate;

pub use predicate::*;

use crate::Value;

/// What an argument is expected to satisfy.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// Any value
    Anything,
    IsNull,
    IsTrue,
    IsFalse,
    /// An invokable value
    IsCallable,
    /// A list or mapping container
    IsArray,
    /// Equal to the value
    EqualTo(Value),
    GreaterThan(Value),
    LessThan(Value),
    StringContains(String),
    /// Whatever the predicate accepts
    Satisfies(Predicate),
}

impl Constraint {
    pub fn matches(&self, actual: &Value) -> bool {
        match self {
            Constraint::Anything => true,
            Constraint::IsNull => matches!(actual, Value::Null),
            Constraint::IsTrue => matches!(actual, Value::Bool(true)),
            Constraint::IsFalse => matches!(actual, Value::Bool(false)),
            Constraint::IsCallable => actual.is_callable(),
            Constraint::IsArray => actual.is_container(),
            Constraint::EqualTo(expected) => expected == actual,
            Constraint::GreaterThan(bound) => match (actual.as_f64(), bound.as_f64()) {
                (Some(actual), Some(bound)) => actual > bound,
                _ => false,
            },
            Constraint::LessThan(bound) => match (actual.as_f64(), bound.as_f64()) {
                (Some(actual), Some(bound)) => actual < bound,
                _ => false,
            },
            Constraint::StringContains(needle) => match actual {
                Value::Str(s) => s.contains(needle.as_str()),
                _ => false,
            },
            Constraint::Satisfies(predicate) => predicate.accepts(actual),
        }
    }

    /// Resolves a zero-argument constructor name.
    pub fn by_name(name: &str) -> Option<Constraint> {
        match name {
            "anything" => Some(Constraint::Anything),
            "isNull" => Some(Constraint::IsNull),
            "isTrue" => Some(Constraint::IsTrue),
            "isFalse" => Some(Constraint::IsFalse),
            "isCallable" => Some(Constraint::IsCallable),
            "isArray" => Some(Constraint::IsArray),
            _ => None,
        }
    }

    /// Resolves a constructor name applied to positional arguments. An empty
    /// argument list falls back to the zero-argument constructors.
    pub fn construct(name: &str, args: &[Value]) -> Option<Constraint> {
        if args.is_empty() {
            return Constraint::by_name(name);
        }
        match (name, args) {
            ("equalTo", [value]) => Some(Constraint::EqualTo(value.clone())),
            ("greaterThan", [bound]) => Some(Constraint::GreaterThan(bound.clone())),
            ("lessThan", [bound]) => Some(Constraint::LessThan(bound.clone())),
            ("stringContains", [Value::Str(needle)]) => {
                Some(Constraint::StringContains(needle.clone()))
            }
            _ => None,
        }
    }
}

impl From<Value> for Constraint {
    fn from(expected: Value) -> Self {
        Constraint::EqualTo(expected)
    }
}

impl From<Predicate> for Constraint {
    fn from(predicate: Predicate) -> Self {
        Constraint::Satisfies(predicate)
    }
}
