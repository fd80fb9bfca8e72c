use crate::{Callable, Constraint, Predicate, Value};

/// One positional-argument matcher, before resolution to a provider-level
/// [`Constraint`].
#[derive(Debug, Clone)]
pub enum ArgSpec {
    /// A pre-built constraint, passed through unchanged
    Constraint(Constraint),
    /// The name of a zero-argument constraint constructor
    Name(String),
    /// A constraint constructor applied to positional arguments
    Call(String, Vec<Value>),
    /// A unary predicate wrapped as a constraint
    Predicate(Predicate),
}

impl ArgSpec {
    /// Maps this spec to a constraint. An unknown constructor name, or one
    /// applied to arguments it does not accept, is the caller asking for a
    /// member the provider does not have.
    #[track_caller]
    pub fn resolve(&self) -> Constraint {
        match self {
            ArgSpec::Constraint(constraint) => constraint.clone(),
            ArgSpec::Name(name) => Constraint::by_name(name)
                .unwrap_or_else(|| panic!("no constraint named {name}")),
            ArgSpec::Call(name, args) => Constraint::construct(name, args).unwrap_or_else(|| {
                panic!("cannot construct constraint {name} with arguments {args:?}")
            }),
            ArgSpec::Predicate(predicate) => Constraint::Satisfies(predicate.clone()),
        }
    }
}

/// Maps each spec to a provider-level constraint, preserving order and
/// arity. Every element is resolved independently on every call.
#[track_caller]
pub fn parse_args(specs: &[ArgSpec]) -> Vec<Constraint> {
    specs.iter().map(ArgSpec::resolve).collect()
}

impl From<Constraint> for ArgSpec {
    fn from(constraint: Constraint) -> Self {
        ArgSpec::Constraint(constraint)
    }
}

impl From<&str> for ArgSpec {
    fn from(name: &str) -> Self {
        ArgSpec::Name(name.to_string())
    }
}

impl From<String> for ArgSpec {
    fn from(name: String) -> Self {
        ArgSpec::Name(name)
    }
}

impl From<Predicate> for ArgSpec {
    fn from(predicate: Predicate) -> Self {
        ArgSpec::Predicate(predicate)
    }
}

// A callable value acts as a predicate over the argument, accepting on a
// true-like result.
impl From<Callable> for ArgSpec {
    fn from(callable: Callable) -> Self {
        ArgSpec::Predicate(Predicate::new(move |value| {
            callable.call(std::slice::from_ref(value)).is_truthy()
        }))
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use std::fmt;

    use serde::de::{self, SeqAccess, Visitor};
    use serde::ser::{Error as _, SerializeSeq};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::ArgSpec;
    use crate::Value;

    impl Serialize for ArgSpec {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                ArgSpec::Name(name) => serializer.serialize_str(name),
                ArgSpec::Call(name, args) => {
                    let mut seq = serializer.serialize_seq(Some(args.len() + 1))?;
                    seq.serialize_element(name)?;
                    for arg in args {
                        seq.serialize_element(arg)?;
                    }
                    seq.end()
                }
                ArgSpec::Constraint(_) | ArgSpec::Predicate(_) => Err(S::Error::custom(
                    "only named constraint specs have a data encoding",
                )),
            }
        }
    }

    impl<'de> Deserialize<'de> for ArgSpec {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct ArgVisitor;

            impl<'de> Visitor<'de> for ArgVisitor {
                type Value = ArgSpec;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("a constraint name or [name, arguments...]")
                }

                fn visit_str<E: de::Error>(self, name: &str) -> Result<ArgSpec, E> {
                    Ok(ArgSpec::Name(name.to_string()))
                }

                fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ArgSpec, A::Error> {
                    let name: String = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::custom("constraint call needs a leading name"))?;
                    let mut args = Vec::new();
                    while let Some(arg) = seq.next_element::<Value>()? {
                        args.push(arg);
                    }
                    Ok(ArgSpec::Call(name, args))
                }
            }

            deserializer.deserialize_any(ArgVisitor)
        }
    }
}
