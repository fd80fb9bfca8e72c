use crate::Times;

/// How many invocations an expectation declares, before resolution to a
/// provider-level [`Times`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountSpec {
    /// Zero or more, the default
    #[default]
    Any,
    Never,
    AtLeastOnce,
    AtLeast(usize),
    Exactly(usize),
}

impl From<usize> for CountSpec {
    fn from(count: usize) -> Self {
        match count {
            0 => CountSpec::Never,
            n => CountSpec::Exactly(n),
        }
    }
}

impl From<&str> for CountSpec {
    /// Decodes a symbolic count. First match wins; anything unrecognized
    /// falls back to [`CountSpec::Any`], which keeps the conversion total.
    fn from(encoded: &str) -> Self {
        if encoded == "never" || encoded == "0" {
            return CountSpec::Never;
        }
        if encoded == "atLeastOnce" {
            return CountSpec::AtLeastOnce;
        }
        if let Some(count) = parse_at_least(encoded) {
            return CountSpec::AtLeast(count);
        }
        if encoded == "once" {
            return CountSpec::Exactly(1);
        }
        if let Some(count) = parse_digits(encoded) {
            return CountSpec::from(count);
        }
        CountSpec::Any
    }
}

impl From<String> for CountSpec {
    fn from(encoded: String) -> Self {
        CountSpec::from(encoded.as_str())
    }
}

impl From<CountSpec> for Times {
    fn from(count: CountSpec) -> Self {
        match count {
            CountSpec::Any => Times::Any,
            CountSpec::Never => Times::Exact(0),
            CountSpec::AtLeastOnce => Times::AtLeast(1),
            CountSpec::AtLeast(n) => Times::AtLeast(n),
            CountSpec::Exactly(n) => Times::Exact(n),
        }
    }
}

fn parse_at_least(encoded: &str) -> Option<usize> {
    let mut tokens = encoded.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some("atLeast"), Some(count), None) => parse_digits(count),
        _ => None,
    }
}

fn parse_digits(encoded: &str) -> Option<usize> {
    if encoded.is_empty() || !encoded.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    encoded.parse().ok()
}

#[cfg(feature = "serde")]
mod serde_impls {
    use std::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::CountSpec;

    impl Serialize for CountSpec {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                CountSpec::Any => serializer.serialize_str("any"),
                CountSpec::Never => serializer.serialize_str("never"),
                CountSpec::AtLeastOnce => serializer.serialize_str("atLeastOnce"),
                CountSpec::AtLeast(n) => serializer.serialize_str(&format!("atLeast {n}")),
                CountSpec::Exactly(n) => serializer.serialize_u64(*n as u64),
            }
        }
    }

    impl<'de> Deserialize<'de> for CountSpec {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct CountVisitor;

            impl<'de> Visitor<'de> for CountVisitor {
                type Value = CountSpec;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("an invocation count or its symbolic name")
                }

                fn visit_u64<E: de::Error>(self, count: u64) -> Result<CountSpec, E> {
                    Ok(usize::try_from(count)
                        .map(CountSpec::from)
                        .unwrap_or(CountSpec::Any))
                }

                fn visit_i64<E: de::Error>(self, count: i64) -> Result<CountSpec, E> {
                    Ok(usize::try_from(count)
                        .map(CountSpec::from)
                        .unwrap_or(CountSpec::Any))
                }

                fn visit_str<E: de::Error>(self, encoded: &str) -> Result<CountSpec, E> {
                    Ok(CountSpec::from(encoded))
                }
            }

            deserializer.deserialize_any(CountVisitor)
        }
    }
}
