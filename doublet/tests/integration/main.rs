mod consumer;
mod counts;
mod kinds;

#[cfg(feature = "serde")]
mod declarative;
