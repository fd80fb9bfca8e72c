use std::fmt;
use std::sync::Arc;

use crate::Value;

/// A unary predicate over an argument value; clones share the function.
#[derive(Clone)]
pub struct Predicate(Arc<dyn Fn(&Value) -> bool + Send + Sync>);

impl Predicate {
    pub fn new(accepts: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(accepts))
    }

    pub fn accepts(&self, value: &Value) -> bool {
        (*self.0)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<predicate>")
    }
}
