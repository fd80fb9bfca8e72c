mod args;
mod count;

pub use args::*;
pub use count::*;

/// One expected-call declaration. At most one of `args` and
/// `consecutive_args` is honored; `consecutive_args` wins silently when both
/// are set.
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Expectation {
    pub method: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub count: CountSpec,
    #[cfg_attr(feature = "serde", serde(default))]
    pub args: Option<Vec<ArgSpec>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub consecutive_args: Option<Vec<Vec<ArgSpec>>>,
}

impl Expectation {
    /// Declares an expectation for the named method, matching any number of
    /// calls with any arguments.
    pub fn of(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            ..Default::default()
        }
    }

    pub fn count(mut self, count: impl Into<CountSpec>) -> Self {
        self.count = count.into();
        self
    }

    /// Constrains the arguments of every matching call.
    pub fn with<A: Into<ArgSpec>>(mut self, args: impl IntoIterator<Item = A>) -> Self {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Constrains call `i` with argument list `i`.
    pub fn with_consecutive<L>(mut self, lists: impl IntoIterator<Item = L>) -> Self
    where
        L: IntoIterator,
        L::Item: Into<ArgSpec>,
    {
        self.consecutive_args = Some(
            lists
                .into_iter()
                .map(|list| list.into_iter().map(Into::into).collect())
                .collect(),
        );
        self
    }
}
