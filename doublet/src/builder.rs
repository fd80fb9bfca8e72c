use crate::{
    parse_args, ArgsExpectation, Double, DoubleKind, Expectation, Times, TypeDescriptor,
};

/// Builds a configured double for the target.
///
/// The target's kind selects the creation primitive; each expectation is
/// then registered in list order, its count resolved to a cardinality and
/// its argument specs parsed to constraints. The same double is mutated and
/// returned.
#[track_caller]
pub fn build_double(
    target: &TypeDescriptor,
    expectations: impl IntoIterator<Item = Expectation>,
) -> Double {
    let double = match target.kind() {
        DoubleKind::Full => Double::of(target),
        DoubleKind::Abstract => Double::of_abstract(target),
        DoubleKind::Trait => Double::of_trait(target),
    };
    for expectation in expectations {
        let times = Times::from(expectation.count);
        // consecutive argument lists win silently over plain ones
        let args = if let Some(lists) = &expectation.consecutive_args {
            ArgsExpectation::Consecutive(lists.iter().map(|list| parse_args(list)).collect())
        } else if let Some(list) = &expectation.args {
            ArgsExpectation::Exact(parse_args(list))
        } else {
            ArgsExpectation::Any
        };
        double.expect(&expectation.method, times, args);
    }
    double
}
