use doublet::{build_double, Expectation, TypeDescriptor, Value};

fn feed() -> TypeDescriptor {
    TypeDescriptor::interface("Feed").method("poll")
}

fn poll_times(double: &doublet::Double, times: usize) {
    for _ in 0..times {
        double.call("poll", vec![Value::Null]);
    }
}

#[test]
fn the_default_matches_any_number_of_calls() {
    let double = build_double(&feed(), [Expectation::of("poll")]);
    double.verify();
    poll_times(&double, 5);
    double.verify();
}

#[test]
fn at_least_three_passes_once_three_calls_arrive() {
    let double = build_double(&feed(), [Expectation::of("poll").count("atLeast 3")]);
    poll_times(&double, 3);
    double.verify();
    poll_times(&double, 2);
    double.verify();
}

#[test]
#[should_panic(expected = "Expected Feed::poll to be called at least 3 times, but it was called 2 times")]
fn at_least_three_fails_with_fewer_calls() {
    let double = build_double(&feed(), [Expectation::of("poll").count("atLeast 3")]);
    poll_times(&double, 2);
    double.verify();
}

#[test]
fn integer_and_digit_string_counts_agree() {
    for expectation in [
        Expectation::of("poll").count(3usize),
        Expectation::of("poll").count("3"),
    ] {
        let double = build_double(&feed(), [expectation]);
        poll_times(&double, 3);
        double.verify();
    }
}

#[test]
#[should_panic(expected = "Expected Feed::poll to be called 0 times, but it was called 1 times")]
fn never_fails_on_the_first_call() {
    let double = build_double(&feed(), [Expectation::of("poll").count("never")]);
    double.call("poll", vec![]);
}

#[test]
fn once_and_at_least_once() {
    let double = build_double(&feed(), [Expectation::of("poll").count("once")]);
    poll_times(&double, 1);
    double.verify();

    let double = build_double(&feed(), [Expectation::of("poll").count("atLeastOnce")]);
    poll_times(&double, 4);
    double.verify();
}

#[test]
#[should_panic(expected = "Expected Feed::poll to be called 1 times, but it was called 0 times")]
fn once_fails_when_never_called() {
    let double = build_double(&feed(), [Expectation::of("poll").count("once")]);
    double.verify();
}

#[test]
fn unrecognized_count_encodings_fall_back_to_unbounded() {
    let double = build_double(&feed(), [Expectation::of("poll").count("whenever")]);
    poll_times(&double, 7);
    double.verify();
}
