use doublet::{build_double, ArgSpec, Callable, Double, Expectation, TypeDescriptor, Value};

/// Production-shaped code under test: delegates its work to an injected
/// dependency.
struct Indexer {
    store: Double,
}

impl Indexer {
    fn index(&self, key: &str, payload: Value) {
        self.store
            .call("write", vec![Value::from(key), payload]);
    }

    fn flush(&self, on_done: Callable) {
        self.store.call("flush", vec![Value::Callable(on_done)]);
    }
}

fn store() -> TypeDescriptor {
    TypeDescriptor::interface("Store")
        .method("write")
        .method("flush")
}

#[test]
fn calls_made_by_the_consumer_flow_through_the_double() {
    let double = build_double(
        &store(),
        [Expectation::of("write").count("atLeastOnce").with([
            ArgSpec::Call("stringContains".into(), vec![Value::from("late")]),
            ArgSpec::Call("equalTo".into(), vec![Value::Int(9)]),
        ])],
    );
    let indexer = Indexer {
        store: double.clone(),
    };

    indexer.index("latest", Value::Int(9));

    double.verify();
    assert_eq!(
        double.calls("write"),
        vec![vec![Value::from("latest"), Value::Int(9)]]
    );
}

#[test]
fn callable_arguments_satisfy_the_callable_constraint() {
    let double = build_double(
        &store(),
        [Expectation::of("flush")
            .count("once")
            .with([ArgSpec::from("isCallable")])],
    );
    let indexer = Indexer {
        store: double.clone(),
    };

    indexer.flush(Callable::new(|_| Value::Null));

    double.verify();
}

#[test]
#[should_panic(expected = "argument 1 of Store::write does not match")]
fn a_wrong_payload_fails_while_the_consumer_runs() {
    let double = build_double(
        &store(),
        [Expectation::of("write").with([
            ArgSpec::from("anything"),
            ArgSpec::Call("equalTo".into(), vec![Value::Int(9)]),
        ])],
    );
    let indexer = Indexer {
        store: double.clone(),
    };

    indexer.index("latest", Value::Int(10));
}
