use doublet::{build_double, Expectation, TypeDescriptor, Value};

fn queue() -> TypeDescriptor {
    TypeDescriptor::interface("Queue")
        .method("push")
        .method("len")
}

#[test]
fn a_json_document_configures_a_whole_double() {
    let specs: Vec<Expectation> = serde_json::from_str(
        r#"[
            {"method": "push", "count": "atLeast 2", "args": [["equalTo", "job"], "isTrue"]},
            {"method": "len", "count": 0}
        ]"#,
    )
    .unwrap();
    let double = build_double(&queue(), specs);

    double.call("push", vec![Value::from("job"), Value::Bool(true)]);
    double.call("push", vec![Value::from("job"), Value::Bool(true)]);

    double.verify();
}

#[test]
fn consecutive_argument_lists_decode_too() {
    let specs: Vec<Expectation> = serde_json::from_str(
        r#"[{
            "method": "push",
            "count": 2,
            "consecutiveArgs": [[["equalTo", "a"]], [["equalTo", "b"]]]
        }]"#,
    )
    .unwrap();
    let double = build_double(&queue(), specs);

    double.call("push", vec![Value::from("a")]);
    double.call("push", vec![Value::from("b")]);

    double.verify();
}

#[test]
#[should_panic(expected = "Expected Queue::len to be called 0 times, but it was called 1 times")]
fn a_declared_never_still_bites() {
    let specs: Vec<Expectation> =
        serde_json::from_str(r#"[{"method": "len", "count": "never"}]"#).unwrap();
    let double = build_double(&queue(), specs);
    double.call("len", vec![]);
}
