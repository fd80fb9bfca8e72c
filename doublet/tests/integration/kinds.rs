use doublet::{build_double, TypeDescriptor, Value};

fn storage() -> TypeDescriptor {
    TypeDescriptor::interface("Storage")
        .method("read")
        .method("write")
}

#[test]
fn an_interface_double_answers_every_declared_method() {
    let double = build_double(&storage(), []);
    assert_eq!(double.call("read", vec![Value::from("key")]), Value::Null);
    assert_eq!(
        double.call("write", vec![Value::from("key"), Value::Int(1)]),
        Value::Null
    );
}

#[test]
#[should_panic(expected = "Storage has no method drop_all")]
fn an_interface_double_rejects_undeclared_methods() {
    build_double(&storage(), []).call("drop_all", vec![]);
}

#[test]
fn an_abstract_double_stubs_abstract_members_and_runs_concrete_ones() {
    let target = TypeDescriptor::abstract_class("Report")
        .method("rows")
        .method_with("title", |_, _| Value::from("weekly report"));
    let double = build_double(&target, []);
    assert_eq!(double.call("rows", vec![]), Value::Null);
    assert_eq!(double.call("title", vec![]), Value::from("weekly report"));
}

#[test]
fn a_trait_double_keeps_original_behavior_intact() {
    let target = TypeDescriptor::trait_like("Greets").method_with("greet", |_, args| {
        match args {
            [Value::Str(name)] => Value::from(format!("hello {name}")),
            _ => Value::Null,
        }
    });
    let double = build_double(&target, []);
    assert_eq!(
        double.call("greet", vec![Value::from("mika")]),
        Value::from("hello mika")
    );
}

#[test]
fn a_trait_method_can_delegate_to_a_stubbed_sibling() {
    let target = TypeDescriptor::trait_like("Greets")
        .method("name")
        .method_with("greet", |double, _| {
            match double.call("name", vec![]) {
                Value::Str(name) => Value::from(format!("hello {name}")),
                _ => Value::from("hello stranger"),
            }
        });
    let double = build_double(&target, []);
    assert_eq!(double.call("greet", vec![]), Value::from("hello stranger"));
    assert_eq!(double.calls("name").len(), 1);
}

#[test]
fn a_concrete_target_is_fully_stubbed_like_an_interface() {
    let target = TypeDescriptor::concrete("Clock")
        .method_with("now", |_, _| Value::Int(1_234_567));
    let double = build_double(&target, []);
    assert_eq!(double.call("now", vec![]), Value::Null);
}
