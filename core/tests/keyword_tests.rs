use protochain::{ObjectRef, Value, keywords};

#[test]
fn contains_own_property() {
    let obj = ObjectRef::from_pairs([("x", 1)], None);
    assert!(keywords::contains(&obj, "x"));
    assert!(!keywords::contains(&obj, "y"));
}

#[test]
fn contains_checks_one_prototype_hop() {
    let root = ObjectRef::from_pairs([("deep", 1)], None);
    let parent = ObjectRef::from_pairs([("near", 2)], Some(&root));
    let obj = ObjectRef::with_prototype(&parent);

    assert!(keywords::contains(&obj, "near"));
    assert!(!keywords::contains(&obj, "deep"));
    assert_eq!(obj.get("deep"), Some(Value::Number(1.0)));
}

#[test]
fn delete_own_property_returns_value() {
    let obj = ObjectRef::from_pairs([("x", 1), ("y", 2)], None);

    assert_eq!(keywords::delete(&obj, "x"), Some(Value::Number(1.0)));
    assert_eq!(obj.own_keys(), vec!["y"]);
}

#[test]
fn delete_inherited_property_keeps_delegating() {
    let base = ObjectRef::from_pairs([("x", 1)], None);
    let obj = ObjectRef::with_prototype(&base);

    assert_eq!(keywords::delete(&obj, "x"), None);
    assert_eq!(obj.get("x"), Some(Value::Number(1.0)));

    base.set("x", 7);
    assert_eq!(obj.get("x"), Some(Value::Number(7.0)));
    assert!(!obj.has("x"));
}

#[test]
fn delete_missing_property_is_noop() {
    let obj = ObjectRef::from_pairs([("x", 1)], None);
    assert_eq!(keywords::delete(&obj, "nope"), None);
    assert_eq!(obj, [("x", 1)]);
}

#[test]
fn function_value_can_mutate_its_receiver() {
    let counter = ObjectRef::from_pairs(
        [
            ("count", Value::from(0)),
            (
                "increment",
                keywords::function(|args| {
                    let this = args.this().expect("receiver should be passed");
                    let step = args.get(0).map_or(1.0, Value::to_number);
                    let next = this.get("count").map_or(0.0, |v| v.to_number()) + step;
                    this.set("count", next);
                    Ok(Value::from(next))
                }),
            ),
        ],
        None,
    );

    counter
        .call("increment", Vec::new())
        .expect("increment should be callable");
    let result = counter
        .call("increment", vec![Value::from(5)])
        .expect("increment should accept a step");
    assert_eq!(result, Value::Number(6.0));
    assert_eq!(counter.get("count"), Some(Value::Number(6.0)));
}

#[test]
fn function_values_compare_by_identity() {
    let f = keywords::function(|_| Ok(Value::Null));
    let g = keywords::function(|_| Ok(Value::Null));
    assert_eq!(f, f.clone());
    assert_ne!(f, g);
}
