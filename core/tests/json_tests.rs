use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use protochain::runtime::json;
use protochain::{IngestError, Loader, ObjectRef, ProtoError, Value, from_json};

#[test]
fn builds_objects_from_json_string() {
    let obj = from_json(r#"{"name": "Car", "wheels": 4, "tags": ["a", "b"], "spare": null}"#)
        .expect("valid JSON should load");

    assert_eq!(obj.own_keys(), vec!["name", "wheels", "tags", "spare"]);
    assert_eq!(obj.get("name"), Some(Value::from("Car")));
    assert_eq!(obj.get("wheels"), Some(Value::Number(4.0)));
    assert_eq!(
        obj.get("tags"),
        Some(Value::Array(vec![Value::from("a"), Value::from("b")]))
    );
    assert_eq!(obj.get("spare"), Some(Value::Null));
}

#[test]
fn nested_objects_are_values_not_prototypes() {
    let obj = from_json(r#"{"engine": {"cylinders": 4}}"#).expect("valid JSON should load");

    assert!(obj.prototype().is_none());
    let engine = obj.get("engine").expect("engine should be present");
    let engine = engine.as_object().expect("engine should be an object");
    assert_eq!(engine.get("cylinders"), Some(Value::Number(4.0)));
    assert!(engine.prototype().is_none());
}

#[test]
fn loader_applies_prototype_to_root_only() {
    let proto = ObjectRef::from_pairs([("kind", "vehicle")], None);
    let obj = Loader::new()
        .string(r#"{"name": "Car", "engine": {}}"#)
        .prototype(&proto)
        .load_object()
        .expect("valid JSON should load");

    assert_eq!(obj.get("kind"), Some(Value::from("vehicle")));
    let engine = obj.get("engine").expect("engine should be present");
    let engine = engine.as_object().expect("engine should be an object");
    assert_eq!(engine.get("kind"), None);
}

#[test]
fn loader_reads_from_path() {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time should be valid")
        .as_nanos();
    let path = std::env::temp_dir().join(format!("protochain-json-{unique}.json"));
    fs::write(&path, r#"{"x": 1}"#).expect("temporary document should be written");

    let obj = Loader::new()
        .path(&path)
        .load_object()
        .expect("document on disk should load");
    assert_eq!(obj, [("x", 1)]);

    fs::remove_file(path).expect("temporary document should be cleaned up");
}

#[test]
fn loader_rejects_two_sources() {
    let err = Loader::new()
        .path("/tmp/does-not-matter.json")
        .string("{}")
        .load_object()
        .expect_err("two sources should be rejected");
    assert!(matches!(err, IngestError::ConflictingSources));
}

#[test]
fn loader_rejects_no_source() {
    let err = Loader::new()
        .load()
        .expect_err("a source is required");
    assert!(matches!(err, IngestError::NoSource));
}

#[test]
fn loader_reports_missing_file() {
    let err = Loader::new()
        .path("/nonexistent/protochain/missing.json")
        .load()
        .expect_err("missing file should fail");
    assert!(matches!(err, IngestError::Read { .. }));
}

#[test]
fn invalid_json_is_a_parse_error() {
    let err = from_json("{not json").expect_err("malformed JSON should fail");
    assert!(matches!(err, ProtoError::Ingest(IngestError::Parse(_))));
}

#[test]
fn load_object_requires_object_root() {
    let err = Loader::new()
        .string("[1, 2]")
        .load_object()
        .expect_err("array root is not an object");
    assert!(matches!(err, IngestError::NotAnObject { found: "array" }));
}

#[test]
fn load_accepts_any_root() {
    let value = Loader::new()
        .string(r#"[{"x": 1}, 2]"#)
        .load()
        .expect("array root should load as a value");
    let items = value.as_array().expect("root should be an array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0], Value::Object(ObjectRef::from_pairs([("x", 1)], None)));
    assert_eq!(items[1], Value::Number(2.0));
}

#[test]
fn export_uses_own_properties_only() {
    let base = ObjectRef::from_pairs([("hidden", true)], None);
    let obj = ObjectRef::from_pairs(
        [("name", Value::from("Car")), ("wheels", Value::from(4))],
        Some(&base),
    );

    let text = json::to_json_string(&obj).expect("object should serialize");
    assert_eq!(text, r#"{"name":"Car","wheels":4}"#);
}

#[test]
fn export_through_serde() {
    let obj = from_json(r#"{"a": 1.5, "b": [true, null], "c": {"d": "e"}}"#)
        .expect("valid JSON should load");

    let text = serde_json::to_string(&obj).expect("object should serialize");
    assert_eq!(text, r#"{"a":1.5,"b":[true,null],"c":{"d":"e"}}"#);
}

#[test]
fn export_detects_circular_values() {
    let obj = ObjectRef::new();
    obj.set("me", &obj);

    assert!(json::to_json_string(&obj).is_err());
    obj.delete("me");
}

#[test]
fn equality_against_json_mapping() {
    let obj = from_json(r#"{"name": "Car"}"#).expect("valid JSON should load");
    let json: serde_json::Value = serde_json::json!({"name": "Car"});

    assert!(obj.equals(&json));
    assert!(!obj.equals(&serde_json::json!(["name", "Car"])));
}
