//! JSON ingestion and export.
//!
//! JSON objects become objects (each key an own property), arrays become
//! `Value::Array`, scalars pass through. Nested objects are property values, never
//! prototypes; only the document root receives a configured prototype.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::ser::{Error as _, Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::errors::{IngestError, RuntimeError};
use crate::runtime::value::Value;
use crate::runtime::value::object::{ObjectRef, PropertyTable, ProtoObject};

/// Builder for loading a JSON document from exactly one source.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    path: Option<PathBuf>,
    string: Option<String>,
    prototype: Option<ObjectRef>,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn string(mut self, source: impl Into<String>) -> Self {
        self.string = Some(source.into());
        self
    }

    /// Prototype given to the root object of the document.
    pub fn prototype(mut self, prototype: &ObjectRef) -> Self {
        self.prototype = Some(prototype.clone());
        self
    }

    pub fn load(self) -> Result<Value, IngestError> {
        let prototype = self.prototype.clone();
        let parsed = self.parse()?;
        Ok(match &parsed {
            JsonValue::Object(map) => Value::Object(build_object(map, prototype.as_ref())),
            other => from_json_value(other),
        })
    }

    /// Like [`Loader::load`], but the document root must be a JSON object.
    pub fn load_object(self) -> Result<ObjectRef, IngestError> {
        let prototype = self.prototype.clone();
        let parsed = self.parse()?;
        object_from_json(&parsed, prototype.as_ref())
    }

    fn parse(self) -> Result<JsonValue, IngestError> {
        let source = match (self.path, self.string) {
            (Some(_), Some(_)) => return Err(IngestError::ConflictingSources),
            (None, None) => return Err(IngestError::NoSource),
            (Some(path), None) => {
                fs::read_to_string(&path).map_err(|source| IngestError::Read { path, source })?
            }
            (None, Some(source)) => source,
        };
        Ok(serde_json::from_str(&source)?)
    }
}

pub fn object_from_json(
    value: &JsonValue,
    prototype: Option<&ObjectRef>,
) -> Result<ObjectRef, IngestError> {
    match value {
        JsonValue::Object(map) => Ok(build_object(map, prototype)),
        other => Err(IngestError::NotAnObject {
            found: json_type_name(other),
        }),
    }
}

pub fn from_json_value(value: &JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Boolean(*b),
        JsonValue::Number(n) => Value::Number(n.as_f64().unwrap_or(0.0)),
        JsonValue::String(s) => Value::String(s.clone()),
        JsonValue::Array(items) => Value::Array(items.iter().map(from_json_value).collect()),
        JsonValue::Object(map) => Value::Object(build_object(map, None)),
    }
}

fn build_object(
    map: &serde_json::Map<String, JsonValue>,
    prototype: Option<&ObjectRef>,
) -> ObjectRef {
    let mut properties = PropertyTable::with_capacity(map.len());
    for (key, value) in map {
        properties.insert(key.clone(), from_json_value(value));
    }
    ObjectRef::from_object(ProtoObject::with_parts(properties, prototype.cloned()))
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

/// Converts a value to JSON using own properties only. Functions become `null`.
pub fn to_json_value(value: &Value) -> Result<JsonValue, RuntimeError> {
    let mut seen = HashSet::new();
    convert(value, &mut seen)
}

pub fn to_json_string(obj: &ObjectRef) -> Result<String, RuntimeError> {
    Ok(to_json_value(&Value::Object(obj.clone()))?.to_string())
}

pub fn to_json_string_pretty(obj: &ObjectRef) -> Result<String, RuntimeError> {
    let json = to_json_value(&Value::Object(obj.clone()))?;
    serde_json::to_string_pretty(&json).map_err(|e| RuntimeError::TypeError {
        message: format!("JSON serialization failed: {e}"),
    })
}

fn convert(value: &Value, seen: &mut HashSet<usize>) -> Result<JsonValue, RuntimeError> {
    Ok(match value {
        Value::Null | Value::Function(_) => JsonValue::Null,
        Value::Boolean(b) => JsonValue::Bool(*b),
        Value::Number(n) => number_to_json(*n),
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Array(items) => JsonValue::Array(
            items
                .iter()
                .map(|item| convert(item, seen))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Object(obj) => {
            let ptr = obj.addr();
            if !seen.insert(ptr) {
                return Err(RuntimeError::TypeError {
                    message: "converting circular structure to JSON".into(),
                });
            }
            let mut map = serde_json::Map::new();
            for (key, value) in obj.to_mapping() {
                map.insert(key, convert(&value, seen)?);
            }
            seen.remove(&ptr);
            JsonValue::Object(map)
        }
    })
}

fn number_to_json(n: f64) -> JsonValue {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < i64::MAX as f64 {
        return JsonValue::Number((n as i64).into());
    }
    serde_json::Number::from_f64(n)
        .map(JsonValue::Number)
        .unwrap_or(JsonValue::Null)
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        to_json_value(self)
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

impl Serialize for ObjectRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Value::Object(self.clone()).serialize(serializer)
    }
}
