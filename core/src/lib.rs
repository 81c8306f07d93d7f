pub mod embedding;
pub mod errors;
pub mod runtime;

pub use embedding::{FunctionArgs, NativeFunction};
pub use errors::{IngestError, ProtoError, RuntimeError};
pub use runtime::chain::{ChainWalker, chain_of};
pub use runtime::json::Loader;
pub use runtime::value::Value;
pub use runtime::value::object::{AsMapping, ObjectRef, PropertyTable, ProtoObject, Resolution};
pub use runtime::{enumerable, keywords, reflect};

/// Convenience function to build an object tree from a JSON document string.
pub fn from_json(source: &str) -> Result<ObjectRef, ProtoError> {
    Ok(Loader::new().string(source).load_object()?)
}

/// Convenience function to build an object tree from a JSON file.
pub fn from_json_file(path: impl Into<std::path::PathBuf>) -> Result<ObjectRef, ProtoError> {
    Ok(Loader::new().path(path).load_object()?)
}
