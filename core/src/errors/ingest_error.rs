use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum IngestError {
    #[error("provide a path or a string, but not both")]
    #[diagnostic(code(protochain::ingest::conflicting_sources))]
    ConflictingSources,

    #[error("no path or string provided")]
    #[diagnostic(code(protochain::ingest::no_source))]
    NoSource,

    #[error("could not read '{}'", path.display())]
    #[diagnostic(code(protochain::ingest::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    #[diagnostic(code(protochain::ingest::parse))]
    Parse(#[from] serde_json::Error),

    #[error("expected a JSON object at the document root, found {found}")]
    #[diagnostic(
        code(protochain::ingest::not_an_object),
        help("wrap the document in an object, or use `from_json_value` for other shapes")
    )]
    NotAnObject { found: &'static str },
}
