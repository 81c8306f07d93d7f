mod ingest_error;
mod runtime_error;

pub use ingest_error::IngestError;
pub use runtime_error::RuntimeError;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type wrapping every protochain failure.
#[derive(Debug, Error, Diagnostic)]
pub enum ProtoError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Runtime(#[from] RuntimeError),
}
