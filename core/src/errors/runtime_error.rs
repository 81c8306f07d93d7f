use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum RuntimeError {
    #[error("cyclic prototype: the object already appears {depth} level(s) down the new prototype's chain")]
    #[diagnostic(
        code(protochain::cyclic_prototype),
        help("a prototype chain must end at an object without a prototype")
    )]
    CyclicPrototype { depth: usize },

    #[error("'{name}' is not a function")]
    NotAFunction { name: String },

    #[error("type error: {message}")]
    TypeError { message: String },
}
