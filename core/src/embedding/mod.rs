pub mod callback;
pub mod function_args;

pub use callback::NativeFunction;
pub use function_args::FunctionArgs;
