pub mod chain;
pub mod enumerable;
pub mod json;
pub mod keywords;
pub mod reflect;
pub mod value;
