pub mod distribution;
pub mod translate;
pub mod validate;
pub mod vocabulary;
