pub mod ast;
pub mod error;
pub mod eval;
pub mod export;
pub mod parser;
pub mod config;

pub use ast::{Document, Value};
pub use error::SigilError;
pub use export::{translate, translate_file};
pub use config::SigilConfig;
