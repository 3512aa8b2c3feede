//! # pagebrief Config
//!
//! Configuration loading, validation and settings storage for pagebrief.

mod error;
mod loader;
mod schema;
mod store;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use store::{JsonFileStore, MemoryStore};
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
