//! Ancient Language Name Generator
//!
//! Builds names from per-language prefix, middle and suffix tables.
//! The registry is immutable once built and the random source is injected
//! by the caller.

pub mod composer;
pub mod config;
pub mod error;
pub mod shell;
pub mod tables;

pub use composer::{Gender, GeneratedName, NameComposer};
pub use config::{ConfigError, GeneratorConfig};
pub use error::NameError;
pub use shell::Shell;
pub use tables::{FragmentTable, NameTables};
