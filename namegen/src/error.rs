//! Error types for name generation

use thiserror::Error;

/// Failures raised by the table registry and the composer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The requested category is not registered
    #[error("Invalid language category: '{0}'")]
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, NameError>;
