//! Error types for the rotorcrypt library.

use thiserror::Error;

/// Errors produced by the rotorcrypt library.
///
/// Every variant is raised while building or configuring a machine.
/// Enciphering text through a constructed machine never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RotorCryptError {
    /// Wiring string is not a permutation of the 26 letters `A`..`Z`.
    #[error("Invalid wiring: {0}")]
    InvalidWiring(String),

    /// Reflector wiring is not involutive or maps a letter to itself.
    #[error("Invalid reflector: {0}")]
    InvalidReflector(String),

    /// Machine layout is unusable (no rotors, mismatched positions).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Key sheet could not be parsed or serialized.
    #[error("Key sheet error: {0}")]
    Config(String),

    /// Key sheet file could not be read or written.
    #[error("IO error: {0}")]
    Io(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RotorCryptError>;

impl From<std::io::Error> for RotorCryptError {
    fn from(err: std::io::Error) -> Self {
        RotorCryptError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RotorCryptError {
    fn from(err: serde_json::Error) -> Self {
        RotorCryptError::Config(err.to_string())
    }
}
