//! Algorithm errors.

use pn_settings::SettingsError;
use thiserror::Error;

/// Result type for algorithm operations.
pub type AlgorithmResult<T> = Result<T, AlgorithmError>;

#[derive(Error, Debug)]
pub enum AlgorithmError {
    /// Settings rejected a read or write.
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    /// A source term was registered twice.
    #[error("Source term already registered: {propname}")]
    DuplicateSource { propname: String },

    /// Unrecognized algorithm kind name.
    #[error("Unknown algorithm kind: {name}")]
    UnknownKind { name: String },
}
