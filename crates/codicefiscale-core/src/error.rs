// crates/codicefiscale-core/src/error.rs

//! Error taxonomy shared by the codec and the loader.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CodiceError>;

/// Everything that can go wrong while encoding, decoding or loading a registry.
///
/// The first four variants are produced by the codec itself. The remaining
/// ones only ever come out of the [`loader`](crate::loader).
#[derive(Debug, Error)]
pub enum CodiceError {
    /// Missing or malformed gender, date or code length.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The input does not follow the fiscal code grammar.
    #[error("invalid syntax: {0}")]
    InvalidSyntax(String),

    /// No registry entry matches the place (and date).
    #[error("birthplace {place:?} not mapped to a code (birthdate: {birthdate})")]
    UnmappedBirthplace { place: String, birthdate: String },

    /// The trailing check character does not match the recomputed one.
    #[error("wrong CIN (Control Internal Number): expected {expected:?}, found {found:?}")]
    ChecksumMismatch { expected: char, found: char },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),
}

impl CodiceError {
    pub(crate) fn unmapped(place: &str, birthdate: Option<chrono::NaiveDate>) -> Self {
        CodiceError::UnmappedBirthplace {
            place: place.to_string(),
            birthdate: birthdate
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}
