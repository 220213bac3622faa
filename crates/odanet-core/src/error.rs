// crates/odanet-core/src/error.rs

use thiserror::Error;

/// Convenient result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OdanetError>;

/// Errors produced while loading or validating the location catalog.
///
/// Catalog lookups themselves never error; absence is modelled as
/// `Option` (see [`crate::LocationDb::find_city_by_slug`]).
#[derive(Debug, Error)]
pub enum OdanetError {
    /// A requested resource (dataset file, record) does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Two catalog entries folded to the same slug within one scope.
    #[error("duplicate slug in catalog: {0}")]
    DuplicateSlug(String),

    /// The dataset could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Underlying I/O failure while reading a dataset.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
