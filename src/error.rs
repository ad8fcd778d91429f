//! Error types.

/// Errors surfaced by configuration and parsing.
///
/// Hashing itself is total: once a [`crate::SimHash`] exists, every byte buffer
/// has a fingerprint.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A parameter is out of range or inconsistent.
    #[error("invalid parameter: {0}")]
    InvalidParam(&'static str),
    /// A textual fingerprint could not be parsed as 64-bit hex.
    #[error("invalid fingerprint {0:?}: expected up to 16 hex digits")]
    InvalidFingerprint(String),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
