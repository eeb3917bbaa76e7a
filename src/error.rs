//! Error types for membership proofs.

/// Main error types for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A curve point or scalar encoding is malformed or invalid.
    #[error("Invalid curve encoding: {0}")]
    Curve(String),

    /// Cryptographically secure random bytes could not be obtained.
    #[error("Random source failure: {0}")]
    RandomSource(String),
}

/// Convenience result type used throughout the library.
pub type Result<T> = core::result::Result<T, Error>;
