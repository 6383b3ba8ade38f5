//! Error types for giscus-helpers

use thiserror::Error;

/// Result type alias for helper operations
pub type Result<T> = std::result::Result<T, HelperError>;

/// Helper error types
///
/// The URL helpers never produce these; they fall back to empty or unchanged values.
#[derive(Error, Debug)]
pub enum HelperError {
    #[error("Crypto provider is not initialized - call init_crypto() at startup")]
    CryptoUnavailable,

    #[error("Crypto provider is already initialized")]
    CryptoAlreadyInitialized,

    #[error("Unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Digest failed: {0}")]
    DigestError(String),

    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    #[error("Storage access check failed: {0}")]
    StorageAccess(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
