//! SHA digests through a process-wide crypto provider
//!
//! The provider is installed explicitly at startup with [`init_crypto`] (or
//! [`install_crypto_provider`] for a host-specific implementation). Digesting
//! before that fails with [`HelperError::CryptoUnavailable`] instead of racing
//! a background initialization.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};
use std::sync::{Arc, OnceLock};
use tracing::info;

use crate::error::{HelperError, Result};

/// Digest algorithms, named as in WebCrypto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DigestAlgorithm {
    #[default]
    #[serde(rename = "SHA-1")]
    Sha1,
    #[serde(rename = "SHA-256")]
    Sha256,
    #[serde(rename = "SHA-384")]
    Sha384,
    #[serde(rename = "SHA-512")]
    Sha512,
}

impl DigestAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha1 => "SHA-1",
            DigestAlgorithm::Sha256 => "SHA-256",
            DigestAlgorithm::Sha384 => "SHA-384",
            DigestAlgorithm::Sha512 => "SHA-512",
        }
    }

    /// Digest length in bytes
    pub fn output_len(&self) -> usize {
        match self {
            DigestAlgorithm::Sha1 => 20,
            DigestAlgorithm::Sha256 => 32,
            DigestAlgorithm::Sha384 => 48,
            DigestAlgorithm::Sha512 => 64,
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DigestAlgorithm {
    type Err = HelperError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SHA-1" => Ok(DigestAlgorithm::Sha1),
            "SHA-256" => Ok(DigestAlgorithm::Sha256),
            "SHA-384" => Ok(DigestAlgorithm::Sha384),
            "SHA-512" => Ok(DigestAlgorithm::Sha512),
            _ => Err(HelperError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// A platform digest primitive
#[async_trait]
pub trait CryptoProvider: Send + Sync {
    /// Compute the raw digest of `data`
    async fn digest(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>>;

    /// Get a human-readable name for this provider
    fn provider_name(&self) -> &'static str;
}

/// Pure-Rust provider backed by the RustCrypto hashes
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoProvider;

#[async_trait]
impl CryptoProvider for RustCryptoProvider {
    async fn digest(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>> {
        let hash = match algorithm {
            DigestAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
            DigestAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            DigestAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
            DigestAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
        };
        Ok(hash)
    }

    fn provider_name(&self) -> &'static str {
        "rustcrypto"
    }
}

/// Holds at most one installed crypto provider
#[derive(Default)]
pub struct CryptoContext {
    provider: OnceLock<Arc<dyn CryptoProvider>>,
}

impl CryptoContext {
    /// Create a context with no provider installed
    pub const fn new() -> Self {
        Self {
            provider: OnceLock::new(),
        }
    }

    /// Install a provider. Fails if one is already installed.
    pub fn install(&self, provider: Arc<dyn CryptoProvider>) -> Result<()> {
        let name = provider.provider_name();
        self.provider
            .set(provider)
            .map_err(|_| HelperError::CryptoAlreadyInitialized)?;
        info!("Installed crypto provider: {}", name);
        Ok(())
    }

    /// Install the default provider unless one is already present
    pub fn init_default(&self) -> Arc<dyn CryptoProvider> {
        self.provider
            .get_or_init(|| {
                info!("Installed crypto provider: rustcrypto");
                Arc::new(RustCryptoProvider) as Arc<dyn CryptoProvider>
            })
            .clone()
    }

    /// The installed provider
    pub fn provider(&self) -> Result<Arc<dyn CryptoProvider>> {
        self.provider
            .get()
            .cloned()
            .ok_or(HelperError::CryptoUnavailable)
    }

    pub fn is_initialized(&self) -> bool {
        self.provider.get().is_some()
    }

    /// Digest a message with this context's provider
    pub async fn digest_message(
        &self,
        message: &str,
        algorithm: DigestAlgorithm,
    ) -> Result<String> {
        let provider = self.provider()?;
        digest_message_with(provider.as_ref(), message, algorithm).await
    }
}

impl std::fmt::Debug for CryptoContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptoContext")
            .field(
                "provider",
                &self.provider.get().map(|p| p.provider_name()),
            )
            .finish()
    }
}

static CRYPTO: CryptoContext = CryptoContext::new();

/// The process-wide crypto context
pub fn crypto_context() -> &'static CryptoContext {
    &CRYPTO
}

/// Install the default provider into the process-wide context.
///
/// Call once during startup, before the first digest. Repeated calls are no-ops.
pub fn init_crypto() {
    CRYPTO.init_default();
}

/// Install a host-specific provider into the process-wide context
pub fn install_crypto_provider(provider: Arc<dyn CryptoProvider>) -> Result<()> {
    CRYPTO.install(provider)
}

/// Digest the UTF-8 bytes of `message` and return lowercase hex.
///
/// Fails with [`HelperError::CryptoUnavailable`] until a provider is installed.
pub async fn digest_message(message: &str, algorithm: DigestAlgorithm) -> Result<String> {
    CRYPTO.digest_message(message, algorithm).await
}

/// Digest with an explicit provider, bypassing the process-wide context
pub async fn digest_message_with(
    provider: &dyn CryptoProvider,
    message: &str,
    algorithm: DigestAlgorithm,
) -> Result<String> {
    let hash = provider.digest(algorithm, message.as_bytes()).await?;
    if hash.len() != algorithm.output_len() {
        return Err(HelperError::DigestError(format!(
            "{} returned {} bytes for {}, expected {}",
            provider.provider_name(),
            hash.len(),
            algorithm,
            algorithm.output_len()
        )));
    }
    Ok(hex::encode(hash))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TruncatingProvider;

    #[async_trait]
    impl CryptoProvider for TruncatingProvider {
        async fn digest(&self, _algorithm: DigestAlgorithm, _data: &[u8]) -> Result<Vec<u8>> {
            Ok(vec![0u8; 4])
        }

        fn provider_name(&self) -> &'static str {
            "truncating"
        }
    }

    #[tokio::test]
    async fn test_sha1_hello() {
        init_crypto();
        let hash = digest_message("hello", DigestAlgorithm::Sha1).await.unwrap();
        assert_eq!(hash, "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d");
    }

    #[tokio::test]
    async fn test_sha256_hello() {
        init_crypto();
        let hash = digest_message("hello", DigestAlgorithm::Sha256).await.unwrap();
        assert_eq!(
            hash,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[tokio::test]
    async fn test_output_is_lowercase_hex_of_expected_length() {
        for algorithm in [
            DigestAlgorithm::Sha1,
            DigestAlgorithm::Sha256,
            DigestAlgorithm::Sha384,
            DigestAlgorithm::Sha512,
        ] {
            let hash = digest_message_with(&RustCryptoProvider, "评论", algorithm)
                .await
                .unwrap();
            assert_eq!(hash.len(), algorithm.output_len() * 2);
            assert!(hash.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    #[tokio::test]
    async fn test_uninitialized_context_fails() {
        let context = CryptoContext::new();
        assert!(!context.is_initialized());

        let result = context.digest_message("hello", DigestAlgorithm::Sha1).await;
        assert!(matches!(result, Err(HelperError::CryptoUnavailable)));
    }

    #[tokio::test]
    async fn test_install_twice_fails() {
        let context = CryptoContext::new();
        context.install(Arc::new(RustCryptoProvider)).unwrap();
        assert!(context.is_initialized());

        let result = context.install(Arc::new(RustCryptoProvider));
        assert!(matches!(result, Err(HelperError::CryptoAlreadyInitialized)));
    }

    #[tokio::test]
    async fn test_init_default_keeps_installed_provider() {
        let context = CryptoContext::new();
        context.install(Arc::new(TruncatingProvider)).unwrap();
        assert_eq!(context.init_default().provider_name(), "truncating");
    }

    #[tokio::test]
    async fn test_wrong_length_is_rejected() {
        let result = digest_message_with(&TruncatingProvider, "hello", DigestAlgorithm::Sha1).await;
        assert!(matches!(result, Err(HelperError::DigestError(_))));
    }

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("SHA-1".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha1);
        assert_eq!("sha-256".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha256);
        assert!(matches!(
            "MD5".parse::<DigestAlgorithm>(),
            Err(HelperError::UnsupportedAlgorithm(_))
        ));
        assert_eq!(DigestAlgorithm::default(), DigestAlgorithm::Sha1);
    }

    #[test]
    fn test_algorithm_serde() {
        let json = serde_json::to_string(&DigestAlgorithm::Sha512).unwrap();
        assert_eq!(json, "\"SHA-512\"");
    }
}
