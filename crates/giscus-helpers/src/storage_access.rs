//! Storage-access permission under tracking protection
//!
//! With strict tracking protection enabled, an embedded frame may be denied
//! access to persistent storage until it asks for it.

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;

/// Trait for the host's storage-access permission API
#[async_trait]
pub trait StorageAccessApi: Send + Sync {
    /// Whether storage access is currently granted
    async fn has_storage_access(&self) -> Result<bool>;

    /// Ask for storage access. Hosts only honour this in narrow circumstances.
    async fn request_storage_access(&self) -> Result<()>;
}

/// Check for storage access, requesting it if needed.
///
/// `None` means the host has no such API, which is treated as access granted.
/// A failed request is ignored and the status checked again.
pub async fn has_storage_access(api: Option<&dyn StorageAccessApi>) -> Result<bool> {
    let Some(api) = api else {
        return Ok(true);
    };

    if api.has_storage_access().await? {
        return Ok(true);
    }

    if let Err(e) = api.request_storage_access().await {
        debug!("Storage access request was not granted: {}", e);
    }

    api.has_storage_access().await
}
