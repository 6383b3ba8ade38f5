//! Clipboard access

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;

/// Trait for host clipboards
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Replace the clipboard contents with `text`.
    ///
    /// Permission failures are reported as [`crate::HelperError::Clipboard`].
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// Copy text to the host clipboard, propagating any host error
pub async fn clipboard_copy(clipboard: &dyn Clipboard, text: &str) -> Result<()> {
    clipboard.write_text(text).await
}

/// Process-local clipboard for headless hosts
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: RwLock<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents, if anything was written
    pub async fn read_text(&self) -> Option<String> {
        self.contents.read().await.clone()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        *self.contents.write().await = Some(text.to_string());
        Ok(())
    }
}
