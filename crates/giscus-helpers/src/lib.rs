//! # giscus-helpers
//!
//! Presentation helpers for the giscus comment widget:
//! - Theme resolution and stylesheet URLs
//! - Origin, anchor and session-parameter cleanup for embedding pages
//! - SHA digests through a process-wide crypto provider
//! - Host seams for clipboard, storage access and textarea sizing
//! - CJK/Latin spacing fixup for rendered text

pub mod clipboard;
pub mod digest;
pub mod error;
pub mod settings;
pub mod storage_access;
pub mod textarea;
mod origin;
mod repo;
mod text;
mod theme;
mod value;

pub use clipboard::{clipboard_copy, Clipboard, MemoryClipboard};
pub use digest::{
    crypto_context, digest_message, digest_message_with, init_crypto, install_crypto_provider,
    CryptoContext, CryptoProvider, DigestAlgorithm, RustCryptoProvider,
};
pub use error::{HelperError, Result};
pub use origin::{
    clean_anchor, clean_session_param, get_origin_host, strip_query_param, OriginHost,
    SESSION_PARAM,
};
pub use repo::{parse_repo_with_owner, RepoWithOwner};
pub use settings::{default_settings_path, Settings};
pub use storage_access::{has_storage_access, StorageAccessApi};
pub use text::{fix_chinese_space, fix_chinese_space_for_function};
pub use textarea::{resize_text_area, resize_text_area_to, TextArea, MAX_TEXTAREA_HEIGHT};
pub use theme::{
    get_theme_url, resolve_theme, theme_url_in, BuiltinTheme, ResolvedTheme, DEFAULT_THEMES_PATH,
};
pub use value::{is_empty, IsEmpty};
