//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `relay-core` (pure Rust).
//! Implementations live in `relay-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use relay_types::Result;

// ─── Session API Port ────────────────────────────────────────

/// The four logical operations of the session server. The server speaks a
/// plain-text contract ("Success", "exists", "not found"); implementations
/// decode it here and only typed results cross this boundary.
///
/// `auth` is the shared secret, forwarded as the `pwd` query parameter when
/// present. Callers read it fresh from the form on every dispatch; the
/// client never caches it.
#[async_trait(?Send)]
pub trait SessionApi {
    /// Ask the server for a new session. The body of any 2xx response is
    /// the new session id.
    async fn create_session(&self, auth: Option<&str>) -> Result<String>;

    /// Change a session's upstream override. `None` clears it.
    async fn update_session(
        &self,
        id: &str,
        http_proxy: Option<&str>,
        auth: Option<&str>,
    ) -> Result<()>;

    /// Whether the server still knows this session.
    async fn session_exists(&self, id: &str, auth: Option<&str>) -> Result<bool>;

    /// Issue the delete request without the existence pre-check.
    async fn delete_session_raw(&self, id: &str, auth: Option<&str>) -> Result<()>;

    /// Delete a session. Checks existence first; a session the server does
    /// not know about counts as already deleted and no delete request is
    /// issued for it.
    async fn delete_session(&self, id: &str, auth: Option<&str>) -> Result<()> {
        if self.session_exists(id, auth).await? {
            self.delete_session_raw(id, auth).await?;
        }
        Ok(())
    }
}

// ─── Storage Port ────────────────────────────────────────────

#[async_trait(?Send)]
pub trait StoragePort {
    /// Get a value by key
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Set a value
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Navigator Port ──────────────────────────────────────────

/// Opens the proxied destination in a new browsing context.
pub trait NavigatorPort {
    fn open(&self, url: &str) -> Result<()>;
}
