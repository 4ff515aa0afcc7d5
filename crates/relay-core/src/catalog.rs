//! Persisted session catalog and default-session pointer.
//!
//! Two keys in the key-value store: the catalog is a JSON array of records,
//! the default pointer a raw id string. Every mutation fully re-reads the
//! catalog, changes it in memory, and re-writes the whole array; there is
//! no finer-grained update.

use std::rc::Rc;

use relay_types::session::SessionRecord;
use relay_types::{RelayError, Result};

use crate::ports::StoragePort;

const SESSIONS_KEY: &str = "relay:sessions";
const DEFAULT_KEY: &str = "relay:default_session";

pub struct CatalogStore {
    storage: Rc<dyn StoragePort>,
}

impl CatalogStore {
    pub fn new(storage: Rc<dyn StoragePort>) -> Self {
        Self { storage }
    }

    /// Read the catalog. A missing key or a value that does not decode as
    /// an array of records heals to the empty catalog; corruption is never
    /// surfaced as an error.
    pub async fn load(&self) -> Vec<SessionRecord> {
        let raw = match self.storage.get(SESSIONS_KEY).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("Failed to read session catalog: {}", e);
                return Vec::new();
            }
        };
        match serde_json::from_slice::<Vec<SessionRecord>>(&raw) {
            Ok(sessions) => sessions,
            Err(e) => {
                log::warn!("Discarding unreadable session catalog: {}", e);
                Vec::new()
            }
        }
    }

    /// Persist the whole catalog, newest first.
    pub async fn save(&self, sessions: &[SessionRecord]) -> Result<()> {
        let json = serde_json::to_vec(sessions)?;
        self.storage.set(SESSIONS_KEY, &json).await
    }

    /// Resolve the default pointer against the current catalog. An unset
    /// pointer, or one naming an id no longer in the catalog, is absent.
    pub async fn default_session(&self) -> Option<SessionRecord> {
        let raw = self.storage.get(DEFAULT_KEY).await.ok()??;
        let id = String::from_utf8(raw).ok()?;
        if id.is_empty() {
            return None;
        }
        self.load().await.into_iter().find(|s| s.id == id)
    }

    /// Persist the pointer unconditionally; it is not checked to resolve.
    pub async fn set_default(&self, id: &str) -> Result<()> {
        self.storage.set(DEFAULT_KEY, id.as_bytes()).await
    }

    /// Add a freshly created session at the front of the catalog.
    pub async fn prepend(&self, record: SessionRecord) -> Result<Vec<SessionRecord>> {
        let mut sessions = self.load().await;
        sessions.insert(0, record);
        self.save(&sessions).await?;
        Ok(sessions)
    }

    /// Remove a session by id. Removing an id the catalog does not hold is
    /// a no-op; the server-side delete already succeeded.
    pub async fn remove(&self, id: &str) -> Result<Vec<SessionRecord>> {
        let mut sessions = self.load().await;
        sessions.retain(|s| s.id != id);
        self.save(&sessions).await?;
        Ok(sessions)
    }

    /// Update one record's upstream override in place. The id must be in
    /// the catalog: the server just confirmed an edit for it, so a miss
    /// means the local and remote views have diverged.
    pub async fn set_http_proxy(
        &self,
        id: &str,
        http_proxy: Option<String>,
    ) -> Result<Vec<SessionRecord>> {
        let mut sessions = self.load().await;
        match sessions.iter_mut().find(|s| s.id == id) {
            Some(record) => record.http_proxy = http_proxy,
            None => return Err(RelayError::CatalogDesync(id.to_string())),
        }
        self.save(&sessions).await?;
        Ok(sessions)
    }
}
