//! Session controller — sequences the catalog store, the session API, and
//! navigation.
//!
//! Every method is async and must be spawned via
//! `wasm_bindgen_futures::spawn_local`; suspension only happens at network
//! boundaries. Methods emit `SessionEvent`s for the UI as they go and
//! return `Err` for anything that should reach the error banner (or, for
//! hard faults, the log).

use std::rc::Rc;

use relay_types::config::RelayConfig;
use relay_types::event::SessionEvent;
use relay_types::session::{LaunchRequest, SessionRecord};
use relay_types::{RelayError, Result};

use crate::catalog::CatalogStore;
use crate::event_bus::EventBus;
use crate::ports::{NavigatorPort, SessionApi, StoragePort};

pub struct SessionController {
    pub config: RelayConfig,
    catalog: CatalogStore,
    event_bus: EventBus,
}

impl SessionController {
    pub fn new(storage: Rc<dyn StoragePort>, config: RelayConfig, event_bus: EventBus) -> Self {
        Self {
            config,
            catalog: CatalogStore::new(storage),
            event_bus,
        }
    }

    /// On load: populate the form from the default session if it resolves,
    /// then render the table from the full catalog.
    pub async fn restore(&self) {
        if let Some(record) = self.catalog.default_session().await {
            self.emit_form(&record.id, record.http_proxy.as_deref());
        }
        let sessions = self.catalog.load().await;
        self.emit_catalog(sessions);
    }

    /// Ask the server for a new session and remember it locally. The new
    /// record goes to the front of the catalog; existing records keep
    /// their relative order.
    pub async fn create(&self, api: &dyn SessionApi, auth: Option<&str>) -> Result<String> {
        let id = api.create_session(auth).await?;
        let sessions = self.catalog.prepend(SessionRecord::new(id.clone())).await?;
        self.emit_catalog(sessions);
        self.emit_form(&id, None);
        log::info!("Created session {}", id);
        Ok(id)
    }

    /// Load a known session into the form and make it the default.
    /// No network call.
    pub async fn fill_in(&self, id: &str) -> Result<()> {
        self.catalog.set_default(id).await?;
        match self.catalog.load().await.into_iter().find(|s| s.id == id) {
            Some(record) => self.emit_form(&record.id, record.http_proxy.as_deref()),
            None => log::warn!("Fill-in for session {} no longer in the catalog", id),
        }
        Ok(())
    }

    /// Delete a session on the server, then forget it locally. A session
    /// the server no longer knows still gets removed from the catalog; on
    /// any failure the catalog is left untouched.
    pub async fn delete(&self, api: &dyn SessionApi, id: &str, auth: Option<&str>) -> Result<()> {
        api.delete_session(id, auth).await?;
        let sessions = self.catalog.remove(id).await?;
        self.emit_catalog(sessions);
        log::info!("Deleted session {}", id);
        Ok(())
    }

    /// The launch pipeline, strictly ordered: existence check, then the
    /// upstream-override edit, then navigation. A later step never runs
    /// when an earlier one failed. Returns the proxied URL navigated to.
    pub async fn launch(
        &self,
        api: &dyn SessionApi,
        navigator: &dyn NavigatorPort,
        request: LaunchRequest,
    ) -> Result<String> {
        if request.id.is_empty() {
            return Err(RelayError::MissingSessionId);
        }
        let auth = request.auth.as_deref();

        if !api.session_exists(&request.id, auth).await? {
            return Err(RelayError::SessionMissing);
        }

        let http_proxy = non_empty(&request.http_proxy);
        api.update_session(&request.id, http_proxy, auth).await?;
        let sessions = self
            .catalog
            .set_http_proxy(&request.id, http_proxy.map(str::to_string))
            .await?;
        self.emit_catalog(sessions);

        let target = non_empty(&request.url).unwrap_or(&self.config.fallback_url);
        let url = format!("/{}/{}", request.id, target);
        navigator.open(&url)?;
        log::info!("Launched session {} at {}", request.id, target);
        Ok(url)
    }

    fn emit_catalog(&self, sessions: Vec<SessionRecord>) {
        self.event_bus.emit(SessionEvent::CatalogReplaced { sessions });
    }

    fn emit_form(&self, id: &str, http_proxy: Option<&str>) {
        self.event_bus.emit(SessionEvent::FormFilled {
            id: id.to_string(),
            http_proxy: http_proxy.unwrap_or_default().to_string(),
        });
    }
}

/// Form fields use the empty string for "not set".
fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
