//! UI-level state that drives rendering.
//! Updated each frame by draining the controller's event bus; the panels
//! read and edit it directly.

use relay_types::event::SessionEvent;
use relay_types::session::{LaunchRequest, SessionRecord};

/// State visible to UI panels
pub struct UiState {
    /// Form fields
    pub session_id: String,
    pub http_proxy: String,
    pub target_url: String,
    pub shared_secret: String,
    /// Rows currently shown in the table
    pub sessions: Vec<SessionRecord>,
    /// The single error banner; hidden when `None`. Cleared at the start
    /// of every user-initiated action, overwritten by the next failure.
    pub error: Option<String>,
    /// Whether the advanced-options section is expanded. In-memory only;
    /// reset on reload.
    pub show_advanced: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            session_id: String::new(),
            http_proxy: String::new(),
            target_url: String::new(),
            shared_secret: String::new(),
            sessions: Vec::new(),
            error: None,
            show_advanced: false,
        }
    }

    /// Process events from the controller and update UI state
    pub fn process_events(&mut self, events: Vec<SessionEvent>) {
        for event in events {
            match event {
                SessionEvent::CatalogReplaced { sessions } => {
                    self.sessions = sessions;
                }
                SessionEvent::FormFilled { id, http_proxy } => {
                    self.session_id = id;
                    self.http_proxy = http_proxy;
                }
                SessionEvent::Error { message } => {
                    self.error = Some(message);
                }
            }
        }
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// The shared secret as the API wants it: absent when the field is
    /// empty. Snapshotted per dispatch, never cached.
    pub fn auth(&self) -> Option<String> {
        if self.shared_secret.is_empty() {
            None
        } else {
            Some(self.shared_secret.clone())
        }
    }

    /// Snapshot the form for the launch pipeline.
    pub fn launch_request(&self) -> LaunchRequest {
        LaunchRequest {
            id: self.session_id.clone(),
            http_proxy: self.http_proxy.clone(),
            url: self.target_url.clone(),
            auth: self.auth(),
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
