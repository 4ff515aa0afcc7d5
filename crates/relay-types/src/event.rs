use serde::{Deserialize, Serialize};

use crate::session::SessionRecord;

/// Events emitted by the session controller and drained by the UI each
/// frame. The table is only ever redrawn from a full `CatalogReplaced`
/// snapshot; single rows are never patched in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SessionEvent {
    CatalogReplaced { sessions: Vec<SessionRecord> },
    FormFilled { id: String, http_proxy: String },
    Error { message: String },
}
