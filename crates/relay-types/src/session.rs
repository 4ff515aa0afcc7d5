use serde::{Deserialize, Serialize};

/// One server-side proxy session known to this client.
///
/// Records are created locally right after the server hands out an id and
/// are never revalidated against the server afterwards. The serialized
/// field names are the persisted wire shape and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    #[serde(rename = "createdOn")]
    pub created_on: String,
    /// Last HTTP upstream override submitted for this session.
    /// `None` means traffic is not routed through an upstream.
    #[serde(
        rename = "httpproxy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub http_proxy: Option<String>,
}

impl SessionRecord {
    pub fn new(id: String) -> Self {
        let created_on = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Self {
            id,
            created_on,
            http_proxy: None,
        }
    }
}

/// Everything the launch pipeline reads from the form in one snapshot.
#[derive(Debug, Clone, Default)]
pub struct LaunchRequest {
    pub id: String,
    /// Raw form value; an empty string means no override.
    pub http_proxy: String,
    /// Raw form value; an empty string falls back to the configured URL.
    pub url: String,
    pub auth: Option<String>,
}
