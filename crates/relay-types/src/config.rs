use serde::{Deserialize, Serialize};

/// Top-level client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Base URL of the session server. Empty means same origin, which is
    /// the normal deployment: the page is served by the proxy itself.
    pub api_base: String,
    /// Where a launch goes when the URL field is left empty.
    pub fallback_url: String,
    pub storage: StorageBackendType,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            fallback_url: "https://www.google.com/".to_string(),
            storage: StorageBackendType::Auto,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageBackendType {
    /// Auto-detect best available backend
    Auto,
    LocalStorage,
    Memory,
}

impl StorageBackendType {
    pub fn label(&self) -> &str {
        match self {
            StorageBackendType::Auto => "Auto-detect",
            StorageBackendType::LocalStorage => "localStorage",
            StorageBackendType::Memory => "Memory",
        }
    }
}
