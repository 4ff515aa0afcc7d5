//! Pick the storage backend the configuration asks for.
//!
//! Auto prefers localStorage (persistent) and falls back to memory when it
//! is unavailable, e.g. in a sandboxed frame that denies storage access.

use std::rc::Rc;

use relay_core::ports::StoragePort;
use relay_types::config::StorageBackendType;

use super::{LocalStorage, MemoryStorage};

/// Returns a trait object so callers are backend-agnostic.
pub fn detect_storage(backend: &StorageBackendType) -> Rc<dyn StoragePort> {
    let storage: Rc<dyn StoragePort> = match backend {
        StorageBackendType::Memory => Rc::new(MemoryStorage::new()),
        StorageBackendType::LocalStorage | StorageBackendType::Auto => {
            match LocalStorage::open() {
                Ok(local) => Rc::new(local),
                Err(e) => {
                    log::warn!("localStorage unavailable ({}), falling back to memory", e);
                    Rc::new(MemoryStorage::new())
                }
            }
        }
    };
    log::info!("Storage backend: {}", storage.backend_name());
    storage
}
