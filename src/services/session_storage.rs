// ============================================================================
// SESSION STORAGE - Almacenamiento clave/valor con vida de pestaña
// ============================================================================

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use gloo_storage::{SessionStorage, Storage};

use crate::services::error::AppError;

/// Almacenamiento de strings crudos. En producción es `sessionStorage`;
/// en tests, un HashMap.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str);
}

/// `window.sessionStorage` sin serialización JSON: los valores se guardan
/// tal cual ("true", token).
#[derive(Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        SessionStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        SessionStorage::raw()
            .set_item(key, value)
            .map_err(|_| AppError::Storage(format!("no se pudo guardar {}", key)))
    }

    fn remove(&self, key: &str) {
        SessionStorage::delete(key);
    }
}

/// Implementación en memoria
#[cfg(test)]
#[derive(Default)]
pub struct MemorySessionStore {
    entries: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
impl MemorySessionStore {
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}
