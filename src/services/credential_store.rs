// ============================================================================
// CREDENTIAL STORE - Persistencia de credenciales entre reinicios
// ============================================================================
// Claves usadas: token de sesión (string opaco) y perfil de usuario (JSON).
// En el navegador se respalda con localStorage; los tests usan una
// implementación en memoria.
// ============================================================================

use crate::utils::{load_raw_from_storage, remove_from_storage, save_raw_to_storage};

/// Persistencia clave-valor para la sesión
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str);
}

/// Implementación sobre localStorage del navegador
pub struct LocalCredentialStore;

impl CredentialStore for LocalCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        load_raw_from_storage(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        save_raw_to_storage(key, value)
    }

    fn remove(&self, key: &str) {
        if let Err(e) = remove_from_storage(key) {
            log::error!("❌ Error eliminando '{}' de localStorage: {}", key, e);
        }
    }
}

/// Store en memoria para tests (simula localStorage entre "reinicios"
/// compartiendo el mismo Rc entre dos SessionState)
#[cfg(test)]
pub struct MemoryCredentialStore {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            entries: std::cell::RefCell::new(std::collections::HashMap::new()),
        }
    }
}

#[cfg(test)]
impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
