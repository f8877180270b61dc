// ============================================================================
// SESSION STATE - Sesión de usuario (token + perfil)
// ============================================================================
// Dueño único de la sesión. Token y perfil se instalan/limpian siempre juntos,
// con write-through al CredentialStore antes de tocar memoria: al reiniciar,
// restore() relee el storage como fuente de verdad.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Session, User};
use crate::services::{CredentialStore, LocalCredentialStore};
use crate::utils::{STORAGE_KEY_TOKEN, STORAGE_KEY_USER};

/// Estado de sesión
#[derive(Clone)]
pub struct SessionState {
    session: Rc<RefCell<Option<Session>>>,
    /// Se incrementa en cada login/logout; las respuestas en vuelo emitidas
    /// bajo otra época se descartan (ver CatalogState)
    epoch: Rc<RefCell<u64>>,
    store: Rc<dyn CredentialStore>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::with_store(Rc::new(LocalCredentialStore))
    }

    pub fn with_store(store: Rc<dyn CredentialStore>) -> Self {
        Self {
            session: Rc::new(RefCell::new(None)),
            epoch: Rc::new(RefCell::new(0)),
            store,
        }
    }

    /// Restaurar sesión persistida al arrancar. Nunca falla y no toca la red:
    /// un storage a medias o corrupto se limpia y se queda deslogueado.
    pub fn restore(&self) {
        let token = self.store.get(STORAGE_KEY_TOKEN);
        let user = self
            .store
            .get(STORAGE_KEY_USER)
            .and_then(|json| serde_json::from_str::<User>(&json).ok());

        match (token, user) {
            (Some(token), Some(user)) => {
                log::info!("💾 Sesión restaurada desde storage: {}", user.username);
                *self.session.borrow_mut() = Some(Session { token, user });
                *self.epoch.borrow_mut() += 1;
            }
            (None, None) => {}
            _ => {
                // Solo una de las dos claves presente (o perfil ilegible):
                // se trata como sin sesión y se limpia el storage
                log::warn!("⚠️ Credenciales persistidas incompletas, limpiando storage");
                self.store.remove(STORAGE_KEY_TOKEN);
                self.store.remove(STORAGE_KEY_USER);
            }
        }
    }

    /// Instalar la sesión tras un login exitoso. Idempotente ante replay.
    pub fn login(&self, token: String, user: User) {
        match serde_json::to_string(&user) {
            Ok(user_json) => {
                if let Err(e) = self.store.set(STORAGE_KEY_TOKEN, &token) {
                    log::error!("❌ Error persistiendo token: {}", e);
                }
                if let Err(e) = self.store.set(STORAGE_KEY_USER, &user_json) {
                    log::error!("❌ Error persistiendo perfil: {}", e);
                }
            }
            Err(e) => log::error!("❌ Error serializando perfil: {}", e),
        }

        *self.session.borrow_mut() = Some(Session { token, user });
        *self.epoch.borrow_mut() += 1;
    }

    /// Cerrar sesión: limpia memoria y storage. Siempre tiene éxito,
    /// haya o no sesión activa.
    pub fn logout(&self) {
        self.store.remove(STORAGE_KEY_TOKEN);
        self.store.remove(STORAGE_KEY_USER);
        *self.session.borrow_mut() = None;
        *self.epoch.borrow_mut() += 1;
    }

    pub fn session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.session.borrow().as_ref().map(|s| s.token.clone())
    }

    pub fn user(&self) -> Option<User> {
        self.session.borrow().as_ref().map(|s| s.user.clone())
    }

    pub fn is_authorized(&self) -> bool {
        self.session.borrow().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.session
            .borrow()
            .as_ref()
            .map(|s| s.user.is_admin)
            .unwrap_or(false)
    }

    pub fn epoch(&self) -> u64 {
        *self.epoch.borrow()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemoryCredentialStore;
    use crate::utils::{STORAGE_KEY_TOKEN, STORAGE_KEY_USER};

    fn test_user(is_admin: bool) -> User {
        User {
            id: 1,
            username: "admin".to_string(),
            email: "admin@x.com".to_string(),
            is_admin,
        }
    }

    #[test]
    fn test_login_then_restore_roundtrip() {
        let store: Rc<dyn CredentialStore> = Rc::new(MemoryCredentialStore::new());

        let session = SessionState::with_store(store.clone());
        session.login("tok-123".to_string(), test_user(true));

        // Simular reinicio: un SessionState nuevo sobre el mismo store
        let restarted = SessionState::with_store(store);
        restarted.restore();

        assert_eq!(restarted.session(), session.session());
        assert!(restarted.is_authorized());
        assert!(restarted.is_admin());
    }

    #[test]
    fn test_logout_clears_memory_and_store() {
        let store: Rc<dyn CredentialStore> = Rc::new(MemoryCredentialStore::new());
        let session = SessionState::with_store(store.clone());

        session.login("tok-123".to_string(), test_user(false));
        session.logout();

        assert!(!session.is_authorized());
        assert_eq!(store.get(STORAGE_KEY_TOKEN), None);
        assert_eq!(store.get(STORAGE_KEY_USER), None);

        // Logout sin sesión activa también tiene éxito
        session.logout();
        assert!(!session.is_authorized());
    }

    #[test]
    fn test_restore_with_half_present_store_clears_it() {
        let store: Rc<dyn CredentialStore> = Rc::new(MemoryCredentialStore::new());
        store.set(STORAGE_KEY_TOKEN, "tok-huérfano").unwrap();

        let session = SessionState::with_store(store.clone());
        session.restore();

        assert!(!session.is_authorized());
        assert_eq!(store.get(STORAGE_KEY_TOKEN), None);
    }

    #[test]
    fn test_restore_with_corrupt_profile_fails_open_to_logged_out() {
        let store: Rc<dyn CredentialStore> = Rc::new(MemoryCredentialStore::new());
        store.set(STORAGE_KEY_TOKEN, "tok-123").unwrap();
        store.set(STORAGE_KEY_USER, "{esto no es json").unwrap();

        let session = SessionState::with_store(store.clone());
        session.restore();

        assert!(!session.is_authorized());
        assert_eq!(store.get(STORAGE_KEY_TOKEN), None);
        assert_eq!(store.get(STORAGE_KEY_USER), None);
    }

    #[test]
    fn test_is_admin_derives_from_profile() {
        let session = SessionState::with_store(Rc::new(MemoryCredentialStore::new()));
        assert!(!session.is_admin());

        session.login("tok".to_string(), test_user(false));
        assert!(session.is_authorized());
        assert!(!session.is_admin());

        session.login("tok".to_string(), test_user(true));
        assert!(session.is_admin());
    }

    #[test]
    fn test_login_and_logout_bump_epoch() {
        let session = SessionState::with_store(Rc::new(MemoryCredentialStore::new()));
        let e0 = session.epoch();

        session.login("tok".to_string(), test_user(false));
        let e1 = session.epoch();
        assert!(e1 > e0);

        session.logout();
        assert!(session.epoch() > e1);
    }
}
