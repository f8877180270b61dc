// ============================================================================
// SESSION VIEWMODEL - Lógica de autenticación
// ============================================================================
// Orquesta ApiClient + SessionState. Las vistas solo llaman intents;
// el estado se muta únicamente a través de las operaciones de SessionState.
// ============================================================================

use crate::services::{ApiClient, ApiError};
use crate::state::AppState;

/// ViewModel de sesión - SOLO lógica de negocio
pub struct SessionViewModel {
    api_client: ApiClient,
}

impl SessionViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Login contra el backend e instalación de la sesión
    pub async fn login(&self, state: &AppState, email: &str, password: &str) -> Result<(), ApiError> {
        log::info!("🔐 Iniciando login de {}", email);

        let response = self.api_client.login(email, password).await?;

        log::info!(
            "✅ Login exitoso: {} (admin: {})",
            response.user.username,
            response.user.is_admin
        );
        state.session.login(response.access_token, response.user);
        Ok(())
    }

    /// Registro de usuario nuevo; el backend devuelve la sesión ya iniciada
    pub async fn register(
        &self,
        state: &AppState,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        log::info!("📝 Registrando usuario {}", username);

        let response = self.api_client.register(username, email, password).await?;

        log::info!("✅ Registro exitoso: {}", response.user.username);
        state.session.login(response.access_token, response.user);
        Ok(())
    }

    /// Cerrar sesión
    pub fn logout(&self, state: &AppState) {
        log::info!("👋 Logout");
        state.session.logout();
    }
}

impl Default for SessionViewModel {
    fn default() -> Self {
        Self::new()
    }
}
