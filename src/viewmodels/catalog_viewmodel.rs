// ============================================================================
// CATALOG VIEWMODEL - Intents del catálogo
// ============================================================================
// Fetch/búsqueda con ticket anti-carreras, y mutaciones con refresco
// pesimista: tras cada mutación exitosa se repite el último fetch para
// reconciliar el cache con el stock autoritativo del servidor.
// ============================================================================

use crate::models::{SweetDraft, SweetUpdate};
use crate::services::{ApiClient, ApiError};
use crate::state::AppState;

/// ViewModel del catálogo - SOLO lógica de negocio
pub struct CatalogViewModel {
    api_client: ApiClient,
}

impl CatalogViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    // ------------------------------------------------------------------
    // Fetch / búsqueda
    // ------------------------------------------------------------------

    /// Cargar el catálogo completo
    pub async fn fetch_all(&self, state: &AppState) {
        self.fetch(state, None).await;
    }

    /// Buscar dulces. Una query vacía o de solo espacios equivale a listar
    /// todo: no se manda una búsqueda vacua al servidor.
    pub async fn search(&self, state: &AppState, query: &str) {
        self.fetch(state, normalize_query(query)).await;
    }

    async fn fetch(&self, state: &AppState, query: Option<String>) {
        let ticket = state.catalog.begin_fetch(&state.session, query.clone());
        state.notify_subscribers();

        let token = state.session.token();
        let result = match query.as_deref() {
            Some(q) => self.api_client.search_sweets(q, token.as_deref()).await,
            None => self.api_client.get_sweets(token.as_deref()).await,
        };

        let applied = match result {
            Ok(sweets) => {
                log::info!("📦 Catálogo recibido: {} dulces", sweets.len());
                state.catalog.apply_fetch_success(&state.session, &ticket, sweets)
            }
            Err(e) => {
                log::error!("❌ Error cargando catálogo: {}", e);
                let applied =
                    state.catalog.apply_fetch_failure(&state.session, &ticket, &e.to_string());
                if matches!(e, ApiError::Authorization(_)) {
                    log::warn!("⚠️ Credencial rechazada por el servidor, cerrando sesión");
                    state.session.logout();
                    state.notify_subscribers();
                }
                applied
            }
        };

        if applied {
            state.notify_subscribers();
        }
    }

    /// Refresco pesimista: repetir el último fetch (misma query) para
    /// reconciliar con el servidor
    async fn refresh(&self, state: &AppState) {
        let query = state.catalog.last_query();
        self.fetch(state, query).await;
    }

    // ------------------------------------------------------------------
    // Mutaciones
    // ------------------------------------------------------------------

    /// Comprar una unidad. Con stock local en 0 se rechaza client-side
    /// sin gastar un round trip: esa compra es inválida siempre.
    pub async fn purchase(&self, state: &AppState, id: i64) -> Result<(), ApiError> {
        if state.catalog.is_out_of_stock(id) {
            log::warn!("🚫 Compra rechazada client-side: dulce {} sin stock", id);
            return Err(ApiError::Conflict("Sin stock disponible".to_string()));
        }

        let token = state.session.token();
        let result = self.api_client.purchase_sweet(id, token.as_deref()).await;
        self.finish_mutation(state, result).await
    }

    /// Crear dulce (admin)
    pub async fn create(&self, state: &AppState, draft: SweetDraft) -> Result<(), ApiError> {
        let token = state.session.token();
        let result = self
            .api_client
            .create_sweet(&draft, token.as_deref())
            .await
            .map(|_| ());
        self.finish_mutation(state, result).await
    }

    /// Actualizar dulce (admin)
    pub async fn update(&self, state: &AppState, id: i64, update: SweetUpdate) -> Result<(), ApiError> {
        let token = state.session.token();
        let result = self
            .api_client
            .update_sweet(id, &update, token.as_deref())
            .await
            .map(|_| ());
        self.finish_mutation(state, result).await
    }

    /// Eliminar dulce (admin)
    pub async fn delete(&self, state: &AppState, id: i64) -> Result<(), ApiError> {
        let token = state.session.token();
        let result = self.api_client.delete_sweet(id, token.as_deref()).await;
        self.finish_mutation(state, result).await
    }

    /// Reponer stock (admin)
    pub async fn restock(&self, state: &AppState, id: i64, quantity: u32) -> Result<(), ApiError> {
        let token = state.session.token();
        let result = self
            .api_client
            .restock_sweet(id, quantity, token.as_deref())
            .await;
        self.finish_mutation(state, result).await
    }

    /// Cierre común de toda mutación: éxito → refresco pesimista;
    /// fallo → el cache queda intacto y el error sube a la vista.
    /// Una credencial rechazada dispara el logout implícito antes de subir.
    async fn finish_mutation(
        &self,
        state: &AppState,
        result: Result<(), ApiError>,
    ) -> Result<(), ApiError> {
        match result {
            Ok(()) => {
                self.refresh(state).await;
                Ok(())
            }
            Err(e) => {
                if matches!(e, ApiError::Authorization(_)) {
                    log::warn!("⚠️ Credencial rechazada por el servidor, cerrando sesión");
                    state.session.logout();
                    state.notify_subscribers();
                }
                Err(e)
            }
        }
    }
}

impl Default for CatalogViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// None = listar todo; Some = búsqueda con el término recortado
fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_means_fetch_all() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query("\t\n"), None);
    }

    #[test]
    fn test_query_is_trimmed() {
        assert_eq!(normalize_query("  choco  "), Some("choco".to_string()));
        assert_eq!(normalize_query("gummy"), Some("gummy".to_string()));
    }
}
