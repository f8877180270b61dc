// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio ni cache: una request por llamada, sin reintentos.
// El token se recibe como argumento; con None la request va sin Authorization.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, RestockRequest, Sweet, SweetDraft, SweetUpdate};
use crate::services::error::ApiError;
use crate::utils::constants::BACKEND_URL;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    /// Login (POST /api/auth/login)
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let url = format!("{}/api/auth/login", self.base_url);
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = Request::post(&url)
            .json(&body)
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if response.ok() {
            response
                .json::<AuthResponse>()
                .await
                .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))
        } else {
            let detail = read_detail(&response).await;
            Err(ApiError::from_auth_status(response.status(), detail))
        }
    }

    /// Registro de usuario (POST /api/auth/register)
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let url = format!("{}/api/auth/register", self.base_url);
        let body = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = Request::post(&url)
            .json(&body)
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if response.ok() {
            response
                .json::<AuthResponse>()
                .await
                .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))
        } else {
            let detail = read_detail(&response).await;
            Err(ApiError::from_auth_status(response.status(), detail))
        }
    }

    // ------------------------------------------------------------------
    // Catálogo
    // ------------------------------------------------------------------

    /// Listar todos los dulces (GET /api/sweets) - funciona sin sesión,
    /// pero con sesión activa el token viaja igual
    pub async fn get_sweets(&self, token: Option<&str>) -> Result<Vec<Sweet>, ApiError> {
        let url = format!("{}/api/sweets", self.base_url);
        let response = with_bearer(Request::get(&url), token)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        read_sweet_list(response).await
    }

    /// Buscar dulces (GET /api/sweets/search?q=...) - funciona sin sesión
    pub async fn search_sweets(
        &self,
        query: &str,
        token: Option<&str>,
    ) -> Result<Vec<Sweet>, ApiError> {
        let url = format!("{}/api/sweets/search", self.base_url);
        let response = with_bearer(Request::get(&url), token)
            .query([("q", query)])
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        read_sweet_list(response).await
    }

    /// Crear dulce (POST /api/sweets) - requiere admin
    pub async fn create_sweet(
        &self,
        draft: &SweetDraft,
        token: Option<&str>,
    ) -> Result<Sweet, ApiError> {
        let url = format!("{}/api/sweets", self.base_url);
        let response = with_bearer(Request::post(&url), token)
            .json(draft)
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if response.ok() {
            response
                .json::<Sweet>()
                .await
                .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))
        } else {
            let detail = read_detail(&response).await;
            Err(ApiError::from_catalog_status(response.status(), detail))
        }
    }

    /// Actualizar dulce (PUT /api/sweets/{id}) - requiere admin
    pub async fn update_sweet(
        &self,
        id: i64,
        update: &SweetUpdate,
        token: Option<&str>,
    ) -> Result<Sweet, ApiError> {
        let url = format!("{}/api/sweets/{}", self.base_url, id);
        let response = with_bearer(Request::put(&url), token)
            .json(update)
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if response.ok() {
            response
                .json::<Sweet>()
                .await
                .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))
        } else {
            let detail = read_detail(&response).await;
            Err(ApiError::from_catalog_status(response.status(), detail))
        }
    }

    /// Eliminar dulce (DELETE /api/sweets/{id}) - requiere admin
    pub async fn delete_sweet(&self, id: i64, token: Option<&str>) -> Result<(), ApiError> {
        let url = format!("{}/api/sweets/{}", self.base_url, id);
        let response = with_bearer(Request::delete(&url), token)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if response.ok() {
            Ok(())
        } else {
            let detail = read_detail(&response).await;
            Err(ApiError::from_catalog_status(response.status(), detail))
        }
    }

    /// Comprar una unidad (POST /api/sweets/{id}/purchase) - requiere auth
    /// El servidor decrementa quantity en 1 y falla si es 0
    pub async fn purchase_sweet(&self, id: i64, token: Option<&str>) -> Result<(), ApiError> {
        let url = format!("{}/api/sweets/{}/purchase", self.base_url, id);
        let response = with_bearer(Request::post(&url), token)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if response.ok() {
            Ok(())
        } else {
            let detail = read_detail(&response).await;
            Err(ApiError::from_purchase_status(response.status(), detail))
        }
    }

    /// Reponer stock (POST /api/sweets/{id}/restock) - requiere admin
    pub async fn restock_sweet(
        &self,
        id: i64,
        quantity: u32,
        token: Option<&str>,
    ) -> Result<(), ApiError> {
        let url = format!("{}/api/sweets/{}/restock", self.base_url, id);
        let body = RestockRequest { quantity };
        let response = with_bearer(Request::post(&url), token)
            .json(&body)
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if response.ok() {
            Ok(())
        } else {
            let detail = read_detail(&response).await;
            Err(ApiError::from_catalog_status(response.status(), detail))
        }
    }
}

/// Adjuntar `Authorization: Bearer <token>` si hay sesión activa
fn with_bearer(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Leer una respuesta ok como lista de dulces, o mapear el error
async fn read_sweet_list(response: Response) -> Result<Vec<Sweet>, ApiError> {
    if response.ok() {
        response
            .json::<Vec<Sweet>>()
            .await
            .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))
    } else {
        let detail = read_detail(&response).await;
        Err(ApiError::from_catalog_status(response.status(), detail))
    }
}

/// Extraer el campo `detail` del body de error de FastAPI ({"detail": ...})
async fn read_detail(response: &Response) -> Option<String> {
    let body: serde_json::Value = response.json().await.ok()?;
    match body.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
