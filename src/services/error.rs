// ============================================================================
// API ERROR - Taxonomía de errores del backend
// ============================================================================

/// Error etiquetado de las llamadas al backend.
/// Cada variante lleva un mensaje legible para mostrar al usuario.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// La request no llegó al servicio (conectividad, timeout, parse)
    Network(String),
    /// Credenciales inválidas en login/register
    Authentication(String),
    /// Credencial ausente/expirada o rol insuficiente en ruta protegida
    Authorization(String),
    /// Payload rechazado por el servidor (p.ej. precio negativo)
    Validation(String),
    /// Conflicto de stock (compra con cantidad 0)
    Conflict(String),
    /// El id objetivo no existe
    NotFound(String),
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            ApiError::Network(msg)
            | ApiError::Authentication(msg)
            | ApiError::Authorization(msg)
            | ApiError::Validation(msg)
            | ApiError::Conflict(msg)
            | ApiError::NotFound(msg) => msg,
        }
    }

    /// Mapear status HTTP de los endpoints de auth (login/register)
    pub(crate) fn from_auth_status(status: u16, detail: Option<String>) -> ApiError {
        let msg = detail.unwrap_or_else(|| format!("HTTP {}", status));
        match status {
            400 | 401 | 403 | 422 => ApiError::Authentication(msg),
            _ => ApiError::Network(msg),
        }
    }

    /// Mapear status HTTP de los endpoints del catálogo
    pub(crate) fn from_catalog_status(status: u16, detail: Option<String>) -> ApiError {
        let msg = detail.unwrap_or_else(|| format!("HTTP {}", status));
        match status {
            401 | 403 => ApiError::Authorization(msg),
            404 => ApiError::NotFound(msg),
            409 => ApiError::Conflict(msg),
            400 | 422 => ApiError::Validation(msg),
            _ => ApiError::Network(msg),
        }
    }

    /// Mapear status HTTP de /purchase: el backend reporta stock insuficiente
    /// como 400, que aquí es un conflicto de stock y no un error de payload
    pub(crate) fn from_purchase_status(status: u16, detail: Option<String>) -> ApiError {
        match status {
            400 => {
                let msg = detail.unwrap_or_else(|| "Sin stock disponible".to_string());
                ApiError::Conflict(msg)
            }
            _ => ApiError::from_catalog_status(status, detail),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Error de red: {}", msg),
            ApiError::Authentication(msg) => write!(f, "Error de autenticación: {}", msg),
            ApiError::Authorization(msg) => write!(f, "No autorizado: {}", msg),
            ApiError::Validation(msg) => write!(f, "Datos inválidos: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflicto: {}", msg),
            ApiError::NotFound(msg) => write!(f, "No encontrado: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_status_mapping() {
        assert!(matches!(
            ApiError::from_catalog_status(401, None),
            ApiError::Authorization(_)
        ));
        assert!(matches!(
            ApiError::from_catalog_status(403, Some("Admin privileges required".into())),
            ApiError::Authorization(_)
        ));
        assert!(matches!(
            ApiError::from_catalog_status(404, None),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from_catalog_status(422, None),
            ApiError::Validation(_)
        ));
        assert!(matches!(
            ApiError::from_catalog_status(500, None),
            ApiError::Network(_)
        ));
    }

    #[test]
    fn test_purchase_400_is_stock_conflict() {
        let err = ApiError::from_purchase_status(400, Some("Not enough quantity in stock".into()));
        assert_eq!(err, ApiError::Conflict("Not enough quantity in stock".into()));
        // El resto de estados se mapean igual que el catálogo
        assert!(matches!(
            ApiError::from_purchase_status(404, None),
            ApiError::NotFound(_)
        ));
    }

    #[test]
    fn test_auth_status_mapping() {
        assert!(matches!(
            ApiError::from_auth_status(401, Some("Incorrect email or password".into())),
            ApiError::Authentication(_)
        ));
        assert!(matches!(
            ApiError::from_auth_status(502, None),
            ApiError::Network(_)
        ));
    }

    #[test]
    fn test_detail_preserved_in_message() {
        let err = ApiError::from_catalog_status(403, Some("Admin privileges required".into()));
        assert_eq!(err.message(), "Admin privileges required");
    }
}
