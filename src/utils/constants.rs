/// URL base del backend (Sweet Shop API)
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:8000 (por defecto)
/// - Producción: via BACKEND_URL env var (.env + build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Clave de localStorage para el token de sesión
pub const STORAGE_KEY_TOKEN: &str = "sweetshop_token";

/// Clave de localStorage para el perfil de usuario
pub const STORAGE_KEY_USER: &str = "sweetshop_user";
