use serde::{Deserialize, Serialize};

/// Dulce del catálogo (entrada de inventario)
/// `quantity` es u32: el stock nunca puede ser negativo del lado cliente
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sweet {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
}

/// Datos para crear un dulce (POST /api/sweets)
#[derive(Debug, Clone, Serialize)]
pub struct SweetDraft {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
}

/// Actualización parcial de un dulce (PUT /api/sweets/{id})
/// Solo se serializan los campos presentes
#[derive(Debug, Clone, Default, Serialize)]
pub struct SweetUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

/// Body de POST /api/sweets/{id}/restock
#[derive(Debug, Clone, Serialize)]
pub struct RestockRequest {
    pub quantity: u32,
}
