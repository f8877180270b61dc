// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{get_element_by_id, set_inner_html, append_child};
use crate::state::AppState;
use crate::viewmodels::CatalogViewModel;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Restaurar sesión persistida (sin red; storage es la fuente de verdad)
        state.session.restore();
        if state.session.is_authorized() {
            log::info!("✅ [APP] Sesión restaurada desde storage");
        }

        // Carga inicial del catálogo
        {
            let state_clone = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                CatalogViewModel::new().fetch_all(&state_clone).await;
            });
        }

        // Suscribirse a cambios de estado para re-renderizar automáticamente
        state.subscribe_to_changes(move || {
            // Timeout(0) para batchear múltiples updates en un solo render
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self { state, root })
    }

    /// Renderizar aplicación
    pub fn render(&mut self) -> Result<(), JsValue> {
        // Limpiar contenido anterior
        set_inner_html(&self.root, "");

        let app_view = render_app(&self.state)?;
        append_child(&self.root, &app_view)?;
        Ok(())
    }
}
