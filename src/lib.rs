// ============================================================================
// SWEET SHOP - FRONTEND MVVM (RUST PURO)
// ============================================================================
// Arquitectura:
// - Views: funciones que renderizan DOM (sin lógica)
// - ViewModels: intents + lógica de negocio
// - Services: SOLO comunicación API + persistencia de credenciales
// - State: State Management con Rc<RefCell>
// - Models: estructuras compartidas con el backend
// ============================================================================

mod app;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🍭 Sweet Shop - Rust Puro + MVVM");

    // Crear y renderizar app
    let mut app = App::new()?;
    app.render()?;

    // Guardar app en variable global
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-renderizar la aplicación completa (llamado por los subscribers de estado)
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(app) = app_cell.borrow_mut().as_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ Error re-renderizando app: {:?}", e);
            }
        }
    });
}
