// ============================================================================
// APP VIEW - Componente principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::AppState;
use crate::views::admin_panel::render_admin_panel;
use crate::views::header::render_header;
use crate::views::login::render_auth_screen;
use crate::views::sweet_list::{render_search_bar, render_sweet_list};

/// Renderizar aplicación completa
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let app = ElementBuilder::new("div")?.class("app").build();

    append_child(&app, &render_header(state)?)?;

    let main = ElementBuilder::new("main")?.class("main-content").build();

    // Aviso transitorio (errores de mutación)
    if let Some(notice) = state.notice.borrow().as_ref() {
        let notice_el = ElementBuilder::new("div")?
            .class("notice")
            .text(notice)
            .build();
        append_child(&main, &notice_el)?;
    }

    if !state.session.is_authorized() && *state.show_auth.borrow() {
        // Pantalla de login/registro
        append_child(&main, &render_auth_screen(state)?)?;
    } else {
        // Catálogo: se navega con o sin sesión
        let title = ElementBuilder::new("h1")?
            .class("page-title")
            .text("Sweet Shop")
            .build();
        append_child(&main, &title)?;

        append_child(&main, &render_search_bar(state)?)?;

        if state.session.is_admin() {
            append_child(&main, &render_admin_panel(state)?)?;
        }

        append_child(&main, &render_sweet_list(state)?)?;
    }

    append_child(&app, &main)?;
    Ok(app)
}
