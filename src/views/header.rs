// ============================================================================
// HEADER VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::SessionViewModel;

/// Renderizar header (marca + sesión)
pub fn render_header(state: &AppState) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?.class("header").build();
    let content = ElementBuilder::new("div")?.class("header-content").build();

    let logo = ElementBuilder::new("div")?
        .class("logo")
        .text("🍭 Sweet Shop")
        .build();
    append_child(&content, &logo)?;

    let nav = ElementBuilder::new("nav")?.class("nav-links").build();

    if let Some(user) = state.session.user() {
        let greeting = ElementBuilder::new("span")?
            .class("nav-user")
            .text(&format!("Hello, {}", user.username))
            .build();
        append_child(&nav, &greeting)?;

        if state.session.is_admin() {
            let badge = ElementBuilder::new("span")?
                .class("admin-badge")
                .text("Admin")
                .build();
            append_child(&nav, &badge)?;
        }

        let logout_btn = ElementBuilder::new("button")?
            .class("btn btn-secondary")
            .text("Logout")
            .build();
        {
            let state = state.clone();
            on_click(&logout_btn, move |_| {
                let vm = SessionViewModel::new();
                vm.logout(&state);
                state.notify_subscribers();
            })?;
        }
        append_child(&nav, &logout_btn)?;
    } else {
        let login_btn = ElementBuilder::new("button")?
            .class("btn btn-primary")
            .text("Login")
            .build();
        {
            let state = state.clone();
            on_click(&login_btn, move |_| {
                *state.show_auth.borrow_mut() = true;
                *state.show_register.borrow_mut() = false;
                *state.auth_error.borrow_mut() = None;
                state.notify_subscribers();
            })?;
        }
        append_child(&nav, &login_btn)?;

        let register_btn = ElementBuilder::new("button")?
            .class("btn btn-secondary")
            .text("Register")
            .build();
        {
            let state = state.clone();
            on_click(&register_btn, move |_| {
                *state.show_auth.borrow_mut() = true;
                *state.show_register.borrow_mut() = true;
                *state.auth_error.borrow_mut() = None;
                state.notify_subscribers();
            })?;
        }
        append_child(&nav, &register_btn)?;
    }

    append_child(&content, &nav)?;
    append_child(&header, &content)?;
    Ok(header)
}
