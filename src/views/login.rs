// ============================================================================
// LOGIN VIEW - Pantalla de login / registro
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, input_value, on_click, on_input, on_submit, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::{CatalogViewModel, SessionViewModel};

/// Renderizar pantalla de autenticación (login o registro según estado)
pub fn render_auth_screen(state: &AppState) -> Result<Element, JsValue> {
    let show_register = *state.show_register.borrow();

    let screen = ElementBuilder::new("div")?.class("auth-screen").build();
    let container = ElementBuilder::new("div")?.class("auth-container").build();

    let title = ElementBuilder::new("h2")?
        .text(if show_register { "Create account" } else { "Welcome back" })
        .build();
    append_child(&container, &title)?;

    // Error de autenticación (inline)
    if let Some(error) = state.auth_error.borrow().as_ref() {
        let error_el = ElementBuilder::new("div")?
            .class("auth-error")
            .text(error)
            .build();
        append_child(&container, &error_el)?;
    }

    let form = if show_register {
        render_register_form(state)?
    } else {
        render_login_form(state)?
    };
    append_child(&container, &form)?;

    // Toggle login <-> registro
    let toggle = ElementBuilder::new("button")?
        .class("btn-link")
        .text(if show_register {
            "Already have an account? Login"
        } else {
            "No account yet? Register"
        })
        .build();
    {
        let state = state.clone();
        on_click(&toggle, move |_| {
            let current = *state.show_register.borrow();
            *state.show_register.borrow_mut() = !current;
            *state.auth_error.borrow_mut() = None;
            state.notify_subscribers();
        })?;
    }
    append_child(&container, &toggle)?;

    append_child(&screen, &container)?;
    Ok(screen)
}

fn render_login_form(state: &AppState) -> Result<Element, JsValue> {
    // Estado local del formulario (en closures)
    let email = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));

    let form = ElementBuilder::new("form")?.class("auth-form").build();

    append_child(&form, &text_input("email", "Email", "email", email.clone())?)?;
    append_child(&form, &text_input("password", "Password", "password", password.clone())?)?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-primary btn-block")
        .text("Login")
        .build();
    append_child(&form, &submit_btn)?;

    {
        let state = state.clone();
        on_submit(&form, move |e| {
            e.prevent_default();

            let email_val = email.borrow().clone();
            let password_val = password.borrow().clone();

            if email_val.is_empty() || password_val.is_empty() {
                *state.auth_error.borrow_mut() = Some("Please fill in all fields".to_string());
                state.notify_subscribers();
                return;
            }

            if *state.auth_loading.borrow() {
                return;
            }
            *state.auth_loading.borrow_mut() = true;
            *state.auth_error.borrow_mut() = None;

            let state = state.clone();
            spawn_local(async move {
                let vm = SessionViewModel::new();
                match vm.login(&state, &email_val, &password_val).await {
                    Ok(()) => {
                        *state.show_auth.borrow_mut() = false;
                        *state.auth_loading.borrow_mut() = false;
                        state.notify_subscribers();
                        // Recargar el catálogo bajo la nueva sesión
                        CatalogViewModel::new().fetch_all(&state).await;
                    }
                    Err(e) => {
                        log::error!("❌ Error en login: {}", e);
                        *state.auth_error.borrow_mut() = Some(e.message().to_string());
                        *state.auth_loading.borrow_mut() = false;
                        state.notify_subscribers();
                    }
                }
            });
        })?;
    }

    Ok(form)
}

fn render_register_form(state: &AppState) -> Result<Element, JsValue> {
    let username = Rc::new(RefCell::new(String::new()));
    let email = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));

    let form = ElementBuilder::new("form")?.class("auth-form").build();

    append_child(&form, &text_input("username", "Username", "text", username.clone())?)?;
    append_child(&form, &text_input("email", "Email", "email", email.clone())?)?;
    append_child(&form, &text_input("password", "Password", "password", password.clone())?)?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-primary btn-block")
        .text("Register")
        .build();
    append_child(&form, &submit_btn)?;

    {
        let state = state.clone();
        on_submit(&form, move |e| {
            e.prevent_default();

            let username_val = username.borrow().clone();
            let email_val = email.borrow().clone();
            let password_val = password.borrow().clone();

            if username_val.is_empty() || email_val.is_empty() || password_val.is_empty() {
                *state.auth_error.borrow_mut() = Some("Please fill in all fields".to_string());
                state.notify_subscribers();
                return;
            }

            if *state.auth_loading.borrow() {
                return;
            }
            *state.auth_loading.borrow_mut() = true;
            *state.auth_error.borrow_mut() = None;

            let state = state.clone();
            spawn_local(async move {
                let vm = SessionViewModel::new();
                match vm.register(&state, &username_val, &email_val, &password_val).await {
                    Ok(()) => {
                        *state.show_auth.borrow_mut() = false;
                        *state.auth_loading.borrow_mut() = false;
                        state.notify_subscribers();
                        CatalogViewModel::new().fetch_all(&state).await;
                    }
                    Err(e) => {
                        log::error!("❌ Error en registro: {}", e);
                        *state.auth_error.borrow_mut() = Some(e.message().to_string());
                        *state.auth_loading.borrow_mut() = false;
                        state.notify_subscribers();
                    }
                }
            });
        })?;
    }

    Ok(form)
}

/// Helper para crear form group con input controlado
fn text_input(
    id: &str,
    label_text: &str,
    input_type: &str,
    value: Rc<RefCell<String>>,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();

    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    let input = ElementBuilder::new("input")?
        .attr("type", input_type)?
        .attr("id", id)?
        .attr("name", id)?
        .class("form-input")
        .build();

    on_input(&input, move |e| {
        if let Some(val) = input_value(&e) {
            *value.borrow_mut() = val;
        }
    })?;

    append_child(&group, &label)?;
    append_child(&group, &input)?;
    Ok(group)
}
