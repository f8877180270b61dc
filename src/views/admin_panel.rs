// ============================================================================
// ADMIN PANEL VIEW - Alta y edición de dulces
// ============================================================================
// Solo se renderiza con sesión admin. La autorización real la decide el
// servidor: esto es únicamente un gate de UI.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, input_value, on_click, on_input, on_submit, ElementBuilder};
use crate::models::{SweetDraft, SweetUpdate};
use crate::state::AppState;
use crate::utils::{parse_price, parse_quantity};
use crate::viewmodels::CatalogViewModel;

/// Renderizar panel de administración (formulario alta/edición)
pub fn render_admin_panel(state: &AppState) -> Result<Element, JsValue> {
    let editing = state.editing_sweet.borrow().clone();

    let panel = ElementBuilder::new("section")?.class("admin-panel").build();

    let title_text = match &editing {
        Some(sweet) => format!("Editing: {}", sweet.name),
        None => "Add a new sweet".to_string(),
    };
    let title = ElementBuilder::new("h2")?.text(&title_text).build();
    append_child(&panel, &title)?;

    // Estado local del formulario, precargado al editar
    let name = Rc::new(RefCell::new(
        editing.as_ref().map(|s| s.name.clone()).unwrap_or_default(),
    ));
    let category = Rc::new(RefCell::new(
        editing.as_ref().map(|s| s.category.clone()).unwrap_or_default(),
    ));
    let price = Rc::new(RefCell::new(
        editing.as_ref().map(|s| format!("{:.2}", s.price)).unwrap_or_default(),
    ));
    let quantity = Rc::new(RefCell::new(
        editing.as_ref().map(|s| s.quantity.to_string()).unwrap_or_default(),
    ));

    let form = ElementBuilder::new("form")?.class("admin-form").build();

    append_child(&form, &form_field("sweet-name", "Name", "text", name.clone())?)?;
    append_child(&form, &form_field("sweet-category", "Category", "text", category.clone())?)?;
    append_child(&form, &form_field("sweet-price", "Price", "number", price.clone())?)?;
    append_child(&form, &form_field("sweet-quantity", "Quantity", "number", quantity.clone())?)?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-primary")
        .text(if editing.is_some() { "Save changes" } else { "Create sweet" })
        .build();
    append_child(&form, &submit_btn)?;

    if editing.is_some() {
        let cancel_btn = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn btn-secondary")
            .text("Cancel")
            .build();
        {
            let state = state.clone();
            on_click(&cancel_btn, move |_| {
                *state.editing_sweet.borrow_mut() = None;
                state.notify_subscribers();
            })?;
        }
        append_child(&form, &cancel_btn)?;
    }

    {
        let state = state.clone();
        let editing_id = editing.as_ref().map(|s| s.id);
        on_submit(&form, move |e| {
            e.prevent_default();

            let name_val = name.borrow().trim().to_string();
            let category_val = category.borrow().trim().to_string();
            let price_val = parse_price(&price.borrow());
            let quantity_val = parse_quantity(&quantity.borrow());

            if name_val.is_empty() || category_val.is_empty() {
                state.flash_notice("Name and category are required".to_string());
                return;
            }
            let (price_val, quantity_val) = match (price_val, quantity_val) {
                (Some(p), Some(q)) => (p, q),
                _ => {
                    state.flash_notice("Invalid price or quantity".to_string());
                    return;
                }
            };

            let state = state.clone();
            spawn_local(async move {
                let vm = CatalogViewModel::new();
                let result = match editing_id {
                    Some(id) => {
                        let update = SweetUpdate {
                            name: Some(name_val),
                            category: Some(category_val),
                            price: Some(price_val),
                            quantity: Some(quantity_val),
                        };
                        vm.update(&state, id, update).await
                    }
                    None => {
                        let draft = SweetDraft {
                            name: name_val,
                            category: category_val,
                            price: price_val,
                            quantity: quantity_val,
                        };
                        vm.create(&state, draft).await
                    }
                };

                match result {
                    Ok(()) => {
                        *state.editing_sweet.borrow_mut() = None;
                        state.notify_subscribers();
                    }
                    Err(e) => {
                        log::error!("❌ Error guardando dulce: {}", e);
                        state.flash_notice(e.message().to_string());
                    }
                }
            });
        })?;
    }

    append_child(&panel, &form)?;
    Ok(panel)
}

/// Helper para crear campo del formulario con valor inicial
fn form_field(
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
        .attr("value", &value.borrow())?
        .class("form-input")
        .build();
    if input_type == "number" {
        input.set_attribute("step", "0.01")?;
        input.set_attribute("min", "0")?;
    }

    {
        let value = value.clone();
        on_input(&input, move |e| {
            if let Some(val) = input_value(&e) {
                *value.borrow_mut() = val;
            }
        })?;
    }

    append_child(&group, &label)?;
    append_child(&group, &input)?;
    Ok(group)
}
