// ============================================================================
// SWEET CARD VIEW - Tarjeta de un dulce del catálogo
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::Sweet;
use crate::state::AppState;
use crate::utils::format_price;
use crate::viewmodels::CatalogViewModel;

/// Renderizar tarjeta de dulce
pub fn render_sweet_card(state: &AppState, sweet: &Sweet) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?
        .class("card sweet-card")
        .attr("data-id", &sweet.id.to_string())?
        .build();

    let name = ElementBuilder::new("h3")?.text(&sweet.name).build();
    append_child(&card, &name)?;

    let category = ElementBuilder::new("p")?
        .class("category")
        .text(&sweet.category)
        .build();
    append_child(&card, &category)?;

    let price = ElementBuilder::new("p")?
        .class("price")
        .text(&format_price(sweet.price))
        .build();
    append_child(&card, &price)?;

    let in_stock = sweet.quantity > 0;
    let stock = ElementBuilder::new("p")?
        .class(if in_stock { "quantity in-stock" } else { "quantity out-of-stock" })
        .text(&if in_stock {
            format!("In Stock: {}", sweet.quantity)
        } else {
            "Out of Stock".to_string()
        })
        .build();
    append_child(&card, &stock)?;

    // Botón de compra: solo con sesión activa; deshabilitado sin stock
    if state.session.is_authorized() {
        let purchase_btn = ElementBuilder::new("button")?
            .class("btn btn-primary")
            .text("Purchase")
            .build();
        if !in_stock {
            purchase_btn.set_attribute("disabled", "true")?;
        }

        {
            let state = state.clone();
            let id = sweet.id;
            on_click(&purchase_btn, move |_| {
                let state = state.clone();
                spawn_local(async move {
                    let vm = CatalogViewModel::new();
                    if let Err(e) = vm.purchase(&state, id).await {
                        log::error!("❌ Error comprando dulce {}: {}", id, e);
                        state.flash_notice(e.message().to_string());
                    }
                });
            })?;
        }
        append_child(&card, &purchase_btn)?;
    }

    // Controles de administración
    if state.session.is_admin() {
        append_child(&card, &render_admin_controls(state, sweet)?)?;
    }

    Ok(card)
}

/// Controles admin por dulce: editar, eliminar, reponer stock
fn render_admin_controls(state: &AppState, sweet: &Sweet) -> Result<Element, JsValue> {
    let controls = ElementBuilder::new("div")?.class("admin-controls").build();

    let edit_btn = ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .text("Edit")
        .build();
    {
        let state = state.clone();
        let sweet = sweet.clone();
        on_click(&edit_btn, move |_| {
            *state.editing_sweet.borrow_mut() = Some(sweet.clone());
            state.notify_subscribers();
        })?;
    }
    append_child(&controls, &edit_btn)?;

    let delete_btn = ElementBuilder::new("button")?
        .class("btn btn-danger")
        .text("Delete")
        .build();
    {
        let state = state.clone();
        let id = sweet.id;
        on_click(&delete_btn, move |_| {
            let state = state.clone();
            spawn_local(async move {
                let vm = CatalogViewModel::new();
                if let Err(e) = vm.delete(&state, id).await {
                    log::error!("❌ Error eliminando dulce {}: {}", id, e);
                    state.flash_notice(e.message().to_string());
                }
            });
        })?;
    }
    append_child(&controls, &delete_btn)?;

    let restock_btn = ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .text("Restock +10")
        .build();
    {
        let state = state.clone();
        let id = sweet.id;
        on_click(&restock_btn, move |_| {
            let state = state.clone();
            spawn_local(async move {
                let vm = CatalogViewModel::new();
                if let Err(e) = vm.restock(&state, id, 10).await {
                    log::error!("❌ Error reponiendo dulce {}: {}", id, e);
                    state.flash_notice(e.message().to_string());
                }
            });
        })?;
    }
    append_child(&controls, &restock_btn)?;

    Ok(controls)
}
