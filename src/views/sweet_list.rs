// ============================================================================
// SWEET LIST VIEW - Búsqueda + grilla del catálogo
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, input_value, on_input, on_submit, ElementBuilder};
use crate::state::{AppState, CatalogPhase};
use crate::viewmodels::CatalogViewModel;
use crate::views::sweet_card::render_sweet_card;

/// Renderizar barra de búsqueda
pub fn render_search_bar(state: &AppState) -> Result<Element, JsValue> {
    let form = ElementBuilder::new("form")?.class("search-bar").build();

    let input = ElementBuilder::new("input")?
        .attr("type", "text")?
        .attr("placeholder", "Search sweets...")?
        .attr("value", &state.search_input.borrow())?
        .class("search-input")
        .build();

    {
        let search_input = state.search_input.clone();
        on_input(&input, move |e| {
            if let Some(val) = input_value(&e) {
                *search_input.borrow_mut() = val;
            }
        })?;
    }
    append_child(&form, &input)?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-primary")
        .text("Search")
        .build();
    append_child(&form, &submit_btn)?;

    {
        let state = state.clone();
        on_submit(&form, move |e| {
            e.prevent_default();
            let query = state.search_input.borrow().clone();
            let state = state.clone();
            spawn_local(async move {
                // La normalización de query vacía vive en el viewmodel
                CatalogViewModel::new().search(&state, &query).await;
            });
        })?;
    }

    Ok(form)
}

/// Renderizar la grilla del catálogo según la fase de carga
pub fn render_sweet_list(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("sweet-list").build();

    let items = state.catalog.items();

    match state.catalog.phase() {
        CatalogPhase::Idle | CatalogPhase::Loading if items.is_empty() => {
            let loading = ElementBuilder::new("div")?
                .class("list-loading")
                .text("⏳ Loading sweets...")
                .build();
            append_child(&container, &loading)?;
            return Ok(container);
        }
        CatalogPhase::Loading => {
            // Hay items previos: se muestran con un indicador discreto
            let loading = ElementBuilder::new("div")?
                .class("list-refreshing")
                .text("⏳ Refreshing...")
                .build();
            append_child(&container, &loading)?;
        }
        CatalogPhase::Failed => {
            // Stale-but-visible: el error va encima de la última lista buena
            let message = state
                .catalog
                .error_message()
                .unwrap_or_else(|| "Something went wrong".to_string());
            let error_el = ElementBuilder::new("div")?
                .class("list-error")
                .text(&format!("⚠️ {}", message))
                .build();
            append_child(&container, &error_el)?;
        }
        _ => {}
    }

    if items.is_empty() {
        if state.catalog.phase() == CatalogPhase::Ready {
            let empty = ElementBuilder::new("div")?
                .class("list-empty")
                .text("No sweets found")
                .build();
            append_child(&container, &empty)?;
        }
        return Ok(container);
    }

    let grid = ElementBuilder::new("div")?.class("sweet-grid").build();
    for sweet in items.iter() {
        let card = render_sweet_card(state, sweet)?;
        append_child(&grid, &card)?;
    }
    append_child(&container, &grid)?;

    Ok(container)
}
