//! Detail card of the selected reservoir.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn DetailPanel() -> Element {
    let mut state = use_context::<AppState>();
    let detail = (state.selected_id)().and_then(|id| state.dashboard.read().detail(id));

    let Some(detail) = detail else {
        return rsx! {
            div {
                class: "map-placeholder",
                style: "padding: 24px; text-align: center; color: #7f8c8d;",
                i { class: "fas fa-map", style: "font-size: 32px;" }
                p { "Selecciona un embalse para ver su ubicación en el mapa" }
            }
        };
    };

    let id = detail.id;
    let color = detail.tier.color();

    rsx! {
        div {
            class: "map-placeholder",
            style: "padding: 16px;",
            i { class: "fas fa-map-marker-alt", style: "color: #e74c3c; font-size: 24px;" }
            h4 { "{detail.title}" }
            p { strong { "Municipio: " } "{detail.municipality}" }
            p { strong { "Coordenadas: " } "{detail.coordinates}" }
            p { strong { "Capacidad: " } "{detail.capacity}" }
            p { strong { "Volumen Actual: " } "{detail.current_volume}" }
            p {
                strong { "Porcentaje: " }
                span { style: "color: {color}; font-weight: bold;", "{detail.percentage}" }
            }
            p { strong { "Uso: " } "{detail.usage}" }
            if !detail.last_updated.is_empty() {
                p { strong { "Actualizado: " } "{detail.last_updated}" }
            }
            button {
                class: "btn btn-secondary",
                onclick: move |_| state.modal_id.set(Some(id)),
                i { class: "fas fa-expand", style: "margin-right: 6px;" }
                "Ver detalles"
            }
        }
    }
}
