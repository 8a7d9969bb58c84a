//! Modal with the full details of one reservoir and its fill doughnut.

use crate::components::ChartContainer;
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;

/// DOM id of the modal chart container.
pub const MODAL_CHART_ID: &str = "modalChart";

#[component]
pub fn ReservoirModal() -> Element {
    let mut state = use_context::<AppState>();
    let detail = (state.modal_id)().and_then(|id| state.dashboard.read().detail(id));

    let Some(detail) = detail else {
        return rsx! {};
    };

    let mut close = move || {
        js_bridge::destroy_chart(MODAL_CHART_ID);
        state.modal_id.set(None);
    };

    rsx! {
        div {
            id: "embalseModal",
            class: "modal",
            style: "display: block; position: fixed; inset: 0; background: rgba(0,0,0,0.5); z-index: 1000;",
            onclick: move |_| close(),
            div {
                class: "modal-content",
                style: "background: #fff; max-width: 640px; margin: 8vh auto; padding: 24px; border-radius: 12px; position: relative;",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                span {
                    class: "close",
                    style: "position: absolute; top: 12px; right: 18px; font-size: 28px; cursor: pointer;",
                    onclick: move |_| close(),
                    "×"
                }
                h2 { id: "modalTitle", "{detail.title}" }
                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 8px; margin: 12px 0;",
                    p { strong { "Porcentaje: " } span { id: "modalPercentage", "{detail.percentage}" } }
                    p { strong { "Capacidad: " } span { id: "modalCapacity", "{detail.capacity}" } }
                    p { strong { "Volumen Actual: " } span { id: "modalCurrent", "{detail.current_volume}" } }
                    p { strong { "Municipio: " } span { id: "modalMunicipio", "{detail.municipality}" } }
                    p { strong { "Uso: " } span { id: "modalUso", "{detail.usage}" } }
                    p { strong { "Coordenadas: " } "{detail.coordinates}" }
                }
                ChartContainer {
                    id: MODAL_CHART_ID.to_string(),
                    min_height: 260,
                }
            }
        }
    }
}
