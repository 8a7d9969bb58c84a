//! Footer buttons: refresh, export and simulated update.

use crate::actions;
use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn ActionBar() -> Element {
    let state = use_context::<AppState>();

    rsx! {
        div {
            class: "footer-actions",
            style: "display: flex; gap: 12px; justify-content: center; margin: 24px 0;",
            button {
                id: "refreshBtn",
                class: "btn btn-primary",
                onclick: move |_| {
                    spawn(actions::refresh_data(state));
                },
                i { class: "fas fa-sync-alt", style: "margin-right: 6px;" }
                "Actualizar Datos"
            }
            button {
                id: "exportBtn",
                class: "btn btn-secondary",
                onclick: move |_| actions::export_data(state),
                i { class: "fas fa-download", style: "margin-right: 6px;" }
                "Exportar CSV"
            }
            button {
                id: "simulateBtn",
                class: "btn btn-secondary",
                onclick: move |_| actions::simulate_update(state),
                i { class: "fas fa-random", style: "margin-right: 6px;" }
                "Simular Actualización"
            }
        }
    }
}
