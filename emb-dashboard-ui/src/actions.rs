//! User-triggered flows: initial load, refresh, export and simulated update.
//!
//! Each flow reports through the [`StatusBoard`](emb_data::status::StatusBoard)
//! in [`AppState`]. Notices dismiss themselves after the configured timeout.

use crate::download::{download_text, today, CSV_MIME};
use crate::fetch::BrowserSource;
use crate::state::AppState;
use dioxus::prelude::*;
use emb_core::export::{export_file_name, ExportMode};
use emb_core::history::load_history;
use emb_core::loader::load_reservoirs;
use emb_data::status::{
    NoticeKind, INITIAL_LOAD_ERROR, REFRESH_ERROR, REFRESH_LOADING, REFRESH_SUCCESS,
};
use gloo_timers::future::TimeoutFuture;

/// Show a notice and schedule its dismissal. A later notice is never
/// dismissed by this timer.
pub fn notify(mut state: AppState, kind: NoticeKind, message: &str) {
    let id = match kind {
        NoticeKind::Success => state.status.write().success(message),
        NoticeKind::Error => state.status.write().error(message),
    };
    let timeout = state.dashboard.peek().config().notice_timeout_ms;
    spawn(async move {
        TimeoutFuture::new(timeout).await;
        state.status.write().dismiss(id);
    });
}

/// Rebuild both datasets under one load ticket.
///
/// Returns `None` when a newer load superseded this one, otherwise whether
/// the primary dataset loaded. A failed historical load keeps the previous
/// series and the trend panel reports it as unavailable.
async fn reload(mut state: AppState, source: &BrowserSource) -> Option<bool> {
    let ticket = state.dashboard.write().begin_load();
    let config = state.dashboard.peek().config().clone();

    let result = load_reservoirs(source, &config.reservoirs_csv).await;
    match state.dashboard.write().finish_load(ticket, result) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::error!("Failed to load reservoirs: {}", e);
            return Some(false);
        }
    }

    let result = load_history(source, &config.history_csv, &config.historical_key).await;
    match state.dashboard.write().finish_history_load(ticket, result) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => log::warn!("Failed to load historical series: {}", e),
    }
    Some(true)
}

/// First load on mount.
pub async fn initial_load(mut state: AppState) {
    let source = BrowserSource::from_location();
    if reload(state, &source).await == Some(false) {
        notify(state, NoticeKind::Error, INITIAL_LOAD_ERROR);
    }
    state.loading.set(false);
}

/// Refresh button: loading message, reload, then a success or error notice.
pub async fn refresh_data(mut state: AppState) {
    state.status.write().show_loading(REFRESH_LOADING);
    let source = BrowserSource::from_location();
    let outcome = reload(state, &source).await;
    if outcome.is_none() {
        // A newer refresh owns the loading message.
        return;
    }
    state.status.write().hide_loading();
    match outcome {
        Some(true) => notify(state, NoticeKind::Success, REFRESH_SUCCESS),
        _ => notify(state, NoticeKind::Error, REFRESH_ERROR),
    }
}

/// Download the full record set as CSV.
pub fn export_data(state: AppState) {
    let text = match state.dashboard.peek().export(ExportMode::Compatible) {
        Ok(text) => text,
        Err(e) => {
            log::error!("Export failed: {}", e);
            notify(state, NoticeKind::Error, "Error al exportar los datos.");
            return;
        }
    };
    let Some(date) = today() else {
        notify(state, NoticeKind::Error, "Error al exportar los datos.");
        return;
    };
    if let Err(e) = download_text(&export_file_name(date), CSV_MIME, &text) {
        log::error!("Download failed: {}", e);
        notify(state, NoticeKind::Error, "Error al exportar los datos.");
    }
}

/// One simulated volume update over every reservoir.
pub fn simulate_update(mut state: AppState) {
    let mut rng = rand::thread_rng();
    state.dashboard.write().simulate_tick(&mut rng);
}
