//! Shared Dioxus components and Chart.js bridge for the reservoir dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Chart.js render functions via `js_sys::eval()`
//! - `fetch`: a [`emb_core::loader::CsvSource`] backed by the browser `fetch` API
//! - `download`: client-side file downloads
//! - `state`: Reactive AppState with Dioxus Signals
//! - `actions`: refresh, export and simulate flows with their status messages
//! - `components`: Reusable RSX components (filters, panels, modal, etc.)

pub mod actions;
pub mod components;
pub mod download;
pub mod fetch;
pub mod js_bridge;
pub mod state;
