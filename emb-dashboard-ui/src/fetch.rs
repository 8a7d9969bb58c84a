//! Browser-side CSV source.
//!
//! Resources resolve against the directory of the hosting page, carry a
//! cache-busting timestamp and are fetched with the `no-store` cache mode.

use emb_core::loader::{CsvSource, LoadError};
use emb_core::source::{base_path_of, cache_busted_url, decode_body};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};

#[derive(Debug, Clone, PartialEq)]
pub struct BrowserSource {
    base_path: String,
}

impl BrowserSource {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Base the source on the directory of `window.location.pathname`.
    pub fn from_location() -> Self {
        let pathname = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        Self::new(base_path_of(&pathname))
    }
}

fn transport_error(resource: &str, err: JsValue) -> LoadError {
    LoadError::Transport {
        resource: resource.to_string(),
        message: err
            .as_string()
            .unwrap_or_else(|| format!("{:?}", err)),
    }
}

impl CsvSource for BrowserSource {
    async fn fetch_text(&self, resource: &str) -> Result<String, LoadError> {
        let url = cache_busted_url(&self.base_path, resource, js_sys::Date::now() as i64);
        let window = web_sys::window().ok_or_else(|| LoadError::Transport {
            resource: resource.to_string(),
            message: "no window object".to_string(),
        })?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_cache(RequestCache::NoStore);
        let request = Request::new_with_str_and_init(&url, &opts)
            .map_err(|e| transport_error(resource, e))?;

        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| transport_error(resource, e))?
            .dyn_into()
            .map_err(|e| transport_error(resource, e))?;
        if !response.ok() {
            return Err(LoadError::Status {
                resource: resource.to_string(),
                status: response.status(),
            });
        }

        let buffer = JsFuture::from(
            response
                .array_buffer()
                .map_err(|e| transport_error(resource, e))?,
        )
        .await
        .map_err(|e| transport_error(resource, e))?;
        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
        log::debug!("fetch: {} -> {} bytes", url, bytes.len());
        decode_body(resource, bytes)
    }
}
