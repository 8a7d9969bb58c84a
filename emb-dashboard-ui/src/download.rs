//! Client-side file downloads through a temporary object URL.

use chrono::NaiveDate;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub const CSV_MIME: &str = "text/csv;charset=utf-8";

/// Today's date in UTC according to the browser clock.
pub fn today() -> Option<NaiveDate> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_utc_full_year() as i32,
        now.get_utc_month() + 1,
        now.get_utc_date(),
    )
}

/// Offer `text` to the user as a file named `filename`.
pub fn download_text(filename: &str, mime: &str, text: &str) -> Result<(), String> {
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(text));

    let opts = BlobPropertyBag::new();
    opts.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)
        .map_err(|_| "Failed to create blob".to_string())?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Unable to create download".to_string())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("Document unavailable")?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "Unable to create anchor")?
        .dyn_into()
        .map_err(|_| "Anchor cast failed")?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.style().set_property("display", "none").ok();

    document
        .body()
        .ok_or("Missing body")?
        .append_child(&anchor)
        .ok();
    anchor.click();
    anchor.remove();
    Url::revoke_object_url(&url).ok();
    log::info!("download: offered {} ({} bytes)", filename, text.len());
    Ok(())
}
