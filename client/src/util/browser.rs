//! Browser side effects: clipboard, file download, confirm prompts, clock.
//!
//! Client-side (hydrate): real `web-sys` calls.
//! Server-side (SSR): inert stubs so pages render deterministically.
//!
//! ERROR HANDLING
//! ==============
//! Fallible helpers return `Result<_, String>` carrying the browser's own
//! error message, which callers append to their toast text.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsValue;

/// Extract a readable message from a rejected promise or thrown value.
#[cfg(feature = "hydrate")]
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns the browser's rejection message when the clipboard is missing
/// (insecure context) or the write is refused.
pub async fn copy_text(text: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or_else(|| "window unavailable".to_owned())?;
        let navigator = window.navigator();
        let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map_err(|e| js_error_message(&e))?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err("clipboard unavailable".to_owned());
        }
        let clipboard: web_sys::Clipboard = clipboard.unchecked_into();
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| js_error_message(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err("clipboard unavailable".to_owned())
    }
}

/// Offer `text` as a UTF-8 `.txt` download named `filename`.
///
/// # Errors
///
/// Returns the browser's error message if the blob or anchor cannot be built.
pub fn download_text(filename: &str, text: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let parts = js_sys::Array::of1(&JsValue::from_str(text));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/plain;charset=utf-8");
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
            .map_err(|e| js_error_message(&e))?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| js_error_message(&e))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "document unavailable".to_owned())?;
        let anchor: web_sys::HtmlAnchorElement = document
            .create_element("a")
            .map_err(|e| js_error_message(&e))?
            .unchecked_into();
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();

        // Revoke once the browser has started the download.
        gloo_timers::callback::Timeout::new(1_000, move || {
            let _ = web_sys::Url::revoke_object_url(&url);
        })
        .forget();
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, text);
        Err("download unavailable".to_owned())
    }
}

/// Ask the user to confirm a destructive action. Always `false` on the server.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Today's date as `YYYY-MM-DD`.
///
/// Uses the browser's local date when hydrated, UTC on the server.
pub fn today_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format!("{:04}-{:02}-{:02}", now.get_full_year(), now.get_month() + 1, now.get_date())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let today = time::OffsetDateTime::now_utc().date();
        format!("{:04}-{:02}-{:02}", today.year(), u8::from(today.month()), today.day())
    }
}

/// Current local wall-clock time for chat bubbles, e.g. `오후 03:07`.
pub fn clock_now() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        #[allow(clippy::cast_possible_truncation)]
        crate::util::format::format_clock(now.get_hours() as u8, now.get_minutes() as u8)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        crate::state::chat::JUST_NOW.to_owned()
    }
}

/// Grow a textarea to fit its content.
#[cfg(feature = "hydrate")]
pub fn autosize(el: &web_sys::HtmlElement) {
    let style = el.style();
    let _ = style.set_property("height", "auto");
    let _ = style.set_property("height", &format!("{}px", el.scroll_height()));
}

/// Reset a textarea to its natural height.
#[cfg(feature = "hydrate")]
pub fn reset_height(el: &web_sys::HtmlElement) {
    let _ = el.style().set_property("height", "auto");
}

/// Smoothly scroll `el` to the top of the viewport.
#[cfg(feature = "hydrate")]
pub fn scroll_into_view(el: &web_sys::Element) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}
