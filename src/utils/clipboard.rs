//! Clipboard utilities for copying text
//!
//! The primary path selects a temporary `<input>` and runs the `copy`
//! command, which works without clipboard permissions. The Web Clipboard API
//! is the fallback when the command is refused.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlDocument, HtmlInputElement};

/// Temporary input element, removed from the page when dropped
struct TempInput(HtmlInputElement);

impl Drop for TempInput {
    fn drop(&mut self) {
        self.0.remove();
    }
}

/// Copy text by selecting it in a temporary input and running the copy command
///
/// The input is appended to the element with id `host_id` (or the body when
/// that element is missing) and removed again whatever the outcome.
///
/// # Returns
/// * `Ok(true)` if the browser reports the copy succeeded
/// * `Ok(false)` if the browser refused the copy command
/// * `Err(JsValue)` if the DOM operations themselves failed
pub fn copy_with_selection(text: &str, host_id: &str) -> Result<bool, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("No document"))?;

    let host = match document.get_element_by_id(host_id) {
        Some(el) => el,
        None => document
            .body()
            .map(Into::into)
            .ok_or_else(|| JsValue::from_str("No body"))?,
    };

    let input = document
        .create_element("input")?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str("Created element is not an input"))?;
    input.set_value(text);
    host.append_child(&input)?;
    let input = TempInput(input);

    input.0.select();
    let html_document = document
        .dyn_ref::<HtmlDocument>()
        .ok_or_else(|| JsValue::from_str("Document is not an HTML document"))?;
    html_document.exec_command("copy")
}

/// Copy text to the system clipboard
///
/// Uses the Web Clipboard API to copy the provided text.
///
/// # Arguments
/// * `text` - The text to copy to the clipboard
///
/// # Returns
/// * `Ok(())` if the text was successfully copied
/// * `Err(JsValue)` if the operation failed
pub async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let navigator = window.navigator();
    let clipboard = navigator.clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
}

/// Try the copy command first, then the Clipboard API
pub async fn copy_text(text: &str, host_id: &str) -> Result<(), JsValue> {
    match copy_with_selection(text, host_id) {
        Ok(true) => Ok(()),
        Ok(false) => {
            log::debug!("Copy command refused, trying the Clipboard API");
            copy_to_clipboard(text).await
        }
        Err(e) => {
            log::debug!("Copy command failed: {:?}, trying the Clipboard API", e);
            copy_to_clipboard(text).await
        }
    }
}
