use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};

use crate::domain::errors::InfrastructureError;
use crate::domain::logging::LogComponent;
use crate::log_error;

/// Copies `text` to the system clipboard without blocking the caller.
///
/// The write runs as a detached task; a failure is logged and otherwise
/// ignored.
pub fn copy_text(text: String) {
    spawn_local(async move {
        if let Err(err) = write_text(&text).await {
            log_error!(LogComponent::Infrastructure("Clipboard"), "Failed to copy text: {}", err);
        }
    });
}

/// `navigator.clipboard.writeText(text)`, awaited.
///
/// The clipboard object is looked up dynamically since it is absent on
/// insecure origins.
pub async fn write_text(text: &str) -> Result<(), InfrastructureError> {
    let window = web_sys::window()
        .ok_or_else(|| InfrastructureError::ClipboardUnavailable("window not available".to_string()))?;

    let clipboard = Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .map_err(|e| InfrastructureError::ClipboardUnavailable(describe(&e)))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(InfrastructureError::ClipboardUnavailable(
            "navigator.clipboard is not exposed".to_string(),
        ));
    }

    let write: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|value| value.dyn_into().ok())
        .ok_or_else(|| InfrastructureError::ClipboardUnavailable("writeText is missing".to_string()))?;

    let promise: Promise = write
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| InfrastructureError::ClipboardRejected(describe(&e)))?
        .dyn_into()
        .map_err(|e| InfrastructureError::ClipboardRejected(describe(&e)))?;

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| InfrastructureError::ClipboardRejected(describe(&e)))
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
