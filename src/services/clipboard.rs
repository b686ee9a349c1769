// ============================================================================
// CLIPBOARD - Copiar texto con fallback a execCommand
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

use crate::dom::{body, document, window};
use crate::services::error::AppError;

/// Copiar `text` al portapapeles. Usa `navigator.clipboard` si existe
/// (contexto seguro); si no, un textarea fuera de pantalla.
pub async fn copy_text(text: &str) -> Result<(), AppError> {
    let window = window().ok_or_else(|| AppError::Dom("No window".to_string()))?;
    let navigator = window.navigator();

    let has_clipboard_api = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false);

    if has_clipboard_api {
        JsFuture::from(navigator.clipboard().write_text(text)).await?;
        log::debug!("📋 [CLIPBOARD] Copiado con navigator.clipboard");
        Ok(())
    } else {
        log::debug!("📋 [CLIPBOARD] navigator.clipboard no disponible, usando fallback");
        fallback_copy(text)
    }
}

fn fallback_copy(text: &str) -> Result<(), AppError> {
    let document = document().ok_or_else(|| AppError::Dom("No document".to_string()))?;
    let body = body().ok_or_else(|| AppError::Dom("No body".to_string()))?;

    let textarea: HtmlTextAreaElement = document
        .create_element("textarea")?
        .dyn_into()
        .map_err(|_| AppError::Dom("textarea is not an HtmlTextAreaElement".to_string()))?;
    textarea.set_value(text);
    textarea.set_attribute("readonly", "")?;
    let style = textarea.style();
    style.set_property("position", "absolute")?;
    style.set_property("left", "-9999px")?;

    body.append_child(&textarea)?;
    textarea.select();

    let copied = match document.dyn_ref::<HtmlDocument>() {
        Some(html_document) => html_document.exec_command("copy"),
        None => Ok(false),
    };
    // Limpiar siempre, aunque execCommand falle
    textarea.remove();

    if copied? {
        Ok(())
    } else {
        Err(AppError::Dom("execCommand('copy') devolvió false".to_string()))
    }
}
