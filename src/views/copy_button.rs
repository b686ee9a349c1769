// ============================================================================
// COPY BUTTON - Botón de copiar con feedback temporal
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{on_click, set_inner_html, ElementBuilder};
use crate::services::clipboard::copy_text;
use crate::state::view_state::CopyFeedback;

const COPY_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 16 16" fill="none" aria-hidden="true"><path d="M5 5.5A1.5 1.5 0 0 1 6.5 4h6A1.5 1.5 0 0 1 14 5.5v6A1.5 1.5 0 0 1 12.5 13h-6A1.5 1.5 0 0 1 5 11.5v-6Z" stroke="currentColor" stroke-width="1.3" stroke-linecap="round" stroke-linejoin="round"></path><path d="M3.5 11.5A1.5 1.5 0 0 1 2 10V4A1.5 1.5 0 0 1 3.5 2.5h6A1.5 1.5 0 0 1 11 4" stroke="currentColor" stroke-width="1.3" stroke-linecap="round" stroke-linejoin="round"></path></svg>"#;

const CHECK_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 16 16" fill="none" aria-hidden="true"><path d="M3.5 8.2L6.3 11l6.2-6.2" stroke="currentColor" stroke-width="1.6" stroke-linecap="round" stroke-linejoin="round"></path></svg>"#;

const ERROR_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 16 16" fill="none" aria-hidden="true"><path d="M6 6l4 4M10 6l-4 4" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"></path><circle cx="8" cy="8" r="6" stroke="currentColor" stroke-width="1.3"></circle></svg>"#;

fn icon_for(feedback: CopyFeedback) -> &'static str {
    match feedback {
        CopyFeedback::Idle => COPY_ICON,
        CopyFeedback::Success => CHECK_ICON,
        CopyFeedback::Error => ERROR_ICON,
    }
}

/// Crear un botón que copia `text` al hacer click.
///
/// Tras copiar muestra el icono de éxito o error durante `feedback_ms`
/// y vuelve al icono original. Un click durante el feedback reinicia el
/// temporizador.
pub fn render_copy_button(text: &str, aria_label: &str, class: &str, feedback_ms: u32) -> Result<Element, JsValue> {
    let button = ElementBuilder::new("button")
        .class(class)
        .attr("type", "button")
        .attr("aria-label", aria_label)
        .attr("title", aria_label)
        .html(icon_for(CopyFeedback::Idle))
        .build()?;

    let text = text.to_string();
    // Generación del feedback en curso: solo el último temporizador revierte
    let generation = Rc::new(Cell::new(0u32));
    let button_clone = button.clone();

    on_click(&button, move |_| {
        let text = text.clone();
        let button = button_clone.clone();
        let generation = generation.clone();
        spawn_local(async move {
            let result = copy_text(&text).await;
            if let Err(e) = &result {
                log::error!("❌ [COPY] Error copiando: {}", e);
            }
            let feedback = CopyFeedback::from_result(&result);
            set_inner_html(&button, icon_for(feedback));

            let current = generation.get().wrapping_add(1);
            generation.set(current);
            Timeout::new(feedback_ms, move || {
                if generation.get() == current {
                    set_inner_html(&button, icon_for(feedback.expire()));
                }
            })
            .forget();
        });
    })?;

    Ok(button)
}
