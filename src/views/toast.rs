// ============================================================================
// TOAST - Notificaciones transitorias (implementación DOM de Notifier)
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::view_state::NoticeKind;
use crate::views::traits::Notifier;

pub struct DomNotifier {
    container: Element,
    duration_ms: u32,
}

impl DomNotifier {
    pub fn new(container: Element, duration_ms: u32) -> Self {
        Self { container, duration_ms }
    }

    fn show(&self, kind: NoticeKind, message: &str) -> Result<(), JsValue> {
        let modifier = match kind {
            NoticeKind::Success => "toast--success",
            NoticeKind::Failure => "toast--failure",
        };
        let toast = ElementBuilder::new("div")
            .class(&format!("toast {}", modifier))
            .attr("role", "status")
            .text(message)
            .build()?;
        append_child(&self.container, &toast)?;

        Timeout::new(self.duration_ms, move || toast.remove()).forget();
        Ok(())
    }
}

impl Notifier for DomNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        if let Err(e) = self.show(kind, message) {
            log::warn!("⚠️ [TOAST] No se pudo mostrar '{}': {:?}", message, e);
        }
    }
}

/// Contenedor fijo de las notificaciones
pub fn render_toast_container() -> Result<Element, JsValue> {
    ElementBuilder::new("div")
        .id("toastContainer")
        .class("toast-container")
        .attr("aria-live", "polite")
        .build()
}
