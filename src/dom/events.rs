// ============================================================================
// EVENT HANDLING - Helpers de listeners
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Listeners en elementos del DOM: cuando el elemento se destruye (p.ej. al
//   reconstruir la rejilla con set_inner_html("")), el navegador limpia sus
//   listeners, así que closure.forget() es seguro.
// - Listeners globales (window/document): registrar UNA sola vez al arrancar.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, KeyboardEvent, MouseEvent};

/// Listener genérico sobre cualquier EventTarget
fn listen<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    // Nota: closure.forget() es necesario para mantener el closure vivo en Rust WASM
    closure.forget();
    Ok(())
}

/// Igual que `listen` pero entregando el evento ya tipado
fn listen_typed<E, F>(target: &EventTarget, event_type: &str, mut handler: F) -> Result<(), JsValue>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    listen(target, event_type, move |event: Event| {
        if let Ok(typed) = event.dyn_into::<E>() {
            handler(typed);
        }
    })
}

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen_typed(element, "click", handler)
}

/// Submit de formulario
pub fn on_submit<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    listen(element, "submit", handler)
}

pub fn on_keydown<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(KeyboardEvent) + 'static,
{
    listen_typed(element, "keydown", handler)
}

/// keydown en window. Llamar una sola vez (ver nota arriba).
pub fn on_window_keydown<F>(handler: F) -> Result<(), JsValue>
where
    F: FnMut(KeyboardEvent) + 'static,
{
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    listen_typed(&window, "keydown", handler)
}
