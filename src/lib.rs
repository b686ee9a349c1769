// ============================================================================
// CODEX CONFIG CONSOLE - FRONTEND MVVM (RUST PURO)
// ============================================================================
// Arquitectura MVVM:
// - Views: Funciones que montan DOM + implementaciones DOM de los traits
// - ViewModels: Lógica de UI, sin DOM (probada con dobles)
// - Services: HTTP, sessionStorage, portapapeles, timers
// - State: Sesión explícita + estado de UI
// - Models: Estructuras compartidas con el backend
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod views;
mod dom;
mod utils;
mod app;

#[cfg(test)]
mod test_support;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::App;
use crate::config::CONFIG;
use crate::state::view_state::AppEvent;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Codex Config Console - Rust Puro + MVVM");

    let app = App::new(Rc::new(dispatch))?;
    let viewmodel = app.viewmodel();

    // Guardar app en variable global
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Restaurar sesión (o mostrar login) y cargar datos
    spawn_local(async move { viewmodel.start().await });

    Ok(())
}

/// Entregar un evento de UI al viewmodel.
///
/// El borrow del APP se suelta antes de ejecutar el handler, así un
/// handler puede provocar más eventos sin pánico de RefCell.
pub fn dispatch(event: AppEvent) {
    let viewmodel = APP.with(|app_cell| app_cell.borrow().as_ref().map(App::viewmodel));
    match viewmodel {
        Some(viewmodel) => {
            log::debug!("📨 [DISPATCH] {}", event.name());
            spawn_local(async move { viewmodel.handle(event).await });
        }
        None => log::warn!("⚠️ [DISPATCH] App no está inicializada, evento descartado: {}", event.name()),
    }
}
