// ============================================================================
// APP - Cableado de servicios, vistas y viewmodel
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::CONFIG;
use crate::dom::{get_element_by_id, on_window_keydown};
use crate::services::scheduler::TimeoutScheduler;
use crate::services::session_storage::BrowserSessionStore;
use crate::services::ApiClient;
use crate::state::session_state::SessionContext;
use crate::state::view_state::AppEvent;
use crate::viewmodels::AppViewModel;
use crate::views::{render_app, Dispatcher};

/// Aplicación principal
pub struct App {
    viewmodel: AppViewModel<ApiClient>,
}

impl App {
    /// Montar el DOM en `#app` y crear el viewmodel
    pub fn new(dispatch: Dispatcher) -> Result<Self, JsValue> {
        let root = get_element_by_id("app").ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let rendered = render_app(&root, &CONFIG.language, &CONFIG.timing, dispatch.clone())?;

        let session = SessionContext::new(Rc::new(BrowserSessionStore));
        let viewmodel = AppViewModel::new(
            Rc::new(ApiClient::new(&CONFIG.backend_url)),
            session,
            rendered.views,
            Rc::new(TimeoutScheduler),
            CONFIG.timing.clone(),
            &CONFIG.language,
        );

        // Escape global: se registra UNA sola vez aquí
        on_window_keydown(move |e| {
            if e.key() == "Escape" {
                dispatch(AppEvent::Escape);
            }
        })?;

        log::info!("✅ [APP] App inicializada (backend: '{}')", CONFIG.backend_url);
        Ok(Self { viewmodel })
    }

    pub fn viewmodel(&self) -> AppViewModel<ApiClient> {
        self.viewmodel.clone()
    }
}
