// ============================================================================
// VIEWS MODULE - Renderizado DOM + implementaciones DOM de los traits de vista
// ============================================================================

use std::rc::Rc;

use crate::state::view_state::AppEvent;

pub mod traits;
pub mod panel;
pub mod login;
pub mod shell;
pub mod sample;
pub mod copy_button;
pub mod config_card;
pub mod config_grid;
pub mod add_config_modal;
pub mod toast;
pub mod app;

/// Las vistas no conocen al viewmodel: solo emiten eventos
pub type Dispatcher = Rc<dyn Fn(AppEvent)>;

pub use app::{render_app, RenderedApp};
