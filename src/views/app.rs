// ============================================================================
// APP VIEW - Monta todo el árbol DOM una sola vez
// ============================================================================
// No hay re-render: después del montaje solo cambian visibilidades, la
// rejilla de tarjetas y los mensajes, siempre a través de los traits.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::TimingConfig;
use crate::dom::{append_child, set_inner_html};
use crate::viewmodels::AppViews;
use crate::views::add_config_modal::render_add_config_modal;
use crate::views::config_grid::DomCardList;
use crate::views::login::render_login;
use crate::views::panel::{DomPanel, DomTabButton};
use crate::views::shell::render_shell;
use crate::views::toast::{render_toast_container, DomNotifier};
use crate::views::traits::TabButton;
use crate::views::Dispatcher;

pub struct RenderedApp {
    pub views: AppViews,
}

/// Renderizar la app completa dentro de `root`
pub fn render_app(root: &Element, lang: &str, timing: &TimingConfig, dispatch: Dispatcher) -> Result<RenderedApp, JsValue> {
    set_inner_html(root, "");

    let (login_screen, login_view) = render_login(lang, dispatch.clone())?;
    let shell = render_shell(lang, timing.copy_feedback_ms, dispatch.clone())?;
    let (modal_el, modal) = render_add_config_modal(lang, dispatch.clone())?;
    let toast_container = render_toast_container()?;

    append_child(root, &login_screen)?;
    append_child(root, &shell.shell)?;
    append_child(root, &modal_el)?;
    append_child(root, &toast_container)?;

    let tab_buttons = shell
        .tab_buttons
        .into_iter()
        .map(|button: DomTabButton| Rc::new(button) as Rc<dyn TabButton>)
        .collect();

    log::info!("🧱 [VIEW] Árbol DOM montado");

    Ok(RenderedApp {
        views: AppViews {
            login_screen: Rc::new(DomPanel::new(login_screen)),
            app_shell: Rc::new(DomPanel::new(shell.shell)),
            config_panel: Rc::new(DomPanel::new(shell.config_panel)),
            sample_panel: Rc::new(DomPanel::new(shell.sample_panel)),
            tab_buttons,
            login: Rc::new(login_view),
            cards: Rc::new(DomCardList::new(shell.grid, lang, timing.copy_feedback_ms, dispatch)),
            modal: Rc::new(modal),
            notifier: Rc::new(DomNotifier::new(toast_container, timing.toast_duration_ms)),
        },
    })
}
