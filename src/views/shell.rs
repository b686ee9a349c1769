// ============================================================================
// SHELL VIEW - Cabecera, pestañas y paneles de la app autenticada
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::view_state::{AppEvent, Tab};
use crate::utils::i18n::t;
use crate::views::panel::DomTabButton;
use crate::views::sample::render_sample_panel;
use crate::views::Dispatcher;

pub struct ShellParts {
    pub shell: Element,
    pub config_panel: Element,
    pub sample_panel: Element,
    pub grid: Element,
    pub tab_buttons: Vec<DomTabButton>,
}

/// Renderizar el shell (oculto hasta que la sesión lo muestre)
pub fn render_shell(lang: &str, copy_feedback_ms: u32, dispatch: Dispatcher) -> Result<ShellParts, JsValue> {
    let shell = ElementBuilder::new("div")
        .id("appShell")
        .class("app-shell")
        .flag("hidden")
        .build()?;

    // Header
    let header = ElementBuilder::new("header").class("app-header").build()?;
    let title = ElementBuilder::new("h1").class("app-title").text(&t("titulo", lang)).build()?;

    let tabs = ElementBuilder::new("nav")
        .class("tabs")
        .attr("role", "tablist")
        .build()?;
    let mut tab_buttons = Vec::new();
    for tab in Tab::ALL {
        let button = ElementBuilder::new("button")
            .class("tab-btn")
            .attr("type", "button")
            .attr("role", "tab")
            .attr("data-target", tab.target())
            .attr("aria-controls", tab.target())
            .text(&t(tab.label_key(), lang))
            .build()?;
        let dispatch = dispatch.clone();
        on_click(&button, move |_| dispatch(AppEvent::ActivateTab(tab)))?;
        append_child(&tabs, &button)?;
        tab_buttons.push(DomTabButton::new(button, tab));
    }

    let logout_btn = ElementBuilder::new("button")
        .id("logoutBtn")
        .class("btn-logout")
        .attr("type", "button")
        .text(&t("cerrar_sesion", lang))
        .build()?;
    {
        let dispatch = dispatch.clone();
        on_click(&logout_btn, move |_| dispatch(AppEvent::Logout))?;
    }

    append_child(&header, &title)?;
    append_child(&header, &tabs)?;
    append_child(&header, &logout_btn)?;

    // Panel de configuraciones
    let config_panel = ElementBuilder::new("section")
        .id(Tab::Config.target())
        .class("config-page")
        .attr("role", "tabpanel")
        .build()?;

    let toolbar = ElementBuilder::new("div").class("config-toolbar").build()?;
    let add_btn = ElementBuilder::new("button")
        .id("addConfigBtn")
        .class("btn-add")
        .attr("type", "button")
        .text(&format!("+ {}", t("nueva_config", lang)))
        .build()?;
    {
        let dispatch = dispatch.clone();
        on_click(&add_btn, move |_| dispatch(AppEvent::OpenAddConfig))?;
    }
    append_child(&toolbar, &add_btn)?;

    let grid = ElementBuilder::new("div")
        .id("configGrid")
        .class("config-grid")
        .build()?;

    append_child(&config_panel, &toolbar)?;
    append_child(&config_panel, &grid)?;

    let sample_panel = render_sample_panel(lang, copy_feedback_ms)?;

    let main = ElementBuilder::new("main").class("app-main").build()?;
    append_child(&main, &config_panel)?;
    append_child(&main, &sample_panel)?;

    append_child(&shell, &header)?;
    append_child(&shell, &main)?;

    Ok(ShellParts {
        shell,
        config_panel,
        sample_panel,
        grid,
        tab_buttons,
    })
}
