// ============================================================================
// CONFIG CARD - Tarjeta de una configuración
// ============================================================================
// Todo dato del backend se escribe con text content / atributos, nunca como
// HTML.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{add_class, append_child, on_click, set_attribute, ElementBuilder};
use crate::models::{ConfigRecord, ConfigStatus};
use crate::state::view_state::AppEvent;
use crate::utils::i18n::t;
use crate::views::copy_button::render_copy_button;
use crate::views::Dispatcher;

/// Clase del modificador de estado (`None` si el estado es desconocido)
fn status_modifier(status: ConfigStatus) -> Option<&'static str> {
    match status {
        ConfigStatus::Active => Some("config-card--status-true"),
        ConfigStatus::Inactive => Some("config-card--status-false"),
        ConfigStatus::Unknown => None,
    }
}

fn status_label_key(status: ConfigStatus) -> &'static str {
    match status {
        ConfigStatus::Active => "estado_activo",
        ConfigStatus::Inactive => "estado_inactivo",
        ConfigStatus::Unknown => "estado_desconocido",
    }
}

pub fn render_config_card(
    record: &ConfigRecord,
    lang: &str,
    copy_feedback_ms: u32,
    dispatch: Dispatcher,
) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("article").class("config-card").build()?;

    let status = record.status();
    if let (Some(flag), Some(modifier)) = (status.as_bool(), status_modifier(status)) {
        set_attribute(&card, "data-status", if flag { "true" } else { "false" })?;
        add_class(&card, modifier)?;
    }

    // Título: nombre como enlace externo
    let link = ElementBuilder::new("a")
        .class("config-link")
        .attr("href", &record.url)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .text(&record.name)
        .build()?;
    let heading = ElementBuilder::new("h2").child(&link).build()?;

    let badge = ElementBuilder::new("span")
        .class("status-badge")
        .text(&t(status_label_key(status), lang))
        .build()?;

    let toggle_btn = ElementBuilder::new("button")
        .class("status-toggle")
        .attr("type", "button")
        .text(&t("cambiar_estado", lang))
        .build()?;
    {
        let id = record.id.clone();
        on_click(&toggle_btn, move |_| dispatch(AppEvent::ToggleStatus(id.clone())))?;
    }

    let title = ElementBuilder::new("div")
        .class("config-title")
        .child(&heading)
        .child(&badge)
        .child(&toggle_btn)
        .build()?;
    append_child(&card, &title)?;

    append_child(
        &card,
        &render_field("Base URL", &record.base_url, &t("copiar_url", lang), copy_feedback_ms)?,
    )?;
    append_child(
        &card,
        &render_field("API Token", &record.token, &t("copiar_token", lang), copy_feedback_ms)?,
    )?;

    Ok(card)
}

fn render_field(label: &str, value: &str, copy_label: &str, copy_feedback_ms: u32) -> Result<Element, JsValue> {
    let value_row = ElementBuilder::new("div")
        .class("value")
        .child(&ElementBuilder::new("span").class("value-text").text(value).build()?)
        .child(&render_copy_button(value, copy_label, "copy-btn", copy_feedback_ms)?)
        .build()?;

    ElementBuilder::new("div")
        .class("field")
        .child(&ElementBuilder::new("label").text(label).build()?)
        .child(&value_row)
        .build()
}
