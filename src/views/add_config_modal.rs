// ============================================================================
// ADD CONFIG MODAL - Overlay para dar de alta una configuración
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement};

use crate::dom::{
    add_class, append_child, body, focus, input_value, on_click, on_submit, remove_class, set_text_content,
    set_visible, ElementBuilder,
};
use crate::models::NewConfig;
use crate::state::view_state::AppEvent;
use crate::utils::constants::{HIDDEN_CLASS, MODAL_OPEN_CLASS};
use crate::utils::i18n::t;
use crate::views::traits::ModalView;
use crate::views::Dispatcher;

pub struct DomConfigModal {
    overlay: Element,
    form: Element,
    first_input: Element,
    error: Element,
}

impl DomConfigModal {
    fn lock_scroll(&self, locked: bool) -> Result<(), JsValue> {
        let body = body().ok_or_else(|| JsValue::from_str("No body"))?;
        let style = body.style();
        if locked {
            style.set_property("overflow", "hidden")?;
            add_class(&body, MODAL_OPEN_CLASS)
        } else {
            style.remove_property("overflow")?;
            remove_class(&body, MODAL_OPEN_CLASS)
        }
    }
}

impl ModalView for DomConfigModal {
    fn set_open(&self, open: bool) {
        let result = set_visible(&self.overlay, open, HIDDEN_CLASS).and_then(|_| self.lock_scroll(open));
        if let Err(e) = result {
            log::warn!("⚠️ [MODAL] Error cambiando estado del modal: {:?}", e);
        }
        if open {
            focus(&self.first_input);
        }
    }

    fn reset_form(&self) {
        if let Some(form) = self.form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn set_error(&self, message: Option<&str>) {
        set_text_content(&self.error, message.unwrap_or(""));
    }
}

/// Renderizar el modal (cerrado)
pub fn render_add_config_modal(lang: &str, dispatch: Dispatcher) -> Result<(Element, DomConfigModal), JsValue> {
    let overlay = ElementBuilder::new("div")
        .id("addConfigModal")
        .class(&format!("modal-overlay {}", HIDDEN_CLASS))
        .flag("hidden")
        .attr("aria-hidden", "true")
        .build()?;

    let dialog = ElementBuilder::new("div")
        .class("modal-content")
        .attr("role", "dialog")
        .attr("aria-modal", "true")
        .attr("aria-labelledby", "addConfigTitle")
        .build()?;

    let close_btn = ElementBuilder::new("button")
        .class("modal-close")
        .attr("type", "button")
        .attr("aria-label", &t("cerrar", lang))
        .text("✕")
        .build()?;
    let header = ElementBuilder::new("div")
        .class("modal-header")
        .child(
            &ElementBuilder::new("h2")
                .id("addConfigTitle")
                .text(&t("nueva_config", lang))
                .build()?,
        )
        .child(&close_btn)
        .build()?;

    let form = ElementBuilder::new("form")
        .id("addConfigForm")
        .class("modal-form")
        .flag("novalidate")
        .build()?;

    let name = create_input("configName", "text", true)?;
    let url = create_input("configUrl", "url", true)?;
    let base_url = create_input("configBaseUrl", "url", true)?;
    let token = create_input("configToken", "text", true)?;
    let source = create_input("configSource", "text", false)?;

    for (label, input) in [
        ("campo_nombre", &name),
        ("campo_url", &url),
        ("campo_base_url", &base_url),
        ("campo_token", &token),
        ("campo_origen", &source),
    ] {
        append_child(&form, &create_field(&t(label, lang), input)?)?;
    }

    let error = ElementBuilder::new("p")
        .class("form-error")
        .attr("role", "alert")
        .build()?;
    append_child(&form, &error)?;

    let cancel_btn = ElementBuilder::new("button")
        .class("btn-secondary")
        .attr("type", "button")
        .text(&t("cancelar", lang))
        .build()?;
    let actions = ElementBuilder::new("div")
        .class("modal-actions")
        .child(&cancel_btn)
        .child(
            &ElementBuilder::new("button")
                .class("btn-primary")
                .attr("type", "submit")
                .text(&t("guardar", lang))
                .build()?,
        )
        .build()?;
    append_child(&form, &actions)?;

    append_child(&dialog, &header)?;
    append_child(&dialog, &form)?;
    append_child(&overlay, &dialog)?;

    // Cerrar: botón X, cancelar, o click en el fondo (no en el contenido)
    for button in [&close_btn, &cancel_btn] {
        let dispatch = dispatch.clone();
        on_click(button, move |_| dispatch(AppEvent::CloseAddConfig))?;
    }
    {
        let dispatch = dispatch.clone();
        let overlay_clone = overlay.clone();
        on_click(&overlay, move |e| {
            let on_backdrop = e
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .map(|el| el == overlay_clone)
                .unwrap_or(false);
            if on_backdrop {
                dispatch(AppEvent::CloseAddConfig);
            }
        })?;
    }

    {
        let (name, url, base_url, token, source) =
            (name.clone(), url.clone(), base_url.clone(), token.clone(), source.clone());
        on_submit(&form, move |e| {
            e.prevent_default();
            let source = input_value(&source);
            dispatch(AppEvent::SubmitConfig(NewConfig {
                name: input_value(&name),
                url: input_value(&url),
                base_url: input_value(&base_url),
                token: input_value(&token),
                source: Some(source),
            }));
        })?;
    }

    let modal = DomConfigModal {
        overlay: overlay.clone(),
        form,
        first_input: name,
        error,
    };
    Ok((overlay, modal))
}

fn create_input(id: &str, input_type: &str, required: bool) -> Result<Element, JsValue> {
    let builder = ElementBuilder::new("input")
        .id(id)
        .attr("name", id)
        .attr("type", input_type)
        .attr("autocomplete", "off");
    let builder = if required { builder.flag("required") } else { builder };
    builder.build()
}

fn create_field(label: &str, input: &Element) -> Result<Element, JsValue> {
    let label = ElementBuilder::new("label").attr("for", &input.id()).text(label).build()?;
    ElementBuilder::new("div")
        .class("form-group")
        .child(&label)
        .child(input)
        .build()
}
