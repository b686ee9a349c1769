// ============================================================================
// SAMPLE VIEW - Ejemplo de uso con Codex CLI
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::utils::constants::TAB_SAMPLE_TARGET;
use crate::utils::i18n::t;
use crate::views::copy_button::render_copy_button;

const CONFIG_TOML_SAMPLE: &str = r#"model_provider = "codex"
model = "gpt-5-codex"
model_reasoning_effort = "high"
disable_response_storage = true

[model_providers.codex]
name = "codex"
base_url = "https://your-base-url.example.com/v1"
wire_api = "responses"
requires_openai_auth = true"#;

const AUTH_JSON_SAMPLE: &str = r#"{
  "OPENAI_API_KEY": "sk-your-api-token"
}"#;

/// Panel estático (oculto al arrancar; lo muestra el TabController)
pub fn render_sample_panel(lang: &str, copy_feedback_ms: u32) -> Result<Element, JsValue> {
    let panel = ElementBuilder::new("section")
        .id(TAB_SAMPLE_TARGET)
        .class("sample-section")
        .attr("role", "tabpanel")
        .flag("hidden")
        .build()?;

    append_child(
        &panel,
        &ElementBuilder::new("h2").text(&t("ejemplo_titulo", lang)).build()?,
    )?;
    append_child(
        &panel,
        &render_snippet(&t("ejemplo_config", lang), CONFIG_TOML_SAMPLE, &t("copiar", lang), copy_feedback_ms)?,
    )?;
    append_child(
        &panel,
        &render_snippet(&t("ejemplo_auth", lang), AUTH_JSON_SAMPLE, &t("copiar", lang), copy_feedback_ms)?,
    )?;
    append_child(
        &panel,
        &ElementBuilder::new("p")
            .class("sample-note")
            .text(&t("ejemplo_nota", lang))
            .build()?,
    )?;

    Ok(panel)
}

fn render_snippet(title: &str, code: &str, copy_label: &str, copy_feedback_ms: u32) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("div")
        .class("code-header")
        .child(&ElementBuilder::new("span").class("code-title").text(title).build()?)
        .child(&render_copy_button(code, copy_label, "code-copy", copy_feedback_ms)?)
        .build()?;

    let pre = ElementBuilder::new("pre")
        .class("code-block")
        .child(&ElementBuilder::new("code").text(code).build()?)
        .build()?;

    ElementBuilder::new("div")
        .class("code-snippet")
        .child(&header)
        .child(&pre)
        .build()
}
