// ============================================================================
// LOGIN VIEW - Pantalla de acceso
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement};

use crate::dom::{
    append_child, focus, input_value, on_keydown, on_submit, set_input_value, set_text_content,
    ElementBuilder,
};
use crate::state::view_state::AppEvent;
use crate::utils::i18n::t;
use crate::views::traits::LoginView;
use crate::views::Dispatcher;

pub struct DomLoginView {
    form: Element,
    username: Element,
    password: Element,
    message: Element,
}

impl LoginView for DomLoginView {
    fn set_message(&self, message: &str) {
        set_text_content(&self.message, message);
    }

    fn clear_password(&self) {
        set_input_value(&self.password, "");
    }

    fn focus_password(&self) {
        focus(&self.password);
    }

    fn focus_username(&self) {
        focus(&self.username);
    }

    fn reset(&self) {
        if let Some(form) = self.form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }
}

/// Renderizar vista de login
pub fn render_login(lang: &str, dispatch: Dispatcher) -> Result<(Element, DomLoginView), JsValue> {
    let login_screen = ElementBuilder::new("section")
        .id("loginScreen")
        .class("login-screen")
        .build()?;

    let container = ElementBuilder::new("div").class("login-container").build()?;

    let header = ElementBuilder::new("div")
        .class("login-header")
        .child(&ElementBuilder::new("h1").text(&t("titulo", lang)).build()?)
        .child(&ElementBuilder::new("p").text(&t("subtitulo", lang)).build()?)
        .build()?;

    let form = ElementBuilder::new("form")
        .id("loginForm")
        .class("login-form")
        .flag("novalidate")
        .build()?;

    let username = create_input("username", "text", &t("usuario_placeholder", lang), "username")?;
    let password = create_input("password", "password", &t("contrasena_placeholder", lang), "current-password")?;

    append_child(&form, &create_field(&t("usuario", lang), "username", &username)?)?;
    append_child(&form, &create_field(&t("contrasena", lang), "password", &password)?)?;

    let message = ElementBuilder::new("p")
        .id("loginMessage")
        .class("login-message")
        .attr("role", "alert")
        .build()?;
    append_child(&form, &message)?;

    let submit_btn = ElementBuilder::new("button")
        .attr("type", "submit")
        .class("btn-login")
        .text(&t("entrar", lang))
        .build()?;
    append_child(&form, &submit_btn)?;

    // Submit: leer valores y delegar en el viewmodel
    {
        let username = username.clone();
        let password = password.clone();
        on_submit(&form, move |e| {
            e.prevent_default();
            dispatch(AppEvent::Login {
                username: input_value(&username),
                password: input_value(&password),
            });
        })?;
    }

    // Enter en cualquier input envía el formulario
    {
        let form_clone = form.clone();
        on_keydown(&form, move |e| {
            let from_input = e
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .map(|el| el.tag_name().eq_ignore_ascii_case("INPUT"))
                .unwrap_or(false);
            if e.key() == "Enter" && from_input {
                e.prevent_default();
                if let Some(form) = form_clone.dyn_ref::<HtmlFormElement>() {
                    if let Err(err) = form.request_submit() {
                        log::warn!("⚠️ [LOGIN] requestSubmit falló: {:?}", err);
                    }
                }
            }
        })?;
    }

    append_child(&container, &header)?;
    append_child(&container, &form)?;
    append_child(&login_screen, &container)?;

    let view = DomLoginView {
        form,
        username,
        password,
        message,
    };
    Ok((login_screen, view))
}

fn create_input(name: &str, input_type: &str, placeholder: &str, autocomplete: &str) -> Result<Element, JsValue> {
    ElementBuilder::new("input")
        .id(name)
        .attr("name", name)
        .attr("type", input_type)
        .attr("placeholder", placeholder)
        .attr("autocomplete", autocomplete)
        .build()
}

fn create_field(label: &str, input_id: &str, input: &Element) -> Result<Element, JsValue> {
    let label = ElementBuilder::new("label")
        .attr("for", input_id)
        .text(label)
        .build()?;
    ElementBuilder::new("div")
        .class("form-group")
        .child(&label)
        .child(input)
        .build()
}
