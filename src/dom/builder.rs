// ============================================================================
// ELEMENT BUILDER - Construcción encadenada de elementos
// ============================================================================
// El primer fallo del DOM se guarda y se devuelve en `build()`, así la
// cadena no necesita `?` en cada paso.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, create_element, set_attribute, set_text_content};

pub struct ElementBuilder {
    element: Result<Element, JsValue>,
}

impl ElementBuilder {
    pub fn new(tag: &str) -> Self {
        Self {
            element: create_element(tag),
        }
    }

    /// Aplicar `step` solo si todo fue bien hasta ahora
    fn then<F>(self, step: F) -> Self
    where
        F: FnOnce(&Element) -> Result<(), JsValue>,
    {
        Self {
            element: self.element.and_then(|el| step(&el).map(|_| el)),
        }
    }

    /// Reemplaza todas las clases
    pub fn class(self, class: &str) -> Self {
        self.then(|el| {
            el.set_class_name(class);
            Ok(())
        })
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn attr(self, name: &str, value: &str) -> Self {
        self.then(|el| set_attribute(el, name, value))
    }

    /// Atributo booleano (`hidden`, `required`, `novalidate`...)
    pub fn flag(self, name: &str) -> Self {
        self.attr(name, "")
    }

    /// Los datos del backend van siempre por aquí, nunca por `html`
    pub fn text(self, text: &str) -> Self {
        self.then(|el| {
            set_text_content(el, text);
            Ok(())
        })
    }

    /// Solo markup propio (iconos SVG)
    pub fn html(self, html: &str) -> Self {
        self.then(|el| {
            el.set_inner_html(html);
            Ok(())
        })
    }

    pub fn child(self, child: &Element) -> Self {
        self.then(|el| append_child(el, child))
    }

    pub fn build(self) -> Result<Element, JsValue> {
        self.element
    }
}
