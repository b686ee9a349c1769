// ============================================================================
// PANEL VIEW - Implementaciones DOM de Panel y TabButton
// ============================================================================

use web_sys::Element;

use crate::dom::{set_attribute, set_visible, toggle_class};
use crate::state::view_state::Tab;
use crate::utils::constants::{HIDDEN_CLASS, TAB_ACTIVE_CLASS};
use crate::views::traits::{Panel, TabButton};

pub struct DomPanel {
    element: Element,
}

impl DomPanel {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl Panel for DomPanel {
    fn set_visible(&self, visible: bool) {
        if let Err(e) = set_visible(&self.element, visible, HIDDEN_CLASS) {
            log::warn!("⚠️ [VIEW] No se pudo cambiar visibilidad de #{}: {:?}", self.element.id(), e);
        }
    }
}

pub struct DomTabButton {
    element: Element,
    tab: Tab,
}

impl DomTabButton {
    pub fn new(element: Element, tab: Tab) -> Self {
        Self { element, tab }
    }
}

impl TabButton for DomTabButton {
    fn tab(&self) -> Tab {
        self.tab
    }

    fn set_active(&self, active: bool) {
        let result = toggle_class(&self.element, TAB_ACTIVE_CLASS, active)
            .and_then(|_| set_attribute(&self.element, "aria-selected", if active { "true" } else { "false" }));
        if let Err(e) = result {
            log::warn!("⚠️ [VIEW] Error actualizando pestaña {:?}: {:?}", self.tab, e);
        }
    }
}
