// ============================================================================
// CONFIG GRID - Implementación DOM de CardList
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, set_inner_html, ElementBuilder};
use crate::models::ConfigRecord;
use crate::utils::i18n::t;
use crate::views::config_card::render_config_card;
use crate::views::traits::CardList;
use crate::views::Dispatcher;

pub struct DomCardList {
    grid: Element,
    language: String,
    copy_feedback_ms: u32,
    dispatch: Dispatcher,
}

impl DomCardList {
    pub fn new(grid: Element, language: &str, copy_feedback_ms: u32, dispatch: Dispatcher) -> Self {
        Self {
            grid,
            language: language.to_string(),
            copy_feedback_ms,
            dispatch,
        }
    }

    fn rebuild(&self, records: &[ConfigRecord]) -> Result<(), JsValue> {
        // Vaciar: los listeners de las tarjetas viejas se van con ellas
        set_inner_html(&self.grid, "");

        if records.is_empty() {
            let empty = ElementBuilder::new("p")
                .class("empty-state")
                .text(&t("sin_configs", &self.language))
                .build()?;
            return append_child(&self.grid, &empty);
        }

        for record in records {
            let card = render_config_card(record, &self.language, self.copy_feedback_ms, self.dispatch.clone())?;
            append_child(&self.grid, &card)?;
        }
        Ok(())
    }
}

impl CardList for DomCardList {
    fn replace_cards(&self, records: &[ConfigRecord]) {
        match self.rebuild(records) {
            Ok(()) => log::debug!("🗂️ [GRID] {} tarjetas renderizadas", records.len()),
            Err(e) => log::error!("❌ [GRID] Error renderizando tarjetas: {:?}", e),
        }
    }
}
