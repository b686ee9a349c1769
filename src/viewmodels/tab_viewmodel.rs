// ============================================================================
// TAB VIEWMODEL - Pestañas mutuamente excluyentes
// ============================================================================

use std::rc::Rc;

use crate::state::view_state::Tab;
use crate::views::traits::{Panel, TabButton};

pub struct TabController {
    config_panel: Rc<dyn Panel>,
    sample_panel: Rc<dyn Panel>,
    buttons: Vec<Rc<dyn TabButton>>,
}

impl TabController {
    pub fn new(
        config_panel: Rc<dyn Panel>,
        sample_panel: Rc<dyn Panel>,
        buttons: Vec<Rc<dyn TabButton>>,
    ) -> Self {
        Self {
            config_panel,
            sample_panel,
            buttons,
        }
    }

    /// Mostrar el panel de `tab` y ocultar el otro, sea cual sea el estado previo
    pub fn activate(&self, tab: Tab) {
        for button in &self.buttons {
            button.set_active(button.tab() == tab);
        }
        self.config_panel.set_visible(tab == Tab::Config);
        self.sample_panel.set_visible(tab == Tab::Sample);
    }
}
