// ============================================================================
// VIEW TRAITS - Superficies que los viewmodels manejan sin tocar el DOM
// ============================================================================
// Cada trait tiene una implementación DOM en views/ y una falsa en los tests.
// ============================================================================

use crate::models::ConfigRecord;
use crate::state::view_state::{NoticeKind, Tab};

/// Bloque de la UI que se muestra u oculta entero
pub trait Panel {
    /// Oculto = invisible y fuera del árbol de accesibilidad
    fn set_visible(&self, visible: bool);
}

pub trait TabButton {
    fn tab(&self) -> Tab;
    fn set_active(&self, active: bool);
}

/// Formulario de login
pub trait LoginView {
    fn set_message(&self, message: &str);
    fn clear_password(&self);
    fn focus_password(&self);
    fn focus_username(&self);
    /// Vaciar todos los campos
    fn reset(&self);
}

/// Rejilla de tarjetas de configuración
pub trait CardList {
    /// Vacía la rejilla y la reconstruye con `records`
    fn replace_cards(&self, records: &[ConfigRecord]);
}

/// Modal de alta de configuración
pub trait ModalView {
    /// Abrir: mostrar overlay, bloquear scroll, enfocar el primer campo.
    /// Cerrar: lo contrario.
    fn set_open(&self, open: bool);
    fn reset_form(&self);
    fn set_error(&self, message: Option<&str>);
}

/// Notificaciones transitorias
pub trait Notifier {
    fn notify(&self, kind: NoticeKind, message: &str);
}
