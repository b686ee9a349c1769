// ============================================================================
// VIEW STATE - Pestañas, feedback de copiado y eventos de UI
// ============================================================================

use crate::models::{ConfigId, NewConfig};
use crate::utils::constants::{TAB_CONFIG_TARGET, TAB_SAMPLE_TARGET};

/// Paneles de contenido del shell (exactamente uno visible)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Config,
    Sample,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Config, Tab::Sample];

    /// Valor de `data-target` del botón de la pestaña
    pub fn target(self) -> &'static str {
        match self {
            Tab::Config => TAB_CONFIG_TARGET,
            Tab::Sample => TAB_SAMPLE_TARGET,
        }
    }

    /// Clave i18n del botón
    pub fn label_key(self) -> &'static str {
        match self {
            Tab::Config => "tab_configs",
            Tab::Sample => "tab_ejemplo",
        }
    }
}

/// Máquina de estados de los botones de copiar: {Idle, Success, Error} -> Idle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CopyFeedback {
    #[default]
    Idle,
    Success,
    Error,
}

impl CopyFeedback {
    pub fn from_result<E>(result: &Result<(), E>) -> Self {
        match result {
            Ok(()) => CopyFeedback::Success,
            Err(_) => CopyFeedback::Error,
        }
    }

    /// Estado al expirar el temporizador
    pub fn expire(self) -> Self {
        CopyFeedback::Idle
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// Resultado de una mutación que no falló
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationOutcome {
    Saved,
    /// No se llegó a llamar al backend (p.ej. tarjeta sin id)
    Skipped,
}

/// Acciones de usuario que las vistas envían al viewmodel
#[derive(Clone, Debug, PartialEq)]
pub enum AppEvent {
    Login { username: String, password: String },
    Logout,
    ActivateTab(Tab),
    OpenAddConfig,
    CloseAddConfig,
    Escape,
    SubmitConfig(NewConfig),
    ToggleStatus(Option<ConfigId>),
    Reload,
}

impl AppEvent {
    /// Nombre para logs (sin datos: Login lleva la contraseña)
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::Login { .. } => "Login",
            AppEvent::Logout => "Logout",
            AppEvent::ActivateTab(_) => "ActivateTab",
            AppEvent::OpenAddConfig => "OpenAddConfig",
            AppEvent::CloseAddConfig => "CloseAddConfig",
            AppEvent::Escape => "Escape",
            AppEvent::SubmitConfig(_) => "SubmitConfig",
            AppEvent::ToggleStatus(_) => "ToggleStatus",
            AppEvent::Reload => "Reload",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_tab_has_its_own_target() {
        assert_eq!(Tab::Config.target(), "configPage");
        assert_eq!(Tab::Sample.target(), "sampleSection");
    }

    #[test]
    fn copy_feedback_always_returns_to_idle() {
        let ok: Result<(), ()> = Ok(());
        let err: Result<(), ()> = Err(());
        for state in [CopyFeedback::from_result(&ok), CopyFeedback::from_result(&err)] {
            assert_ne!(state, CopyFeedback::Idle);
            assert_eq!(state.expire(), CopyFeedback::Idle);
        }
        assert_eq!(CopyFeedback::from_result(&ok), CopyFeedback::Success);
        assert_eq!(CopyFeedback::from_result(&err), CopyFeedback::Error);
    }

    #[test]
    fn event_names_never_include_credentials() {
        let event = AppEvent::Login {
            username: "admin".to_string(),
            password: "s3cret".to_string(),
        };
        assert_eq!(event.name(), "Login");
    }
}
