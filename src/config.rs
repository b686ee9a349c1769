// ============================================================================
// CONFIG - Configuración de la consola (tiempo de compilación)
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// URL base del backend. Vacía = mismo origen que la página
    pub backend_url: String,
    /// Idioma de la interfaz ("ZH" o "EN")
    pub language: String,
    pub log_level: String,
    pub timing: TimingConfig,
}

/// Retardos de la UI, en milisegundos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Espera entre una escritura exitosa y la recarga de la lista
    pub reload_delay_ms: u32,
    /// Duración del icono de éxito/error en los botones de copiar
    pub copy_feedback_ms: u32,
    /// Duración de las notificaciones transitorias
    pub toast_duration_ms: u32,
    /// Espera antes de enfocar el usuario tras volver al login
    pub focus_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            language: "ZH".to_string(),
            log_level: "info".to_string(),
            timing: TimingConfig::default(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            reload_delay_ms: 300,
            copy_feedback_ms: 1600,
            toast_duration_ms: 2400,
            focus_delay_ms: 120,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let timing = TimingConfig::default();
        Self {
            backend_url: option_env!("BACKEND_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            language: option_env!("APP_LANGUAGE")
                .map(|lang| lang.to_uppercase())
                .unwrap_or(defaults.language),
            log_level: option_env!("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            timing: TimingConfig {
                reload_delay_ms: parse_or(option_env!("RELOAD_DELAY_MS"), timing.reload_delay_ms),
                copy_feedback_ms: parse_or(option_env!("COPY_FEEDBACK_MS"), timing.copy_feedback_ms),
                toast_duration_ms: parse_or(option_env!("TOAST_DURATION_MS"), timing.toast_duration_ms),
                focus_delay_ms: parse_or(option_env!("FOCUS_DELAY_MS"), timing.focus_delay_ms),
            },
        }
    }

    /// Nivel de log para wasm_logger (por defecto Info)
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

fn parse_or(value: Option<&str>, fallback: u32) -> u32 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(fallback)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
