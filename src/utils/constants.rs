/// Claves de sessionStorage (compartidas con la versión JS de la consola)
pub const LOGIN_FLAG_KEY: &str = "codex-login-v1";
pub const LOGIN_FLAG_VALUE: &str = "true";
pub const TOKEN_KEY: &str = "codex-token";

/// Cabecera de autenticación que espera el backend
pub const TOKEN_HEADER: &str = "codex-token";

// Endpoints
pub const LOGIN_PATH: &str = "/api/login";
pub const CONFIGS_PATH: &str = "/api/codex_configs";
pub const UPDATE_CONFIG_PATH: &str = "/api/config/update";
pub const ADD_CONFIG_PATH: &str = "/api/add/config";

// Pestañas (valores de data-target)
pub const TAB_CONFIG_TARGET: &str = "configPage";
pub const TAB_SAMPLE_TARGET: &str = "sampleSection";

// Clases CSS
pub const HIDDEN_CLASS: &str = "is-hidden";
pub const TAB_ACTIVE_CLASS: &str = "tab-active";
pub const MODAL_OPEN_CLASS: &str = "modal-open";
