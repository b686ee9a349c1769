// ============================================================================
// ERRORES - Taxonomía de fallos del cliente
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Fallo de transporte (sin respuesta del backend)
    #[error("network error: {0}")]
    Network(String),

    /// Cuerpo no decodificable o sin los campos esperados
    #[error("decode error: {0}")]
    Decode(String),

    /// El backend respondió con `status` distinto de 200
    #[error("rejected by backend (status {status}): {msg}")]
    Rejected { status: i64, msg: String },

    /// Llamada autenticada sin token en la sesión
    #[error("no session token")]
    MissingToken,

    #[error("storage error: {0}")]
    Storage(String),

    #[error("dom error: {0}")]
    Dom(String),
}

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => AppError::Decode(e.to_string()),
            other => AppError::Network(other.to_string()),
        }
    }
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
