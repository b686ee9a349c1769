use serde::Deserialize;

use crate::services::error::AppError;

/// Código de éxito dentro del cuerpo de la respuesta
pub const STATUS_OK: i64 = 200;

/// Sobre común de todas las respuestas: `{status, msg, data}`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: i64,
    pub msg: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// El `status` del cuerpo manda, no el código HTTP
    pub fn into_result(self) -> Result<Option<T>, AppError> {
        if self.is_ok() {
            Ok(self.data)
        } else {
            Err(AppError::Rejected {
                status: self.status,
                msg: self.msg.unwrap_or_default(),
            })
        }
    }

    /// Igual que `into_result` pero exige `data`
    pub fn into_data(self) -> Result<T, AppError> {
        self.into_result()?
            .ok_or_else(|| AppError::Decode("respuesta sin campo data".to_string()))
    }
}
