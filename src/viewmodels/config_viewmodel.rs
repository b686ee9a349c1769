// ============================================================================
// CONFIG VIEWMODEL - Lista, alta y cambio de estado de configuraciones
// ============================================================================

use std::rc::Rc;

use crate::models::{ConfigId, ConfigRecord, NewConfig};
use crate::services::api_client::ConfigApi;
use crate::services::error::AppError;
use crate::state::session_state::SessionContext;
use crate::state::view_state::MutationOutcome;

pub struct ConfigViewModel<A> {
    api: Rc<A>,
    session: SessionContext,
}

impl<A: ConfigApi> ConfigViewModel<A> {
    pub fn new(api: Rc<A>, session: SessionContext) -> Self {
        Self { api, session }
    }

    fn token(&self) -> Result<String, AppError> {
        self.session.token().ok_or(AppError::MissingToken)
    }

    /// Lista completa. El llamador decide qué hacer con un error
    /// (la app cierra la sesión).
    pub async fn list(&self) -> Result<Vec<ConfigRecord>, AppError> {
        let token = self.token()?;
        self.api.list_configs(&token).await
    }

    /// Alta con todos los campos recortados
    pub async fn add(&self, form: &NewConfig) -> Result<(), AppError> {
        let token = self.token()?;
        let config = form.trimmed();
        self.api.add_config(&token, &config).await
    }

    /// Cambio de estado. Sin id no hay llamada al backend.
    pub async fn toggle_status(&self, id: Option<&ConfigId>) -> Result<MutationOutcome, AppError> {
        let Some(id) = id else {
            log::warn!("⚠️ [CONFIGS] Tarjeta sin id, no se cambia el estado");
            return Ok(MutationOutcome::Skipped);
        };
        let token = self.token()?;
        self.api.update_config(&token, id).await?;
        Ok(MutationOutcome::Saved)
    }
}
