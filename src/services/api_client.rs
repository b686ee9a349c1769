// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio: construye requests, adjunta el token y
// desempaqueta el sobre {status, msg, data}
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::models::{ApiEnvelope, ConfigId, ConfigRecord, LoginRequest, NewConfig, UpdateConfigRequest};
use crate::services::error::AppError;
use crate::utils::constants::{
    ADD_CONFIG_PATH, CONFIGS_PATH, LOGIN_PATH, TOKEN_HEADER, UPDATE_CONFIG_PATH,
};

/// Contrato del backend de configuraciones. Los viewmodels dependen de
/// este trait, no de `ApiClient`, para poder probarse sin red.
#[allow(async_fn_in_trait)]
pub trait ConfigApi {
    /// POST /api/login -> token
    async fn login(&self, request: &LoginRequest) -> Result<String, AppError>;

    /// GET /api/codex_configs
    async fn list_configs(&self, token: &str) -> Result<Vec<ConfigRecord>, AppError>;

    /// POST /api/add/config
    async fn add_config(&self, token: &str, config: &NewConfig) -> Result<(), AppError>;

    /// POST /api/config/update
    async fn update_config(&self, token: &str, id: &ConfigId) -> Result<(), AppError>;
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authed(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header(TOKEN_HEADER, token)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<ApiEnvelope<T>, AppError> {
        if !response.ok() {
            // Un 401 puede traer {"detail": ...} sin sobre: acaba como Decode
            log::debug!("🌐 [API] HTTP {} {}", response.status(), response.status_text());
        }
        response
            .json::<ApiEnvelope<T>>()
            .await
            .map_err(|e| AppError::Decode(format!("HTTP {}: {}", response.status(), e)))
    }
}

impl ConfigApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<String, AppError> {
        log::info!("🔐 [API] Login para usuario: {}", request.username);

        let response = Request::post(&self.url(LOGIN_PATH))
            .json(request)?
            .send()
            .await?;

        Self::decode::<String>(response).await?.into_data()
    }

    async fn list_configs(&self, token: &str) -> Result<Vec<ConfigRecord>, AppError> {
        let response = Self::authed(Request::get(&self.url(CONFIGS_PATH)), token)
            .send()
            .await?;

        let records = Self::decode::<Vec<ConfigRecord>>(response)
            .await?
            .into_result()?
            .unwrap_or_default();
        log::info!("📋 [API] {} configuraciones recibidas", records.len());
        Ok(records)
    }

    async fn add_config(&self, token: &str, config: &NewConfig) -> Result<(), AppError> {
        log::info!("➕ [API] Alta de configuración: {}", config.name);

        let response = Self::authed(Request::post(&self.url(ADD_CONFIG_PATH)), token)
            .json(config)?
            .send()
            .await?;

        Self::decode::<serde_json::Value>(response).await?.into_result()?;
        Ok(())
    }

    async fn update_config(&self, token: &str, id: &ConfigId) -> Result<(), AppError> {
        log::info!("🔁 [API] Cambio de estado de configuración {}", id);

        let body = UpdateConfigRequest { id: id.clone() };
        let response = Self::authed(Request::post(&self.url(UPDATE_CONFIG_PATH)), token)
            .json(&body)?
            .send()
            .await?;

        Self::decode::<serde_json::Value>(response).await?.into_result()?;
        Ok(())
    }
}
