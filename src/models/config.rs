// ============================================================================
// CONFIG RECORD - Configuración Codex tal como la devuelve el backend
// ============================================================================

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identificador opaco asignado por el backend (entero o texto en el wire)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ConfigId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ConfigId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigId::Number(n) => write!(f, "{}", n),
            ConfigId::Text(s) => f.write_str(s),
        }
    }
}

/// Estado tal como llega: bool, número o texto libre
#[derive(Clone, Debug, PartialEq, Default)]
pub enum RawStatus {
    Boolean(bool),
    Numeric(f64),
    Textual(String),
    #[default]
    Absent,
}

impl<'de> Deserialize<'de> for RawStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::Bool(b) => RawStatus::Boolean(b),
            serde_json::Value::Number(n) => n.as_f64().map(RawStatus::Numeric).unwrap_or_default(),
            serde_json::Value::String(s) => RawStatus::Textual(s),
            // null, arrays, objetos: no interpretables
            _ => RawStatus::Absent,
        })
    }
}

/// Cualquier otra forma de id (float, bool, vacío...) queda en `None`:
/// la tarjeta se muestra pero su cambio de estado se omite.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<ConfigId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_i64().map(ConfigId::Number),
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(ConfigId::Text(s)),
        _ => None,
    })
}

/// Estado normalizado (tri-estado)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigStatus {
    Active,
    Inactive,
    Unknown,
}

const ACTIVE_TOKENS: &[&str] = &["true", "1", "yes", "y", "active", "enabled", "online", "ok"];
const INACTIVE_TOKENS: &[&str] = &["false", "0", "no", "n", "inactive", "disabled", "offline", "error"];

impl RawStatus {
    /// Normalización total: cualquier valor no reconocido es `Unknown`
    pub fn normalize(&self) -> ConfigStatus {
        match self {
            RawStatus::Boolean(true) => ConfigStatus::Active,
            RawStatus::Boolean(false) => ConfigStatus::Inactive,
            RawStatus::Numeric(n) if *n == 1.0 => ConfigStatus::Active,
            RawStatus::Numeric(n) if *n == 0.0 => ConfigStatus::Inactive,
            RawStatus::Numeric(_) => ConfigStatus::Unknown,
            RawStatus::Textual(text) => {
                let token = text.trim().to_lowercase();
                if ACTIVE_TOKENS.contains(&token.as_str()) {
                    ConfigStatus::Active
                } else if INACTIVE_TOKENS.contains(&token.as_str()) {
                    ConfigStatus::Inactive
                } else {
                    ConfigStatus::Unknown
                }
            }
            RawStatus::Absent => ConfigStatus::Unknown,
        }
    }
}

impl ConfigStatus {
    /// `Some(true|false)` cuando el estado es conocido
    pub fn as_bool(self) -> Option<bool> {
        match self {
            ConfigStatus::Active => Some(true),
            ConfigStatus::Inactive => Some(false),
            ConfigStatus::Unknown => None,
        }
    }
}

/// Campos de texto que el backend puede mandar como null
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ConfigRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<ConfigId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, rename = "baseUrl", deserialize_with = "null_as_empty")]
    pub base_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub token: String,
    #[serde(default)]
    pub status: RawStatus,
}

impl ConfigRecord {
    pub fn status(&self) -> ConfigStatus {
        self.status.normalize()
    }
}

/// Formulario de alta (POST /api/add/config)
#[derive(Clone, Debug, PartialEq, Default, Serialize)]
pub struct NewConfig {
    pub name: String,
    pub url: String,
    #[serde(rename = "baseUrl")]
    pub base_url: String,
    pub token: String,
    pub source: Option<String>,
}

impl NewConfig {
    /// Copia con todos los campos recortados; `source` vacío pasa a `None`
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            url: self.url.trim().to_string(),
            base_url: self.base_url.trim().to_string(),
            token: self.token.trim().to_string(),
            source: self
                .source
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }

    /// Nombres de los campos obligatorios que quedan vacíos tras recortar
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let trimmed = self.trimmed();
        [
            ("name", trimmed.name.is_empty()),
            ("url", trimmed.url.is_empty()),
            ("baseUrl", trimmed.base_url.is_empty()),
            ("token", trimmed.token.is_empty()),
        ]
        .into_iter()
        .filter_map(|(field, empty)| empty.then_some(field))
        .collect()
    }
}

/// Cuerpo de POST /api/config/update
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpdateConfigRequest {
    pub id: ConfigId,
}
