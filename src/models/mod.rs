pub mod api;
pub mod auth;
pub mod config;

pub use api::{ApiEnvelope, STATUS_OK};
pub use auth::LoginRequest;
pub use config::{ConfigId, ConfigRecord, ConfigStatus, NewConfig, RawStatus, UpdateConfigRequest};
