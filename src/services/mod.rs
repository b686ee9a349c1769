// ============================================================================
// SERVICES MODULE - HTTP, almacenamiento de sesión, portapapeles y timers
// ============================================================================

pub mod api_client;
pub mod clipboard;
pub mod error;
pub mod scheduler;
pub mod session_storage;

pub use api_client::{ApiClient, ConfigApi};
pub use error::AppError;
