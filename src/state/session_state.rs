// ============================================================================
// SESSION STATE - Contexto de sesión explícito (flag + token)
// ============================================================================
// Reemplaza el acceso directo a sessionStorage desde cada componente:
// quien necesite la sesión recibe un `SessionContext`.
// ============================================================================

use std::rc::Rc;

use crate::services::error::AppError;
use crate::services::session_storage::SessionStore;
use crate::utils::constants::{LOGIN_FLAG_KEY, LOGIN_FLAG_VALUE, TOKEN_KEY};

#[derive(Clone)]
pub struct SessionContext {
    store: Rc<dyn SessionStore>,
}

impl SessionContext {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Init: lee el flag guardado al cargar la página
    pub fn restore(&self) -> bool {
        let logged_in = self.is_logged_in();
        if logged_in {
            log::info!("💾 [SESSION] Sesión encontrada en sessionStorage");
        }
        logged_in
    }

    pub fn is_logged_in(&self) -> bool {
        self.store.get(LOGIN_FLAG_KEY).as_deref() == Some(LOGIN_FLAG_VALUE)
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Guardar flag + token tras un login exitoso
    pub fn establish(&self, token: &str) -> Result<(), AppError> {
        self.store.set(TOKEN_KEY, token)?;
        if let Err(e) = self.store.set(LOGIN_FLAG_KEY, LOGIN_FLAG_VALUE) {
            // Sin flag no hay sesión: no dejar un token huérfano
            self.store.remove(TOKEN_KEY);
            return Err(e);
        }
        log::info!("✅ [SESSION] Sesión establecida");
        Ok(())
    }

    /// Teardown: borra ambos valores
    pub fn clear(&self) {
        self.store.remove(LOGIN_FLAG_KEY);
        self.store.remove(TOKEN_KEY);
        log::info!("🚪 [SESSION] Sesión eliminada");
    }
}
