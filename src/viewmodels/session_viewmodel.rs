// ============================================================================
// SESSION VIEWMODEL - Login / logout y puerta de sesión
// ============================================================================

use std::rc::Rc;

use crate::models::LoginRequest;
use crate::services::api_client::ConfigApi;
use crate::services::error::AppError;
use crate::state::session_state::SessionContext;
use crate::views::traits::Panel;

/// ViewModel de sesión - SOLO lógica de negocio
pub struct SessionViewModel<A> {
    api: Rc<A>,
    session: SessionContext,
}

impl<A: ConfigApi> SessionViewModel<A> {
    pub fn new(api: Rc<A>, session: SessionContext) -> Self {
        Self { api, session }
    }

    /// Autenticar y, si el backend acepta, guardar flag + token.
    /// Cualquier fallo (credenciales, red, respuesta rara) es el mismo error
    /// para la UI; aquí solo se registra el detalle.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        let request = LoginRequest::new(username, password);
        log::info!("🔐 [SESSION] Iniciando login para {}", request.username);

        let token = match self.api.login(&request).await {
            Ok(token) if !token.is_empty() => token,
            Ok(_) => return Err(AppError::Decode("token vacío".to_string())),
            Err(e) => {
                log::warn!("❌ [SESSION] Login rechazado: {}", e);
                return Err(e);
            }
        };

        self.session.establish(&token)?;
        Ok(token)
    }

    pub fn logout(&self) {
        self.session.clear();
    }
}

/// Mantiene la invariante: shell visible <=> flag de sesión activo
pub struct SessionGate {
    session: SessionContext,
    login_screen: Rc<dyn Panel>,
    app_shell: Rc<dyn Panel>,
}

impl SessionGate {
    pub fn new(session: SessionContext, login_screen: Rc<dyn Panel>, app_shell: Rc<dyn Panel>) -> Self {
        Self {
            session,
            login_screen,
            app_shell,
        }
    }

    /// Aplicar el estado de sesión actual a la UI. Devuelve si hay sesión.
    pub fn sync(&self) -> bool {
        let logged_in = self.session.is_logged_in();
        self.app_shell.set_visible(logged_in);
        self.login_screen.set_visible(!logged_in);
        logged_in
    }
}
