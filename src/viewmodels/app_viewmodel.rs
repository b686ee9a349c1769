// ============================================================================
// APP VIEWMODEL - Orquesta sesión, pestañas, lista y modal
// ============================================================================
// Recibe todas las superficies de UI por constructor (traits de views/),
// así que toda la lógica se prueba sin DOM.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::config::TimingConfig;
use crate::models::{ConfigId, NewConfig};
use crate::services::api_client::ConfigApi;
use crate::services::scheduler::Scheduler;
use crate::state::session_state::SessionContext;
use crate::state::view_state::{AppEvent, MutationOutcome, NoticeKind, Tab};
use crate::utils::i18n::t;
use crate::viewmodels::{ConfigViewModel, SessionGate, SessionViewModel, TabController};
use crate::views::traits::{CardList, LoginView, ModalView, Notifier, Panel, TabButton};

/// Superficies de UI inyectadas
pub struct AppViews {
    pub login_screen: Rc<dyn Panel>,
    pub app_shell: Rc<dyn Panel>,
    pub config_panel: Rc<dyn Panel>,
    pub sample_panel: Rc<dyn Panel>,
    pub tab_buttons: Vec<Rc<dyn TabButton>>,
    pub login: Rc<dyn LoginView>,
    pub cards: Rc<dyn CardList>,
    pub modal: Rc<dyn ModalView>,
    pub notifier: Rc<dyn Notifier>,
}

struct Inner<A> {
    session: SessionContext,
    session_vm: SessionViewModel<A>,
    config_vm: ConfigViewModel<A>,
    gate: SessionGate,
    tabs: TabController,
    login: Rc<dyn LoginView>,
    cards: Rc<dyn CardList>,
    modal: Rc<dyn ModalView>,
    notifier: Rc<dyn Notifier>,
    modal_open: Cell<bool>,
    scheduler: Rc<dyn Scheduler>,
    timing: TimingConfig,
    language: String,
}

/// Handle clonable (Rc) para poder moverlo a tareas diferidas
pub struct AppViewModel<A> {
    inner: Rc<Inner<A>>,
}

impl<A> Clone for AppViewModel<A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<A: ConfigApi + 'static> AppViewModel<A> {
    pub fn new(
        api: Rc<A>,
        session: SessionContext,
        views: AppViews,
        scheduler: Rc<dyn Scheduler>,
        timing: TimingConfig,
        language: &str,
    ) -> Self {
        let gate = SessionGate::new(session.clone(), views.login_screen, views.app_shell);
        let tabs = TabController::new(views.config_panel, views.sample_panel, views.tab_buttons);
        Self {
            inner: Rc::new(Inner {
                session_vm: SessionViewModel::new(api.clone(), session.clone()),
                config_vm: ConfigViewModel::new(api, session.clone()),
                session,
                gate,
                tabs,
                login: views.login,
                cards: views.cards,
                modal: views.modal,
                notifier: views.notifier,
                modal_open: Cell::new(false),
                scheduler,
                timing,
                language: language.to_string(),
            }),
        }
    }

    fn text(&self, key: &str) -> String {
        t(key, &self.inner.language)
    }

    /// Carga de página: restaurar sesión o mostrar login
    pub async fn start(&self) {
        if self.inner.session.restore() {
            self.inner.gate.sync();
            log::info!("🔓 [APP] Sesión restaurada, cargando configuraciones");
            self.inner.tabs.activate(Tab::Config);
            self.reload().await;
        } else {
            self.lock();
        }
    }

    /// Punto de entrada único para los eventos de las vistas
    pub async fn handle(&self, event: AppEvent) {
        match event {
            AppEvent::Login { username, password } => self.login(&username, &password).await,
            AppEvent::Logout => self.logout(),
            AppEvent::ActivateTab(tab) => self.inner.tabs.activate(tab),
            AppEvent::OpenAddConfig => self.open_modal(),
            AppEvent::CloseAddConfig => self.close_modal(),
            AppEvent::Escape => {
                self.handle_escape();
            }
            AppEvent::SubmitConfig(form) => self.submit_config(form).await,
            AppEvent::ToggleStatus(id) => self.toggle_status(id).await,
            AppEvent::Reload => self.reload().await,
        }
    }

    pub async fn login(&self, username: &str, password: &str) {
        match self.inner.session_vm.login(username, password).await {
            Ok(_) => {
                self.inner.login.set_message("");
                self.inner.login.reset();
                self.unlock();
                self.reload().await;
            }
            Err(e) => {
                log::warn!("❌ [APP] Login fallido: {}", e);
                self.inner.gate.sync();
                self.inner.login.set_message(&self.text("credenciales_invalidas"));
                self.inner.login.clear_password();
                self.inner.login.focus_password();
            }
        }
    }

    pub fn logout(&self) {
        self.inner.session_vm.logout();
        self.lock();
    }

    fn unlock(&self) {
        self.inner.gate.sync();
        self.inner.tabs.activate(Tab::Config);
    }

    /// Volver al login. El foco se aplaza para que termine la transición.
    fn lock(&self) {
        self.close_modal();
        self.inner.cards.replace_cards(&[]);
        self.inner.gate.sync();
        self.inner.tabs.activate(Tab::Config);

        let login = self.inner.login.clone();
        self.inner.scheduler.spawn_after(
            self.inner.timing.focus_delay_ms,
            Box::pin(async move { login.focus_username() }),
        );
    }

    /// Reconstruir la lista. Cualquier fallo cierra la sesión.
    pub async fn reload(&self) {
        match self.inner.config_vm.list().await {
            Ok(records) => {
                log::info!("📋 [APP] Renderizando {} tarjetas", records.len());
                self.inner.cards.replace_cards(&records);
            }
            Err(e) => {
                log::error!("❌ [APP] Error cargando configuraciones, cerrando sesión: {}", e);
                self.logout();
            }
        }
    }

    /// Recarga diferida; si la sesión se cerró entretanto no hace nada
    fn schedule_reload(&self) {
        let this = self.clone();
        self.inner.scheduler.spawn_after(
            self.inner.timing.reload_delay_ms,
            Box::pin(async move {
                if !this.inner.session.is_logged_in() {
                    log::debug!("⏭️ [APP] Recarga diferida descartada: sin sesión");
                    return;
                }
                this.reload().await
            }),
        );
    }

    pub fn is_modal_open(&self) -> bool {
        self.inner.modal_open.get()
    }

    pub fn open_modal(&self) {
        if self.inner.modal_open.replace(true) {
            return;
        }
        self.inner.modal.set_error(None);
        self.inner.modal.set_open(true);
    }

    pub fn close_modal(&self) {
        if !self.inner.modal_open.replace(false) {
            return;
        }
        self.inner.modal.set_open(false);
    }

    /// Escape solo cierra el modal si está abierto
    pub fn handle_escape(&self) -> bool {
        if self.is_modal_open() {
            self.close_modal();
            true
        } else {
            false
        }
    }

    pub async fn submit_config(&self, form: NewConfig) {
        if !form.missing_fields().is_empty() {
            log::debug!("⚠️ [APP] Campos vacíos: {:?}", form.missing_fields());
            self.inner.modal.set_error(Some(&self.text("campos_obligatorios")));
            return;
        }
        self.inner.modal.set_error(None);

        match self.inner.config_vm.add(&form).await {
            Ok(()) => {
                self.inner.notifier.notify(NoticeKind::Success, &self.text("alta_ok"));
                self.close_modal();
                self.inner.modal.reset_form();
                self.schedule_reload();
            }
            Err(e) => {
                log::error!("❌ [APP] Error en alta de configuración: {}", e);
                self.inner.notifier.notify(NoticeKind::Failure, &self.text("alta_error"));
            }
        }
    }

    pub async fn toggle_status(&self, id: Option<ConfigId>) {
        match self.inner.config_vm.toggle_status(id.as_ref()).await {
            Ok(MutationOutcome::Saved) => {
                self.inner.notifier.notify(NoticeKind::Success, &self.text("estado_ok"));
                self.schedule_reload();
            }
            Ok(MutationOutcome::Skipped) => {}
            Err(e) => {
                log::error!("❌ [APP] Error cambiando estado: {}", e);
                self.inner.notifier.notify(NoticeKind::Failure, &self.text("estado_error"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConfigRecord;
    use crate::services::error::AppError;
    use crate::services::session_storage::SessionStore;
    use crate::test_support::*;
    use crate::utils::constants::{LOGIN_FLAG_KEY, TOKEN_KEY};
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_records() -> Vec<ConfigRecord> {
        serde_json::from_value(json!([
            {"id": 1, "name": "relay-a", "url": "https://a.example.com", "baseUrl": "https://a.example.com/v1", "token": "sk-a", "status": 1},
            {"id": 2, "name": "relay-b", "url": "https://b.example.com", "baseUrl": "https://b.example.com/v1", "token": "sk-b", "status": "disabled"}
        ]))
        .unwrap()
    }

    fn filled_form() -> NewConfig {
        NewConfig {
            name: " relay-c ".to_string(),
            url: "https://c.example.com".to_string(),
            base_url: "https://c.example.com/v1".to_string(),
            token: " sk-c ".to_string(),
            source: None,
        }
    }

    #[test]
    fn valid_login_stores_session_and_renders_list() {
        let h = Harness::new();
        h.api.set_login(Ok("tok123".to_string()));
        h.api.set_list(Ok(sample_records()));

        block_on(h.vm.start());
        assert!(h.views.login_screen.is_visible());
        assert!(!h.views.app_shell.is_visible());

        block_on(h.vm.handle(AppEvent::Login {
            username: " admin ".to_string(),
            password: "pw".to_string(),
        }));

        assert_eq!(h.store.get(LOGIN_FLAG_KEY).as_deref(), Some("true"));
        assert_eq!(h.store.get(TOKEN_KEY).as_deref(), Some("tok123"));
        assert!(h.views.app_shell.is_visible());
        assert!(!h.views.login_screen.is_visible());
        assert_eq!(h.api.last_login_username().as_deref(), Some("admin"));
        assert_eq!(h.api.list_tokens(), vec!["tok123".to_string()]);
        assert_eq!(h.views.cards.current(), sample_records());
        assert!(h.views.login.was_reset());
        assert_eq!(h.views.login.message(), "");
    }

    #[test]
    fn invalid_login_shows_message_and_clears_password() {
        let h = Harness::new();
        h.api.set_login(Err(AppError::Rejected {
            status: 401,
            msg: "error".to_string(),
        }));

        block_on(h.vm.login("admin", "wrong"));

        assert_eq!(h.views.login.message(), "凭证无效，请重试。");
        assert!(h.views.login.password_cleared());
        assert!(h.views.login.password_focused());
        assert!(h.store.get(LOGIN_FLAG_KEY).is_none());
        assert!(h.store.get(TOKEN_KEY).is_none());
        assert!(h.views.login_screen.is_visible());
        assert_eq!(h.api.list_calls(), 0);
    }

    #[test]
    fn network_failure_on_login_looks_like_bad_credentials() {
        let h = Harness::new();
        h.api.set_login(Err(AppError::Network("offline".to_string())));

        block_on(h.vm.login("admin", "pw"));

        assert_eq!(h.views.login.message(), "凭证无效，请重试。");
        assert!(h.views.login.password_cleared());
    }

    #[test]
    fn logout_clears_storage_and_refocuses_username_later() {
        let h = Harness::logged_in();
        h.api.set_list(Ok(sample_records()));
        block_on(h.vm.start());
        assert!(h.views.app_shell.is_visible());

        block_on(h.vm.handle(AppEvent::Logout));

        assert!(h.store.get(LOGIN_FLAG_KEY).is_none());
        assert!(h.store.get(TOKEN_KEY).is_none());
        assert!(!h.views.app_shell.is_visible());
        assert!(h.views.login_screen.is_visible());
        assert!(h.views.cards.current().is_empty());

        assert!(!h.views.login.username_focused());
        assert_eq!(h.scheduler.pending_delays(), vec![120]);
        h.scheduler.run_pending();
        assert!(h.views.login.username_focused());
    }

    #[test]
    fn restored_session_loads_list_on_start() {
        let h = Harness::logged_in();
        h.api.set_list(Ok(sample_records()));

        block_on(h.vm.start());

        assert!(h.views.app_shell.is_visible());
        assert!(h.views.config_panel.is_visible());
        assert!(!h.views.sample_panel.is_visible());
        assert_eq!(h.views.cards.current().len(), 2);
    }

    #[test]
    fn failed_list_forces_logout() {
        let h = Harness::logged_in();
        h.api.set_list(Err(AppError::Rejected {
            status: 401,
            msg: "token 已过期".to_string(),
        }));

        block_on(h.vm.start());

        assert!(h.store.get(LOGIN_FLAG_KEY).is_none());
        assert!(h.store.get(TOKEN_KEY).is_none());
        assert!(h.views.login_screen.is_visible());
        assert!(!h.views.app_shell.is_visible());
    }

    #[test]
    fn list_rebuild_is_idempotent() {
        let h = Harness::logged_in();
        h.api.set_list(Ok(sample_records()));

        block_on(h.vm.reload());
        let once = h.views.cards.current();
        block_on(h.vm.reload());

        assert_eq!(h.views.cards.current(), once);
        assert_eq!(h.views.cards.rebuilds(), 2);
    }

    #[test]
    fn tab_activation_is_mutually_exclusive() {
        let h = Harness::logged_in();
        for prior in Tab::ALL {
            for next in Tab::ALL {
                h.vm.inner.tabs.activate(prior);
                block_on(h.vm.handle(AppEvent::ActivateTab(next)));

                assert_eq!(h.views.config_panel.is_visible(), next == Tab::Config);
                assert_eq!(h.views.sample_panel.is_visible(), next == Tab::Sample);
                assert_ne!(h.views.config_panel.is_visible(), h.views.sample_panel.is_visible());
                assert_eq!(h.views.config_tab.is_active(), next == Tab::Config);
                assert_eq!(h.views.sample_tab.is_active(), next == Tab::Sample);
            }
        }
    }

    #[test]
    fn add_config_success_closes_modal_and_reloads_after_delay() {
        let h = Harness::logged_in();
        h.api.set_list(Ok(sample_records()));
        h.vm.open_modal();
        assert!(h.views.modal.is_open());

        block_on(h.vm.handle(AppEvent::SubmitConfig(filled_form())));

        let sent = h.api.added().pop().unwrap();
        assert_eq!(sent.name, "relay-c");
        assert_eq!(sent.token, "sk-c");
        assert!(!h.views.modal.is_open());
        assert!(h.views.modal.was_reset());
        assert_eq!(h.views.notifier.last(), Some((NoticeKind::Success, "配置已添加".to_string())));

        // La recarga espera al temporizador
        assert_eq!(h.api.list_calls(), 0);
        assert_eq!(h.scheduler.pending_delays(), vec![300]);
        h.scheduler.run_pending();
        assert_eq!(h.api.list_calls(), 1);
        assert_eq!(h.views.cards.current().len(), 2);
    }

    #[test]
    fn add_config_failure_keeps_modal_open() {
        let h = Harness::logged_in();
        h.api.set_add(Err(AppError::Rejected {
            status: 500,
            msg: "duplicate".to_string(),
        }));
        h.vm.open_modal();

        block_on(h.vm.submit_config(filled_form()));

        assert!(h.views.modal.is_open());
        assert!(!h.views.modal.was_reset());
        assert_eq!(h.views.notifier.last(), Some((NoticeKind::Failure, "添加配置失败".to_string())));
        assert!(h.scheduler.pending_delays().is_empty());
        // Un fallo de mutación no cierra la sesión
        assert!(h.store.get(LOGIN_FLAG_KEY).is_some());
    }

    #[test]
    fn blank_required_fields_are_not_submitted() {
        let h = Harness::logged_in();
        h.vm.open_modal();

        block_on(h.vm.submit_config(NewConfig {
            name: "   ".to_string(),
            ..filled_form()
        }));

        assert!(h.api.added().is_empty());
        assert!(h.views.modal.is_open());
        assert_eq!(h.views.modal.error().as_deref(), Some("请填写所有必填字段。"));
    }

    #[test]
    fn toggle_without_id_issues_no_request() {
        let h = Harness::logged_in();

        block_on(h.vm.handle(AppEvent::ToggleStatus(None)));

        assert!(h.api.updated().is_empty());
        assert!(h.views.notifier.last().is_none());
        assert!(h.scheduler.pending_delays().is_empty());
    }

    #[test]
    fn card_with_odd_id_keeps_session_and_skips_toggle() {
        let h = Harness::logged_in();
        let records: Vec<ConfigRecord> = serde_json::from_value(json!([
            {"id": 1, "name": "relay-a", "status": 1},
            {"id": 2.5, "name": "relay-odd", "status": "enabled"}
        ]))
        .unwrap();
        h.api.set_list(Ok(records));

        block_on(h.vm.start());
        assert!(h.views.app_shell.is_visible());
        let odd = h.views.cards.current().pop().unwrap();
        assert_eq!(odd.id, None);

        block_on(h.vm.handle(AppEvent::ToggleStatus(odd.id)));

        assert!(h.api.updated().is_empty());
        assert!(h.store.get(LOGIN_FLAG_KEY).is_some());
    }

    #[test]
    fn logout_before_delayed_reload_cancels_it() {
        let h = Harness::logged_in();
        h.api.set_list(Ok(sample_records()));
        h.vm.open_modal();
        block_on(h.vm.submit_config(filled_form()));
        assert_eq!(h.scheduler.pending_delays(), vec![300]);

        h.vm.logout();
        assert_eq!(h.scheduler.pending_delays(), vec![300, 120]);
        h.scheduler.run_pending();

        assert_eq!(h.api.list_calls(), 0);
        // Sin segundo logout: no se programa otro foco
        assert!(h.scheduler.pending_delays().is_empty());
        assert!(h.views.login_screen.is_visible());
    }

    #[test]
    fn toggle_with_id_posts_and_reloads() {
        let h = Harness::logged_in();
        h.api.set_list(Ok(sample_records()));

        block_on(h.vm.toggle_status(Some(ConfigId::Number(2))));

        assert_eq!(h.api.updated(), vec![ConfigId::Number(2)]);
        assert_eq!(h.views.notifier.last(), Some((NoticeKind::Success, "状态已更新".to_string())));
        h.scheduler.run_pending();
        assert_eq!(h.api.list_calls(), 1);
    }

    #[test]
    fn toggle_failure_only_notifies() {
        let h = Harness::logged_in();
        h.api.set_update(Err(AppError::Network("reset".to_string())));

        block_on(h.vm.toggle_status(Some(ConfigId::Number(2))));

        assert_eq!(h.views.notifier.last(), Some((NoticeKind::Failure, "更新状态失败".to_string())));
        assert!(h.scheduler.pending_delays().is_empty());
        assert!(h.store.get(LOGIN_FLAG_KEY).is_some());
    }

    #[test]
    fn escape_closes_only_an_open_modal() {
        let h = Harness::logged_in();
        assert!(!h.vm.handle_escape());
        assert_eq!(h.views.modal.transitions(), 0);

        h.vm.open_modal();
        assert!(h.vm.handle_escape());
        assert!(!h.views.modal.is_open());
        assert_eq!(h.views.modal.transitions(), 2);

        assert!(!h.vm.handle_escape());
        assert_eq!(h.views.modal.transitions(), 2);
    }
}
