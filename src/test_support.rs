// ============================================================================
// TEST SUPPORT - Dobles de API, vistas y scheduler para los viewmodels
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::executor::block_on;

use crate::config::TimingConfig;
use crate::models::{ConfigId, ConfigRecord, LoginRequest, NewConfig};
use crate::services::api_client::ConfigApi;
use crate::services::error::AppError;
use crate::services::scheduler::{LocalTask, Scheduler};
use crate::services::session_storage::{MemorySessionStore, SessionStore};
use crate::state::session_state::SessionContext;
use crate::state::view_state::{NoticeKind, Tab};
use crate::utils::constants::{LOGIN_FLAG_KEY, TOKEN_KEY};
use crate::viewmodels::{AppViewModel, AppViews};
use crate::views::traits::{CardList, LoginView, ModalView, Notifier, Panel, TabButton};

pub struct FakeApi {
    login_result: RefCell<Result<String, AppError>>,
    list_result: RefCell<Result<Vec<ConfigRecord>, AppError>>,
    add_result: RefCell<Result<(), AppError>>,
    update_result: RefCell<Result<(), AppError>>,
    login_requests: RefCell<Vec<LoginRequest>>,
    list_tokens: RefCell<Vec<String>>,
    added: RefCell<Vec<NewConfig>>,
    updated: RefCell<Vec<ConfigId>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            login_result: RefCell::new(Err(AppError::Rejected {
                status: 401,
                msg: "error".to_string(),
            })),
            list_result: RefCell::new(Ok(Vec::new())),
            add_result: RefCell::new(Ok(())),
            update_result: RefCell::new(Ok(())),
            login_requests: RefCell::default(),
            list_tokens: RefCell::default(),
            added: RefCell::default(),
            updated: RefCell::default(),
        }
    }
}

impl FakeApi {
    pub fn set_login(&self, result: Result<String, AppError>) {
        *self.login_result.borrow_mut() = result;
    }

    pub fn set_list(&self, result: Result<Vec<ConfigRecord>, AppError>) {
        *self.list_result.borrow_mut() = result;
    }

    pub fn set_add(&self, result: Result<(), AppError>) {
        *self.add_result.borrow_mut() = result;
    }

    pub fn set_update(&self, result: Result<(), AppError>) {
        *self.update_result.borrow_mut() = result;
    }

    pub fn last_login_username(&self) -> Option<String> {
        self.login_requests.borrow().last().map(|r| r.username.clone())
    }

    pub fn list_tokens(&self) -> Vec<String> {
        self.list_tokens.borrow().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_tokens.borrow().len()
    }

    pub fn added(&self) -> Vec<NewConfig> {
        self.added.borrow().clone()
    }

    pub fn updated(&self) -> Vec<ConfigId> {
        self.updated.borrow().clone()
    }
}

impl ConfigApi for FakeApi {
    async fn login(&self, request: &LoginRequest) -> Result<String, AppError> {
        self.login_requests.borrow_mut().push(request.clone());
        self.login_result.borrow().clone()
    }

    async fn list_configs(&self, token: &str) -> Result<Vec<ConfigRecord>, AppError> {
        self.list_tokens.borrow_mut().push(token.to_string());
        self.list_result.borrow().clone()
    }

    async fn add_config(&self, _token: &str, config: &NewConfig) -> Result<(), AppError> {
        self.added.borrow_mut().push(config.clone());
        self.add_result.borrow().clone()
    }

    async fn update_config(&self, _token: &str, id: &ConfigId) -> Result<(), AppError> {
        self.updated.borrow_mut().push(id.clone());
        self.update_result.borrow().clone()
    }
}

#[derive(Default)]
pub struct FakePanel {
    visible: Cell<bool>,
}

impl FakePanel {
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }
}

impl Panel for FakePanel {
    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }
}

pub struct FakeTabButton {
    tab: Tab,
    active: Cell<bool>,
}

impl FakeTabButton {
    pub fn new(tab: Tab) -> Self {
        Self {
            tab,
            active: Cell::new(false),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl TabButton for FakeTabButton {
    fn tab(&self) -> Tab {
        self.tab
    }

    fn set_active(&self, active: bool) {
        self.active.set(active);
    }
}

#[derive(Default)]
pub struct FakeLoginView {
    message: RefCell<String>,
    password_cleared: Cell<bool>,
    password_focused: Cell<bool>,
    username_focused: Cell<bool>,
    reset: Cell<bool>,
}

impl FakeLoginView {
    pub fn message(&self) -> String {
        self.message.borrow().clone()
    }

    pub fn password_cleared(&self) -> bool {
        self.password_cleared.get()
    }

    pub fn password_focused(&self) -> bool {
        self.password_focused.get()
    }

    pub fn username_focused(&self) -> bool {
        self.username_focused.get()
    }

    pub fn was_reset(&self) -> bool {
        self.reset.get()
    }
}

impl LoginView for FakeLoginView {
    fn set_message(&self, message: &str) {
        *self.message.borrow_mut() = message.to_string();
    }

    fn clear_password(&self) {
        self.password_cleared.set(true);
    }

    fn focus_password(&self) {
        self.password_focused.set(true);
    }

    fn focus_username(&self) {
        self.username_focused.set(true);
    }

    fn reset(&self) {
        self.reset.set(true);
    }
}

#[derive(Default)]
pub struct FakeCardList {
    current: RefCell<Vec<ConfigRecord>>,
    rebuilds: Cell<usize>,
}

impl FakeCardList {
    pub fn current(&self) -> Vec<ConfigRecord> {
        self.current.borrow().clone()
    }

    /// Reconstrucciones con datos (las de vaciado al cerrar sesión no cuentan)
    pub fn rebuilds(&self) -> usize {
        self.rebuilds.get()
    }
}

impl CardList for FakeCardList {
    fn replace_cards(&self, records: &[ConfigRecord]) {
        *self.current.borrow_mut() = records.to_vec();
        if !records.is_empty() {
            self.rebuilds.set(self.rebuilds.get() + 1);
        }
    }
}

#[derive(Default)]
pub struct FakeModal {
    open: Cell<bool>,
    transitions: Cell<usize>,
    reset: Cell<bool>,
    error: RefCell<Option<String>>,
}

impl FakeModal {
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn transitions(&self) -> usize {
        self.transitions.get()
    }

    pub fn was_reset(&self) -> bool {
        self.reset.get()
    }

    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }
}

impl ModalView for FakeModal {
    fn set_open(&self, open: bool) {
        self.open.set(open);
        self.transitions.set(self.transitions.get() + 1);
    }

    fn reset_form(&self) {
        self.reset.set(true);
    }

    fn set_error(&self, message: Option<&str>) {
        *self.error.borrow_mut() = message.map(str::to_string);
    }
}

#[derive(Default)]
pub struct FakeNotifier {
    notices: RefCell<Vec<(NoticeKind, String)>>,
}

impl FakeNotifier {
    pub fn last(&self) -> Option<(NoticeKind, String)> {
        self.notices.borrow().last().cloned()
    }
}

impl Notifier for FakeNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        self.notices.borrow_mut().push((kind, message.to_string()));
    }
}

/// Guarda las tareas hasta que el test las ejecute
#[derive(Default)]
pub struct ManualScheduler {
    tasks: RefCell<Vec<(u32, LocalTask)>>,
}

impl ManualScheduler {
    pub fn pending_delays(&self) -> Vec<u32> {
        self.tasks.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    /// Ejecuta las tareas pendientes en este momento (no las que estas creen)
    pub fn run_pending(&self) {
        let tasks = std::mem::take(&mut *self.tasks.borrow_mut());
        for (_, task) in tasks {
            block_on(task);
        }
    }
}

impl Scheduler for ManualScheduler {
    fn spawn_after(&self, delay_ms: u32, task: LocalTask) {
        self.tasks.borrow_mut().push((delay_ms, task));
    }
}

pub struct FakeViews {
    pub login_screen: Rc<FakePanel>,
    pub app_shell: Rc<FakePanel>,
    pub config_panel: Rc<FakePanel>,
    pub sample_panel: Rc<FakePanel>,
    pub config_tab: Rc<FakeTabButton>,
    pub sample_tab: Rc<FakeTabButton>,
    pub login: Rc<FakeLoginView>,
    pub cards: Rc<FakeCardList>,
    pub modal: Rc<FakeModal>,
    pub notifier: Rc<FakeNotifier>,
}

impl FakeViews {
    fn new() -> Self {
        Self {
            login_screen: Rc::default(),
            app_shell: Rc::default(),
            config_panel: Rc::default(),
            sample_panel: Rc::default(),
            config_tab: Rc::new(FakeTabButton::new(Tab::Config)),
            sample_tab: Rc::new(FakeTabButton::new(Tab::Sample)),
            login: Rc::default(),
            cards: Rc::default(),
            modal: Rc::default(),
            notifier: Rc::default(),
        }
    }

    fn as_app_views(&self) -> AppViews {
        AppViews {
            login_screen: self.login_screen.clone(),
            app_shell: self.app_shell.clone(),
            config_panel: self.config_panel.clone(),
            sample_panel: self.sample_panel.clone(),
            tab_buttons: vec![
                self.config_tab.clone() as Rc<dyn TabButton>,
                self.sample_tab.clone() as Rc<dyn TabButton>,
            ],
            login: self.login.clone(),
            cards: self.cards.clone(),
            modal: self.modal.clone(),
            notifier: self.notifier.clone(),
        }
    }
}

/// AppViewModel cableado con dobles
pub struct Harness {
    pub api: Rc<FakeApi>,
    pub store: Rc<MemorySessionStore>,
    pub views: FakeViews,
    pub scheduler: Rc<ManualScheduler>,
    pub vm: AppViewModel<FakeApi>,
}

impl Harness {
    pub fn new() -> Self {
        let api = Rc::new(FakeApi::default());
        let store = Rc::new(MemorySessionStore::default());
        let views = FakeViews::new();
        let scheduler = Rc::new(ManualScheduler::default());
        let vm = AppViewModel::new(
            api.clone(),
            SessionContext::new(store.clone()),
            views.as_app_views(),
            scheduler.clone(),
            TimingConfig::default(),
            "ZH",
        );
        Self {
            api,
            store,
            views,
            scheduler,
            vm,
        }
    }

    /// Como si la pestaña ya tuviera una sesión guardada
    pub fn logged_in() -> Self {
        let harness = Self::new();
        harness.store.set(LOGIN_FLAG_KEY, "true").unwrap();
        harness.store.set(TOKEN_KEY, "tok123").unwrap();
        harness
    }
}
