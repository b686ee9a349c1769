pub mod app_viewmodel;
pub mod config_viewmodel;
pub mod session_viewmodel;
pub mod tab_viewmodel;

pub use app_viewmodel::{AppViewModel, AppViews};
pub use config_viewmodel::ConfigViewModel;
pub use session_viewmodel::{SessionGate, SessionViewModel};
pub use tab_viewmodel::TabController;
