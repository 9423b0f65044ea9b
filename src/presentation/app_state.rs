// Application state for HTTP handlers
use crate::application::dashboard_controller::DashboardController;
use tokio::sync::Mutex;

pub struct AppState {
    /// Held for the whole of each handler so renders never interleave
    pub controller: Mutex<DashboardController>,
    pub export_filename_template: String,
}

impl AppState {
    pub fn new(controller: DashboardController, export_filename_template: String) -> Self {
        Self {
            controller: Mutex::new(controller),
            export_filename_template,
        }
    }
}
