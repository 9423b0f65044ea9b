// Application layer - Loading, rendering and the dashboard controller
pub mod chart_renderer;
pub mod csv_export;
pub mod dashboard_controller;
pub mod loader;
pub mod sprint_source;
pub mod streaming_service;
