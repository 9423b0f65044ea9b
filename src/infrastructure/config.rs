use crate::application::csv_export::DEFAULT_FILENAME_TEMPLATE;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub data: DataSettings,
    pub export: ExportSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataSettings {
    /// Local path or http(s) URL of the sprint dataset document
    pub source: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportSettings {
    pub filename_template: String,
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DataSettings {
    pub fn is_remote(&self) -> bool {
        self.source.starts_with("http://") || self.source.starts_with("https://")
    }
}

fn builder() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8000)?
        .set_default("data.source", "./data/sprint-data.json")?
        .set_default("export.filename_template", DEFAULT_FILENAME_TEMPLATE)?)
}

/// `SPRINT_DASHBOARD__SERVER__PORT=9000` overrides `server.port`
fn environment() -> config::Environment {
    config::Environment::with_prefix("SPRINT_DASHBOARD")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Defaults, then `config/dashboard.toml` if present, then `SPRINT_DASHBOARD__*` env vars
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = builder()?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(environment())
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Replace `${name}` placeholders in a template string
pub fn render_template(template: &str, vars: &HashMap<String, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        let placeholder = format!("${{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}
