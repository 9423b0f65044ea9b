// Loader - One-shot dataset load with an empty fallback
use crate::application::sprint_source::SprintSource;
use crate::domain::sprint::Dataset;

#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub dataset: Dataset,
    /// Alert text shown to the user when loading failed
    pub failure: Option<String>,
}

pub fn failure_alert(location: &str) -> String {
    format!(
        "Failed to load sprint data from {}. Please ensure the file exists and the dashboard \
         is served via a web server (not opened directly as a file).",
        location
    )
}

/// Never fails: any load error degrades to an empty dataset plus an alert.
pub async fn load_dataset(source: &dyn SprintSource) -> LoadOutcome {
    match source.fetch_records().await {
        Ok(records) => {
            tracing::info!(
                "Data loaded successfully from {}: {} records",
                source.location(),
                records.len()
            );
            LoadOutcome {
                dataset: Dataset::new(records),
                failure: None,
            }
        }
        Err(e) => {
            tracing::error!("Error loading sprint data: {}", e);
            LoadOutcome {
                dataset: Dataset::empty(),
                failure: Some(failure_alert(source.location())),
            }
        }
    }
}
