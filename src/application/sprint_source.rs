// Source trait for the sprint dataset document
use crate::domain::sprint::SprintRecord;
use async_trait::async_trait;

/// Any failure while fetching or decoding the dataset
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {location} failed: {source}")]
    Http {
        location: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{location} responded with HTTP status {status}")]
    Status { location: String, status: u16 },

    #[error("failed to parse {location}: {source}")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait SprintSource: Send + Sync {
    /// Where the document lives, for logs and the failure alert
    fn location(&self) -> &str;

    /// Fetch and decode the `{ "sprints": [...] }` document once
    async fn fetch_records(&self) -> Result<Vec<SprintRecord>, LoadError>;
}
