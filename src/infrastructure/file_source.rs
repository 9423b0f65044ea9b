// Local file dataset source
use crate::application::sprint_source::{LoadError, SprintSource};
use crate::domain::sprint::{SprintDocument, SprintRecord};
use async_trait::async_trait;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileSprintSource {
    path: PathBuf,
    location: String,
}

impl FileSprintSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let location = path.display().to_string();
        Self { path, location }
    }
}

#[async_trait]
impl SprintSource for FileSprintSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch_records(&self) -> Result<Vec<SprintRecord>, LoadError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|source| LoadError::Io {
            location: self.location.clone(),
            source,
        })?;

        let document: SprintDocument =
            serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
                location: self.location.clone(),
                source,
            })?;

        Ok(document.sprints)
    }
}
