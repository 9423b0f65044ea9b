// HTTP dataset source
use crate::application::sprint_source::{LoadError, SprintSource};
use crate::domain::sprint::{SprintDocument, SprintRecord};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct HttpSprintSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSprintSource {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    fn http_error(&self, source: reqwest::Error) -> LoadError {
        LoadError::Http {
            location: self.url.clone(),
            source,
        }
    }
}

#[async_trait]
impl SprintSource for HttpSprintSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch_records(&self) -> Result<Vec<SprintRecord>, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| self.http_error(e))?;

        if !response.status().is_success() {
            return Err(LoadError::Status {
                location: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.http_error(e))?;
        let document: SprintDocument =
            serde_json::from_slice(&body).map_err(|source| LoadError::Parse {
                location: self.url.clone(),
                source,
            })?;

        Ok(document.sprints)
    }
}
