//! Provides the storage collaborator the persist gate writes workpads to

use derive_builder::Builder;
#[cfg(test)]
use mockall::automock;
use std::time::Duration;

use crate::{
    error::{ErrorResponse, Result, WorkpadError},
    workpad::PersistedWorkpad,
};

/// Default path of the workpad api, relative to the service url
pub const DEFAULT_API_PATH: &str = "/api/canvas/workpad";

/// Default timeout applied to every request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Writes workpads to the backing store
#[cfg_attr(test, automock)]
pub trait WorkpadService: Send + Sync {
    /// Replaces the stored document of the workpad with the given id
    fn update(&self, id: &str, workpad: &PersistedWorkpad) -> Result<()>;
}

/// Workpad service speaking to the canvas http api
#[derive(Builder)]
#[builder(setter(into), build_fn(private, name = "_build"))]
pub struct HttpWorkpadService {
    /// Base url of the service, e.g. `http://localhost:5601`
    base_url: String,
    /// Path of the workpad api below the base url
    #[builder(default = "DEFAULT_API_PATH.to_string()")]
    api_path: String,
    /// Timeout applied to each request
    #[builder(default = "DEFAULT_TIMEOUT")]
    timeout: Duration,
    #[builder(setter(skip), default = "None")]
    agent: Option<ureq::Agent>,
}

impl HttpWorkpadServiceBuilder {
    /// Builds the service along with its http agent
    pub fn build(&self) -> Result<HttpWorkpadService> {
        let mut service = self._build()?;

        let config = ureq::Agent::config_builder()
            .timeout_global(Some(service.timeout))
            .http_status_as_error(false)
            .build();

        service.agent = Some(config.into());

        Ok(service)
    }
}

impl HttpWorkpadService {
    /// Returns builder for HttpWorkpadService
    pub fn builder() -> HttpWorkpadServiceBuilder {
        HttpWorkpadServiceBuilder::default()
    }

    /// Returns the url a workpad with the given id is written to
    pub fn workpad_url(&self, id: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.api_path.trim_matches('/'),
            id
        )
    }
}

impl WorkpadService for HttpWorkpadService {
    fn update(&self, id: &str, workpad: &PersistedWorkpad) -> Result<()> {
        let agent = self
            .agent
            .as_ref()
            .ok_or_else(|| WorkpadError::Transport("http agent not initialized".into()))?;

        let url = self.workpad_url(id);

        log::debug!("PUT {url}");

        let response = agent
            .put(&url)
            .header("kbn-xsrf", "true")
            .send_json(workpad)
            .map_err(|e| WorkpadError::Transport(e.to_string()))?;

        let status = response.status();

        if status.is_success() {
            return Ok(());
        }

        let message = response
            .into_body()
            .read_to_string()
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or_default().to_string());

        Err(WorkpadError::Response(ErrorResponse {
            status: status.as_u16(),
            message,
        }))
    }
}

#[cfg(test)]
#[path = "./service_tests.rs"]
mod tests;
