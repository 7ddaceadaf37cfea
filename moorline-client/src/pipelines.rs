//! Team-scoped pipeline API endpoints
//!
//! All pipeline routes on the control plane are nested under a team:
//! `/api/v1/teams/{team}/pipelines/{pipeline}`. [`TeamHandle`] carries the
//! team context and implements [`TeamPipelines`], the trait consumers program
//! against.

use async_trait::async_trait;
use moorline_core::dto::pipeline::{
    ConfigApplyOutcome, ConfigWarning, PipelineConfigDocument, PipelineInfo,
};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::Deserialize;

use crate::ControlPlaneClient;
use crate::error::{ClientError, Result};

/// Header carrying the config version token on config reads and writes
pub const CONFIG_VERSION_HEADER: &str = "X-Config-Version";

/// Operations on one team's pipelines
///
/// Lookup-style operations report a missing pipeline through their return
/// value (`None` / `false`) rather than through an error, so callers can tell
/// "not there" from "request failed" without inspecting status codes.
#[async_trait]
pub trait TeamPipelines: Send + Sync {
    /// Fetch a pipeline's metadata, or `None` if it does not exist
    async fn get_pipeline(&self, pipeline_name: &str) -> Result<Option<PipelineInfo>>;

    /// Fetch a pipeline's config document and its version token, or `None` if
    /// the pipeline does not exist
    async fn get_pipeline_config(
        &self,
        pipeline_name: &str,
    ) -> Result<Option<PipelineConfigDocument>>;

    /// Upload a pipeline config, creating the pipeline if it does not exist
    ///
    /// # Arguments
    /// * `pipeline_name` - The pipeline to configure
    /// * `version` - The config version token the write is based on; the
    ///   control plane rejects the write if it no longer matches
    /// * `config_json` - The pipeline config as a JSON document
    /// * `check_credentials` - Ask the control plane to verify credential
    ///   references in the config before accepting it
    ///
    /// # Returns
    /// Whether the pipeline was created (as opposed to updated), plus any
    /// warnings the control plane raised about the config.
    async fn set_pipeline_config(
        &self,
        pipeline_name: &str,
        version: &str,
        config_json: &str,
        check_credentials: bool,
    ) -> Result<ConfigApplyOutcome>;

    /// Make a pipeline visible to unauthenticated users
    ///
    /// Returns `false` if the pipeline does not exist.
    async fn expose_pipeline(&self, pipeline_name: &str) -> Result<bool>;

    /// Hide a pipeline from unauthenticated users
    ///
    /// Returns `false` if the pipeline does not exist.
    async fn hide_pipeline(&self, pipeline_name: &str) -> Result<bool>;

    /// Stop scheduling a pipeline's jobs
    ///
    /// Returns `false` if the pipeline does not exist.
    async fn pause_pipeline(&self, pipeline_name: &str) -> Result<bool>;

    /// Resume scheduling a pipeline's jobs
    ///
    /// Returns `false` if the pipeline does not exist.
    async fn unpause_pipeline(&self, pipeline_name: &str) -> Result<bool>;

    /// Delete a pipeline
    ///
    /// Returns `false` if the pipeline was already gone.
    async fn delete_pipeline(&self, pipeline_name: &str) -> Result<bool>;
}

/// Handle for one team's pipelines on the control plane
#[derive(Debug, Clone)]
pub struct TeamHandle {
    client: ControlPlaneClient,
    team_name: String,
}

impl TeamHandle {
    pub(crate) fn new(client: ControlPlaneClient, team_name: impl Into<String>) -> Self {
        Self {
            client,
            team_name: team_name.into(),
        }
    }

    /// The team this handle is scoped to
    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    fn pipeline_url(&self, pipeline_name: &str, suffix: &str) -> String {
        format!(
            "{}/api/v1/teams/{}/pipelines/{}{}",
            self.client.base_url(),
            self.team_name,
            pipeline_name,
            suffix
        )
    }

    async fn toggle(&self, pipeline_name: &str, suffix: &str) -> Result<bool> {
        let url = self.pipeline_url(pipeline_name, suffix);
        let response = self.client.request(Method::PUT, &url).send().await?;

        self.client.handle_found_response(response).await
    }
}

#[async_trait]
impl TeamPipelines for TeamHandle {
    async fn get_pipeline(&self, pipeline_name: &str) -> Result<Option<PipelineInfo>> {
        let url = self.pipeline_url(pipeline_name, "");
        let response = self.client.request(Method::GET, &url).send().await?;

        self.client.handle_optional_response(response).await
    }

    async fn get_pipeline_config(
        &self,
        pipeline_name: &str,
    ) -> Result<Option<PipelineConfigDocument>> {
        let url = self.pipeline_url(pipeline_name, "/config");
        let response = self.client.request(Method::GET, &url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        // The version token travels in a response header, next to the config
        // body itself
        let version = response
            .headers()
            .get(CONFIG_VERSION_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| {
                ClientError::ParseError(format!(
                    "config response is missing the {} header",
                    CONFIG_VERSION_HEADER
                ))
            })?;
        let raw = response.text().await?;

        Ok(Some(PipelineConfigDocument { raw, version }))
    }

    async fn set_pipeline_config(
        &self,
        pipeline_name: &str,
        version: &str,
        config_json: &str,
        check_credentials: bool,
    ) -> Result<ConfigApplyOutcome> {
        let url = self.pipeline_url(pipeline_name, "/config");

        let mut request = self
            .client
            .request(Method::PUT, &url)
            .header(CONFIG_VERSION_HEADER, version)
            .header(CONTENT_TYPE, "application/json")
            .body(config_json.to_string());
        if check_credentials {
            request = request.query(&[("check_creds", "true")]);
        }

        let response = request.send().await?;
        let created = response.status() == StatusCode::CREATED;
        let body: SetConfigResponse = self.client.handle_response(response).await?;

        Ok(ConfigApplyOutcome {
            created,
            warnings: body.warnings,
        })
    }

    async fn expose_pipeline(&self, pipeline_name: &str) -> Result<bool> {
        self.toggle(pipeline_name, "/expose").await
    }

    async fn hide_pipeline(&self, pipeline_name: &str) -> Result<bool> {
        self.toggle(pipeline_name, "/hide").await
    }

    async fn pause_pipeline(&self, pipeline_name: &str) -> Result<bool> {
        self.toggle(pipeline_name, "/pause").await
    }

    async fn unpause_pipeline(&self, pipeline_name: &str) -> Result<bool> {
        self.toggle(pipeline_name, "/unpause").await
    }

    async fn delete_pipeline(&self, pipeline_name: &str) -> Result<bool> {
        let url = self.pipeline_url(pipeline_name, "");
        let response = self.client.request(Method::DELETE, &url).send().await?;

        self.client.handle_found_response(response).await
    }
}

#[derive(Debug, Deserialize)]
struct SetConfigResponse {
    #[serde(default)]
    warnings: Vec<ConfigWarning>,
}
