//! Remote state reads
//!
//! A read is all-or-nothing: it either produces a complete snapshot of the
//! pipeline (flags plus config in both encodings) or an error. Partial
//! snapshots never escape this module.

use moorline_client::{ControlPlane, TeamPipelines};
use moorline_core::config::{self, ConfigFormat};
use moorline_core::domain::pipeline::{PipelineId, PipelineState};
use tracing::debug;

use crate::engine::PipelineEngine;
use crate::error::{ProviderError, Result};

impl<C: ControlPlane> PipelineEngine<C> {
    /// Reads the full remote state of a pipeline
    ///
    /// Fetches the pipeline's metadata and its config document sequentially,
    /// then derives the YAML rendering from the canonical JSON. Fails with
    /// [`ProviderError::NotFound`] if either the pipeline or its config is
    /// absent; a pipeline that exists without a config is an inconsistent
    /// remote state the caller needs to see, not a default.
    pub async fn read(&self, id: &PipelineId) -> Result<PipelineState> {
        debug!("Reading state for pipeline {}", id);
        let team = self.team_for(id);

        let info = team
            .get_pipeline(&id.pipeline_name)
            .await
            .map_err(|e| ProviderError::remote(id, "pipeline lookup failed", e))?
            .ok_or_else(|| ProviderError::not_found(id))?;

        let document = team
            .get_pipeline_config(&id.pipeline_name)
            .await
            .map_err(|e| ProviderError::remote(id, "config fetch failed", e))?
            .ok_or_else(|| ProviderError::not_found(id))?;

        // The control plane hands back JSON it previously accepted, so a
        // re-parse failure here is a remote fault, not a caller one
        let config_json = config::canonicalize(&document.raw, ConfigFormat::Json).map_err(|e| {
            ProviderError::remote(id, "config returned by the control plane failed to re-parse", e)
        })?;
        let config_yaml = config::json_to_yaml(&config_json).map_err(|e| {
            ProviderError::remote(id, "rendering the returned config as YAML failed", e)
        })?;

        let mut state = PipelineState::new(id);
        state.is_exposed = info.is_public;
        state.is_paused = info.is_paused;
        state.config_json = config_json;
        state.config_yaml = config_yaml;

        Ok(state)
    }
}
