//! Reconciliation writes
//!
//! Applying a spec is a fixed five-stage sequence: canonicalize the desired
//! config, upload it, settle the visibility flag, settle the pause flag, then
//! re-read. Each stage gates the next; the first failure aborts the write.
//! The re-read result is what callers get back, so reported state always
//! comes from the control plane rather than from what was just requested.

use moorline_client::{ControlPlane, TeamPipelines};
use moorline_core::config;
use moorline_core::domain::pipeline::{PipelineId, PipelineState};
use moorline_core::dto::pipeline::PipelineSpec;
use tracing::{debug, info};

use crate::engine::{BLIND_VERSION_TOKEN, FlagKind, PipelineEngine};
use crate::error::{ProviderError, Result};

impl<C: ControlPlane> PipelineEngine<C> {
    /// Drives the pipeline to the desired spec and returns the resulting state
    ///
    /// Creates the pipeline if it does not exist. Both flags are re-asserted
    /// on every apply, whether or not they differ from the current remote
    /// value; the engine performs no diffing against prior state.
    ///
    /// Config warnings from the control plane fail the apply before the flag
    /// toggles run. The upload itself has already been accepted at that
    /// point, so a failed apply can leave the new config in place with the
    /// flags untouched.
    pub async fn apply(&self, id: &PipelineId, spec: &PipelineSpec) -> Result<PipelineState> {
        let config_json = config::canonicalize(&spec.config, spec.config_format)
            .map_err(|e| ProviderError::invalid_config(id, e))?;

        let team = self.team_for(id);
        debug!("Uploading config for pipeline {}", id);
        let outcome = team
            .set_pipeline_config(&id.pipeline_name, BLIND_VERSION_TOKEN, &config_json, false)
            .await
            .map_err(|e| ProviderError::remote(id, "config upload failed", e))?;
        if !outcome.warnings.is_empty() {
            return Err(ProviderError::config_warnings(id, outcome.warnings));
        }

        self.set_flag(&team, id, FlagKind::Visibility, spec.is_exposed)
            .await?;
        self.set_flag(&team, id, FlagKind::Pause, spec.is_paused)
            .await?;

        info!(
            "Applied pipeline {} ({})",
            id,
            if outcome.created { "created" } else { "updated" }
        );

        self.read(id).await
    }

    /// Deletes the pipeline from the control plane
    ///
    /// A delete the control plane reports as not performed (no transport
    /// error, pipeline not found) is surfaced as an error rather than
    /// treated as already-done.
    pub async fn delete(&self, id: &PipelineId) -> Result<()> {
        let team = self.team_for(id);
        let deleted = team
            .delete_pipeline(&id.pipeline_name)
            .await
            .map_err(|e| ProviderError::remote(id, "delete call failed", e))?;
        if !deleted {
            return Err(ProviderError::inconsistent(
                id,
                "control plane did not confirm the deletion",
            ));
        }

        info!("Deleted pipeline {}", id);
        Ok(())
    }

    /// Issues the toggle call that moves one flag to the desired value
    async fn set_flag(
        &self,
        team: &C::Team,
        id: &PipelineId,
        flag: FlagKind,
        desired: bool,
    ) -> Result<()> {
        let action = flag.action(desired);
        debug!("Issuing {} for pipeline {}", action, id);
        let found = match (flag, desired) {
            (FlagKind::Visibility, true) => team.expose_pipeline(&id.pipeline_name).await,
            (FlagKind::Visibility, false) => team.hide_pipeline(&id.pipeline_name).await,
            (FlagKind::Pause, true) => team.pause_pipeline(&id.pipeline_name).await,
            (FlagKind::Pause, false) => team.unpause_pipeline(&id.pipeline_name).await,
        }
        .map_err(|e| ProviderError::remote(id, format!("{} call failed", action), e))?;

        if !found {
            // The upload step has already succeeded, so the pipeline must
            // exist by now; a not-found here is the control plane
            // contradicting itself
            return Err(ProviderError::inconsistent(
                id,
                format!("reported missing during {}", action),
            ));
        }

        Ok(())
    }
}
