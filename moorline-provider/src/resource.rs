//! Resource lifecycle surface
//!
//! Thin wrappers that adapt the engine to the create/read/update/delete
//! callback shape declarative tooling expects. Two shapes exist: a managed
//! resource that owns a pipeline end to end, and a read-only data source for
//! looking up pipelines managed elsewhere.
//!
//! Inputs arrive as typed values (a pipeline identity plus a spec) validated
//! by construction, and the control plane client is injected explicitly at
//! construction time rather than reached through ambient state.

use moorline_client::ControlPlane;
use moorline_core::domain::pipeline::{PipelineId, PipelineState};
use moorline_core::dto::pipeline::PipelineSpec;

use crate::engine::PipelineEngine;
use crate::error::Result;

/// Managed pipeline resource
///
/// The resource identifier surfaced to callers is the identity's display
/// form, `team:name`.
pub struct PipelineResource<C: ControlPlane> {
    engine: PipelineEngine<C>,
}

impl<C: ControlPlane> PipelineResource<C> {
    /// Creates the resource surface over the given control plane
    pub fn new(client: C) -> Self {
        Self {
            engine: PipelineEngine::new(client),
        }
    }

    /// Create callback: delegates fully to [`update`](Self::update)
    ///
    /// The underlying upload is create-or-update, so creation needs no
    /// dedicated remote path.
    pub async fn create(&self, id: &PipelineId, spec: &PipelineSpec) -> Result<PipelineState> {
        self.update(id, spec).await
    }

    /// Read callback
    ///
    /// Fails with an error for which [`ProviderError::is_not_found`] holds
    /// when the pipeline is gone; declarative callers typically clear their
    /// recorded state in that case.
    ///
    /// [`ProviderError::is_not_found`]: crate::error::ProviderError::is_not_found
    pub async fn read(&self, id: &PipelineId) -> Result<PipelineState> {
        self.engine.read(id).await
    }

    /// Update callback
    pub async fn update(&self, id: &PipelineId, spec: &PipelineSpec) -> Result<PipelineState> {
        self.engine.apply(id, spec).await
    }

    /// Delete callback
    pub async fn delete(&self, id: &PipelineId) -> Result<()> {
        self.engine.delete(id).await
    }
}

/// Read-only pipeline lookup
pub struct PipelineDataSource<C: ControlPlane> {
    engine: PipelineEngine<C>,
}

impl<C: ControlPlane> PipelineDataSource<C> {
    /// Creates the data source over the given control plane
    pub fn new(client: C) -> Self {
        Self {
            engine: PipelineEngine::new(client),
        }
    }

    /// Looks up the current state of a pipeline
    pub async fn read(&self, id: &PipelineId) -> Result<PipelineState> {
        self.engine.read(id).await
    }
}
