//! Pipeline reconciliation engine
//!
//! [`PipelineEngine`] owns the two halves of pipeline management:
//! - reading remote state into a complete snapshot (reader)
//! - driving the control plane toward a desired spec (reconciler)
//!
//! The engine is generic over [`ControlPlane`] so the HTTP client can be
//! swapped for an in-memory fake in tests.

mod reader;
mod reconciler;

use moorline_client::ControlPlane;
use moorline_core::domain::pipeline::PipelineId;

/// Version token sent with every config upload.
///
/// The control plane compares this token against the stored config version
/// and rejects stale writes; "0" opts out of that check, so every upload
/// overwrites whatever config is current. Concurrent edits from other sources
/// are lost rather than detected.
const BLIND_VERSION_TOKEN: &str = "0";

/// Which pipeline flag a toggle call flips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    /// Whether the pipeline is visible to unauthenticated users
    Visibility,
    /// Whether the pipeline's automatic scheduling is suspended
    Pause,
}

impl FlagKind {
    /// Name of the control plane action that moves this flag to `desired`
    pub fn action(self, desired: bool) -> &'static str {
        match (self, desired) {
            (FlagKind::Visibility, true) => "expose",
            (FlagKind::Visibility, false) => "hide",
            (FlagKind::Pause, true) => "pause",
            (FlagKind::Pause, false) => "unpause",
        }
    }
}

/// Reads and reconciles pipelines on a control plane
///
/// The engine holds no state of its own beyond the client: every read
/// re-fetches from the control plane, and every write re-reads after
/// mutating. It performs its remote calls strictly sequentially, since each
/// step relies on the previous one having committed.
///
/// The engine does not serialize operations per pipeline. Writes are
/// multi-step sequences with no transactional guarantee, so the caller must
/// ensure at most one reconciliation runs per identity at a time.
pub struct PipelineEngine<C: ControlPlane> {
    client: C,
}

impl<C: ControlPlane> PipelineEngine<C> {
    /// Creates an engine on top of the given control plane
    pub fn new(client: C) -> Self {
        Self { client }
    }

    fn team_for(&self, id: &PipelineId) -> C::Team {
        self.client.team(&id.team_name)
    }
}
