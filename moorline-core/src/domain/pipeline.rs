//! Pipeline domain types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Composite pipeline identity
///
/// Pipelines on the control plane are scoped to a team, so the full identity
/// is the (team, pipeline) pair. The `Display` form joins both components
/// with `:` and serves as the external resource identifier.
///
/// The rendered key is presentational only: it is never parsed back into its
/// components, and no escaping is applied when a name itself contains the
/// delimiter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PipelineId {
    pub team_name: String,
    pub pipeline_name: String,
}

impl PipelineId {
    /// Creates an identity from team and pipeline names
    pub fn new(team_name: impl Into<String>, pipeline_name: impl Into<String>) -> Self {
        Self {
            team_name: team_name.into(),
            pipeline_name: pipeline_name.into(),
        }
    }
}

impl fmt::Display for PipelineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.team_name, self.pipeline_name)
    }
}

/// Observed pipeline state
///
/// Snapshot of what the control plane currently holds for one pipeline: the
/// two lifecycle flags plus the config document in both renderings. Always
/// re-derived from the control plane, never persisted locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineState {
    pub team_name: String,
    pub pipeline_name: String,
    /// Whether the pipeline is publicly visible
    pub is_exposed: bool,
    /// Whether scheduled execution is suspended
    pub is_paused: bool,
    /// Canonical JSON rendering of the stored config
    pub config_json: String,
    /// YAML rendering derived from the canonical JSON
    pub config_yaml: String,
}

impl PipelineState {
    /// Creates a snapshot with only the identity populated
    ///
    /// Flags default to false and both config renderings are empty until a
    /// read fills them in.
    pub fn new(id: &PipelineId) -> Self {
        Self {
            team_name: id.team_name.clone(),
            pipeline_name: id.pipeline_name.clone(),
            is_exposed: false,
            is_paused: false,
            config_json: String::new(),
            config_yaml: String::new(),
        }
    }

    /// The identity this snapshot belongs to
    pub fn id(&self) -> PipelineId {
        PipelineId::new(self.team_name.as_str(), self.pipeline_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_joins_with_colon() {
        let id = PipelineId::new("main", "ci");
        assert_eq!(id.to_string(), "main:ci");
    }

    #[test]
    fn test_id_display_performs_no_escaping() {
        let id = PipelineId::new("a:b", "c");
        assert_eq!(id.to_string(), "a:b:c");
    }

    #[test]
    fn test_new_state_has_identity_only() {
        let id = PipelineId::new("main", "ci");
        let state = PipelineState::new(&id);

        assert_eq!(state.team_name, "main");
        assert_eq!(state.pipeline_name, "ci");
        assert!(!state.is_exposed);
        assert!(!state.is_paused);
        assert!(state.config_json.is_empty());
        assert!(state.config_yaml.is_empty());
        assert_eq!(state.id(), id);
    }
}
