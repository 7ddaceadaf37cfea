//! Error types for the pipeline provider
//!
//! Every error carries the pipeline and team name it relates to, so callers
//! never have to reconstruct context from the call site. Nothing in the
//! provider catches and suppresses an error: each failure aborts the
//! operation in flight and propagates with its cause chained.

use moorline_core::config::ConfigError;
use moorline_core::domain::pipeline::PipelineId;
use moorline_core::dto::pipeline::ConfigWarning;
use thiserror::Error;

/// Result type alias for provider operations
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Errors surfaced by pipeline reads and reconciliation
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The pipeline (or its config) does not exist on the control plane
    #[error("could not find pipeline {pipeline_name} in team {team_name}")]
    NotFound {
        /// Team that was queried
        team_name: String,
        /// Pipeline that was queried
        pipeline_name: String,
    },

    /// The desired config could not be parsed
    #[error("invalid config for pipeline {pipeline_name} in team {team_name}: {source}")]
    InvalidConfig {
        /// Team owning the pipeline
        team_name: String,
        /// Pipeline the config was meant for
        pipeline_name: String,
        /// Underlying parse failure
        #[source]
        source: ConfigError,
    },

    /// The control plane accepted the config but raised warnings about it
    ///
    /// Warnings block the write entirely rather than being surfaced as
    /// non-fatal diagnostics.
    #[error("config warnings for pipeline {pipeline_name} in team {team_name}:\n{}", join_warnings(.warnings))]
    ConfigWarnings {
        /// Team owning the pipeline
        team_name: String,
        /// Pipeline whose config was flagged
        pipeline_name: String,
        /// The (type, message) advisories the control plane returned
        warnings: Vec<ConfigWarning>,
    },

    /// A control plane call failed, or answered in a way that contradicts the
    /// operation in flight
    #[error("pipeline {pipeline_name} in team {team_name}: {context}")]
    Remote {
        /// Team owning the pipeline
        team_name: String,
        /// Pipeline being operated on
        pipeline_name: String,
        /// What the provider was doing when the call failed
        context: String,
        /// Underlying transport/API error, when there is one
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ProviderError {
    /// The pipeline is absent from the control plane
    pub fn not_found(id: &PipelineId) -> Self {
        Self::NotFound {
            team_name: id.team_name.clone(),
            pipeline_name: id.pipeline_name.clone(),
        }
    }

    /// The desired config failed to parse
    pub fn invalid_config(id: &PipelineId, source: ConfigError) -> Self {
        Self::InvalidConfig {
            team_name: id.team_name.clone(),
            pipeline_name: id.pipeline_name.clone(),
            source,
        }
    }

    /// The control plane raised warnings about an uploaded config
    pub fn config_warnings(id: &PipelineId, warnings: Vec<ConfigWarning>) -> Self {
        Self::ConfigWarnings {
            team_name: id.team_name.clone(),
            pipeline_name: id.pipeline_name.clone(),
            warnings,
        }
    }

    /// A control plane call failed with an underlying error
    pub fn remote(
        id: &PipelineId,
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Remote {
            team_name: id.team_name.clone(),
            pipeline_name: id.pipeline_name.clone(),
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The control plane answered without a transport error, but the answer
    /// contradicts the operation in flight (e.g., a pipeline reported missing
    /// right after its config was uploaded)
    pub fn inconsistent(id: &PipelineId, context: impl Into<String>) -> Self {
        Self::Remote {
            team_name: id.team_name.clone(),
            pipeline_name: id.pipeline_name.clone(),
            context: context.into(),
            source: None,
        }
    }

    /// Check if this error means the pipeline does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// One warning per line, each as `<type>: <message>`
fn join_warnings(warnings: &[ConfigWarning]) -> String {
    warnings
        .iter()
        .map(|w| format!("{}: {}", w.warning_type, w.message))
        .collect::<Vec<_>>()
        .join("\n")
}
