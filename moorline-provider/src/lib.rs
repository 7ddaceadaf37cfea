//! Moorline Pipeline Provider
//!
//! Declarative management of pipelines on a Moorline control plane. Callers
//! describe the state a pipeline should be in ([`PipelineSpec`]); the provider
//! reconciles the control plane to match and reports back the state that
//! actually resulted.
//!
//! The crate is organized in three layers:
//! - [`PipelineEngine`] - reads remote state and drives reconciliation writes
//! - [`PipelineResource`] / [`PipelineDataSource`] - the resource lifecycle
//!   surface consumed by declarative tooling
//! - [`ProviderConfig`] - connection settings for reaching the control plane

pub mod config;
pub mod engine;
pub mod error;
pub mod resource;

// Re-export commonly used types
pub use config::ProviderConfig;
pub use engine::{FlagKind, PipelineEngine};
pub use error::{ProviderError, Result};
pub use moorline_core::dto::pipeline::PipelineSpec;
pub use resource::{PipelineDataSource, PipelineResource};
