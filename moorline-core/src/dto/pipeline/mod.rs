//! Pipeline DTOs for control plane communication

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ConfigFormat;

/// Desired pipeline submission
///
/// Input to the write path: the raw config document with its declared format
/// plus the two desired lifecycle flags. Not retained once reconciliation
/// completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSpec {
    /// Raw config document, in the format named by `config_format`
    pub config: String,
    pub config_format: ConfigFormat,
    pub is_exposed: bool,
    pub is_paused: bool,
}

/// Pipeline lookup payload returned by the control plane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineInfo {
    pub id: u64,
    pub name: String,
    pub team_name: String,
    #[serde(rename = "public")]
    pub is_public: bool,
    #[serde(rename = "paused")]
    pub is_paused: bool,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Stored config document fetched from the control plane
///
/// `version` is the opaque token identifying the stored revision; an upload
/// must name the revision it claims to replace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfigDocument {
    /// Raw config text as served by the control plane (JSON)
    pub raw: String,
    pub version: String,
}

/// Outcome of a create-or-update config upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigApplyOutcome {
    /// True when the upload created the pipeline rather than updating it
    pub created: bool,
    #[serde(default)]
    pub warnings: Vec<ConfigWarning>,
}

/// Advisory attached by the control plane to an accepted config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigWarning {
    #[serde(rename = "type")]
    pub warning_type: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_warning_wire_field_names() {
        let warning: ConfigWarning =
            serde_json::from_str(r#"{"type": "deprecation", "message": "old syntax"}"#).unwrap();

        assert_eq!(warning.warning_type, "deprecation");
        assert_eq!(warning.message, "old syntax");
    }

    #[test]
    fn test_pipeline_info_wire_field_names() {
        let info: PipelineInfo = serde_json::from_str(
            r#"{"id": 7, "name": "ci", "team_name": "main", "public": true, "paused": false}"#,
        )
        .unwrap();

        assert_eq!(info.name, "ci");
        assert!(info.is_public);
        assert!(!info.is_paused);
        assert!(info.last_updated.is_none());
    }
}
