//! YAML <-> JSON conversion
//!
//! Conversion goes through `serde_json::Value`, so whatever comes in must be
//! representable as JSON: YAML with non-string mapping keys or other
//! JSON-incompatible constructs is rejected rather than coerced. Mapping key
//! order is not preserved; key sets and scalar values are.

use serde_json::Value;

use crate::config::{ConfigError, ConfigFormat};

/// Converts a YAML document to its canonical JSON encoding
pub fn yaml_to_json(yaml: &str) -> Result<String, ConfigError> {
    let value: Value =
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::invalid_yaml(yaml, e))?;
    encode_json(&value)
}

/// Converts a JSON document to its YAML encoding
pub fn json_to_yaml(json: &str) -> Result<String, ConfigError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| ConfigError::invalid_json(json, e))?;
    serde_yaml::to_string(&value).map_err(|e| ConfigError::Encode {
        format: ConfigFormat::Yaml,
        message: e.to_string(),
    })
}

pub(crate) fn encode_json(value: &Value) -> Result<String, ConfigError> {
    serde_json::to_string(value).map_err(|e| ConfigError::Encode {
        format: ConfigFormat::Json,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_yaml_to_json_empty_job_list() {
        assert_eq!(yaml_to_json("jobs: []").unwrap(), r#"{"jobs":[]}"#);
    }

    #[test]
    fn test_yaml_to_json_nested_document() {
        let yaml = "jobs:\n- name: build\n  plan:\n  - get: repo\n  - task: unit\nresources:\n- name: repo\n  type: git\n";
        let converted: Value = serde_json::from_str(&yaml_to_json(yaml).unwrap()).unwrap();

        assert_eq!(
            converted,
            json!({
                "jobs": [
                    {"name": "build", "plan": [{"get": "repo"}, {"task": "unit"}]}
                ],
                "resources": [
                    {"name": "repo", "type": "git"}
                ]
            })
        );
    }

    #[test]
    fn test_yaml_to_json_preserves_scalar_types() {
        let converted: Value =
            serde_json::from_str(&yaml_to_json("count: 3\nenabled: true\nlabel: \"3\"\nempty: null").unwrap())
                .unwrap();

        assert_eq!(
            converted,
            json!({"count": 3, "enabled": true, "label": "3", "empty": null})
        );
    }

    #[test]
    fn test_yaml_to_json_rejects_malformed_input() {
        let err = yaml_to_json("jobs: [unterminated").unwrap_err();

        assert!(matches!(err, ConfigError::InvalidYaml { .. }));
        assert!(err.to_string().contains("jobs: [unterminated"));
    }

    #[test]
    fn test_yaml_to_json_rejects_non_string_keys() {
        assert!(matches!(
            yaml_to_json("1: one"),
            Err(ConfigError::InvalidYaml { .. })
        ));
    }

    #[test]
    fn test_json_to_yaml_empty_job_list() {
        assert_eq!(json_to_yaml(r#"{"jobs": []}"#).unwrap(), "jobs: []\n");
    }

    #[test]
    fn test_json_to_yaml_rejects_malformed_input() {
        let err = json_to_yaml("{\"jobs\": ").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidJson { .. }));
    }

    #[test]
    fn test_round_trip_preserves_structure() {
        let yaml = "jobs:\n- name: deploy\n  serial: true\ngroups:\n- name: all\n  jobs:\n  - deploy\n";

        let json = yaml_to_json(yaml).unwrap();
        let back = json_to_yaml(&json).unwrap();

        let original: Value = serde_yaml::from_str(yaml).unwrap();
        let round_tripped: Value = serde_yaml::from_str(&back).unwrap();
        assert_eq!(original, round_tripped);
    }
}
