//! Pipeline config canonicalization
//!
//! Every config that enters the system, whatever format it arrived in, is
//! reduced here to a single canonical form: compact JSON. Downstream code
//! only ever compares and uploads the canonical form.

use serde_json::Value;

use crate::config::{convert, ConfigError, ConfigFormat};

/// Parses a raw pipeline config and re-encodes it as canonical JSON.
///
/// For JSON input this is an identity transform modulo whitespace and key
/// ordering; for YAML input it is a full conversion. Either way the input is
/// fully parsed, so malformed configs are caught here rather than at upload
/// time.
pub fn canonicalize(raw: &str, format: ConfigFormat) -> Result<String, ConfigError> {
    match format {
        ConfigFormat::Json => {
            let value: Value =
                serde_json::from_str(raw).map_err(|e| ConfigError::invalid_json(raw, e))?;
            convert::encode_json(&value)
        }
        ConfigFormat::Yaml => convert::yaml_to_json(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_yaml() {
        assert_eq!(
            canonicalize("jobs: []", ConfigFormat::Yaml).unwrap(),
            r#"{"jobs":[]}"#
        );
    }

    #[test]
    fn test_canonicalize_json_compacts_whitespace() {
        assert_eq!(
            canonicalize("{ \"a\" : 1, \"b\": [true, null] }", ConfigFormat::Json).unwrap(),
            r#"{"a":1,"b":[true,null]}"#
        );
    }

    #[test]
    fn test_canonicalize_json_already_compact() {
        let raw = r#"{"jobs":[{"name":"build"}]}"#;
        assert_eq!(canonicalize(raw, ConfigFormat::Json).unwrap(), raw);
    }

    #[test]
    fn test_canonicalize_rejects_malformed_json() {
        let err = canonicalize("jobs: []", ConfigFormat::Json).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidJson { .. }));
    }

    #[test]
    fn test_canonicalize_rejects_malformed_yaml() {
        let err = canonicalize("{invalid: [", ConfigFormat::Yaml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidYaml { .. }));
    }
}
