//! Config format tags

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// Serialization format of a submitted pipeline config
///
/// This is the single format-dispatch point: supporting another input format
/// means adding a variant here and an arm in
/// [`canonicalize`](crate::config::canonicalize).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// The lowercase tag used in resource inputs
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            ConfigFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(ConfigFormat::Json),
            "yaml" => Ok(ConfigFormat::Yaml),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!("json".parse::<ConfigFormat>().unwrap(), ConfigFormat::Json);
        assert_eq!("yaml".parse::<ConfigFormat>().unwrap(), ConfigFormat::Yaml);
    }

    #[test]
    fn test_parse_rejects_unknown_tag() {
        let err = "toml".parse::<ConfigFormat>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownFormat(tag) if tag == "toml"));
    }

    #[test]
    fn test_parse_rejects_uppercase_tag() {
        assert!("JSON".parse::<ConfigFormat>().is_err());
    }

    #[test]
    fn test_display_matches_tag() {
        assert_eq!(ConfigFormat::Json.to_string(), "json");
        assert_eq!(ConfigFormat::Yaml.to_string(), "yaml");
    }

    #[test]
    fn test_serde_uses_lowercase_tags() {
        assert_eq!(serde_json::to_string(&ConfigFormat::Yaml).unwrap(), "\"yaml\"");
        let format: ConfigFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, ConfigFormat::Json);
    }
}
