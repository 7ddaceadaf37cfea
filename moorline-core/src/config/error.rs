//! Config parse errors

use thiserror::Error;

use crate::config::ConfigFormat;

/// Maximum length of the input snippet embedded in error messages
const SNIPPET_LEN: usize = 120;

/// Errors produced while parsing or converting pipeline configs
///
/// Parse variants keep a truncated snippet of the offending document so the
/// failing input is identifiable from the message alone, and chain the
/// underlying serde error as the source.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Input declared as JSON failed to parse
    #[error("malformed JSON pipeline config ({snippet:?}): {source}")]
    InvalidJson {
        snippet: String,
        #[source]
        source: serde_json::Error,
    },

    /// Input declared as YAML failed to parse, or is not representable as JSON
    #[error("malformed YAML pipeline config ({snippet:?}): {source}")]
    InvalidYaml {
        snippet: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// A parsed document could not be re-encoded in the target format
    #[error("could not re-encode pipeline config as {format}: {message}")]
    Encode {
        format: ConfigFormat,
        message: String,
    },

    /// Format tag named neither of the supported formats
    #[error("unknown pipeline config format {0:?} (expected \"json\" or \"yaml\")")]
    UnknownFormat(String),
}

impl ConfigError {
    pub(crate) fn invalid_json(raw: &str, source: serde_json::Error) -> Self {
        Self::InvalidJson {
            snippet: snippet_of(raw),
            source,
        }
    }

    pub(crate) fn invalid_yaml(raw: &str, source: serde_yaml::Error) -> Self {
        Self::InvalidYaml {
            snippet: snippet_of(raw),
            source,
        }
    }
}

/// Truncates raw input for inclusion in an error message
fn snippet_of(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.len() <= SNIPPET_LEN {
        return trimmed.to_string();
    }

    let mut cut = SNIPPET_LEN;
    while !trimmed.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &trimmed[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_keeps_short_input() {
        assert_eq!(snippet_of("  jobs: ["), "jobs: [");
    }

    #[test]
    fn test_snippet_truncates_long_input() {
        let long = "x".repeat(500);
        let snippet = snippet_of(&long);

        assert!(snippet.ends_with("..."));
        assert_eq!(snippet.len(), SNIPPET_LEN + 3);
    }

    #[test]
    fn test_snippet_respects_char_boundaries() {
        let long = "é".repeat(200);
        let snippet = snippet_of(&long);

        assert!(snippet.ends_with("..."));
        assert!(snippet.len() <= SNIPPET_LEN + 3);
    }

    #[test]
    fn test_error_message_names_the_format() {
        let err = ConfigError::Encode {
            format: ConfigFormat::Yaml,
            message: "boom".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "could not re-encode pipeline config as yaml: boom"
        );
    }
}
