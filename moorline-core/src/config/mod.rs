//! Pipeline config handling
//!
//! Everything about the serialized form of a pipeline definition:
//! - [`ConfigFormat`]: the declared input format tag
//! - [`yaml_to_json`] / [`json_to_yaml`]: conversion through `serde_json::Value`
//! - [`canonicalize`]: normalization of raw input into canonical JSON
//! - [`ConfigError`]: parse failures carrying a snippet of the offending input
//!
//! Only serialization correctness lives here. Whether a config describes a
//! sensible job graph is the control plane's concern.

mod convert;
mod error;
mod format;
mod parse;

pub use convert::{json_to_yaml, yaml_to_json};
pub use error::ConfigError;
pub use format::ConfigFormat;
pub use parse::canonicalize;
