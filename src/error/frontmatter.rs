//! Frontmatter errors

use std::path::Path;

use serde_yaml::Value;

use super::MaterialError;

/// Creates a missing frontmatter error
pub fn missing(path: &Path) -> MaterialError {
    MaterialError::MissingFrontmatter {
        path: path.display().to_string(),
    }
}

/// Creates a not-a-mapping error naming the YAML kind that was found instead
pub fn not_mapping(value: &Value) -> MaterialError {
    let found = match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    };
    MaterialError::FrontmatterNotMapping {
        found: found.to_string(),
    }
}

/// Creates a serialize failed error
pub fn serialize_failed(err: &serde_yaml::Error) -> MaterialError {
    MaterialError::FrontmatterSerializeFailed {
        reason: err.to_string(),
    }
}
