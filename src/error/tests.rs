//! Error type tests
//!
//! Tests for `MaterialError` and its constructors.

use std::io;
use std::path::Path;

use miette::Diagnostic;

use crate::error::MaterialError;
use crate::error::frontmatter::{missing, not_mapping, serialize_failed};
use crate::error::fs::{not_found, read_failed, stdin_failed, write_failed};

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

#[test]
fn test_error_display() {
    let err = MaterialError::InvalidPathPattern {
        path: "notes.md".to_string(),
        pattern: "*/items/ai.{id}.md".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid file path pattern: notes.md");
}

#[test]
fn test_error_code() {
    let err = not_found(Path::new("items/ai.x.md"));
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("update_material::fs::not_found".to_string())
    );
}

#[test]
fn test_invalid_path_help_names_pattern() {
    let err = MaterialError::InvalidPathPattern {
        path: "x".to_string(),
        pattern: "*/items/ai.{id}.md".to_string(),
    };
    assert_eq!(
        err.help().map(|h| h.to_string()),
        Some("File must match pattern: */items/ai.{id}.md".to_string())
    );
}

#[test]
fn test_yaml_error_conversion() {
    let parse_result: std::result::Result<serde_yaml::Value, _> =
        serde_yaml::from_str("invalid: yaml: content: [unclosed");
    let yaml_err = parse_result.unwrap_err();
    let err: MaterialError = yaml_err.into();
    assert!(matches!(err, MaterialError::FrontmatterParseFailed { .. }));
    assert!(err.to_string().contains("Failed to parse YAML in frontmatter"));
}

#[test]
fn test_stdin_failed_message_and_help() {
    let err = stdin_failed(&io::Error::new(
        io::ErrorKind::InvalidData,
        "stream did not contain valid UTF-8",
    ));
    assert_eq!(
        err.to_string(),
        "Failed to read content from stdin: stream did not contain valid UTF-8"
    );
    assert_eq!(
        err.help().map(|h| h.to_string()),
        Some("Pipe the new markdown body into the command as UTF-8 text".to_string())
    );
}

#[test]
fn test_not_mapping_names_found_kind() {
    let err = not_mapping(&serde_yaml::Value::String("bare".to_string()));
    assert_eq!(
        err.to_string(),
        "Invalid YAML in frontmatter: expected a mapping, found a string"
    );

    let err = not_mapping(&serde_yaml::Value::Sequence(Vec::new()));
    assert!(err.to_string().ends_with("found a sequence"));
}

test_error_contains!(
    test_file_not_found_error,
    not_found(Path::new("channel/items/ai.v1.md")),
    "File not found",
    "channel/items/ai.v1.md"
);

test_error_contains!(
    test_missing_frontmatter_error,
    missing(Path::new("items/ai.v1.md")),
    "No frontmatter found in",
    "items/ai.v1.md"
);

test_error_contains!(
    test_read_failed_error,
    read_failed(
        Path::new("items/ai.v1.md"),
        &io::Error::new(io::ErrorKind::PermissionDenied, "denied")
    ),
    "Failed to read file",
    "denied"
);

test_error_contains!(
    test_write_failed_error,
    write_failed(
        Path::new("items/ai.v1.md"),
        &io::Error::new(io::ErrorKind::Other, "disk full")
    ),
    "Failed to write file",
    "disk full"
);

test_error_contains!(
    test_interrupted_error,
    MaterialError::Interrupted,
    "Interrupted"
);

test_error_contains!(
    test_unexpected_error,
    MaterialError::Unexpected {
        message: "boom".to_string()
    },
    "Unexpected error",
    "boom"
);

test_error_contains!(
    test_invalid_clock_override_error,
    MaterialError::InvalidClockOverride {
        name: "UPDATE_MATERIAL_NOW".to_string(),
        value: "soon".to_string()
    },
    "UPDATE_MATERIAL_NOW",
    "soon"
);

#[test]
fn test_serialize_failed_error() {
    let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("[").unwrap_err();
    let err = serialize_failed(&yaml_err);
    assert!(matches!(err, MaterialError::FrontmatterSerializeFailed { .. }));
}
