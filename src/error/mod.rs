//! Error types and handling for update-material
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors are grouped by error domain:
//! - [`fs`]: File system and input stream errors
//! - [`frontmatter`]: Frontmatter parse and serialize errors

pub mod frontmatter;
pub mod fs;

#[cfg(test)]
mod tests;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for material updates
#[derive(Error, Diagnostic, Debug)]
pub enum MaterialError {
    // Path errors
    #[error("Invalid file path pattern: {path}")]
    #[diagnostic(
        code(update_material::path::invalid_pattern),
        help("File must match pattern: {pattern}")
    )]
    InvalidPathPattern { path: String, pattern: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(update_material::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(update_material::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(
        code(update_material::fs::write_failed),
        help("The file may have been left partially written")
    )]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to read content from stdin: {reason}")]
    #[diagnostic(
        code(update_material::fs::stdin_failed),
        help("Pipe the new markdown body into the command as UTF-8 text")
    )]
    StdinReadFailed { reason: String },

    // Frontmatter errors
    #[error("No frontmatter found in {path}")]
    #[diagnostic(
        code(update_material::frontmatter::missing),
        help("The file must start with a '---' fenced YAML block")
    )]
    MissingFrontmatter { path: String },

    #[error("Failed to parse YAML in frontmatter: {reason}")]
    #[diagnostic(code(update_material::frontmatter::parse_failed))]
    FrontmatterParseFailed { reason: String },

    #[error("Invalid YAML in frontmatter: expected a mapping, found {found}")]
    #[diagnostic(
        code(update_material::frontmatter::not_mapping),
        help("Frontmatter must be a set of `key: value` lines")
    )]
    FrontmatterNotMapping { found: String },

    #[error("Failed to serialize frontmatter: {reason}")]
    #[diagnostic(code(update_material::frontmatter::serialize_failed))]
    FrontmatterSerializeFailed { reason: String },

    // Configuration errors
    #[error("Invalid {name} value: {value}")]
    #[diagnostic(
        code(update_material::config::invalid_now),
        help("Set it to an integer count of milliseconds since the Unix epoch")
    )]
    InvalidClockOverride { name: String, value: String },

    #[error("Interrupted")]
    #[diagnostic(code(update_material::interrupted))]
    Interrupted,

    #[error("Unexpected error: {message}")]
    #[diagnostic(code(update_material::unexpected))]
    Unexpected { message: String },
}

impl From<serde_yaml::Error> for MaterialError {
    fn from(err: serde_yaml::Error) -> Self {
        MaterialError::FrontmatterParseFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MaterialError>;
