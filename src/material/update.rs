//! Replace the body of a material file and restamp its frontmatter.

use std::fs;
use std::path::{Path, PathBuf};

use super::path::PathValidator;
use crate::clock::{Clock, SystemClock};
use crate::config::MaterialLayout;
use crate::error::{self, Result};
use crate::frontmatter::{
    MetadataCodec, YamlCodec, extract_yaml_content, merge_metadata, split_frontmatter,
};

/// Result of a successful update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Resolved location of the material file
    pub path: PathBuf,
    /// Full document that was (or, in dry-run mode, would be) written
    pub document: String,
    /// Whether the file on disk was replaced
    pub written: bool,
}

/// Build the new file content from the existing one.
///
/// The old body is discarded; the frontmatter is restamped and followed by a
/// blank line, `new_body` and a trailing newline.
pub fn rebuild_document<C>(
    path: &Path,
    existing: &str,
    new_body: &str,
    now_millis: i64,
    codec: &C,
) -> Result<String>
where
    C: MetadataCodec + ?Sized,
{
    let (frontmatter, _old_body) = split_frontmatter(existing);
    if frontmatter.is_empty() || extract_yaml_content(frontmatter).is_empty() {
        return Err(error::frontmatter::missing(path));
    }

    let new_frontmatter = merge_metadata(frontmatter, now_millis, codec)?;
    Ok(format!("{new_frontmatter}\n{new_body}\n"))
}

/// Validates, reads, rebuilds and writes material files
pub struct MaterialUpdater<C = YamlCodec, K = SystemClock> {
    validator: PathValidator,
    codec: C,
    clock: K,
}

impl<K: Clock> MaterialUpdater<YamlCodec, K> {
    /// Updater for the default layout using YAML
    pub fn new(clock: K) -> Result<Self> {
        Ok(Self::with_parts(
            PathValidator::new(MaterialLayout::default())?,
            YamlCodec,
            clock,
        ))
    }
}

impl<C: MetadataCodec, K: Clock> MaterialUpdater<C, K> {
    pub fn with_parts(validator: PathValidator, codec: C, clock: K) -> Self {
        Self {
            validator,
            codec,
            clock,
        }
    }

    /// Replace the body of the material file at `path` with `new_body`.
    ///
    /// Nothing is written unless every check and the metadata merge succeed.
    /// With `dry_run` set the file is left untouched and the outcome carries
    /// the document that would have been written.
    pub fn update(&self, path: &Path, new_body: &str, dry_run: bool) -> Result<UpdateOutcome> {
        let resolved = self.validator.resolve(path)?;

        let existing =
            fs::read_to_string(&resolved).map_err(|e| error::fs::read_failed(path, &e))?;
        let document = rebuild_document(
            path,
            &existing,
            new_body,
            self.clock.now_millis(),
            &self.codec,
        )?;

        if !dry_run {
            fs::write(&resolved, &document).map_err(|e| error::fs::write_failed(path, &e))?;
        }

        Ok(UpdateOutcome {
            path: resolved,
            document,
            written: !dry_run,
        })
    }
}
