//! Material path convention checks
//!
//! A material path must end in `<items_dir>/<stem_prefix><id>.<extension>`
//! where `<id>` is made of ASCII letters, digits, `-` and `_`.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use normpath::PathExt;
use regex::Regex;

use crate::config::MaterialLayout;
use crate::error::{self, MaterialError, Result};

/// Checks paths against a [`MaterialLayout`]
#[derive(Debug, Clone)]
pub struct PathValidator {
    layout: MaterialLayout,
    file_name: Regex,
}

impl PathValidator {
    pub fn new(layout: MaterialLayout) -> Result<Self> {
        let pattern = format!(
            r"^{}[A-Za-z0-9_-]+\.{}$",
            regex::escape(&layout.stem_prefix),
            regex::escape(&layout.extension)
        );
        let file_name = Regex::new(&pattern).map_err(|e| MaterialError::Unexpected {
            message: format!("Invalid material file name pattern '{pattern}': {e}"),
        })?;
        Ok(Self { layout, file_name })
    }

    fn invalid(&self, path: String) -> MaterialError {
        MaterialError::InvalidPathPattern {
            path,
            pattern: self.layout.describe(),
        }
    }

    /// Whether the last two components of `path` follow the convention
    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(OsStr::to_str) else {
            return false;
        };
        let Some(parent) = path
            .parent()
            .and_then(Path::file_name)
            .and_then(OsStr::to_str)
        else {
            return false;
        };
        parent == self.layout.items_dir && self.file_name.is_match(name)
    }

    /// Validate `path`, require it to be an existing file and return its
    /// resolved location. The path is checked in absolute form, so a bare
    /// `ai.<id>.md` inside an items directory passes. The resolved location
    /// is validated too, so a symlink pointing outside the convention is
    /// rejected.
    pub fn resolve(&self, path: &Path) -> Result<PathBuf> {
        if !std::path::absolute(path).is_ok_and(|absolute| self.matches(&absolute)) {
            return Err(self.invalid(path.display().to_string()));
        }

        if !path.is_file() {
            return Err(error::fs::not_found(path));
        }

        let resolved = path
            .normalize()
            .map(|norm| norm.as_path().to_path_buf())
            .map_err(|e| error::fs::read_failed(path, &e))?;

        if !self.matches(&resolved) {
            return Err(self.invalid(format!(
                "{} (resolves to {})",
                path.display(),
                resolved.display()
            )));
        }

        Ok(resolved)
    }
}
