//! Structured-data capability used to read and write frontmatter metadata.

use serde_yaml::{Mapping, Value};

use super::fold::fold_plain_scalars;
use crate::config::YAML_WIDTH;
use crate::error::{self, Result};

/// Decode frontmatter text into a mapping and encode it back
pub trait MetadataCodec {
    /// Parse `text` into a key/value mapping. Valid YAML that is not a mapping is an error.
    fn decode(&self, text: &str) -> Result<Mapping>;

    /// Serialize `metadata` to block-style text ending in a newline.
    fn encode(&self, metadata: &Mapping) -> Result<String>;
}

/// YAML codec backed by `serde_yaml`.
///
/// Output is block style with one key per line, keys in insertion order and
/// non-ASCII characters written literally. Long plain scalars are folded at
/// [`YAML_WIDTH`] columns when the folded text parses back to the same mapping.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlCodec;

impl MetadataCodec for YamlCodec {
    fn decode(&self, text: &str) -> Result<Mapping> {
        match serde_yaml::from_str::<Value>(text)? {
            Value::Mapping(mapping) => Ok(mapping),
            other => Err(error::frontmatter::not_mapping(&other)),
        }
    }

    fn encode(&self, metadata: &Mapping) -> Result<String> {
        let yaml = serde_yaml::to_string(metadata)
            .map_err(|e| error::frontmatter::serialize_failed(&e))?;
        let folded = fold_plain_scalars(&yaml, YAML_WIDTH);
        if folded == yaml {
            return Ok(yaml);
        }

        let round_trips =
            serde_yaml::from_str::<Mapping>(&folded).is_ok_and(|parsed| parsed == *metadata);
        Ok(if round_trips { folded } else { yaml })
    }
}
