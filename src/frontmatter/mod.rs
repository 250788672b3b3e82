//! Split, parse and restamp the YAML frontmatter of material files.

pub mod codec;
pub mod fold;
pub mod merge;
pub mod split;

pub use codec::{MetadataCodec, YamlCodec};
pub use merge::merge_metadata;
pub use split::{extract_yaml_content, split_frontmatter};
