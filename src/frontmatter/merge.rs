//! Restamp the metadata block with the documented status and generation time.

use serde_yaml::{Mapping, Value};

use super::codec::MetadataCodec;
use super::split::extract_yaml_content;
use crate::config::{FRONTMATTER_DELIMITER, GENERATED_AT_KEY, STATUS_KEY, STATUS_VALUE};
use crate::error::Result;

/// Set the two keys this tool owns. Existing keys keep their position and
/// missing ones are appended.
pub fn stamp_metadata(metadata: &mut Mapping, now_millis: i64) {
    metadata.insert(
        Value::String(STATUS_KEY.to_string()),
        Value::String(STATUS_VALUE.to_string()),
    );
    metadata.insert(
        Value::String(GENERATED_AT_KEY.to_string()),
        Value::Number(now_millis.into()),
    );
}

/// Parse a `---` fenced frontmatter block, stamp it and serialize it back.
///
/// The result is `---\n<yaml>---\n`. All keys other than `ai_status` and
/// `generated_at` are carried over untouched and in their original order.
pub fn merge_metadata<C>(frontmatter: &str, now_millis: i64, codec: &C) -> Result<String>
where
    C: MetadataCodec + ?Sized,
{
    let mut metadata = codec.decode(extract_yaml_content(frontmatter))?;
    stamp_metadata(&mut metadata, now_millis);

    let mut yaml = codec.encode(&metadata)?;
    if !yaml.ends_with('\n') {
        yaml.push('\n');
    }
    Ok(format!("{FRONTMATTER_DELIMITER}\n{yaml}{FRONTMATTER_DELIMITER}\n"))
}
