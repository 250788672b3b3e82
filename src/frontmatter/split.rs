//! Separate a leading `---` fenced frontmatter block from the markdown body.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::FRONTMATTER_DELIMITER;

/// A delimiter alone on its line, trailing whitespace allowed
#[allow(clippy::expect_used)]
static CLOSING_DELIMITER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?m)^{}\s*$", regex::escape(FRONTMATTER_DELIMITER)))
        .expect("closing delimiter pattern is valid")
});

/// Split content into frontmatter and body.
///
/// The frontmatter runs from the opening `---` through the closing `---` token.
/// Leading newlines are stripped from the body. Content that does not start
/// with `---`, or that never closes the block, has no frontmatter and is
/// returned whole as the body.
pub fn split_frontmatter(content: &str) -> (&str, &str) {
    let Some(remaining) = content.strip_prefix(FRONTMATTER_DELIMITER) else {
        return ("", content);
    };
    let Some(closing) = CLOSING_DELIMITER.find(remaining) else {
        return ("", content);
    };

    let end = FRONTMATTER_DELIMITER.len() + closing.start() + FRONTMATTER_DELIMITER.len();
    let (frontmatter, body) = content.split_at(end);
    (frontmatter, body.trim_start_matches('\n'))
}

/// Extract the YAML text from a frontmatter block (strip the `---` markers).
pub fn extract_yaml_content(frontmatter: &str) -> &str {
    let mut content = frontmatter.trim();
    if let Some(rest) = content.strip_prefix(FRONTMATTER_DELIMITER) {
        content = rest.trim_start();
    }
    if let Some(rest) = content.strip_suffix(FRONTMATTER_DELIMITER) {
        content = rest.trim_end();
    }
    content
}
