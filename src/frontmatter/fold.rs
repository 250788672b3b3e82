//! Soft-wrap long plain scalars in block-style YAML output.
//!
//! serde_yaml emits every scalar on a single line. Lines holding a plain
//! scalar are folded at single spaces once the column passes `width`, and
//! continuation lines are indented two spaces past the entry. Plain
//! multi-line scalars fold back to single spaces when parsed.

/// Fold every eligible line of `yaml` at `width` columns
pub fn fold_plain_scalars(yaml: &str, width: usize) -> String {
    let mut out = String::with_capacity(yaml.len());
    for line in yaml.split_inclusive('\n') {
        let (content, newline) = match line.strip_suffix('\n') {
            Some(content) => (content, "\n"),
            None => (line, ""),
        };
        match split_entry(content) {
            Some((prefix, value)) if content.len() > width => {
                fold_value(&mut out, prefix, value, width);
            }
            _ => out.push_str(content),
        }
        out.push_str(newline);
    }
    out
}

/// Split a `key: value` or `- value` line into its prefix and a plain scalar
/// value, or `None` when the value is quoted, a block indicator or otherwise
/// not safe to fold.
fn split_entry(line: &str) -> Option<(&str, &str)> {
    let indent = line.len() - line.trim_start_matches(' ').len();
    let rest = &line[indent..];

    let value_start = if let Some(item) = rest.strip_prefix("- ") {
        if item.contains(": ") {
            return None;
        }
        indent + 2
    } else {
        if rest.starts_with(['\'', '"', '?']) {
            return None;
        }
        indent + rest.find(": ").filter(|&i| i > 0)? + 2
    };

    let value = &line[value_start..];
    let plain = !value.is_empty()
        && !value.starts_with(['\'', '"', '|', '>', '[', '{', '&', '*', '!'])
        && !value.contains("  ")
        && !value.ends_with(' ');
    plain.then(|| line.split_at(value_start))
}

fn fold_value(out: &mut String, prefix: &str, value: &str, width: usize) {
    let indent = prefix.len() - prefix.trim_start_matches(' ').len() + 2;
    let mut words = value.split(' ');
    let first = words.next().unwrap_or_default();

    out.push_str(prefix);
    out.push_str(first);
    let mut column = prefix.chars().count() + first.chars().count();

    for word in words {
        if column > width {
            out.push('\n');
            out.extend(std::iter::repeat_n(' ', indent));
            column = indent;
        } else {
            out.push(' ');
            column += 1;
        }
        out.push_str(word);
        column += word.chars().count();
    }
}
