//! Fixed conventions for material files
//!
//! Material files live at `.../items/ai.<id>.md` and carry a `---` fenced YAML
//! frontmatter with two keys owned by this tool.

/// Line that opens and closes the frontmatter block
pub const FRONTMATTER_DELIMITER: &str = "---";

/// Key set to [`STATUS_VALUE`] on every update
pub const STATUS_KEY: &str = "ai_status";

/// Value written under [`STATUS_KEY`]
pub const STATUS_VALUE: &str = "documented";

/// Key set to the generation time in milliseconds since the Unix epoch
pub const GENERATED_AT_KEY: &str = "generated_at";

/// Column past which long plain scalars in the frontmatter are folded
pub const YAML_WIDTH: usize = 80;

/// Environment variable that pins the generation time (milliseconds since the epoch)
pub const NOW_ENV: &str = "UPDATE_MATERIAL_NOW";

/// Directory and file naming convention a material path must follow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialLayout {
    /// Name of the directory that directly contains material files
    pub items_dir: String,
    /// File name prefix before the identifier
    pub stem_prefix: String,
    /// File extension without the leading dot
    pub extension: String,
}

impl Default for MaterialLayout {
    fn default() -> Self {
        Self {
            items_dir: "items".to_string(),
            stem_prefix: "ai.".to_string(),
            extension: "md".to_string(),
        }
    }
}

impl MaterialLayout {
    /// Human-readable form of the convention, e.g. `*/items/ai.{id}.md`
    pub fn describe(&self) -> String {
        format!(
            "*/{}/{}{{id}}.{}",
            self.items_dir, self.stem_prefix, self.extension
        )
    }
}
