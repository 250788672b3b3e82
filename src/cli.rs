//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// update-material - replace the body of a material file
///
/// Reads new markdown from stdin, keeps the YAML frontmatter of FILE and marks it as documented.
#[derive(Parser, Debug)]
#[command(
    name = "update-material",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Replace the body of a material markdown file, preserving its frontmatter",
    long_about = "Reads new markdown content from stdin and writes it below the YAML frontmatter \
                  of FILE. The frontmatter is kept; `ai_status` is set to `documented` and \
                  `generated_at` to the current time in milliseconds.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  update-material channel/items/ai.v123.md < body.md\n    \
                  generate-docs | update-material channel/items/ai.v123.md\n    \
                  update-material --dry-run channel/items/ai.v123.md < body.md"
)]
pub struct Cli {
    /// Material file to update (must match */items/ai.{id}.md)
    pub file: PathBuf,

    /// Enable verbose output
    #[arg(long, short = 'v', env = "UPDATE_MATERIAL_VERBOSE")]
    pub verbose: bool,

    /// Suppress the success message
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print the updated document to stdout instead of writing the file
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_file() {
        let cli = Cli::try_parse_from(["update-material", "channel/items/ai.v123.md"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("channel/items/ai.v123.md"));
        assert!(!cli.dry_run);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_parsing_flags() {
        let cli = Cli::try_parse_from([
            "update-material",
            "--dry-run",
            "-v",
            "channel/items/ai.v123.md",
        ])
        .unwrap();
        assert!(cli.dry_run);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_requires_file() {
        assert!(Cli::try_parse_from(["update-material"]).is_err());
    }

    #[test]
    fn test_cli_quiet_conflicts_with_verbose() {
        assert!(
            Cli::try_parse_from(["update-material", "-q", "-v", "items/ai.x.md"]).is_err()
        );
    }

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
