//! update-material - material file updater
//!
//! Replaces the body of a `*/items/ai.{id}.md` material file with markdown read
//! from stdin, keeping its YAML frontmatter and stamping `ai_status` and
//! `generated_at`.

use clap::Parser;

mod cli;
mod clock;
mod commands;
mod config;
mod error;
mod frontmatter;
mod material;
mod ui;

use cli::Cli;
use error::{MaterialError, Result};
use ui::Reporter;

/// Report `Interrupted` and exit 1 on Ctrl-C instead of dying from the signal
fn install_interrupt_handler(reporter: Reporter) -> Result<()> {
    ctrlc::set_handler(move || {
        reporter.error(&MaterialError::Interrupted);
        std::process::exit(1);
    })
    .map_err(|e| MaterialError::Unexpected {
        message: format!("Failed to install interrupt handler: {e}"),
    })
}

fn main() {
    // Usage errors exit 1 like every other failure; --help and --version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(i32::from(e.use_stderr()));
        }
    };
    let reporter = Reporter::new(cli.verbose, cli.quiet);

    if let Err(e) = install_interrupt_handler(reporter) {
        reporter.info(&e.to_string());
    }

    if let Err(e) = commands::update::run(&cli, &reporter) {
        reporter.error(&e);
        std::process::exit(1);
    }
}
