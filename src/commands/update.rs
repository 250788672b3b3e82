//! Update command implementation

use std::io::{self, Read};

use crate::cli::Cli;
use crate::clock::{Clock, SystemClock, fixed_clock_from_env};
use crate::error::{self, Result};
use crate::material::MaterialUpdater;
use crate::ui::Reporter;

/// Run the update: read the new body from stdin and apply it to `cli.file`
pub fn run(cli: &Cli, reporter: &Reporter) -> Result<()> {
    let new_body = read_body(io::stdin().lock())?;
    reporter.info(&format!("Read {} bytes of new content", new_body.len()));

    match fixed_clock_from_env()? {
        Some(clock) => {
            reporter.info(&format!("Using fixed clock: {}", clock.now_millis()));
            apply(cli, reporter, &new_body, clock)
        }
        None => apply(cli, reporter, &new_body, SystemClock),
    }
}

fn apply<K: Clock>(cli: &Cli, reporter: &Reporter, new_body: &str, clock: K) -> Result<()> {
    let updater = MaterialUpdater::new(clock)?;
    let outcome = updater.update(&cli.file, new_body, cli.dry_run)?;
    reporter.info(&format!("Resolved {}", outcome.path.display()));

    if outcome.written {
        reporter.info(&format!("Wrote {} bytes", outcome.document.len()));
        reporter.success(&cli.file);
    } else {
        print!("{}", outcome.document);
        reporter.dry_run(&cli.file);
    }

    Ok(())
}

/// Read the whole input stream as UTF-8
fn read_body<R: Read>(mut reader: R) -> Result<String> {
    let mut body = String::new();
    reader
        .read_to_string(&mut body)
        .map_err(|e| error::fs::stdin_failed(&e))?;
    Ok(body)
}
