//! KeepNote terminal host.
//!
//! # Responsibility
//! - Resolve logging config from flags/env and start core logging.
//! - Run one in-memory note session over stdin or a script file.

mod args;
mod render;
mod session;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use keepnote_core::{init_logging, LoggingConfig};
use log::info;
use session::{run_session, Session};
use std::fs::File;
use std::io::{self, BufReader};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = LoggingConfig::resolve(cli.log_level.as_deref(), cli.log_dir.as_deref());
    // Notes still work without a log file.
    if let Err(err) = init_logging(&config) {
        eprintln!("warning: logging disabled: {err}");
    }

    let mut session = Session::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script `{}`", path.display()))?;
            run_session(&mut session, BufReader::new(file), &mut out)?;
        }
        None => run_session(&mut session, io::stdin().lock(), &mut out)?,
    }

    info!(
        "event=session_end module=cli status=ok notes={} route={}",
        session.store().total_len(),
        session.navigator().current()
    );
    Ok(())
}
