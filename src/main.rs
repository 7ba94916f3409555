//! Zipsweep CLI: sweep a directory for zip content and extract every match.

use anyhow::Result;
use clap::Parser;
use std::time::Instant;
use zipsweep::cli::{Cli, handle_run};

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
