//! CLI: sweep a directory for zip content and extract every match.

use anyhow::Result;
use clap::Parser;
use log::debug;
use std::path::PathBuf;

use crate::sniff::ContentTag;
use crate::sweep_dir;
use crate::types::Opts;
use crate::utils::setup_logging;

struct DefaultArgs;

impl DefaultArgs {
    pub const DIR: &'static str = ".";
    pub const DEST: &'static str = "out";
}

/// Concurrent archive sweeper: walks DIR, detects zip files by their content
/// (extension is ignored), extracts each one into DEST.
#[derive(Clone, Parser)]
#[command(name = "zipsweep")]
#[command(about = "Sweep a directory for zip archives and extract them.")]
pub struct Cli {
    /// Directory to sweep. Default: current directory.
    #[arg(value_name = "DIR", default_value = DefaultArgs::DIR)]
    pub dir: PathBuf,

    /// Destination directory for extracted entries. Created if absent.
    #[arg(long, short, default_value = DefaultArgs::DEST)]
    pub dest: PathBuf,

    /// Worker thread count. Default: twice the logical CPU count.
    #[arg(long, short = 'j')]
    pub workers: Option<usize>,

    /// Verbose output.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

fn setup_opts(cli: &Cli) -> Opts {
    setup_logging(cli.verbose);
    Opts {
        workers: cli.workers,
        target: ContentTag::Zip,
        verbose: cli.verbose,
    }
}

/// Run one sweep from parsed arguments.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let opts = setup_opts(cli);
    debug!(
        "Sweeping {} into {} with {} workers",
        cli.dir.display(),
        cli.dest.display(),
        opts.worker_count()
    );
    sweep_dir(&cli.dir, &cli.dest, &opts)
}
