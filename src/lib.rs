//! Zipsweep: find archives by content, extract them concurrently.
//!
//! Walks a directory tree, sniffs the first 512 bytes of every regular file to
//! spot zip content regardless of extension, and feeds the matches through a
//! bounded pool of extraction workers. The run stops on the first error from
//! any stage, and every spawned thread is joined before [`sweep_dir`] returns.

pub mod cli;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod sniff;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use error::{ExtractError, WalkError};
pub use sniff::{ContentTag, classify, detect_tag};
pub use types::{ExtractOutcome, Opts};

use log::debug;
use std::path::Path;

/// Result alias used by public zipsweep API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single entry point: sweep `root` for files whose content matches
/// `opts.target` and extract each one under `dest`.
///
/// Returns the first error observed from any stage (a traversal failure, an
/// illegal entry path, an extraction I/O failure), or `Ok(())` when every
/// matching archive extracted cleanly. Later errors are discarded; the run is
/// cancelled as soon as the first one is seen, and no walker or worker thread
/// outlives the call.
pub fn sweep_dir(root: &Path, dest: &Path, opts: &Opts) -> Result<()> {
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_string().to_uppercase(),
        opts
    );
    pipeline::run_sweep(root, dest, opts)
}
