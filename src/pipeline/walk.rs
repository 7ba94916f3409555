//! Walk stage: serial depth-first traversal with content filtering.

use crossbeam_channel::{Sender, select};
use log::debug;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};
use walkdir::WalkDir;

use crate::error::WalkError;
use crate::sniff::{self, ContentTag};

use super::cancel::CancelToken;

/// Spawn the walk thread. It closes the path stream exactly once (by dropping
/// `path_tx`) and then publishes exactly one terminal error value, possibly
/// `None`, on the buffered `walk_err_tx` slot.
pub fn spawn_walk_thread(
    root: PathBuf,
    path_tx: Sender<PathBuf>,
    walk_err_tx: Sender<Option<WalkError>>,
    token: CancelToken,
    target: ContentTag,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let err = run_walk_loop(&root, &path_tx, &token, target).err();
        // Close the stream before publishing the terminal error; the slot is
        // buffered so this send never blocks.
        drop(path_tx);
        let _ = walk_err_tx.send(err);
    })
}

/// Depth-first walk under `root`, kept single-threaded by design.
///
/// Regular files whose sniffed tag equals `target` are published on `path_tx`;
/// directories, symlinks, and non-matching files are skipped silently. The
/// first traversal error aborts the whole walk. Every send is raced against
/// the cancel token so the walker never blocks on a stream nobody drains; a
/// lost race aborts with [`WalkError::Canceled`].
fn run_walk_loop(
    root: &Path,
    path_tx: &Sender<PathBuf>,
    token: &CancelToken,
    target: ContentTag,
) -> Result<(), WalkError> {
    for dirent in WalkDir::new(root) {
        let dirent = dirent?;
        if !dirent.file_type().is_file() {
            continue;
        }
        let path = dirent.into_path();
        let tag = sniff::classify(&path);
        if tag != target {
            debug!("walk: skip {} ({})", path.display(), tag);
            continue;
        }
        select! {
            send(path_tx, path) -> sent => {
                // Receivers only vanish after cancellation has fired.
                if sent.is_err() {
                    return Err(WalkError::Canceled);
                }
            }
            recv(token.rx) -> _ => return Err(WalkError::Canceled),
        }
    }
    Ok(())
}
