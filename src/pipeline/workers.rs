//! Worker pool stage: a fixed number of threads pulling paths off the walk
//! stream and publishing one outcome per path.

use crossbeam_channel::{Receiver, Sender, select};
use log::debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::error::ExtractError;
use crate::types::ExtractOutcome;

use super::cancel::CancelToken;

/// Per-item operation a worker runs for each path. The sweep binds this to
/// archive extraction; tests inject their own.
pub type ItemOp = dyn Fn(&Path) -> Result<(), ExtractError> + Send + Sync;

/// Single worker: pull paths until the stream closes, run the op, publish one
/// outcome per path. A failed op is reported and the worker moves on; whether
/// that failure ends the run is the orchestrator's call. Result sends race
/// the cancel token so a worker never blocks on a stream nobody drains.
fn worker_loop(
    path_rx: Receiver<PathBuf>,
    result_tx: Sender<ExtractOutcome>,
    token: CancelToken,
    op: Arc<ItemOp>,
) {
    while let Ok(source) = path_rx.recv() {
        let err = op(&source).err();
        if let Some(e) = &err {
            debug!("worker: {} failed: {}", source.display(), e);
        }
        let outcome = ExtractOutcome { source, err };
        select! {
            send(result_tx, outcome) -> sent => {
                if sent.is_err() {
                    return;
                }
            }
            recv(token.rx) -> _ => return,
        }
    }
}

/// Spawn `count` workers over clones of `path_rx` and `result_tx`.
///
/// The caller must drop its own `result_tx` right after this so the result
/// stream closes exactly when the last worker exits — each worker holds one
/// sender clone and releases it on exit, which is the join barrier expressed
/// through channel ownership.
pub fn spawn_extract_workers(
    path_rx: Receiver<PathBuf>,
    result_tx: &Sender<ExtractOutcome>,
    token: &CancelToken,
    op: Arc<ItemOp>,
    count: usize,
) -> Vec<JoinHandle<()>> {
    (0..count)
        .map(|_| {
            let path_rx = path_rx.clone();
            let result_tx = result_tx.clone();
            let token = token.clone();
            let op = Arc::clone(&op);
            thread::spawn(move || worker_loop(path_rx, result_tx, token, op))
        })
        .collect()
}
