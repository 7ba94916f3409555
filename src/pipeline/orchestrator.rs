//! Orchestrator: wire walk → workers, first-error-wins, guaranteed teardown.

use anyhow::Result;
use log::debug;
use std::path::Path;
use std::sync::Arc;
use std::thread::JoinHandle;

use crate::error::WalkError;
use crate::extract;
use crate::types::Opts;

use super::cancel::{CancelToken, cancel_pair};
use super::context::{PipelineHandles, create_pipeline_channels};
use super::walk::spawn_walk_thread;
use super::workers::{ItemOp, spawn_extract_workers};

/// Spawn the walk thread and worker pool wired through fresh channels.
/// Caller drains `result_rx`, then joins the handles and reads the walk error
/// slot.
pub fn spawn_pipeline(
    root: &Path,
    token: &CancelToken,
    opts: &Opts,
    op: Arc<ItemOp>,
) -> PipelineHandles {
    let channels = create_pipeline_channels();

    let walk_handle = spawn_walk_thread(
        root.to_path_buf(),
        channels.path_tx,
        channels.walk_err_tx,
        token.clone(),
        opts.target,
    );

    let worker_handles = spawn_extract_workers(
        channels.path_rx,
        &channels.result_tx,
        token,
        op,
        opts.worker_count(),
    );

    // Dropping the last sender closes the result stream when workers exit.
    drop(channels.result_tx);

    PipelineHandles {
        result_rx: channels.result_rx,
        walk_err_rx: channels.walk_err_rx,
        walk_handle,
        worker_handles,
    }
}

/// Join the walk thread and every worker. After this returns no pipeline
/// thread is left running or blocked.
pub fn shutdown_pipeline(
    walk_handle: JoinHandle<()>,
    worker_handles: Vec<JoinHandle<()>>,
) -> Result<()> {
    walk_handle
        .join()
        .map_err(|_| anyhow::anyhow!("walk thread panicked"))?;
    for h in worker_handles {
        let _ = h.join();
    }
    Ok(())
}

/// Run the pipeline with an arbitrary per-item operation.
///
/// Drains the result stream until it closes or the first failed outcome
/// appears, then tears down: the cancel guard drops here on every exit path,
/// unblocking any pending send, and both stages are joined before the walk
/// error slot is read. The walker's error only becomes the outcome when no
/// worker error preempted it; a walk `Canceled` alongside a primary outcome
/// is internal control flow and is swallowed.
pub fn run_with_op(root: &Path, opts: &Opts, op: Arc<ItemOp>) -> Result<()> {
    let (guard, token) = cancel_pair();
    let handles = spawn_pipeline(root, &token, opts, op);

    let mut outcome: Option<anyhow::Error> = None;
    for r in handles.result_rx.iter() {
        match r.err {
            Some(err) => {
                outcome = Some(
                    anyhow::Error::new(err).context(format!("extract {}", r.source.display())),
                );
                break;
            }
            None => debug!("done: {}", r.source.display()),
        }
    }

    // Fire cancellation so blocked senders unwedge, then join everything.
    drop(guard);
    shutdown_pipeline(handles.walk_handle, handles.worker_handles)?;

    if outcome.is_none()
        && let Ok(Some(err)) = handles.walk_err_rx.recv()
        && !matches!(err, WalkError::Canceled)
    {
        outcome = Some(err.into());
    }

    match outcome {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Run the reference sweep: extract every matching archive under `root` into
/// `dest`, first error wins.
pub fn run_sweep(root: &Path, dest: &Path, opts: &Opts) -> Result<()> {
    let dest = dest.to_path_buf();
    let op: Arc<ItemOp> = Arc::new(move |src: &Path| extract::extract_archive(src, &dest));
    run_with_op(root, opts, op)
}
