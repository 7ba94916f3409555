//! Channels and handles shared by the pipeline stages.

use crossbeam_channel::{Receiver, Sender, bounded};
use std::path::PathBuf;
use std::thread::JoinHandle;

use crate::error::WalkError;
use crate::types::ExtractOutcome;

/// Channel set for one run. The walk thread takes `path_tx` and `walk_err_tx`;
/// workers take `path_rx` and clones of `result_tx`; the orchestrator keeps
/// the receivers.
pub struct PipelineChannels {
    pub path_tx: Sender<PathBuf>,
    pub path_rx: Receiver<PathBuf>,
    pub result_tx: Sender<ExtractOutcome>,
    pub result_rx: Receiver<ExtractOutcome>,
    pub walk_err_tx: Sender<Option<WalkError>>,
    pub walk_err_rx: Receiver<Option<WalkError>>,
}

/// Build the channels for one run.
///
/// Path and result channels are rendezvous (capacity 0): a hand-off only
/// happens when the other side is ready, which is what makes racing a send
/// against the cancel token meaningful. The walk error slot has capacity 1 so
/// the walker can always publish its terminal error and exit without a reader.
pub fn create_pipeline_channels() -> PipelineChannels {
    let (path_tx, path_rx) = bounded::<PathBuf>(0);
    let (result_tx, result_rx) = bounded::<ExtractOutcome>(0);
    let (walk_err_tx, walk_err_rx) = bounded::<Option<WalkError>>(1);

    PipelineChannels {
        path_tx,
        path_rx,
        result_tx,
        result_rx,
        walk_err_tx,
        walk_err_rx,
    }
}

/// Handles returned by [`spawn_pipeline`](super::spawn_pipeline): drain
/// `result_rx`, then join both stages and read the walk error slot.
pub struct PipelineHandles {
    pub result_rx: Receiver<ExtractOutcome>,
    pub walk_err_rx: Receiver<Option<WalkError>>,
    pub walk_handle: JoinHandle<()>,
    pub worker_handles: Vec<JoinHandle<()>>,
}
