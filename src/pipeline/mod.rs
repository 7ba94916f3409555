//! Pipeline stages: cancellation, channels, walk, worker pool, orchestrator.

pub mod cancel;
pub mod context;
pub mod orchestrator;
pub mod walk;
pub mod workers;

pub use cancel::{CancelGuard, CancelToken, cancel_pair};
pub use context::{PipelineChannels, PipelineHandles, create_pipeline_channels};
pub use orchestrator::{run_sweep, run_with_op, shutdown_pipeline, spawn_pipeline};
pub use walk::spawn_walk_thread;
pub use workers::{ItemOp, spawn_extract_workers};
