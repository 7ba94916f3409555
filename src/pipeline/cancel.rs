//! One-shot, run-scoped cancellation signal.
//!
//! Built on a zero-capacity channel that nothing is ever sent on: dropping the
//! guard disconnects it, and a disconnected receiver is permanently ready, so
//! every cloned token observes the signal at once. Level-triggered by
//! construction: once fired it stays fired.

use crossbeam_channel::{Receiver, Sender, TryRecvError, bounded};

/// Witness type for the cancel channel. No value of it exists, so the only
/// event a token can ever see is the disconnect.
pub enum Never {}

/// Fires the cancellation signal when dropped.
///
/// Owned exclusively by the orchestrator; holding it as a plain local means
/// every exit path of the owning scope fires the signal exactly once.
pub struct CancelGuard {
    _tx: Sender<Never>,
}

/// Read-only view of the cancellation signal, cloned into every pipeline task.
/// Race sends against it with `select!`, or poll it with
/// [`is_canceled`](Self::is_canceled).
#[derive(Clone)]
pub struct CancelToken {
    pub(crate) rx: Receiver<Never>,
}

impl CancelToken {
    /// True once the guard has been dropped.
    pub fn is_canceled(&self) -> bool {
        matches!(self.rx.try_recv(), Err(TryRecvError::Disconnected))
    }
}

/// Create the guard/token pair for one pipeline run.
pub fn cancel_pair() -> (CancelGuard, CancelToken) {
    let (tx, rx) = bounded(0);
    (CancelGuard { _tx: tx }, CancelToken { rx })
}
