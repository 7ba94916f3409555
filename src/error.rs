//! Error types for extraction and the walk stage.

use thiserror::Error;

/// Why extracting one archive failed. Scoped to that archive: the pipeline
/// carries it inside an [`ExtractOutcome`](crate::ExtractOutcome) and other
/// workers keep going.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// An entry's stored name would resolve outside the destination root
    /// (absolute path or `..` escape). Extraction of the archive stops here;
    /// entries already written stay on disk.
    #[error("illegal entry path: {0}")]
    IllegalEntryPath(String),

    /// The archive could not be opened or an entry could not be decoded.
    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),

    /// Filesystem failure while creating directories or writing entry data.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Terminal outcome of the walk stage, published once on the buffered error
/// slot after the path stream closes.
#[derive(Debug, Error)]
pub enum WalkError {
    /// Filesystem access failed during traversal. The walk is not
    /// fault-tolerant: the first such error aborts the whole walk.
    #[error("walk failed: {0}")]
    Traversal(#[from] walkdir::Error),

    /// The cancellation signal fired while a path was waiting to be accepted
    /// downstream. Internal control flow; swallowed by the orchestrator when a
    /// primary outcome already exists.
    #[error("walk canceled")]
    Canceled,
}
