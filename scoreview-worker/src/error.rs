use thiserror::Error;

/// Worker-side failures.
///
/// These never cross the worker boundary as panics: the task processor
/// converts every one of them into an [`crate::Outcome::Failed`] carrying
/// the display message.
#[derive(Debug, Error)]
pub enum TaskError {
    /// The source file fetch returned a non-success status.
    #[error("fetch failed with status {status}")]
    FetchFailed { status: u16 },

    /// The fetch failed before any status was available, or a wire message
    /// could not be decoded at all.
    #[error("transport error: {0}")]
    Transport(String),

    /// The decoded payload is not an array at the top level. Row-level
    /// shape failures are not errors; those rows are dropped silently.
    #[error("malformed payload: expected an array of records")]
    MalformedPayload,

    /// A `sort` command arrived before any successful `load`.
    #[error("no dataset loaded")]
    NotLoaded,

    /// A wire message carried a command tag outside the recognized set.
    #[error("unknown command: {tag}")]
    UnknownCommand { tag: String },
}

/// Foreground-side failure of a single request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The worker reported a failed outcome; carries its message.
    #[error("{0}")]
    Failed(String),

    /// The worker context disappeared before answering.
    #[error("worker disconnected")]
    WorkerGone,
}
