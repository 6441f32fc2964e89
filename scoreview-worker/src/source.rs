use serde_json::Value;

use crate::TaskError;

/// The external fetch collaborator.
///
/// The task processor is generic over this seam so tests (and embedders
/// with their own transport) can supply an in-memory source.
pub trait RecordSource: Send + 'static {
    /// Fetches and decodes the source file at `url`.
    fn fetch(&self, url: &str) -> Result<Value, TaskError>;
}

/// A record source backed by a blocking HTTP client.
///
/// The client runs on the worker thread, which processes one command at a
/// time anyway, so a blocking fetch is the natural fit.
#[derive(Debug)]
pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new() -> Result<Self, TaskError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("scoreview/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TaskError::Transport(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wraps a preconfigured client (e.g. with custom timeouts or proxies).
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl RecordSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<Value, TaskError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| TaskError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TaskError::FetchFailed {
                status: status.as_u16(),
            });
        }

        // An unparseable body cannot produce a top-level array, so it is
        // the same fatal condition as a non-array payload.
        response
            .json::<Value>()
            .map_err(|_| TaskError::MalformedPayload)
    }
}
