//! The worker message protocol.
//!
//! In-process, the broker and the worker exchange these types directly over
//! channels. The `encode_*`/`decode_*` helpers produce and consume the JSON
//! wire shape for deployments where the worker sits behind a real process
//! boundary:
//!
//! ```json
//! {"type":"load","requestId":1,"url":"...","sortKey":"time","order":"asc"}
//! {"type":"ready","requestId":1,"data":[["id","content",1.5]]}
//! {"type":"error","requestId":1,"message":"no dataset loaded"}
//! ```

use scoreview::{Record, SortKey, SortOrder};
use serde::{Deserialize, Serialize};

use crate::TaskError;

/// Correlates an [`Outcome`] with the [`Command`] that produced it.
///
/// Ids are allocated by the broker: monotonically increasing, starting at
/// 1, never reused for the broker's lifetime.
pub type RequestId = u64;

/// A tagged request sent to the task processor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Command {
    Load {
        #[serde(rename = "requestId")]
        request_id: RequestId,
        url: String,
        #[serde(rename = "sortKey")]
        sort_key: SortKey,
        order: SortOrder,
    },
    Sort {
        #[serde(rename = "requestId")]
        request_id: RequestId,
        #[serde(rename = "sortKey")]
        sort_key: SortKey,
        order: SortOrder,
    },
}

impl Command {
    pub fn request_id(&self) -> RequestId {
        match self {
            Self::Load { request_id, .. } | Self::Sort { request_id, .. } => *request_id,
        }
    }
}

/// A tagged response correlated to a [`Command`] by request id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Outcome {
    Ready {
        #[serde(rename = "requestId")]
        request_id: RequestId,
        data: Vec<Record>,
    },
    #[serde(rename = "error")]
    Failed {
        #[serde(rename = "requestId")]
        request_id: RequestId,
        message: String,
    },
}

impl Outcome {
    pub fn request_id(&self) -> RequestId {
        match self {
            Self::Ready { request_id, .. } | Self::Failed { request_id, .. } => *request_id,
        }
    }
}

pub fn encode_command(command: &Command) -> serde_json::Result<String> {
    serde_json::to_string(command)
}

pub fn encode_outcome(outcome: &Outcome) -> serde_json::Result<String> {
    serde_json::to_string(outcome)
}

/// Decodes a wire command.
///
/// A recognized envelope with an unrecognized `type` tag yields
/// [`TaskError::UnknownCommand`]; anything that cannot be decoded at all
/// yields [`TaskError::Transport`].
pub fn decode_command(text: &str) -> Result<Command, TaskError> {
    decode_tagged(text, &["load", "sort"])
}

/// Decodes a wire outcome. Same error contract as [`decode_command`].
pub fn decode_outcome(text: &str) -> Result<Outcome, TaskError> {
    decode_tagged(text, &["ready", "error"])
}

fn decode_tagged<T: serde::de::DeserializeOwned>(
    text: &str,
    known_tags: &[&str],
) -> Result<T, TaskError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| TaskError::Transport(e.to_string()))?;
    let tag = value
        .get("type")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| TaskError::UnknownCommand {
            tag: "<missing>".into(),
        })?;
    if !known_tags.contains(&tag) {
        return Err(TaskError::UnknownCommand { tag: tag.into() });
    }
    serde_json::from_value(value).map_err(|e| TaskError::Transport(e.to_string()))
}
