//! Background worker, request broker, and resource cache for `scoreview`.
//!
//! The `scoreview` crate is UI-agnostic and focuses on the pure sorting and
//! windowing math. This crate provides the coordination layer a viewer
//! needs around it:
//!
//! - A typed request/response protocol (`Command`/`Outcome`) correlated by
//!   monotonically increasing request ids, with JSON encoding matching the
//!   worker message wire format.
//! - A task processor that exclusively owns the loaded dataset and executes
//!   `load`/`sort` commands one at a time on a background thread.
//! - A request broker that hands out independently settling replies for
//!   overlapping requests, resolving them by id regardless of arrival order.
//! - A resource cache that turns an in-flight reply into a synchronous
//!   `read()` with pending/ready/failed states, plus a latest-wins slot so
//!   a late response to a superseded request never wins the visible state.
//!
//! The two sides communicate only by message passing; the foreground never
//! touches the dataset and only ever sees copies. There is no cancellation
//! and no timeout: a request whose worker disappears mid-flight fails with
//! [`RequestError::WorkerGone`], while a worker that merely never answers
//! leaves its resource pending indefinitely.
#![forbid(unsafe_code)]

mod broker;
mod error;
mod processor;
mod protocol;
mod resource;
mod source;
mod validate;


pub use broker::{PendingReply, RequestBroker};
pub use error::{RequestError, TaskError};
pub use processor::{TaskProcessor, run, spawn};
pub use protocol::{
    Command, Outcome, RequestId, decode_command, decode_outcome, encode_command, encode_outcome,
};
pub use resource::{Resource, ResourceSlot, ResourceState};
pub use source::{HttpSource, RecordSource};
pub use validate::{Validated, validate};
