use scoreview::Record;
use tracing::debug;

use crate::{PendingReply, RequestError, RequestId};

/// What a [`Resource::read`] observed.
#[derive(Debug, PartialEq)]
pub enum ResourceState<'a> {
    /// Not settled yet; try again after the rendering layer's next tick,
    /// or block on [`Resource::wait`].
    Pending,
    Ready(&'a [Record]),
    Failed(&'a RequestError),
}

/// A synchronous-looking read over one in-flight request.
///
/// Created once per logical operation (each sort change gets a *new*
/// resource rather than mutating the old one). `read` reports `Pending`
/// until the underlying reply settles, then returns the cached value or
/// error deterministically on every subsequent call; the request is never
/// re-issued. A resource never transitions back to pending.
#[derive(Debug)]
pub struct Resource {
    request_id: RequestId,
    reply: Option<PendingReply>,
    settled: Option<Result<Vec<Record>, RequestError>>,
}

impl Resource {
    pub fn new(reply: PendingReply) -> Self {
        Self {
            request_id: reply.request_id(),
            reply: Some(reply),
            settled: None,
        }
    }

    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    pub fn is_settled(&self) -> bool {
        self.settled.is_some()
    }

    /// Non-blocking read of the current state.
    pub fn read(&mut self) -> ResourceState<'_> {
        if self.settled.is_none() {
            let polled = self.reply.as_ref().and_then(PendingReply::poll);
            if let Some(result) = polled {
                self.settle(result);
            }
        }
        match &self.settled {
            None => ResourceState::Pending,
            Some(Ok(records)) => ResourceState::Ready(records),
            Some(Err(e)) => ResourceState::Failed(e),
        }
    }

    /// Blocks until settled, then reads like [`Resource::read`].
    pub fn wait(&mut self) -> Result<&[Record], &RequestError> {
        if self.settled.is_none() {
            let result = match self.reply.take() {
                Some(reply) => reply.wait(),
                // Unreachable by construction: `reply` is only taken when
                // `settled` gets filled.
                None => Err(RequestError::WorkerGone),
            };
            self.settle_consumed(result);
        }
        let settled = self.settled.get_or_insert(Err(RequestError::WorkerGone));
        match settled {
            Ok(records) => Ok(records.as_slice()),
            Err(e) => Err(&*e),
        }
    }

    fn settle(&mut self, result: Result<Vec<Record>, RequestError>) {
        self.reply = None;
        self.settle_consumed(result);
    }

    fn settle_consumed(&mut self, result: Result<Vec<Record>, RequestError>) {
        debug!(
            request_id = self.request_id,
            ok = result.is_ok(),
            "resource settled"
        );
        self.settled = Some(result);
    }
}

/// Holds the resource backing the visible state, newest request wins.
///
/// The protocol itself cannot mark a response as superseded: two quick
/// `sort` commands both answer eventually, and whichever settled last
/// would win the screen. Installing every new resource here closes that
/// race — the slot only accepts monotonically newer request ids, so the
/// last-*issued* request owns the visible state and a stale resource is
/// discarded before its late outcome can matter.
#[derive(Debug, Default)]
pub struct ResourceSlot {
    current: Option<Resource>,
}

impl ResourceSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `resource` unless something newer already occupies the
    /// slot. Returns whether it was installed.
    pub fn install(&mut self, resource: Resource) -> bool {
        if let Some(current) = &self.current {
            if resource.request_id() <= current.request_id() {
                debug!(
                    stale = resource.request_id(),
                    current = current.request_id(),
                    "ignoring stale resource"
                );
                return false;
            }
        }
        self.current = Some(resource);
        true
    }

    pub fn current(&self) -> Option<&Resource> {
        self.current.as_ref()
    }

    /// Reads through to the installed resource, if any.
    pub fn read(&mut self) -> Option<ResourceState<'_>> {
        self.current.as_mut().map(Resource::read)
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
