use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, Sender, SyncSender, TryRecvError, sync_channel};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;

use scoreview::{Record, SortKey, SortOrder};
use tracing::debug;

use crate::{Command, Outcome, RecordSource, RequestError, RequestId};

type Reply = Result<Vec<Record>, RequestError>;
type PendingMap = Arc<Mutex<HashMap<RequestId, SyncSender<Reply>>>>;

/// Routes numbered requests to the worker and outcomes back to callers.
///
/// Each `load`/`sort` call allocates the next request id, registers a
/// one-shot reply entry *before* dispatching, and returns a
/// [`PendingReply`] that settles independently of every other request.
/// Outcomes are matched purely by id, so out-of-order arrival is fine; an
/// outcome for an unknown or already-settled id is dropped with no
/// observable effect. The broker holds no dataset — it is pure routing.
pub struct RequestBroker {
    commands: Sender<Command>,
    next_id: AtomicU64,
    pending: PendingMap,
}

impl RequestBroker {
    /// Wires a broker to an already-running worker's channel ends.
    ///
    /// A router thread owns `outcomes`; it exits (failing any still-pending
    /// requests with [`RequestError::WorkerGone`]) when the worker drops
    /// its sender.
    pub fn new(commands: Sender<Command>, outcomes: Receiver<Outcome>) -> Self {
        let pending: PendingMap = Arc::new(Mutex::new(HashMap::new()));
        let router_map = Arc::clone(&pending);
        std::thread::spawn(move || route_outcomes(outcomes, &router_map));
        Self {
            commands,
            next_id: AtomicU64::new(1),
            pending,
        }
    }

    /// Spawns a fresh worker over `source` and a broker wired to it.
    pub fn spawn<S: RecordSource>(source: S) -> std::io::Result<(Self, JoinHandle<()>)> {
        let (command_tx, outcome_rx, handle) = crate::spawn(source)?;
        Ok((Self::new(command_tx, outcome_rx), handle))
    }

    /// Requests a fresh dataset load followed by an initial sort.
    pub fn load(
        &self,
        url: impl Into<String>,
        sort_key: SortKey,
        order: SortOrder,
    ) -> PendingReply {
        let url = url.into();
        self.dispatch(move |request_id| Command::Load {
            request_id,
            url,
            sort_key,
            order,
        })
    }

    /// Requests a reordering of the currently loaded dataset.
    pub fn sort(&self, sort_key: SortKey, order: SortOrder) -> PendingReply {
        self.dispatch(move |request_id| Command::Sort {
            request_id,
            sort_key,
            order,
        })
    }

    /// The id of the most recently issued request, or 0 if none yet.
    ///
    /// Ids are monotone, so a reply with a smaller id than this has been
    /// superseded; see [`crate::ResourceSlot`].
    pub fn latest_request_id(&self) -> RequestId {
        self.next_id.load(Ordering::Relaxed) - 1
    }

    fn dispatch(&self, make: impl FnOnce(RequestId) -> Command) -> PendingReply {
        let request_id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (reply_tx, reply_rx) = sync_channel(1);

        // Register before dispatching so the outcome can never race past
        // its pending entry.
        lock(&self.pending).insert(request_id, reply_tx);
        debug!(request_id, "dispatching command");

        if self.commands.send(make(request_id)).is_err() {
            if let Some(reply_tx) = lock(&self.pending).remove(&request_id) {
                let _ = reply_tx.send(Err(RequestError::WorkerGone));
            }
        }

        PendingReply {
            request_id,
            reply: reply_rx,
        }
    }
}

fn route_outcomes(outcomes: Receiver<Outcome>, pending: &PendingMap) {
    while let Ok(outcome) = outcomes.recv() {
        let request_id = outcome.request_id();
        let Some(reply_tx) = lock(pending).remove(&request_id) else {
            debug!(request_id, "dropping outcome for unknown request");
            continue;
        };
        let reply = match outcome {
            Outcome::Ready { data, .. } => Ok(data),
            Outcome::Failed { message, .. } => Err(RequestError::Failed(message)),
        };
        // The caller may have dropped its reply; that's fine.
        let _ = reply_tx.send(reply);
    }

    // Worker gone: fail everything still in flight.
    for (request_id, reply_tx) in lock(pending).drain() {
        debug!(request_id, "failing request after worker disconnect");
        let _ = reply_tx.send(Err(RequestError::WorkerGone));
    }
}

fn lock(pending: &PendingMap) -> std::sync::MutexGuard<'_, HashMap<RequestId, SyncSender<Reply>>> {
    pending.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One request's not-yet-settled reply.
///
/// Settles exactly once; consumed by [`crate::Resource`], which adds the
/// settled-value cache on top.
#[derive(Debug)]
pub struct PendingReply {
    request_id: RequestId,
    reply: Receiver<Reply>,
}

impl PendingReply {
    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    /// Returns the reply if it has settled, without blocking.
    pub fn poll(&self) -> Option<Reply> {
        match self.reply.try_recv() {
            Ok(reply) => Some(reply),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(RequestError::WorkerGone)),
        }
    }

    /// Blocks until the reply settles.
    ///
    /// There is no timeout at the protocol level: a worker that never
    /// answers (as opposed to one that exits) blocks forever.
    pub fn wait(self) -> Reply {
        self.reply.recv().unwrap_or(Err(RequestError::WorkerGone))
    }
}
