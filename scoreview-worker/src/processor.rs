use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};

use scoreview::{Record, SortKey, SortOrder, sort_records};
use tracing::{debug, info};

use crate::{Command, Outcome, RecordSource, TaskError, validate};

/// Executes `load` and `sort` commands against the one dataset it owns.
///
/// Two states: `Empty` (`dataset` is `None`, the initial state) and
/// `Loaded`. `load` is valid in either state and replaces the dataset
/// wholesale; `sort` requires `Loaded` and never changes the stored order.
/// A failed `load` keeps the previously loaded dataset, so the viewer can
/// recover by re-sorting or retrying.
pub struct TaskProcessor<S> {
    source: S,
    dataset: Option<Vec<Record>>,
}

impl<S: RecordSource> TaskProcessor<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            dataset: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.is_some()
    }

    /// Executes one command to completion.
    ///
    /// Failures are converted to data here; nothing worker-side escapes as
    /// a panic across the message boundary.
    pub fn execute(&mut self, command: Command) -> Outcome {
        let request_id = command.request_id();
        let result = match command {
            Command::Load {
                url,
                sort_key,
                order,
                ..
            } => self.load(&url, sort_key, order),
            Command::Sort {
                sort_key, order, ..
            } => self.sort(sort_key, order),
        };
        match result {
            Ok(data) => Outcome::Ready { request_id, data },
            Err(e) => Outcome::Failed {
                request_id,
                message: e.to_string(),
            },
        }
    }

    fn load(
        &mut self,
        url: &str,
        sort_key: SortKey,
        order: SortOrder,
    ) -> Result<Vec<Record>, TaskError> {
        let raw = self.source.fetch(url)?;
        let validated = validate(&raw)?;
        info!(
            records = validated.records.len(),
            dropped = validated.dropped,
            "dataset loaded"
        );
        let sorted = sort_records(&validated.records, sort_key, order);
        self.dataset = Some(validated.records);
        Ok(sorted)
    }

    fn sort(&self, sort_key: SortKey, order: SortOrder) -> Result<Vec<Record>, TaskError> {
        let dataset = self.dataset.as_ref().ok_or(TaskError::NotLoaded)?;
        Ok(sort_records(dataset, sort_key, order))
    }
}

/// The worker loop: one command fully processed at a time.
///
/// Commands received while one is executing simply queue in the channel.
/// Exits when the command channel closes (all senders dropped); send errors
/// are ignored because a departed foreground has no use for the outcome.
pub fn run<S: RecordSource>(
    mut processor: TaskProcessor<S>,
    commands: Receiver<Command>,
    outcomes: Sender<Outcome>,
) {
    while let Ok(command) = commands.recv() {
        debug!(request_id = command.request_id(), "executing command");
        let outcome = processor.execute(command);
        let _ = outcomes.send(outcome);
    }
    debug!("command channel closed, worker exiting");
}

/// Spawns the worker loop on a dedicated thread and returns its channel
/// ends, ready to hand to [`crate::RequestBroker::new`].
pub fn spawn<S: RecordSource>(
    source: S,
) -> std::io::Result<(Sender<Command>, Receiver<Outcome>, JoinHandle<()>)> {
    let (command_tx, command_rx) = channel();
    let (outcome_tx, outcome_rx) = channel();
    let handle = thread::Builder::new()
        .name("scoreview-worker".into())
        .spawn(move || run(TaskProcessor::new(source), command_rx, outcome_tx))?;
    Ok((command_tx, outcome_rx, handle))
}
