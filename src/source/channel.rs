//! Channel-based data source.
//!
//! Receives snapshots via a tokio watch channel. The telemetry aggregator
//! holds the sender and pushes a snapshot on each refresh tick.

use tokio::sync::watch;
use tracing::debug;

use super::{DataSource, Snapshot};

/// A data source that receives snapshots via a channel.
///
/// # Example
///
/// ```
/// use eupnea::{ChannelSource, DataSource, Snapshot};
///
/// let (tx, mut source) = ChannelSource::create("aggregator");
/// tx.send(Snapshot::default()).unwrap();
/// assert!(source.poll().is_some());
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: watch::Receiver<Snapshot>,
    description: String,
    initial_returned: bool,
}

impl ChannelSource {
    /// Create a new channel source from the receiving end of a watch channel.
    pub fn new(receiver: watch::Receiver<Snapshot>, source_description: &str) -> Self {
        let description = format!("channel: {}", source_description);
        Self {
            receiver,
            description,
            initial_returned: false,
        }
    }

    /// Create a channel pair.
    ///
    /// Returns (sender, source); the sender goes to whatever produces snapshots.
    pub fn create(source_description: &str) -> (watch::Sender<Snapshot>, Self) {
        let (tx, rx) = watch::channel(Snapshot::default());
        let source = Self::new(rx, source_description);
        (tx, source)
    }
}

impl DataSource for ChannelSource {
    fn poll(&mut self) -> Option<Snapshot> {
        // Hand out the initial value on first poll
        if !self.initial_returned {
            self.initial_returned = true;
            self.receiver.mark_changed();
        }

        if self.receiver.has_changed().unwrap_or(false) {
            let snapshot = self.receiver.borrow_and_update().clone();
            debug!(source = %self.description, nodes = snapshot.len(), "received snapshot");
            Some(snapshot)
        } else {
            None
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        None
    }
}
