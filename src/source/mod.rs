//! Data source abstraction for receiving dashboard snapshots.
//!
//! The dashboard never fetches telemetry itself. A source hands over
//! snapshots that an external aggregator already produced, either written
//! to a file or pushed through an in-memory channel.

mod channel;
mod file;
mod snapshot;

pub use channel::ChannelSource;
pub use file::FileSource;
pub use snapshot::{ContainerRecord, NodeRecord, Snapshot};

use std::fmt::Debug;

/// Trait for receiving snapshots from various sources.
///
/// # Example
///
/// ```
/// use eupnea::{DataSource, FileSource};
///
/// let mut source = FileSource::new("snapshot.json");
/// if let Some(snapshot) = source.poll() {
///     println!("Got {} nodes", snapshot.len());
/// }
/// ```
pub trait DataSource: Send + Debug {
    /// Take the latest snapshot if one arrived since the last call.
    ///
    /// Returns `None` when nothing new is available. Must not block.
    fn poll(&mut self) -> Option<Snapshot>;

    /// Returns a human-readable description of the source.
    fn description(&self) -> &str;

    /// The error from the last poll, if any.
    fn error(&self) -> Option<&str>;
}
