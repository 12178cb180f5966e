//! Wire types for dashboard snapshots.
//!
//! These match the JSON payload pushed by the telemetry aggregator on every
//! refresh tick: `{"data": [node, ...]}`. Fields the aggregator may omit
//! default to zero so partial records still render.

use serde::{Deserialize, Deserializer, Serialize};

use crate::data::LifecycleStatus;

/// One refresh tick worth of node records, in display order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "data", default)]
    pub nodes: Vec<NodeRecord>,
}

impl Snapshot {
    pub fn new(nodes: Vec<NodeRecord>) -> Self {
        Self { nodes }
    }

    /// Check if the snapshot has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes in the snapshot.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of containers across all nodes.
    pub fn container_count(&self) -> usize {
        self.nodes.iter().map(|n| n.containers.len()).sum()
    }
}

/// Metrics for a single host.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeRecord {
    /// Node name, unique within a snapshot.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// CPU usage as a fraction of all cores (0..1).
    pub cpu: f64,
    pub memory_used: u64,
    pub memory_total: u64,
    /// Legacy disk figure. Carried for compatibility, never displayed.
    pub disk: u64,
    /// Storage kind label, e.g. "ssd" or "hdd".
    #[serde(deserialize_with = "null_as_default")]
    pub storage_type: String,
    pub storage_used: u64,
    pub storage_total: u64,
    /// Hosted containers in display order.
    pub containers: Vec<ContainerRecord>,
}

/// Metrics for a single container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerRecord {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub hostname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: LifecycleStatus,
    /// CPU usage as a fraction (0..1).
    pub cpu: f64,
    pub memory_used: u64,
    pub memory_total: u64,
    /// Cumulative bytes received.
    pub netin: u64,
    /// Cumulative bytes sent.
    pub netout: u64,
    /// Receive throughput in bits per second.
    pub netin_rate: f64,
    /// Send throughput in bits per second.
    pub netout_rate: f64,
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
