//! Node presentation and the node/container tree.

use serde::{Deserialize, Serialize};

use super::container::ContainerPresentation;
use super::status::VisualCategory;
use super::units::{format, Units};
use super::usage::{ratio, UsageRatio};
use crate::error::{FormatError, PresentError};
use crate::source::{NodeRecord, Snapshot};

/// Storage gauge for a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoragePresentation {
    /// Storage kind, passed through from telemetry.
    pub label: String,
    pub usage: UsageRatio,
    pub used: String,
    pub total: String,
}

/// Everything a renderer needs to draw one node and its containers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePresentation {
    pub name: String,
    pub cpu: UsageRatio,
    pub storage: StoragePresentation,
    /// Containers in the order telemetry listed them.
    pub containers: Vec<ContainerPresentation>,
}

impl NodePresentation {
    /// Project a node record and each of its containers.
    ///
    /// Container order is kept as-is; duplicate or missing ids pass through.
    pub fn present(record: &NodeRecord, units: &Units) -> Result<Self, PresentError> {
        let fail = |field: &'static str| {
            move |source: FormatError| PresentError::Node {
                name: record.name.clone(),
                field,
                source,
            }
        };

        let storage = StoragePresentation {
            label: record.storage_type.clone(),
            usage: ratio(record.storage_used as f64, record.storage_total as f64),
            used: format(record.storage_used as f64, &units.storage)
                .map_err(fail("storage_used"))?,
            total: format(record.storage_total as f64, &units.storage)
                .map_err(fail("storage_total"))?,
        };

        let containers = record
            .containers
            .iter()
            .map(|c| ContainerPresentation::present(c, units))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: record.name.clone(),
            cpu: ratio(record.cpu, 1.0),
            storage,
            containers,
        })
    }

    /// Count of containers in each visual category, as (healthy, unhealthy).
    pub fn category_counts(&self) -> (usize, usize) {
        let healthy = self
            .containers
            .iter()
            .filter(|c| c.category == VisualCategory::Healthy)
            .count();
        (healthy, self.containers.len() - healthy)
    }
}

/// Totals across a whole dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub nodes: usize,
    pub containers: usize,
    pub healthy: usize,
    pub unhealthy: usize,
}

/// The presented node/container tree for one snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardPresentation {
    pub summary: DashboardSummary,
    /// Nodes in snapshot order.
    pub nodes: Vec<NodePresentation>,
}

impl DashboardPresentation {
    /// Look up a node by name.
    pub fn node(&self, name: &str) -> Option<&NodePresentation> {
        self.nodes.iter().find(|n| n.name == name)
    }
}

/// Present every node of a snapshot, keeping snapshot order.
pub fn present_snapshot(
    snapshot: &Snapshot,
    units: &Units,
) -> Result<DashboardPresentation, PresentError> {
    let nodes = snapshot
        .nodes
        .iter()
        .map(|n| NodePresentation::present(n, units))
        .collect::<Result<Vec<_>, _>>()?;

    let mut summary = DashboardSummary {
        nodes: nodes.len(),
        ..Default::default()
    };
    for node in &nodes {
        let (healthy, unhealthy) = node.category_counts();
        summary.containers += node.containers.len();
        summary.healthy += healthy;
        summary.unhealthy += unhealthy;
    }

    Ok(DashboardPresentation { summary, nodes })
}
