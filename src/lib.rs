//! # eupnea
//!
//! The presentation model behind an infrastructure-monitoring dashboard of
//! hosts ("nodes") and the containers they run.
//!
//! Raw telemetry records go in; plain view data comes out: human-readable
//! sizes and bit rates, a visual category for each container's lifecycle
//! status, and clamped usage ratios for gauges, arranged as a node →
//! container tree in the order telemetry listed them. Fetching telemetry,
//! scheduling refreshes and drawing the result are left to the caller.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  telemetry aggregator (external)                             │
//! └──────────────┬───────────────────────────────────────────────┘
//!                │ Snapshot { data: [NodeRecord { containers }] }
//!                ▼
//! ┌─────────┐  ┌───────────┐  ┌──────────────────────────────────┐
//! │ source  │─▶│ dashboard │─▶│ data                             │
//! │ (input) │  │  (state)  │  │ units · status · usage · rates   │
//! └─────────┘  └─────┬─────┘  │ container · node                 │
//!                    │        └──────────────────────────────────┘
//!                    ▼
//!        DashboardPresentation ──▶ renderer (external)
//! ```
//!
//! - **[`data`]**: The pure presentation model
//! - **[`source`]**: Snapshot wire types and the [`DataSource`] trait, with
//!   file and channel implementations
//! - **[`dashboard`]**: Holds a source and the latest presentation
//! - **[`config`]**: Unit tables and rate settings from file and environment
//! - **[`error`]**: Typed formatting errors
//!
//! ## Usage
//!
//! ```
//! use eupnea::data::{present_snapshot, Units, VisualCategory};
//! use eupnea::{ContainerRecord, NodeRecord, Snapshot};
//!
//! let snapshot = Snapshot::new(vec![NodeRecord {
//!     name: "pve1".to_string(),
//!     cpu: 0.42,
//!     storage_type: "ssd".to_string(),
//!     storage_used: 5 << 30,
//!     storage_total: 10 << 30,
//!     containers: vec![ContainerRecord {
//!         id: 100,
//!         hostname: "web".to_string(),
//!         status: "running".into(),
//!         netin_rate: 2.0 * 1024.0 * 1024.0,
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! }]);
//!
//! let view = present_snapshot(&snapshot, &Units::default()).unwrap();
//! let node = &view.nodes[0];
//! assert_eq!(node.cpu.value(), 0.42);
//! assert_eq!(node.storage.usage.value(), 0.5);
//! assert_eq!(node.containers[0].network_in, "2.00 MBit/s");
//! assert_eq!(node.containers[0].category, VisualCategory::Healthy);
//! ```
//!
//! ### With a channel source
//!
//! ```
//! use eupnea::{ChannelSource, Dashboard, DashboardConfig, Snapshot};
//!
//! let (tx, source) = ChannelSource::create("aggregator");
//! let mut dashboard = Dashboard::new(Box::new(source), DashboardConfig::default());
//!
//! tx.send(Snapshot::default()).unwrap();
//! assert!(dashboard.reload().unwrap());
//! ```

pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod source;

pub use config::DashboardConfig;
pub use dashboard::Dashboard;
pub use data::{
    ContainerPresentation, DashboardPresentation, LifecycleStatus, NodePresentation, UnitTable,
    Units, UsageRatio, VisualCategory,
};
pub use error::{FormatError, PresentError, UnitTableError};
pub use source::{ChannelSource, ContainerRecord, DataSource, FileSource, NodeRecord, Snapshot};
