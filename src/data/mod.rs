//! The metrics presentation model.
//!
//! Everything here is a pure function of its inputs, except [`RateTracker`]
//! which remembers previous counter samples.
//!
//! ## Submodules
//!
//! - [`units`]: Byte and bit-rate formatting with configurable unit tables
//! - [`status`]: Lifecycle status classification ([`VisualCategory`])
//! - [`usage`]: Clamped usage ratios for gauges ([`UsageRatio`])
//! - [`container`]: Per-container presentation
//! - [`node`]: Per-node presentation and the whole node/container tree
//! - [`rates`]: Bit rates derived from cumulative network counters
//!
//! ## Data Flow
//!
//! ```text
//! Snapshot (raw records)
//!        │
//!        ├──▶ RateTracker::apply()   (optional, fills rate fields)
//!        ▼
//! present_snapshot()
//!        │
//!        └──▶ NodePresentation ──▶ ContainerPresentation
//!                 │                      │
//!                 └── ratio / format ────┴── classify / ratio / format
//! ```

pub mod container;
pub mod node;
pub mod rates;
pub mod status;
pub mod units;
pub mod usage;

pub use container::ContainerPresentation;
pub use node::{
    present_snapshot, DashboardPresentation, DashboardSummary, NodePresentation,
    StoragePresentation,
};
pub use rates::RateTracker;
pub use status::{classify, LifecycleStatus, VisualCategory};
pub use units::{format, UnitTable, Units};
pub use usage::{ratio, UsageRatio};
