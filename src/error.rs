//! Error types for the presentation model.

use thiserror::Error;

/// Errors raised when a magnitude cannot be turned into a size label.
///
/// Telemetry counters and rates are non-negative by construction, so any of
/// these indicates a bug upstream of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FormatError {
    /// The magnitude was below zero.
    #[error("cannot format negative magnitude {0}")]
    Negative(f64),

    /// The magnitude was NaN or infinite.
    #[error("cannot format non-finite magnitude {0}")]
    NonFinite(f64),
}

/// Errors raised when building a [`UnitTable`](crate::data::UnitTable).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitTableError {
    /// A unit table needs at least one label.
    #[error("unit table must contain at least one label")]
    Empty,
}

/// A formatting failure, tagged with the entity whose metrics produced it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PresentError {
    /// A metric of a container could not be formatted.
    #[error("container {id} ({hostname}): {field}: {source}")]
    Container {
        id: i64,
        hostname: String,
        field: &'static str,
        #[source]
        source: FormatError,
    },

    /// A metric of a node could not be formatted.
    #[error("node {name}: {field}: {source}")]
    Node {
        name: String,
        field: &'static str,
        #[source]
        source: FormatError,
    },
}
