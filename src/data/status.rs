//! Lifecycle status classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle status reported for a container.
///
/// Only `"running"` is recognized; every other token is kept verbatim so it
/// can still be shown and re-serialized unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LifecycleStatus {
    Running,
    Unrecognized(String),
}

impl LifecycleStatus {
    /// The status token as reported by telemetry.
    pub fn as_str(&self) -> &str {
        match self {
            LifecycleStatus::Running => "running",
            LifecycleStatus::Unrecognized(s) => s,
        }
    }
}

impl Default for LifecycleStatus {
    fn default() -> Self {
        LifecycleStatus::Unrecognized(String::new())
    }
}

impl From<&str> for LifecycleStatus {
    fn from(s: &str) -> Self {
        match s {
            "running" => LifecycleStatus::Running,
            other => LifecycleStatus::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for LifecycleStatus {
    fn from(s: String) -> Self {
        if s == "running" {
            LifecycleStatus::Running
        } else {
            LifecycleStatus::Unrecognized(s)
        }
    }
}

impl From<LifecycleStatus> for String {
    fn from(status: LifecycleStatus) -> Self {
        match status {
            LifecycleStatus::Running => "running".to_string(),
            LifecycleStatus::Unrecognized(s) => s,
        }
    }
}

impl fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual state a renderer should use for a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VisualCategory {
    Healthy,
    Unhealthy,
}

/// Classify a lifecycle status. Anything but `Running` is unhealthy.
pub fn classify(status: &LifecycleStatus) -> VisualCategory {
    match status {
        LifecycleStatus::Running => VisualCategory::Healthy,
        LifecycleStatus::Unrecognized(_) => VisualCategory::Unhealthy,
    }
}
