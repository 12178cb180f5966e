//! Bounded usage ratios for gauges.

use serde::{Deserialize, Serialize};

/// A usage ratio in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsageRatio(f64);

impl UsageRatio {
    /// An empty gauge.
    pub const EMPTY: UsageRatio = UsageRatio(0.0);
    /// A full gauge.
    pub const FULL: UsageRatio = UsageRatio(1.0);

    /// The ratio as a fraction in `[0, 1]`.
    pub fn value(self) -> f64 {
        self.0
    }

    /// The ratio as a percentage in `[0, 100]`.
    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }
}

/// Ratio of `current` to `max`, clamped into `[0, 1]`.
///
/// A non-positive (or NaN) `max` yields an empty gauge rather than a full one.
pub fn ratio(current: f64, max: f64) -> UsageRatio {
    if max.is_nan() || max <= 0.0 {
        return UsageRatio::EMPTY;
    }
    let r = current / max;
    if r.is_nan() {
        return UsageRatio::EMPTY;
    }
    UsageRatio(r.clamp(0.0, 1.0))
}
