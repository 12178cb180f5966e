//! Throughput derivation from cumulative network counters.

use std::collections::{HashMap, HashSet, VecDeque};
use std::time::Instant;

use tracing::debug;

use crate::source::Snapshot;

/// Number of samples kept per container when not configured.
pub const DEFAULT_WINDOW: usize = 5;

const BITS_PER_BYTE: f64 = 8.0;

#[derive(Debug, Clone, Copy)]
struct Sample {
    netin: u64,
    netout: u64,
    at: Instant,
}

/// Derives bit rates from byte counters over a sliding window of samples.
///
/// Each container is tracked under `"{node}-{container id}"`. The rate is
/// measured against the oldest sample still in the window, which smooths
/// out jitter in the refresh cadence.
#[derive(Debug, Clone)]
pub struct RateTracker {
    window: usize,
    samples: HashMap<String, VecDeque<Sample>>,
}

impl Default for RateTracker {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl RateTracker {
    /// Create a tracker keeping `window` samples per container (at least one).
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
            samples: HashMap::new(),
        }
    }

    /// Number of containers currently tracked.
    pub fn tracked(&self) -> usize {
        self.samples.len()
    }

    /// Record counters for `key` and return `(netin, netout)` in bits per second.
    ///
    /// The first sample for a key yields zero rates. A counter lower than the
    /// newest sample means the counter was reset; the window restarts from the
    /// new value and the rates for this sample are zero.
    pub fn observe(&mut self, key: &str, netin: u64, netout: u64, at: Instant) -> (f64, f64) {
        let samples = self.samples.entry(key.to_string()).or_default();

        let reset = samples
            .back()
            .is_some_and(|newest| netin < newest.netin || netout < newest.netout);
        if reset {
            debug!(key, "network counter reset, restarting rate window");
            samples.clear();
        }

        let rates = match samples.front().copied() {
            Some(oldest) => {
                let elapsed = at.saturating_duration_since(oldest.at).as_secs_f64();
                (
                    bit_rate(netin - oldest.netin, elapsed),
                    bit_rate(netout - oldest.netout, elapsed),
                )
            }
            None => (0.0, 0.0),
        };

        samples.push_back(Sample { netin, netout, at });
        if samples.len() > self.window {
            samples.pop_front();
        }

        rates
    }

    /// Overwrite every container's rate fields from its counters.
    ///
    /// Containers absent from `snapshot` are forgotten. When an id repeats
    /// within a node, later occurrences are tracked by their position among
    /// the duplicates.
    pub fn apply(&mut self, snapshot: &mut Snapshot, at: Instant) {
        let mut seen = HashSet::new();

        for node in &mut snapshot.nodes {
            let mut occurrences: HashMap<i64, usize> = HashMap::new();
            for container in &mut node.containers {
                let n = occurrences.entry(container.id).or_insert(0);
                let key = match *n {
                    0 => format!("{}-{}", node.name, container.id),
                    dup => format!("{}-{}#{}", node.name, container.id, dup),
                };
                *n += 1;
                let (netin_rate, netout_rate) =
                    self.observe(&key, container.netin, container.netout, at);
                container.netin_rate = netin_rate;
                container.netout_rate = netout_rate;
                seen.insert(key);
            }
        }

        self.samples.retain(|key, _| seen.contains(key));
    }
}

fn bit_rate(delta_bytes: u64, elapsed_secs: f64) -> f64 {
    if elapsed_secs > 0.0 {
        delta_bytes as f64 * BITS_PER_BYTE / elapsed_secs
    } else {
        0.0
    }
}
