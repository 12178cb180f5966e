//! Container presentation.

use serde::{Deserialize, Serialize};

use super::status::{classify, VisualCategory};
use super::units::{format, Units};
use super::usage::{ratio, UsageRatio};
use crate::error::{FormatError, PresentError};
use crate::source::ContainerRecord;

/// Everything a renderer needs to draw one container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerPresentation {
    pub id: i64,
    pub hostname: String,
    pub category: VisualCategory,
    pub cpu: UsageRatio,
    pub memory: UsageRatio,
    /// Receive throughput, e.g. "2.00 MBit/s".
    pub network_in: String,
    /// Send throughput.
    pub network_out: String,
}

impl ContainerPresentation {
    /// Project a container record.
    ///
    /// Network figures come from the live rate fields, never the cumulative
    /// byte counters.
    pub fn present(record: &ContainerRecord, units: &Units) -> Result<Self, PresentError> {
        let fail = |field: &'static str| {
            move |source: FormatError| PresentError::Container {
                id: record.id,
                hostname: record.hostname.clone(),
                field,
                source,
            }
        };

        Ok(Self {
            id: record.id,
            hostname: record.hostname.clone(),
            category: classify(&record.status),
            cpu: ratio(record.cpu, 1.0),
            memory: ratio(record.memory_used as f64, record.memory_total as f64),
            network_in: format(record.netin_rate, &units.bitrate).map_err(fail("netin_rate"))?,
            network_out: format(record.netout_rate, &units.bitrate)
                .map_err(fail("netout_rate"))?,
        })
    }
}
