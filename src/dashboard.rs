//! Dashboard state: the latest presentation and where it came from.

use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use tracing::{debug, warn};

use crate::config::DashboardConfig;
use crate::data::{present_snapshot, DashboardPresentation, RateTracker};
use crate::source::DataSource;

/// Holds a data source and the most recent presentation built from it.
///
/// Nothing here schedules refreshes; the embedding application calls
/// [`Dashboard::reload`] whenever it wants to pick up new telemetry.
pub struct Dashboard {
    source: Box<dyn DataSource>,
    config: DashboardConfig,
    rates: RateTracker,
    pub presentation: Option<DashboardPresentation>,
    pub last_updated: Option<Instant>,
    pub load_error: Option<String>,
}

impl Dashboard {
    /// Create a dashboard reading from `source`.
    pub fn new(source: Box<dyn DataSource>, config: DashboardConfig) -> Self {
        let rates = RateTracker::new(config.rates.window);
        Self {
            source,
            config,
            rates,
            presentation: None,
            last_updated: None,
            load_error: None,
        }
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Poll the source once and present whatever arrived.
    ///
    /// Returns Ok(true) if a new presentation was built, Ok(false) if the
    /// source had nothing new (see `load_error` for source failures), or Err
    /// if the snapshot held values that cannot be presented.
    pub fn reload(&mut self) -> Result<bool> {
        let Some(mut snapshot) = self.source.poll() else {
            if let Some(err) = self.source.error() {
                self.load_error = Some(err.to_string());
            }
            return Ok(false);
        };

        if self.config.rates.derive {
            self.rates.apply(&mut snapshot, Instant::now());
        }

        let presentation = match present_snapshot(&snapshot, &self.config.units) {
            Ok(presentation) => presentation,
            Err(e) => {
                warn!(source = %self.source.description(), error = %e, "rejected snapshot");
                self.load_error = Some(e.to_string());
                return Err(e).with_context(|| {
                    format!("failed to present snapshot from {}", self.source.description())
                });
            }
        };

        debug!(
            nodes = presentation.summary.nodes,
            containers = presentation.summary.containers,
            unhealthy = presentation.summary.unhealthy,
            "presented snapshot"
        );

        self.presentation = Some(presentation);
        self.last_updated = Some(Instant::now());
        self.load_error = None;
        Ok(true)
    }

    /// Serialize the current presentation as JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let Some(ref presentation) = self.presentation else {
            bail!("No data to export");
        };

        let json = if pretty {
            serde_json::to_string_pretty(presentation)?
        } else {
            serde_json::to_string(presentation)?
        };
        Ok(json)
    }

    /// Export the current presentation to a file as pretty JSON.
    pub fn export_state(&self, path: &Path) -> Result<()> {
        let json = self.to_json(true)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}
