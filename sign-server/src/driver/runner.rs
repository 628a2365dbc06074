//! The driver loop.

use tokio::time::sleep;
use tracing::{debug, info};

use crate::domain::WriteRequest;

use super::error::DriverError;
use super::format::format_message;
use super::settings::DriverSettings;
use super::shutdown::Shutdown;
use super::sources::{ConfigSource, DisplaySink, PredictionSource};

/// How a cycle ended, when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Every stop was polled and every prediction written.
    Completed { writes: usize },
    /// Shutdown was requested part way through.
    Stopped,
}

/// Polls predictions and paces writes to the display, forever.
///
/// Runs strictly in sequence: one configuration fetch, then one prediction
/// request per stop, then one write per prediction followed by the write
/// interval. Nothing overlaps and nothing is retried.
pub struct DisplayDriver<C, P, D> {
    config: C,
    predictions: P,
    display: D,
    settings: DriverSettings,
    shutdown: Shutdown,
}

impl<C, P, D> DisplayDriver<C, P, D>
where
    C: ConfigSource,
    P: PredictionSource,
    D: DisplaySink,
{
    pub fn new(config: C, predictions: P, display: D, settings: DriverSettings) -> Self {
        Self {
            config,
            predictions,
            display,
            settings,
            shutdown: Shutdown::never(),
        }
    }

    /// Stop cleanly when `shutdown` fires.
    pub fn with_shutdown(mut self, shutdown: Shutdown) -> Self {
        self.shutdown = shutdown;
        self
    }

    /// Run cycles until shutdown or the first error.
    ///
    /// Returns `Ok(())` only after a requested shutdown. Every error is
    /// fatal; the caller decides what that means for the process.
    pub async fn run(&self) -> Result<(), DriverError> {
        let mut cycle: u64 = 0;

        loop {
            if self.shutdown.is_triggered() {
                info!(cycle, "shutdown requested, stopping driver");
                return Ok(());
            }

            cycle += 1;
            match self.run_cycle().await? {
                CycleOutcome::Stopped => {
                    info!(cycle, "shutdown requested mid-cycle, stopping driver");
                    return Ok(());
                }
                CycleOutcome::Completed { writes: 0 } => {
                    debug!(cycle, "cycle had nothing to write");
                    tokio::task::yield_now().await;
                }
                CycleOutcome::Completed { writes } => {
                    info!(cycle, writes, "cycle complete");
                }
            }
        }
    }

    /// Run a single cycle: fetch configuration, then poll and write each stop.
    pub async fn run_cycle(&self) -> Result<CycleOutcome, DriverError> {
        let config = self.config.fetch().await.map_err(DriverError::Config)?;
        debug!(
            agency = %config.agency,
            stops = config.stop_ids.len(),
            "fetched configuration"
        );

        let mut writes = 0;

        for (index, stop_id) in config.stop_ids.iter().enumerate() {
            let predictions = self
                .predictions
                .list_predictions(&config.agency, stop_id)
                .await
                .map_err(|source| DriverError::Predictions {
                    stop_id: stop_id.clone(),
                    source,
                })?;

            let color = self.settings.palette.color_for_stop(index);

            for prediction in &predictions {
                if self.shutdown.is_triggered() {
                    return Ok(CycleOutcome::Stopped);
                }

                let request = WriteRequest::new(format_message(prediction), color);
                self.display
                    .write(&request)
                    .await
                    .map_err(DriverError::Display)?;
                writes += 1;
                debug!(stop_id = %stop_id, message = %request.message, "wrote to display");

                if !self.pace().await {
                    return Ok(CycleOutcome::Stopped);
                }
            }
        }

        Ok(CycleOutcome::Completed { writes })
    }

    /// Wait out the write interval. Returns false if shutdown cut it short.
    async fn pace(&self) -> bool {
        tokio::select! {
            _ = sleep(self.settings.write_interval) => true,
            _ = self.shutdown.wait() => false,
        }
    }

    pub fn settings(&self) -> &DriverSettings {
        &self.settings
    }

    pub fn config_source(&self) -> &C {
        &self.config
    }

    pub fn prediction_source(&self) -> &P {
        &self.predictions
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}
