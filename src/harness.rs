//! Offline lifecycle driver: setup, render until the host stops, cleanup.

use crate::builder::HarnessBuilder;
use crate::Result;
use blockstep_core::{CleanupReport, OfflineHost, RenderStatus, Session, TimingSummary};
use std::path::Path;

/// A [`Session`] wired to an [`OfflineHost`].
///
/// Runs the same setup / per-period render / cleanup sequence a live audio
/// host would, over an in-memory signal.
pub struct Harness {
    session: Session,
    host: OfflineHost,
}

/// Result of [`Harness::run`].
#[derive(Debug)]
pub struct HarnessReport {
    /// Left output channel, as long as the input that was consumed.
    pub left: Vec<f32>,
    pub right: Vec<f32>,
    pub periods: usize,
    /// Input-to-output delay of the self-test echo, in samples.
    pub latency_samples: usize,
    /// The session asked the host to stop before the input ran out.
    pub stopped_early: bool,
    pub cleanup: CleanupReport,
}

impl HarnessReport {
    pub fn summary(&self) -> Option<&TimingSummary> {
        self.cleanup.summary.as_ref()
    }

    pub fn timing_log_path(&self) -> Option<&Path> {
        self.cleanup.log_path.as_deref()
    }
}

impl Harness {
    pub fn builder() -> HarnessBuilder {
        HarnessBuilder::default()
    }

    pub(crate) fn from_parts(session: Session, host: OfflineHost) -> Self {
        Self { session, host }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn host(&self) -> &OfflineHost {
        &self.host
    }

    /// Drive the session over the whole input.
    ///
    /// Cleanup runs even when rendering fails, so the model is released and
    /// whatever timings were recorded still reach the log before the error is
    /// returned.
    pub fn run(mut self) -> Result<HarnessReport> {
        self.session.setup(&self.host.info())?;

        let mut failure = None;
        while let Some(mut period) = self.host.next_period() {
            match self.session.render(&mut period) {
                Ok(RenderStatus::Continue) => {}
                Ok(RenderStatus::StopRequested | RenderStatus::Stopped) => break,
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            }
        }

        let cleanup = self.session.cleanup();
        if let Some(e) = failure {
            return Err(e.into());
        }

        let periods = self.host.periods_rendered();
        let stopped_early = self.host.is_stopped();
        let latency_samples = self.session.latency_samples();
        let (left, right) = self.host.into_output();

        tracing::debug!(periods, stopped_early, frames = left.len(), "harness run finished");

        Ok(HarnessReport {
            left,
            right,
            periods,
            latency_samples,
            stopped_early,
            cleanup,
        })
    }
}
