//! Running analyses off the interactive path.
//!
//! The engine is synchronous; these helpers move it onto tokio's blocking
//! pool and let a caller drop results that were superseded by a newer
//! request while they were in flight.

use crate::analysis::{SynastryAnalysisResult, SynastryEngine};
use crate::chart::Chart;
use crate::error::SynastryError;
use crate::i18n::Locale;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Validate and analyze two charts on the blocking pool.
pub fn spawn_analysis(
    engine: Arc<SynastryEngine>,
    chart_a: Arc<Chart>,
    chart_b: Arc<Chart>,
    locale: Locale,
) -> JoinHandle<Result<SynastryAnalysisResult, SynastryError>> {
    tokio::task::spawn_blocking(move || engine.analyze_checked(&chart_a, &chart_b, locale))
}

/// Await a spawned analysis, folding join failures into [`SynastryError`].
pub async fn run_analysis(
    engine: Arc<SynastryEngine>,
    chart_a: Arc<Chart>,
    chart_b: Arc<Chart>,
    locale: Locale,
) -> Result<SynastryAnalysisResult, SynastryError> {
    spawn_analysis(engine, chart_a, chart_b, locale)
        .await
        .map_err(|e| SynastryError::TaskFailed(e.to_string()))?
}

/// Identifies one analysis request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AnalysisTicket(u64);

/// Tracks the most recent request so stale results can be discarded.
#[derive(Debug, Default)]
pub struct AnalysisTracker {
    latest: AtomicU64,
}

impl AnalysisTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new request; every earlier ticket becomes stale.
    pub fn begin(&self) -> AnalysisTicket {
        AnalysisTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: AnalysisTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Pass `value` through only if `ticket` is still the latest request.
    pub fn accept<T>(&self, ticket: AnalysisTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            log::debug!("Discarding superseded synastry result (ticket {})", ticket.0);
            None
        }
    }

    /// Run a tracked analysis; `Ok(None)` means a newer request superseded it.
    pub async fn analyze(
        &self,
        engine: Arc<SynastryEngine>,
        chart_a: Arc<Chart>,
        chart_b: Arc<Chart>,
        locale: Locale,
    ) -> Result<Option<SynastryAnalysisResult>, SynastryError> {
        let ticket = self.begin();
        let result = run_analysis(engine, chart_a, chart_b, locale).await?;
        Ok(self.accept(ticket, result))
    }
}
