use ohlc_core::{Finding, Sink};

use crate::event::EngineEvent;

/// Pipeline trail goes to `debug`.
pub fn consume(events: Vec<EngineEvent>) {
    for e in events {
        match e {
            EngineEvent::Transition { from, cause, to } => {
                tracing::debug!(?from, ?cause, ?to, "transition");
            }
            EngineEvent::Rows { stage, rows } => {
                tracing::debug!(?stage, rows, "rows");
            }
            EngineEvent::Log(msg) => {
                tracing::debug!("{msg}");
            }
        }
    }
}

/// Findings as `warn!` events with structured fields.
#[derive(Debug, Default, Copy, Clone)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn report(&mut self, finding: Finding) {
        match &finding {
            Finding::NonMultipleTimeframe { requested, base } => {
                tracing::warn!(requested, base, "{finding}");
            }
            Finding::NullValues { column, count } => {
                tracing::warn!(%column, count, "{finding}");
            }
            Finding::DuplicateTimestamps { count, .. } => {
                tracing::warn!(count, "{finding}");
            }
            Finding::Gaps {
                count, expected, ..
            } => {
                tracing::warn!(count, expected, "{finding}");
            }
            Finding::UncheckableTimestamps { .. } => {
                tracing::warn!("{finding}");
            }
        }
    }
}
