use std::collections::HashSet;

use ohlc_core::types::TIMESTAMP;
use ohlc_core::{Finding, Frame, Gap, Sink};

use crate::MAX_SAMPLES;

/// Summary of what [`check_integrity`] found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    /// (column, nulls) for every non-timestamp column with nulls.
    pub null_counts: Vec<(String, usize)>,
    /// Rows whose timestamp repeats an earlier row.
    pub duplicates: usize,
    /// Successive steps that differ from the expected interval.
    pub gaps: usize,
    /// `false` when the timestamp column was missing or not integer.
    pub timestamps_checked: bool,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.timestamps_checked
            && self.null_counts.is_empty()
            && self.duplicates == 0
            && self.gaps == 0
    }
}

/// Run every check and report findings to `sink`. Never fails.
///
/// - nulls в каждой колонке кроме timestamp
/// - повторяющиеся timestamp
/// - шаги, отличные от `expected_interval`
pub fn check_integrity(
    frame: &Frame,
    expected_interval: i64,
    sink: &mut impl Sink,
) -> IntegrityReport {
    let mut report = IntegrityReport::default();

    for (name, column) in frame.columns() {
        if name == TIMESTAMP {
            continue;
        }
        let count = column.null_count();
        if count > 0 {
            sink.report(Finding::NullValues {
                column: name.to_string(),
                count,
            });
            report.null_counts.push((name.to_string(), count));
        }
    }

    let timestamps = match frame.timestamps() {
        Ok(ts) => ts.into_iter().flatten().collect::<Vec<_>>(),
        Err(err) => {
            sink.report(Finding::UncheckableTimestamps {
                reason: err.to_string(),
            });
            return report;
        }
    };
    report.timestamps_checked = true;

    let mut seen = HashSet::with_capacity(timestamps.len());
    let mut duplicates = Vec::new();
    for &ts in &timestamps {
        if !seen.insert(ts) {
            duplicates.push(ts);
        }
    }
    if !duplicates.is_empty() {
        report.duplicates = duplicates.len();
        duplicates.truncate(MAX_SAMPLES);
        sink.report(Finding::DuplicateTimestamps {
            count: report.duplicates,
            samples: duplicates,
        });
    }

    let gaps: Vec<Gap> = timestamps
        .windows(2)
        .filter(|w| w[1].saturating_sub(w[0]) != expected_interval)
        .map(|w| Gap { from: w[0], to: w[1] })
        .collect();
    if !gaps.is_empty() {
        report.gaps = gaps.len();
        sink.report(Finding::Gaps {
            count: gaps.len(),
            expected: expected_interval,
            samples: gaps.into_iter().take(MAX_SAMPLES).collect(),
        });
    }

    tracing::debug!(
        rows = frame.height(),
        expected_interval,
        duplicates = report.duplicates,
        gaps = report.gaps,
        "integrity check done"
    );
    report
}
