use std::fmt;

/// Non-fatal observation about the input or the requested transform.
///
/// Findings никогда не останавливают пайплайн: решение принимает вызывающий.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Requested window is not an integer number of base steps.
    NonMultipleTimeframe { requested: i64, base: i64 },
    /// Missing values in a non-timestamp column.
    NullValues { column: String, count: usize },
    /// Repeated timestamps; `samples` holds the first few offenders.
    DuplicateTimestamps { count: usize, samples: Vec<i64> },
    /// Successive timestamps whose spacing differs from `expected`.
    Gaps {
        count: usize,
        expected: i64,
        samples: Vec<Gap>,
    },
    /// Duplicates and gaps could not be checked.
    UncheckableTimestamps { reason: String },
}

/// One irregular step between two consecutive rows.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Gap {
    pub from: i64,
    pub to: i64,
}

impl Gap {
    pub fn seconds(&self) -> i64 {
        self.to.saturating_sub(self.from)
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::NonMultipleTimeframe { requested, base } => write!(
                f,
                "Note: Requested timeframe ({requested}s) is not a multiple of the time step ({base}s); values may not be suitable."
            ),
            Finding::NullValues { column, count } => {
                write!(f, "Column `{column}` contains {count} null value(s).")
            }
            Finding::DuplicateTimestamps { count, samples } => {
                write!(f, "Found {count} duplicate timestamp(s), e.g. {samples:?}.")
            }
            Finding::Gaps {
                count,
                expected,
                samples,
            } => {
                let shown: Vec<String> = samples
                    .iter()
                    .map(|g| format!("{}..{} ({}s)", g.from, g.to, g.seconds()))
                    .collect();
                write!(
                    f,
                    "Found {count} irregular step(s) where {expected}s was expected, e.g. [{}].",
                    shown.join(", ")
                )
            }
            Finding::UncheckableTimestamps { reason } => {
                write!(f, "Timestamp checks skipped: {reason}")
            }
        }
    }
}

/// Caller-supplied destination for findings.
pub trait Sink {
    fn report(&mut self, finding: Finding);
}

impl Sink for Vec<Finding> {
    fn report(&mut self, finding: Finding) {
        self.push(finding);
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn report(&mut self, finding: Finding) {
        (**self).report(finding);
    }
}

/// Drops every finding.
#[derive(Debug, Default, Copy, Clone)]
pub struct Discard;

impl Sink for Discard {
    fn report(&mut self, _finding: Finding) {}
}
