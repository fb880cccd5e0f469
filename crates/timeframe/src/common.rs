use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::{DAY_SECONDS, HOUR_SECONDS, MINUTE_SECONDS, WEEK_SECONDS};

/// Timeframes with a fixed canonical label.
///
/// Эти метки выигрывают у разложения по единицам при форматировании.
pub const COMMON_TIMEFRAMES: [(&str, i64); 19] = [
    ("1m", MINUTE_SECONDS),
    ("3m", MINUTE_SECONDS * 3),
    ("5m", MINUTE_SECONDS * 5),
    ("15m", MINUTE_SECONDS * 15),
    ("30m", MINUTE_SECONDS * 30),
    ("1h", HOUR_SECONDS),
    ("2h", HOUR_SECONDS * 2),
    ("4h", HOUR_SECONDS * 4),
    ("6h", HOUR_SECONDS * 6),
    ("8h", HOUR_SECONDS * 8),
    ("12h", HOUR_SECONDS * 12),
    ("1d", DAY_SECONDS),
    ("2d", DAY_SECONDS * 2),
    ("3d", DAY_SECONDS * 3),
    ("4d", DAY_SECONDS * 4),
    ("1w", WEEK_SECONDS),
    ("2w", WEEK_SECONDS * 2),
    ("3w", WEEK_SECONDS * 3),
    ("4w", WEEK_SECONDS * 4),
];

static BY_SECONDS: Lazy<HashMap<i64, &'static str>> = Lazy::new(|| {
    COMMON_TIMEFRAMES
        .iter()
        .map(|&(label, seconds)| (seconds, label))
        .collect()
});

static BY_LABEL: Lazy<HashMap<&'static str, i64>> =
    Lazy::new(|| COMMON_TIMEFRAMES.iter().copied().collect());

/// Canonical label for an exact common duration.
pub fn common_label(seconds: i64) -> Option<&'static str> {
    BY_SECONDS.get(&seconds).copied()
}

/// Seconds for a canonical common label (case-sensitive, e.g. `"4h"`).
pub fn common_seconds(label: &str) -> Option<i64> {
    BY_LABEL.get(label).copied()
}
