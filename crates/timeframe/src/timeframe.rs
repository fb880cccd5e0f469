use std::fmt;
use std::str::FromStr;

use ohlc_core::{OhlcError, Result};

use crate::grammar::{format_timeframe, parse_timeframe, validate_timeframe_format};

/// Requested target resolution: a count of base steps or a label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Timeframe {
    Steps(u32),
    Label(String),
}

impl Timeframe {
    /// Total seconds for a series sampled every `base` seconds.
    ///
    /// Labels are parsed here, so a bad label fails with `InvalidFormat`;
    /// `base` only matters for [`Timeframe::Steps`].
    pub fn seconds(&self, base: i64) -> Result<i64> {
        match self {
            Timeframe::Steps(n) => i64::from(*n).checked_mul(base).ok_or_else(|| {
                OhlcError::OutOfRange(format!("Timeframe of {n} steps of {base}s overflows."))
            }),
            Timeframe::Label(label) => parse_timeframe(label),
        }
    }

    /// Label as the caller would recognise it: labels verbatim, steps formatted.
    pub fn label(&self, base: i64) -> String {
        match self {
            Timeframe::Steps(n) => format_timeframe(i64::from(*n).saturating_mul(base)),
            Timeframe::Label(label) => label.clone(),
        }
    }
}

impl From<u32> for Timeframe {
    fn from(steps: u32) -> Self {
        Timeframe::Steps(steps)
    }
}

impl From<&str> for Timeframe {
    fn from(label: &str) -> Self {
        Timeframe::Label(label.to_string())
    }
}

impl From<String> for Timeframe {
    fn from(label: String) -> Self {
        Timeframe::Label(label)
    }
}

impl From<&Timeframe> for Timeframe {
    fn from(tf: &Timeframe) -> Self {
        tf.clone()
    }
}

/// All-digit input is a step count (`"90"`), otherwise it must match the grammar.
impl FromStr for Timeframe {
    type Err = OhlcError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
            return s
                .parse::<u32>()
                .map(Timeframe::Steps)
                .map_err(|_| OhlcError::InvalidFormat(s.to_string()));
        }

        if validate_timeframe_format(s) {
            Ok(Timeframe::Label(s.to_string()))
        } else {
            Err(OhlcError::InvalidFormat(s.to_string()))
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timeframe::Steps(n) => write!(f, "{n} steps"),
            Timeframe::Label(label) => f.write_str(label),
        }
    }
}
