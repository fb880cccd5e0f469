use ohlc_core::{OhlcError, Result};

use crate::common::common_label;
use crate::{DAY_SECONDS, HOUR_SECONDS, MINUTE_SECONDS, WEEK_SECONDS};

/// Units in formatting order.
const UNITS: [(char, i64); 5] = [
    ('w', WEEK_SECONDS),
    ('d', DAY_SECONDS),
    ('h', HOUR_SECONDS),
    ('m', MINUTE_SECONDS),
    ('s', 1),
];

fn unit_seconds(unit: char) -> Option<i64> {
    let unit = unit.to_ascii_lowercase();
    UNITS.iter().find(|(u, _)| *u == unit).map(|&(_, s)| s)
}

/// Split `text` into `(amount, unit seconds)` tokens.
///
/// `None` если строка не матчит `^(\d+[wdhms])+$` целиком. Переполнение тоже `None`.
fn tokens(text: &str) -> Option<Vec<(i64, i64)>> {
    let mut out = Vec::new();
    let mut amount: Option<i64> = None;

    for ch in text.chars() {
        if let Some(digit) = ch.to_digit(10) {
            let next = amount
                .unwrap_or(0)
                .checked_mul(10)?
                .checked_add(i64::from(digit))?;
            amount = Some(next);
            continue;
        }

        // единица без числа перед ней: "m", "1hm", "h1"
        let value = amount.take()?;
        out.push((value, unit_seconds(ch)?));
    }

    // хвост без единицы: "1", "1h30"
    if amount.is_some() || out.is_empty() {
        return None;
    }
    Some(out)
}

/// True iff the whole string matches the timeframe grammar.
pub fn validate_timeframe_format(text: &str) -> bool {
    tokens(text).is_some()
}

/// Convert a timeframe string (e.g. `"1h"`, `"4h30m"`, `"1w3d7h14m"`) into seconds.
///
/// Units are case-insensitive; a repeated unit is summed in place.
pub fn parse_timeframe(text: &str) -> Result<i64> {
    let invalid = || OhlcError::InvalidFormat(text.to_string());

    tokens(text)
        .ok_or_else(invalid)?
        .into_iter()
        .try_fold(0i64, |total, (amount, unit)| {
            amount.checked_mul(unit).and_then(|s| total.checked_add(s))
        })
        .ok_or_else(invalid)
}

/// [`parse_timeframe`] expressed in whole minutes (truncating).
pub fn parse_timeframe_minutes(text: &str) -> Result<i64> {
    Ok(parse_timeframe(text)? / MINUTE_SECONDS)
}

/// Canonical label for a duration in seconds.
///
/// Common timeframes map to their fixed label; everything else is decomposed
/// greedily from weeks down to seconds. Zero (and negatives) give `""`.
pub fn format_timeframe(seconds: i64) -> String {
    if let Some(label) = common_label(seconds) {
        return label.to_string();
    }

    let mut rest = seconds.max(0);
    let mut out = String::new();
    for (unit, unit_seconds) in UNITS {
        let value = rest / unit_seconds;
        rest %= unit_seconds;
        if value > 0 {
            out.push_str(&value.to_string());
            out.push(unit);
        }
    }
    out
}

pub fn format_timeframe_minutes(minutes: i64) -> String {
    format_timeframe(minutes.saturating_mul(MINUTE_SECONDS))
}

/// Textual input to [`format_timeframe`]: an all-digit string is a number of
/// seconds, a string that already matches the grammar is returned as is.
pub fn format_timeframe_input(text: &str) -> Result<String> {
    format_text(text, 1)
}

/// Like [`format_timeframe_input`], but an all-digit string is minutes.
pub fn format_timeframe_minutes_input(text: &str) -> Result<String> {
    format_text(text, MINUTE_SECONDS)
}

fn format_text(text: &str, scale: i64) -> Result<String> {
    if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
        let value: i64 = text
            .parse()
            .map_err(|_| OhlcError::InvalidFormat(text.to_string()))?;
        let seconds = value
            .checked_mul(scale)
            .ok_or_else(|| OhlcError::InvalidFormat(text.to_string()))?;
        return Ok(format_timeframe(seconds));
    }

    if validate_timeframe_format(text) {
        return Ok(text.to_string());
    }

    Err(OhlcError::InvalidFormat(text.to_string()))
}
