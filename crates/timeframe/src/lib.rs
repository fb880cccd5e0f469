//! Human-readable timeframes: `1h`, `4h30m`, `1w3d7h14m`.
//!
//! Внутри всё в секундах; минутные обёртки (`*_minutes`) для удобства.

pub mod common;
pub mod grammar;
pub mod timeframe;
pub mod validate;

pub use common::{COMMON_TIMEFRAMES, common_label, common_seconds};
pub use grammar::{
    format_timeframe, format_timeframe_input, format_timeframe_minutes,
    format_timeframe_minutes_input, parse_timeframe, parse_timeframe_minutes,
    validate_timeframe_format,
};
pub use timeframe::Timeframe;
pub use validate::validate_timeframe;

pub const MINUTE_SECONDS: i64 = 60;
pub const HOUR_SECONDS: i64 = MINUTE_SECONDS * 60;
pub const DAY_SECONDS: i64 = HOUR_SECONDS * 24;
pub const WEEK_SECONDS: i64 = DAY_SECONDS * 7;
