use ohlc_core::{Finding, OhlcError, Result, Sink};

/// Check a requested window against the base time step (both in seconds).
///
/// - окно меньше шага: `OutOfRange`
/// - окно не кратно шагу: `Finding::NonMultipleTimeframe`, но не ошибка
pub fn validate_timeframe(base: i64, requested: i64, sink: &mut impl Sink) -> Result<()> {
    if requested < base {
        return Err(OhlcError::timeframe_below_step(requested, base));
    }

    if base > 0 && requested % base != 0 {
        tracing::debug!(requested, base, "timeframe is not a multiple of the time step");
        sink.report(Finding::NonMultipleTimeframe { requested, base });
    }

    Ok(())
}
