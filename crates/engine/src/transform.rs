use integrity::{check_integrity, infer_native_interval};
use ohlc_core::{Frame, OhlcError, Sink};
use rolling::{WindowBar, aggregate, to_frame};
use state_machine::cause::TransitionCause;
use timeframe::{MINUTE_SECONDS, Timeframe, validate_timeframe};

use crate::driver::Driver;
use crate::error::Result;
use crate::sink::{TracingSink, consume};

/// Sizes derived for one call.
#[derive(Debug, Clone)]
struct Plan {
    label: String,
    seconds: i64,
    window_rows: usize,
    step_rows: usize,
    step_seconds: i64,
}

/// Resample `frame` to `timeframe`, emitting every `step`-th aggregated row.
///
/// An integer timeframe and `step` both count rows of the input's native
/// interval. Each output row aggregates the trailing window ending at that
/// row. Non-fatal observations (non-multiple timeframe, nulls, duplicates,
/// gaps) go to `sink`; the input frame is never modified.
pub fn transform(
    frame: &Frame,
    timeframe: impl Into<Timeframe>,
    step: u32,
    sink: &mut impl Sink,
) -> Result<Frame> {
    let timeframe = timeframe.into();
    let mut driver = Driver::new();
    driver.log(format!("transform to {timeframe} every {step} rows"));

    let out = run(&mut driver, frame, &timeframe, step, sink);
    if out.is_err() {
        driver.fail();
    }
    consume(driver.into_events());
    out
}

/// [`transform`] with findings logged as warnings.
pub fn transform_ohlc(frame: &Frame, timeframe: impl Into<Timeframe>, step: u32) -> Result<Frame> {
    transform(frame, timeframe, step, &mut TracingSink)
}

fn run(
    driver: &mut Driver,
    frame: &Frame,
    timeframe: &Timeframe,
    step: u32,
    sink: &mut impl Sink,
) -> Result<Frame> {
    normalize_timeframe(timeframe, step)?;
    driver.advance(TransitionCause::TimeframeResolved)?;

    let indexed = normalize_index(frame)?;
    let native = infer_native_interval(&indexed)?;
    if native <= 0 {
        return Err(OhlcError::OutOfRange(format!(
            "Inferred time step ({native}s) must be positive; check for duplicate timestamps."
        ))
        .into());
    }
    let plan = plan(timeframe, step, native, sink)?;
    driver.log(format!("{plan:?}"));
    driver.advance(TransitionCause::IndexNormalized)?;

    let bars = aggregate(&indexed, plan.window_rows)?;
    driver.advance(TransitionCause::Aggregated)?;

    let trimmed = trim_leading_undefined(&indexed, &bars, &plan)?;
    driver.rows(trimmed.height());
    driver.advance(TransitionCause::LeadingTrimmed)?;

    let typed = restore_types(frame, trimmed)?;
    driver.advance(TransitionCause::TypesRestored)?;

    let rows: Vec<usize> = (0..typed.height()).step_by(plan.step_rows).collect();
    let out = typed.take(&rows);
    driver.rows(out.height());
    driver.advance(TransitionCause::Subsampled)?;

    check_integrity(&out, plan.step_seconds, sink);
    driver.advance(TransitionCause::Verified)?;

    Ok(out)
}

/// Checks that need no data: label grammar, sub-minute labels, zero step.
fn normalize_timeframe(timeframe: &Timeframe, step: u32) -> Result<()> {
    if let Timeframe::Label(_) = timeframe {
        require_whole_minutes(timeframe.seconds(MINUTE_SECONDS)?)?;
    }
    if step == 0 {
        return Err(
            OhlcError::OutOfRange("Step size must be at least one row.".to_string()).into(),
        );
    }
    Ok(())
}

fn require_whole_minutes(seconds: i64) -> Result<()> {
    if seconds % MINUTE_SECONDS != 0 {
        return Err(OhlcError::NotSupported(
            "Second-level timeframes are not yet supported.".to_string(),
        )
        .into());
    }
    Ok(())
}

/// Window and step in rows of the `native` interval.
///
/// Окно сверяется и с шагом (`step × native`), и с самим интервалом.
fn plan(timeframe: &Timeframe, step: u32, native: i64, sink: &mut impl Sink) -> Result<Plan> {
    let seconds = timeframe.seconds(native)?;
    require_whole_minutes(seconds)?;

    let step_seconds = i64::from(step).checked_mul(native).ok_or_else(|| {
        OhlcError::OutOfRange(format!("Step of {step} rows of {native}s overflows."))
    })?;
    validate_timeframe(step_seconds, seconds, sink)?;
    validate_timeframe(native, seconds, sink)?;

    let window_rows = usize::try_from(seconds / native)
        .map_err(|_| OhlcError::OutOfRange(format!("Window of {seconds}s is too large.")))?;
    let step_rows = usize::try_from(step)
        .map_err(|_| OhlcError::OutOfRange(format!("Step of {step} rows is too large.")))?;

    Ok(Plan {
        label: timeframe.label(native),
        seconds,
        window_rows,
        step_rows,
        step_seconds,
    })
}

/// Rows ordered by `timestamp` with a time index.
///
/// Если индекс уже есть и отсортирован, frame используется как есть.
fn normalize_index(frame: &Frame) -> Result<Frame> {
    if frame.is_time_ordered() {
        return Ok(frame.clone());
    }

    let timestamps = frame
        .timestamps()?
        .into_iter()
        .collect::<Option<Vec<i64>>>()
        .ok_or_else(|| {
            OhlcError::TypeMismatch("The timestamp column contains null values.".to_string())
        })?;

    let mut order: Vec<usize> = (0..timestamps.len()).collect();
    order.sort_by_key(|&i| timestamps[i]);
    let index = order.iter().map(|&i| timestamps[i]).collect();

    tracing::debug!(rows = order.len(), "sorted frame by timestamp");
    Ok(frame.take(&order).with_time_index(index)?)
}

/// Drop the rows before the first full window; later rows stay even with nulls.
fn trim_leading_undefined(
    indexed: &Frame,
    bars: &[Option<WindowBar>],
    plan: &Plan,
) -> Result<Frame> {
    let Some(first) = bars.iter().position(|b| b.is_some_and(|b| b.has_value())) else {
        return Err(OhlcError::InsufficientData(format!(
            "No valid rows after aggregation. Please ensure your dataset is big enough \
             for this timeframe: {} ({} minutes).",
            plan.label,
            plan.seconds / MINUTE_SECONDS
        ))
        .into());
    };

    let aggregated = match indexed.time_index() {
        Some(index) => to_frame(bars)?.with_time_index(index.to_vec())?,
        None => to_frame(bars)?,
    };
    Ok(aggregated.slice_from(first))
}

/// Cast every aggregated column back to the dtype it had in the input.
fn restore_types(input: &Frame, aggregated: Frame) -> Result<Frame> {
    let mut out = aggregated.clone();
    for (name, column) in aggregated.columns() {
        if let Some(dtype) = input.dtype(name) {
            out = out.with_column(name, column.cast(dtype))?;
        }
    }
    Ok(out)
}
