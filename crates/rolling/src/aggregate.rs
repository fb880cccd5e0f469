use ohlc_core::types::{CLOSE, HIGH, LOW, OPEN, TIMESTAMP, VOLUME};
use ohlc_core::{Column, Frame, OhlcError, Result};

use crate::bar::WindowBar;
use crate::window::SlidingWindow;

/// Aggregate every trailing window of `window_rows` rows.
///
/// Output has one entry per input row; rows before the first full window are
/// `None`. The frame is read in its current row order.
pub fn aggregate(frame: &Frame, window_rows: usize) -> Result<Vec<Option<WindowBar>>> {
    if window_rows == 0 {
        return Err(OhlcError::OutOfRange(
            "Window length must be at least one row.".to_string(),
        ));
    }

    let timestamps = frame.timestamps()?;
    let open = frame.values(OPEN)?;
    let high = frame.values(HIGH)?;
    let low = frame.values(LOW)?;
    let close = frame.values(CLOSE)?;
    let volume = frame.values(VOLUME)?;

    let mut window = SlidingWindow::new();
    let mut out = Vec::with_capacity(frame.height());

    for i in 0..frame.height() {
        window.push(WindowBar {
            timestamp: timestamps[i],
            open: open[i],
            high: high[i],
            low: low[i],
            close: close[i],
            volume: volume[i],
        });
        if window.len() > window_rows {
            window.pop();
        }

        out.push(if window.len() == window_rows {
            window.fold()
        } else {
            None
        });
    }

    tracing::debug!(rows = out.len(), window_rows, "rolling aggregation done");
    Ok(out)
}

/// Materialize bars as a frame: Int64 timestamp, Float64 prices and volume.
pub fn to_frame(bars: &[Option<WindowBar>]) -> Result<Frame> {
    let ts = Column::Int64(bars.iter().map(|b| b.and_then(|b| b.timestamp)).collect());
    let f = |get: fn(&WindowBar) -> Option<f64>| {
        Column::Float64(bars.iter().map(|b| b.as_ref().and_then(get)).collect())
    };

    Frame::from_columns(vec![
        (TIMESTAMP, ts),
        (OPEN, f(|b| b.open)),
        (HIGH, f(|b| b.high)),
        (LOW, f(|b| b.low)),
        (CLOSE, f(|b| b.close)),
        (VOLUME, f(|b| b.volume)),
    ])
}
