use ohlc_core::{OhlcError, Result};

use crate::fill::FillMethod;

/// Параметры percentage return.
///
/// `length = future_return_minutes / timestep_minutes`, 0 трактуется как 1.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ReturnParams {
    pub timestep_minutes: u32,
    pub future_return_minutes: u32,
    /// `close[i] / close[0] - 1` instead of a fixed lookback.
    pub cumulative: bool,
    /// Shift of the result in rows, positive moves values later.
    pub offset: i64,
    pub fillna: Option<f64>,
    pub fill_method: Option<FillMethod>,
}

impl ReturnParams {
    pub fn new(timestep_minutes: u32, future_return_minutes: u32) -> Self {
        Self {
            timestep_minutes,
            future_return_minutes,
            cumulative: false,
            offset: 0,
            fillna: None,
            fill_method: None,
        }
    }

    pub fn length(&self) -> Result<usize> {
        if self.timestep_minutes == 0 {
            return Err(OhlcError::OutOfRange(
                "Timestep size must be at least one minute.".to_string(),
            ));
        }
        let length = (self.future_return_minutes / self.timestep_minutes).max(1);
        Ok(length as usize)
    }
}
