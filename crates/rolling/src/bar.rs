use crate::window::Combine;

/// One aggregated window.
///
/// `None` в поле означает null во входных данных где-то внутри окна.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct WindowBar {
    pub timestamp: Option<i64>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
}

impl WindowBar {
    /// `true` if at least one field is defined.
    pub fn has_value(&self) -> bool {
        self.timestamp.is_some()
            || self.open.is_some()
            || self.high.is_some()
            || self.low.is_some()
            || self.close.is_some()
            || self.volume.is_some()
    }
}

fn both<T: Copy>(a: Option<T>, b: Option<T>, f: impl Fn(T, T) -> T) -> Option<T> {
    Some(f(a?, b?))
}

impl Combine for WindowBar {
    fn combine(&self, later: &Self) -> Self {
        Self {
            timestamp: both(self.timestamp, later.timestamp, |_, b| b),
            open: both(self.open, later.open, |a, _| a),
            high: both(self.high, later.high, f64::max),
            low: both(self.low, later.low, f64::min),
            close: both(self.close, later.close, |_, b| b),
            volume: both(self.volume, later.volume, |a, b| a + b),
        }
    }
}
