use std::str::FromStr;

use ohlc_core::OhlcError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FillMethod {
    /// Propagate the last defined value forward.
    Forward,
    /// Use the next defined value.
    Backward,
}

impl FillMethod {
    pub fn apply(self, values: &mut [Option<f64>]) {
        let mut carry = None;
        let mut fill = |v: &mut Option<f64>| match v {
            Some(x) => carry = Some(*x),
            None => *v = carry,
        };

        match self {
            FillMethod::Forward => values.iter_mut().for_each(&mut fill),
            FillMethod::Backward => values.iter_mut().rev().for_each(&mut fill),
        }
    }
}

impl FromStr for FillMethod {
    type Err = OhlcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ffill" => Ok(FillMethod::Forward),
            "bfill" => Ok(FillMethod::Backward),
            other => Err(OhlcError::NotSupported(format!(
                "Unknown fill method `{other}`, expected `ffill` or `bfill`."
            ))),
        }
    }
}
