use ohlc_core::{OhlcError, Result};

use crate::params::ReturnParams;

/// Named output column.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnSeries {
    /// `PCTRET_{n}` или `CUMPCTRET_{n}`
    pub name: String,
    pub values: Vec<Option<f64>>,
}

/// Percentage return of `close`.
///
/// Rows without a full lookback are `None` (before fills).
pub fn percentage_return(close: &[Option<f64>], params: ReturnParams) -> Result<ReturnSeries> {
    let length = params.length()?;
    if close.len() < length {
        return Err(OhlcError::InsufficientData(format!(
            "Series of {} rows is shorter than the return length {length}.",
            close.len()
        )));
    }

    let ratio = |now: Option<f64>, then: Option<f64>| Some(now? / then? - 1.0);

    let raw: Vec<Option<f64>> = if params.cumulative {
        let first = close.first().copied().flatten();
        close.iter().map(|&c| ratio(c, first)).collect()
    } else {
        (0..close.len())
            .map(|i| i.checked_sub(length).and_then(|j| ratio(close[i], close[j])))
            .collect()
    };

    let mut values = shift(&raw, params.offset);
    if let Some(fill) = params.fillna {
        values.iter_mut().filter(|v| v.is_none()).for_each(|v| *v = Some(fill));
    }
    if let Some(method) = params.fill_method {
        method.apply(&mut values);
    }

    let prefix = if params.cumulative { "CUMPCTRET" } else { "PCTRET" };
    Ok(ReturnSeries {
        name: format!("{prefix}_{length}"),
        values,
    })
}

fn shift(values: &[Option<f64>], offset: i64) -> Vec<Option<f64>> {
    let n = values.len() as i64;
    (0..n)
        .map(|i| {
            let src = i - offset;
            if (0..n).contains(&src) {
                values[src as usize]
            } else {
                None
            }
        })
        .collect()
}
