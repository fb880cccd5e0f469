use crate::candle::Candle;
use crate::column::Column;
use crate::error::{OhlcError, Result};
use crate::types::{self, DType};

/// Columnar OHLC table.
///
/// Колонки одинаковой длины, порядок колонок сохраняется. `time_index` это
/// производный ключ строк (секунды), строится из `timestamp` при нормализации.
/// Все операции возвращают новый `Frame`, исходный не меняется.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    columns: Vec<(String, Column)>,
    time_index: Option<Vec<i64>>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame from named columns; all columns must have equal length.
    pub fn from_columns<S: Into<String>>(columns: Vec<(S, Column)>) -> Result<Self> {
        let mut frame = Frame::new();
        for (name, column) in columns {
            frame = frame.with_column(name, column)?;
        }
        Ok(frame)
    }

    /// Int64 timestamps and Float64 prices/volume.
    pub fn from_candles(candles: &[Candle]) -> Self {
        let ts = candles.iter().map(|c| Some(c.timestamp)).collect();
        let f = |get: fn(&Candle) -> f64| {
            Column::Float64(candles.iter().map(|c| Some(get(c))).collect())
        };

        Self {
            columns: vec![
                (types::TIMESTAMP.to_string(), Column::Int64(ts)),
                (types::OPEN.to_string(), f(|c| c.open)),
                (types::HIGH.to_string(), f(|c| c.high)),
                (types::LOW.to_string(), f(|c| c.low)),
                (types::CLOSE.to_string(), f(|c| c.close)),
                (types::VOLUME.to_string(), f(|c| c.volume)),
            ],
            time_index: None,
        }
    }

    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, |(_, c)| c.len())
    }

    pub fn is_empty(&self) -> bool {
        self.height() == 0
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    /// Like [`Frame::column`], but a missing column is an error.
    pub fn require(&self, name: &str) -> Result<&Column> {
        self.column(name)
            .ok_or_else(|| OhlcError::MissingColumn(name.to_string()))
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.columns.iter().map(|(n, c)| (n.as_str(), c))
    }

    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn dtype(&self, name: &str) -> Option<DType> {
        self.column(name).map(Column::dtype)
    }

    /// Replace a column with the same name or append a new one.
    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> Result<Self> {
        let name = name.into();
        if !self.columns.is_empty() && column.len() != self.height() {
            return Err(OhlcError::LengthMismatch {
                column: name,
                expected: self.height(),
                actual: column.len(),
            });
        }

        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = column,
            None => self.columns.push((name, column)),
        }
        Ok(self)
    }

    pub fn without_column(mut self, name: &str) -> Self {
        self.columns.retain(|(n, _)| n != name);
        if self.columns.is_empty() {
            self.time_index = None;
        }
        self
    }

    pub fn time_index(&self) -> Option<&[i64]> {
        self.time_index.as_deref()
    }

    pub fn with_time_index(mut self, index: Vec<i64>) -> Result<Self> {
        if index.len() != self.height() {
            return Err(OhlcError::LengthMismatch {
                column: "time index".to_string(),
                expected: self.height(),
                actual: index.len(),
            });
        }
        self.time_index = Some(index);
        Ok(self)
    }

    /// Drop the derived time key, leaving positional rows only.
    pub fn reset_index(mut self) -> Self {
        self.time_index = None;
        self
    }

    /// `true` when the time index is non-decreasing and still matches `timestamp`.
    pub fn is_time_ordered(&self) -> bool {
        let Some(idx) = self.time_index.as_deref() else {
            return false;
        };
        // индекс мог устареть после with_column("timestamp", ..)
        let Ok(ts) = self.timestamps() else {
            return false;
        };
        idx.windows(2).all(|w| w[0] <= w[1])
            && ts.len() == idx.len()
            && ts.iter().zip(idx).all(|(t, i)| *t == Some(*i))
    }

    /// The `timestamp` column as integers.
    ///
    /// Float seconds are accepted when every value is whole and finite.
    /// `MissingColumn` если колонки нет, `TypeMismatch` если она не числовая
    /// или в ней дробные секунды.
    pub fn timestamps(&self) -> Result<Vec<Option<i64>>> {
        let column = self.require(types::TIMESTAMP)?;
        if let Some(ints) = column.as_i64() {
            return Ok(ints);
        }

        let floats = column.as_f64().ok_or_else(OhlcError::non_numeric_timestamps)?;
        let range = i64::MIN as f64..i64::MAX as f64;
        floats
            .into_iter()
            .map(|x| match x {
                None => Ok(None),
                Some(x) if x.fract() == 0.0 && range.contains(&x) => Ok(Some(x as i64)),
                Some(_) => Err(OhlcError::fractional_timestamps()),
            })
            .collect()
    }

    /// Numeric column widened to f64.
    pub fn values(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let column = self.require(name)?;
        column.as_f64().ok_or_else(|| {
            OhlcError::TypeMismatch(format!(
                "column `{name}` must be numeric, found {}",
                column.dtype()
            ))
        })
    }

    /// Single cell as f64, `None` for nulls or unknown columns.
    pub fn value(&self, name: &str, row: usize) -> Option<f64> {
        self.column(name).and_then(|c| c.get_f64(row))
    }

    /// Gather rows by position; the time index follows the rows.
    pub fn take(&self, rows: &[usize]) -> Self {
        Self {
            columns: self
                .columns
                .iter()
                .map(|(n, c)| (n.clone(), c.take(rows)))
                .collect(),
            time_index: self
                .time_index
                .as_ref()
                .map(|idx| rows.iter().map(|&i| idx[i]).collect()),
        }
    }

    /// Rows `start..` (empty frame with the same schema if `start >= height`).
    pub fn slice_from(&self, start: usize) -> Self {
        let rows: Vec<usize> = (start.min(self.height())..self.height()).collect();
        self.take(&rows)
    }
}
