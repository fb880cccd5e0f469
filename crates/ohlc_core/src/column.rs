use crate::types::DType;

/// A typed, nullable column. `None` is a missing value; for float columns a
/// `NaN` payload is treated as missing as well.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Int32(Vec<Option<i32>>),
    Int64(Vec<Option<i64>>),
    Float32(Vec<Option<f32>>),
    Float64(Vec<Option<f64>>),
    Utf8(Vec<Option<String>>),
}

impl Column {
    pub fn dtype(&self) -> DType {
        match self {
            Column::Int32(_) => DType::Int32,
            Column::Int64(_) => DType::Int64,
            Column::Float32(_) => DType::Float32,
            Column::Float64(_) => DType::Float64,
            Column::Utf8(_) => DType::Utf8,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Int32(v) => v.len(),
            Column::Int64(v) => v.len(),
            Column::Float32(v) => v.len(),
            Column::Float64(v) => v.len(),
            Column::Utf8(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_null(&self, row: usize) -> bool {
        match self {
            Column::Int32(v) => v[row].is_none(),
            Column::Int64(v) => v[row].is_none(),
            Column::Float32(v) => v[row].is_none_or(f32::is_nan),
            Column::Float64(v) => v[row].is_none_or(f64::is_nan),
            Column::Utf8(v) => v[row].is_none(),
        }
    }

    pub fn null_count(&self) -> usize {
        (0..self.len()).filter(|&i| self.is_null(i)).count()
    }

    /// Integer view of the column. `None` for float and text columns.
    pub fn as_i64(&self) -> Option<Vec<Option<i64>>> {
        match self {
            Column::Int32(v) => Some(v.iter().map(|x| x.map(i64::from)).collect()),
            Column::Int64(v) => Some(v.clone()),
            _ => None,
        }
    }

    /// One cell widened to f64; nulls, NaN, text and out-of-range rows are `None`.
    pub fn get_f64(&self, row: usize) -> Option<f64> {
        match self {
            Column::Int32(v) => v.get(row).copied().flatten().map(f64::from),
            Column::Int64(v) => v.get(row).copied().flatten().map(|x| x as f64),
            Column::Float32(v) => v
                .get(row)
                .copied()
                .flatten()
                .filter(|x| !x.is_nan())
                .map(f64::from),
            Column::Float64(v) => v.get(row).copied().flatten().filter(|x| !x.is_nan()),
            Column::Utf8(_) => None,
        }
    }

    /// Numeric view of the column widened to f64. `None` for text columns.
    pub fn as_f64(&self) -> Option<Vec<Option<f64>>> {
        let out = match self {
            Column::Int32(v) => v.iter().map(|x| x.map(f64::from)).collect(),
            Column::Int64(v) => v.iter().map(|x| x.map(|x| x as f64)).collect(),
            Column::Float32(v) => v
                .iter()
                .map(|x| x.filter(|x| !x.is_nan()).map(f64::from))
                .collect(),
            Column::Float64(v) => v.iter().map(|x| x.filter(|x| !x.is_nan())).collect(),
            Column::Utf8(_) => return None,
        };
        Some(out)
    }

    /// Convert to another physical type, keeping nulls.
    ///
    /// float -> int отбрасывает дробную часть (как astype), не-конечные значения
    /// становятся null. Текст парсится, мусор становится null.
    pub fn cast(&self, dtype: DType) -> Column {
        if self.dtype() == dtype {
            return self.clone();
        }

        if let Column::Utf8(v) = self {
            return match dtype {
                DType::Int32 => Column::Int32(parse_all(v)),
                DType::Int64 => Column::Int64(parse_all(v)),
                DType::Float32 => Column::Float32(parse_all(v)),
                DType::Float64 => Column::Float64(parse_all(v)),
                DType::Utf8 => self.clone(),
            };
        }

        // числовые колонки: идём через f64, кроме int -> int
        if let (Some(ints), true) = (self.as_i64(), dtype.is_integer()) {
            return match dtype {
                DType::Int32 => Column::Int32(
                    ints.into_iter()
                        .map(|x| x.and_then(|x| i32::try_from(x).ok()))
                        .collect(),
                ),
                _ => Column::Int64(ints),
            };
        }

        let values = self.as_f64().unwrap_or_default();
        match dtype {
            DType::Int32 => Column::Int32(
                values
                    .into_iter()
                    .map(|x| x.filter(|x| x.is_finite()).map(|x| x as i32))
                    .collect(),
            ),
            DType::Int64 => Column::Int64(
                values
                    .into_iter()
                    .map(|x| x.filter(|x| x.is_finite()).map(|x| x as i64))
                    .collect(),
            ),
            DType::Float32 => Column::Float32(values.into_iter().map(|x| x.map(|x| x as f32)).collect()),
            DType::Float64 => Column::Float64(values),
            DType::Utf8 => Column::Utf8((0..self.len()).map(|i| self.display(i)).collect()),
        }
    }

    /// Gather rows by position.
    pub fn take(&self, rows: &[usize]) -> Column {
        match self {
            Column::Int32(v) => Column::Int32(rows.iter().map(|&i| v[i]).collect()),
            Column::Int64(v) => Column::Int64(rows.iter().map(|&i| v[i]).collect()),
            Column::Float32(v) => Column::Float32(rows.iter().map(|&i| v[i]).collect()),
            Column::Float64(v) => Column::Float64(rows.iter().map(|&i| v[i]).collect()),
            Column::Utf8(v) => Column::Utf8(rows.iter().map(|&i| v[i].clone()).collect()),
        }
    }

    /// Cell rendered as text; `None` for nulls.
    pub fn display(&self, row: usize) -> Option<String> {
        if self.is_null(row) {
            return None;
        }
        match self {
            Column::Int32(v) => v[row].map(|x| x.to_string()),
            Column::Int64(v) => v[row].map(|x| x.to_string()),
            Column::Float32(v) => v[row].map(|x| x.to_string()),
            Column::Float64(v) => v[row].map(|x| x.to_string()),
            Column::Utf8(v) => v[row].clone(),
        }
    }
}

fn parse_all<T: std::str::FromStr>(values: &[Option<String>]) -> Vec<Option<T>> {
    values
        .iter()
        .map(|x| x.as_deref().and_then(|s| s.trim().parse().ok()))
        .collect()
}
