use thiserror::Error;

pub type Result<T> = std::result::Result<T, OhlcError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OhlcError {
    /// Malformed timeframe string, carries the offending input verbatim.
    #[error("Invalid timeframe format: {0}")]
    InvalidFormat(String),

    #[error("{0}")]
    NotSupported(String),

    #[error("{0}")]
    OutOfRange(String),

    #[error("{0}")]
    InsufficientData(String),

    #[error("{0}")]
    TypeMismatch(String),

    #[error("{0} column not found in frame.")]
    MissingColumn(String),

    #[error("column `{column}` has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("Input table is empty.")]
    EmptyTable,
}

impl OhlcError {
    /// Окно меньше нативного шага не имеет смысла.
    pub fn timeframe_below_step(requested: i64, base: i64) -> Self {
        OhlcError::OutOfRange(format!(
            "Requested timeframe ({requested}s) should not be smaller than time step ({base}s)."
        ))
    }

    pub fn non_numeric_timestamps() -> Self {
        OhlcError::TypeMismatch(
            "The provided timestamp column contains non-numeric values. \
             All values must be UNIX timestamps (seconds since epoch)."
                .to_string(),
        )
    }

    pub fn fractional_timestamps() -> Self {
        OhlcError::TypeMismatch(
            "The provided timestamp column contains fractional or infinite values. \
             Timestamps must be integer UNIX seconds."
                .to_string(),
        )
    }
}
