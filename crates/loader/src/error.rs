use ohlc_core::OhlcError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Ohlc(#[from] OhlcError),

    #[error("Invalid value in row {row}, column `{column}`: {reason}")]
    Parse {
        row: u64,
        column: String,
        reason: String,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    /// The core error, if this is one.
    pub fn as_ohlc(&self) -> Option<&OhlcError> {
        match self {
            LoadError::Ohlc(err) => Some(err),
            _ => None,
        }
    }
}
