use ohlc_core::OhlcError;
use state_machine::TransitionError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, PartialEq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Ohlc(#[from] OhlcError),

    /// Pipeline bug, never caused by input data.
    #[error(transparent)]
    Transition(#[from] TransitionError),
}

impl EngineError {
    pub fn as_ohlc(&self) -> Option<&OhlcError> {
        match self {
            EngineError::Ohlc(err) => Some(err),
            EngineError::Transition(_) => None,
        }
    }
}
