//! Core domain types.
//!
//! - columnar `Frame` с nullable колонками
//! - `Candle` как строковое представление одной OHLC строки
//! - общий `OhlcError` для всех библиотечных крейтов
//! - `Sink` / `Finding` для предупреждений без глобального логгера

pub mod candle;
pub mod column;
pub mod error;
pub mod frame;
pub mod sink;
pub mod types;

pub use candle::Candle;
pub use column::Column;
pub use error::{OhlcError, Result};
pub use frame::Frame;
pub use sink::{Discard, Finding, Gap, Sink};
pub use types::DType;

#[cfg(test)]
mod tests;
