//! CSV in/out for OHLC frames.
//!
//! Схема фиксирована: `timestamp,open,high,low,close,volume`,
//! timestamp Int64, остальное Float32.

pub mod error;
pub mod options;
pub mod read;
pub mod write;

pub use error::LoadError;
pub use options::{Header, ReadOptions};
pub use read::{read_ohlc, read_ohlc_csv};
pub use write::{write_ohlc, write_ohlc_csv};

#[cfg(test)]
mod tests;
