//! Column types and well-known column names.
//!
//! Цель:
//! - зафиксировать схему OHLC таблицы в одном месте
//! - сделать приведение типов (restore dtypes) явным

use std::fmt;

pub const TIMESTAMP: &str = "timestamp";
pub const OPEN: &str = "open";
pub const HIGH: &str = "high";
pub const LOW: &str = "low";
pub const CLOSE: &str = "close";
pub const VOLUME: &str = "volume";

/// Полная схема OHLC таблицы в каноническом порядке
pub const OHLC_COLUMNS: [&str; 6] = [TIMESTAMP, OPEN, HIGH, LOW, CLOSE, VOLUME];

/// Physical type of a column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DType {
    Int32,
    Int64,
    Float32,
    Float64,
    Utf8,
}

impl DType {
    pub fn is_integer(self) -> bool {
        matches!(self, DType::Int32 | DType::Int64)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
            DType::Utf8 => "utf8",
        };
        f.write_str(name)
    }
}
