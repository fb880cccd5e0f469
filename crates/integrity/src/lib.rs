//! Data integrity: native interval inference and non-fatal checks.

pub mod check;
pub mod interval;

pub use check::{IntegrityReport, check_integrity};
pub use interval::infer_native_interval;

/// Сколько примеров (дубликатов, разрывов) кладём в `Finding`
pub const MAX_SAMPLES: usize = 5;
