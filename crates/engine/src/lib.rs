//! Transform orchestration: timeframe -> index -> rolling -> trim -> dtypes -> step -> verify.

pub mod driver;
pub mod error;
pub mod event;
pub mod logging;
pub mod sink;
pub mod transform;

pub use error::{EngineError, Result};
pub use sink::TracingSink;
pub use transform::{transform, transform_ohlc};
