//! Percentage return over a horizon expressed in minutes.

pub mod fill;
pub mod params;
pub mod pct_return;

pub use fill::FillMethod;
pub use params::ReturnParams;
pub use pct_return::{ReturnSeries, percentage_return};
