//! Trailing-window OHLC aggregation.
//!
//! Окно из `w` строк сворачивается в один бар:
//! open первый, high max, low min, close последний, volume сумма.
//! Пересчёт O(1) амортизированно на строку (two-stack queue).

pub mod aggregate;
pub mod bar;
pub mod window;

pub use aggregate::{aggregate, to_frame};
pub use bar::WindowBar;
pub use window::{Combine, SlidingWindow};
