pub mod cause;
pub mod state;
pub mod transition;

pub use cause::TransitionCause;
pub use state::TransformState;
pub use transition::{TransitionError, transition};

#[cfg(test)]
mod tests;
