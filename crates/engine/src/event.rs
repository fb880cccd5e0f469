use state_machine::cause::TransitionCause;
use state_machine::state::TransformState;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    Transition {
        from: TransformState,
        cause: TransitionCause,
        to: TransformState,
    },
    /// Rows left after a stage.
    Rows { stage: TransformState, rows: usize },
    Log(String),
}
