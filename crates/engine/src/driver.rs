use state_machine::cause::TransitionCause;
use state_machine::state::TransformState;
use state_machine::transition::{TransitionError, transition};

use crate::event::EngineEvent;

/// Current pipeline stage plus the trail of what happened.
///
/// Сам ничего не считает: только двигает state machine и пишет события.
#[derive(Debug)]
pub struct Driver {
    state: TransformState,
    events: Vec<EngineEvent>,
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver {
    pub fn new() -> Self {
        Self {
            state: TransformState::NormalizeTimeframe,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> TransformState {
        self.state
    }

    pub fn advance(&mut self, cause: TransitionCause) -> Result<TransformState, TransitionError> {
        let from = self.state;
        let to = transition(from, cause)?;
        self.events.push(EngineEvent::Transition { from, cause, to });
        self.state = to;
        Ok(to)
    }

    pub fn rows(&mut self, rows: usize) {
        self.events.push(EngineEvent::Rows {
            stage: self.state,
            rows,
        });
    }

    pub fn log(&mut self, msg: impl Into<String>) {
        self.events.push(EngineEvent::Log(msg.into()));
    }

    /// Move to `Failed` unless the run already ended.
    pub fn fail(&mut self) {
        if self.state.is_terminal() {
            return;
        }
        if let Err(err) = self.advance(TransitionCause::Error) {
            tracing::error!(state = ?self.state, %err, "failure not recorded");
            self.log(format!("failure not recorded: {err}"));
        }
    }

    pub fn into_events(self) -> Vec<EngineEvent> {
        self.events
    }
}
