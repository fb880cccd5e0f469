use thiserror::Error;

use crate::cause::TransitionCause;
use crate::state::TransformState;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("illegal transition from {from:?} on {cause:?}")]
    IllegalTransition {
        from: TransformState,
        cause: TransitionCause,
    },
}

pub fn transition(
    state: TransformState,
    cause: TransitionCause,
) -> Result<TransformState, TransitionError> {
    let next = match (state, cause) {
        // --- Inputs ---------------------------------------------------------
        (TransformState::NormalizeTimeframe, TransitionCause::TimeframeResolved) => {
            TransformState::NormalizeIndex
        }
        (TransformState::NormalizeIndex, TransitionCause::IndexNormalized) => {
            TransformState::Aggregate
        }

        // --- Core -----------------------------------------------------------
        (TransformState::Aggregate, TransitionCause::Aggregated) => {
            TransformState::TrimLeadingUndefined
        }
        (TransformState::TrimLeadingUndefined, TransitionCause::LeadingTrimmed) => {
            TransformState::RestoreTypes
        }
        (TransformState::RestoreTypes, TransitionCause::TypesRestored) => TransformState::Subsample,
        (TransformState::Subsample, TransitionCause::Subsampled) => TransformState::Verify,

        // --- Output ---------------------------------------------------------
        (TransformState::Verify, TransitionCause::Verified) => TransformState::Done,

        // --- Failure --------------------------------------------------------
        (s, TransitionCause::Error) if !s.is_terminal() => TransformState::Failed,

        // --- Illegal --------------------------------------------------------
        _ => return Err(TransitionError::IllegalTransition { from: state, cause }),
    };

    Ok(next)
}
