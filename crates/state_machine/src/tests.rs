use crate::cause::TransitionCause;
use crate::state::TransformState;
use crate::transition::{TransitionError, transition};

#[test]
fn happy_path_full_pipeline() {
    let mut s = TransformState::NormalizeTimeframe;

    s = transition(s, TransitionCause::TimeframeResolved).unwrap();
    s = transition(s, TransitionCause::IndexNormalized).unwrap();
    s = transition(s, TransitionCause::Aggregated).unwrap();
    s = transition(s, TransitionCause::LeadingTrimmed).unwrap();
    s = transition(s, TransitionCause::TypesRestored).unwrap();
    s = transition(s, TransitionCause::Subsampled).unwrap();
    s = transition(s, TransitionCause::Verified).unwrap();

    assert_eq!(s, TransformState::Done);
    assert!(s.is_terminal());
}

#[test]
fn any_running_stage_can_fail() {
    for s in [
        TransformState::NormalizeTimeframe,
        TransformState::NormalizeIndex,
        TransformState::Aggregate,
        TransformState::TrimLeadingUndefined,
        TransformState::RestoreTypes,
        TransformState::Subsample,
        TransformState::Verify,
    ] {
        assert_eq!(
            transition(s, TransitionCause::Error),
            Ok(TransformState::Failed)
        );
    }
}

#[test]
fn terminal_states_are_final() {
    assert!(transition(TransformState::Done, TransitionCause::Error).is_err());
    assert!(transition(TransformState::Failed, TransitionCause::TimeframeResolved).is_err());
}

#[test]
fn cannot_skip_trimming() {
    assert_eq!(
        transition(TransformState::Aggregate, TransitionCause::TypesRestored),
        Err(TransitionError::IllegalTransition {
            from: TransformState::Aggregate,
            cause: TransitionCause::TypesRestored,
        })
    );
}
