/// Stage of a single transform call.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TransformState {
    NormalizeTimeframe,
    NormalizeIndex,
    Aggregate,
    TrimLeadingUndefined,
    RestoreTypes,
    Subsample,
    Verify,
    Done,
    Failed,
}

impl TransformState {
    pub fn is_terminal(self) -> bool {
        matches!(self, TransformState::Done | TransformState::Failed)
    }
}
