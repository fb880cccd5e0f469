#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TransitionCause {
    // Inputs
    TimeframeResolved,
    IndexNormalized,

    // Core
    Aggregated,
    LeadingTrimmed,
    TypesRestored,
    Subsampled,

    // Output
    Verified,

    // Any stage
    Error,
}
