use std::collections::HashMap;

use ohlc_core::{Frame, OhlcError, Result};

/// Most frequent difference between successive timestamps, in seconds.
///
/// При равенстве частот побеждает разница, встреченная первой.
/// Null timestamps are skipped.
pub fn infer_native_interval(frame: &Frame) -> Result<i64> {
    let timestamps: Vec<i64> = frame.timestamps()?.into_iter().flatten().collect();
    if timestamps.len() < 2 {
        return Err(OhlcError::InsufficientData(
            "At least two timestamps are required to infer the time step.".to_string(),
        ));
    }

    // diff -> (count, first position); разница насыщается на краях i64
    let mut counts: HashMap<i64, (usize, usize)> = HashMap::new();
    for (pos, w) in timestamps.windows(2).enumerate() {
        let entry = counts.entry(w[1].saturating_sub(w[0])).or_insert((0, pos));
        entry.0 += 1;
    }

    let (interval, _) = counts
        .into_iter()
        .max_by(|(_, (ca, pa)), (_, (cb, pb))| ca.cmp(cb).then(pb.cmp(pa)))
        .ok_or_else(|| OhlcError::InsufficientData("no timestamp differences".to_string()))?;

    tracing::debug!(interval, "inferred native interval");
    Ok(interval)
}
