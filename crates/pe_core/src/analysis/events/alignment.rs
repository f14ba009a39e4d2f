//! Frame alignment checks shared by every pass over the input signals.

use crate::error::{EventError, Result};
use crate::models::{FrameAssignment, Holder};

/// Verify that the possession and assignment signals cover the same frames.
///
/// Returns the common frame count. Mismatched lengths are rejected before any
/// processing; inputs are never truncated or padded.
pub fn ensure_aligned(possession: &[Holder], assignment: &[FrameAssignment]) -> Result<usize> {
    if possession.len() != assignment.len() {
        tracing::warn!(
            possession = possession.len(),
            assignment = assignment.len(),
            "rejecting misaligned input signals"
        );
        return Err(EventError::InvalidInput {
            possession: possession.len(),
            assignment: assignment.len(),
        });
    }
    Ok(possession.len())
}

/// Iterate `(frame, holder, assignment)` triples of aligned signals.
pub(crate) fn frames<'a>(
    possession: &'a [Holder],
    assignment: &'a [FrameAssignment],
) -> impl Iterator<Item = (usize, Holder, &'a FrameAssignment)> + 'a {
    possession
        .iter()
        .zip(assignment.iter())
        .enumerate()
        .map(|(frame, (holder, teams))| (frame, *holder, teams))
}
