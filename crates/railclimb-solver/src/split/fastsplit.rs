//! Longest-prefix-first segmentation.

use railclimb_core::error::{check_capacity, Result};
use smallvec::SmallVec;
use tracing::trace;

use super::{prefix_sums, Split};

/// Splits `forces` by repeatedly taking the longest climbable prefix.
///
/// With `collect_net`, every positive force in a taken segment is added to
/// the capacity for the following segments, modeling self-sufficient units
/// joining the power once they are at the top. Capacity then only grows,
/// which makes longest-first optimal. Without re-collection on mixed-sign
/// forces this is a heuristic; use [`smartsplit`](super::smartsplit) for an
/// exact answer. O(n²).
///
/// # Errors
///
/// Returns an error if `capacity` is not positive.
pub fn fastsplit(capacity: f64, forces: &[f64], collect_net: bool) -> Result<Option<Split>> {
    check_capacity(capacity)?;

    let prefix = prefix_sums(forces);
    let n = forces.len();
    let mut capacity = capacity;
    let mut lengths: SmallVec<[usize; 8]> = SmallVec::new();
    let mut start = 0;
    while start < n {
        let Some(end) = (start + 1..=n)
            .rev()
            .find(|&end| capacity + (prefix[end] - prefix[start]) > 0.0)
        else {
            return Ok(None);
        };
        lengths.push(end - start);
        if collect_net {
            let collected: f64 = forces[start..end].iter().filter(|&&f| f > 0.0).sum();
            capacity += collected;
            trace!(event = "segment", start = start, len = end - start, capacity = capacity);
        }
        start = end;
    }
    Ok(Some(Split { lengths }))
}
