//! Linear greedy segmentation.

use railclimb_core::error::{check_capacity, Result};
use smallvec::SmallVec;

use super::{prefix_sums, Split};

/// Splits `forces` by extending each segment as far as it stays climbable.
///
/// Optimal whenever every force is non-positive: a segment's sum then only
/// falls as it grows, so the latest safe end is also the best one. Segment
/// sums are prefix-sum differences, the same arithmetic the other
/// algorithms use, so all of them agree on boundary cases. O(n).
///
/// # Errors
///
/// Returns an error if `capacity` is not positive.
///
/// # Examples
///
/// ```
/// use railclimb_solver::split::linear_split;
///
/// let split = linear_split(100.0, &[-30.0, -40.0, -20.0, -50.0]).unwrap().unwrap();
/// assert_eq!(split.lengths(), &[3, 1]);
/// ```
pub fn linear_split(capacity: f64, forces: &[f64]) -> Result<Option<Split>> {
    check_capacity(capacity)?;

    let prefix = prefix_sums(forces);
    let climbable = |start: usize, end: usize| capacity + (prefix[end] - prefix[start]) > 0.0;

    let mut lengths: SmallVec<[usize; 8]> = SmallVec::new();
    let mut start = 0;
    for end in 1..=forces.len() {
        if climbable(start, end) {
            continue;
        }
        // Close the segment before this unit and restart with it alone.
        let unit = end - 1;
        if unit == start || !climbable(unit, end) {
            return Ok(None);
        }
        lengths.push(unit - start);
        start = unit;
    }
    if start < forces.len() {
        lengths.push(forces.len() - start);
    }
    Ok(Some(Split { lengths }))
}
