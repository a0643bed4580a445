//! Brute-force reference for the minimum partition problem.
//!
//! Enumerates all `2^(n-1)` ways of cutting `n` forces into contiguous
//! segments. Only meant for short sequences.

/// Checks that `lengths` partitions `forces` into climbable segments.
///
/// A segment's sum is the difference of running prefix sums, matching the
/// rounding of the solvers, so exact-boundary cases such as `C + sum == 0`
/// are judged the same way everywhere.
pub fn is_valid_split(capacity: f64, forces: &[f64], lengths: &[usize]) -> bool {
    if lengths.iter().sum::<usize>() != forces.len() || lengths.contains(&0) {
        return false;
    }
    let mut prefix = Vec::with_capacity(forces.len() + 1);
    let mut total = 0.0;
    prefix.push(total);
    for &force in forces {
        total += force;
        prefix.push(total);
    }

    let mut start = 0;
    for &len in lengths {
        let end = start + len;
        if !(capacity + (prefix[end] - prefix[start]) > 0.0) {
            return false;
        }
        start = end;
    }
    true
}

/// Fewest segments over every partition of `forces`, or `None` when no
/// partition is climbable. An empty sequence needs zero segments.
///
/// # Panics
///
/// Panics for more than 20 forces.
pub fn min_partition(capacity: f64, forces: &[f64]) -> Option<usize> {
    let n = forces.len();
    if n == 0 {
        return Some(0);
    }
    assert!(n <= 20, "oracle is exponential, got {n} forces");

    let mut best: Option<usize> = None;
    for mask in 0u32..(1 << (n - 1)) {
        // Bit i set: cut between force i and force i + 1.
        let mut lengths = Vec::with_capacity(n);
        let mut len = 0;
        for i in 0..n {
            len += 1;
            if i == n - 1 || mask & (1 << i) != 0 {
                lengths.push(len);
                len = 0;
            }
        }
        if is_valid_split(capacity, forces, &lengths) {
            best = Some(best.map_or(lengths.len(), |b| b.min(lengths.len())));
        }
    }
    best
}
