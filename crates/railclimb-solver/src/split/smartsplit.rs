//! Optimal segmentation by memoized backtracking.
//!
//! `solve(start, budget)` returns the fewest segments covering
//! `forces[start..]` using at most `budget` segments. Prefixes are tried
//! longest first, and every climbable prefix recurses on the remaining
//! suffix with a budget one tighter than the best split found so far.
//!
//! Two prunings keep this far below the exhaustive bound:
//!
//! - After a climbable prefix has been explored, shorter prefixes that only
//!   drop trailing non-positive units are skipped. Such a prefix leaves a
//!   longer suffix whose extra leading units only push down the first
//!   segment's sum, so it can never need fewer segments.
//! - The memo holds, per suffix length, either the optimal split of that
//!   suffix or the largest budget known to be insufficient for it.
//!
//! Pending calls live on an explicit work stack rather than the call
//! stack, so cuts needing thousands of segments are fine.

use railclimb_core::error::{check_capacity, Result};
use tracing::trace;

use super::{prefix_sums, Split};

/// Splits `forces` into the minimum number of climbable segments.
///
/// Returns `Ok(None)` when no partition exists.
///
/// # Errors
///
/// Returns an error if `capacity` is not positive.
///
/// # Examples
///
/// ```
/// use railclimb_solver::split::smartsplit;
///
/// // Longest-first would take (3, 1, 1); leaving the strong unit to the
/// // tail does better.
/// let split = smartsplit(10.0, &[-8.0, -9.0, 15.0, -8.0, -5.0]).unwrap().unwrap();
/// assert_eq!(split.lengths(), &[1, 4]);
/// ```
pub fn smartsplit(capacity: f64, forces: &[f64]) -> Result<Option<Split>> {
    check_capacity(capacity)?;

    let mut search = SmartSearch::new(capacity, forces);
    let lengths = search.solve(0, forces.len());
    trace!(
        event = "smartsplit_end",
        memo_hits = search.memo_hits,
        feasible = lengths.is_some(),
    );
    Ok(lengths.map(Split::from_lengths))
}

#[derive(Debug, Clone)]
enum Memo {
    /// No split exists within this many segments.
    Bound(usize),
    /// Optimal split of the suffix.
    Best(Vec<usize>),
}

struct SmartSearch<'a> {
    capacity: f64,
    forces: &'a [f64],
    prefix: Vec<f64>,
    // Indexed by suffix length - 1.
    memo: Vec<Memo>,
    memo_hits: u64,
}

/// A pending `solve(start, max_parts)`.
struct Frame {
    start: usize,
    max_parts: usize,
    // Next prefix end to try; while a suffix is being solved, the end of
    // the prefix waiting for it.
    end: usize,
    best: Option<Vec<usize>>,
    best_len: usize,
}

impl Frame {
    fn new(start: usize, max_parts: usize, end: usize) -> Self {
        Self {
            start,
            max_parts,
            end,
            best: None,
            best_len: max_parts + 1,
        }
    }
}

impl<'a> SmartSearch<'a> {
    fn new(capacity: f64, forces: &'a [f64]) -> Self {
        Self {
            capacity,
            forces,
            prefix: prefix_sums(forces),
            memo: vec![Memo::Bound(0); forces.len()],
            memo_hits: 0,
        }
    }

    fn climbable(&self, start: usize, end: usize) -> bool {
        self.capacity + (self.prefix[end] - self.prefix[start]) > 0.0
    }

    /// Fewest segments covering `forces[start..]`, if at most `max_parts`.
    fn solve(&mut self, start: usize, max_parts: usize) -> Option<Vec<usize>> {
        if let Some(known) = self.lookup(start, max_parts) {
            return known;
        }

        let n = self.forces.len();
        let mut stack = vec![Frame::new(start, max_parts, n)];
        // Result of the last finished frame, consumed by its parent.
        let mut returned: Option<Option<Vec<usize>>> = None;

        while let Some(frame) = stack.last_mut() {
            match returned.take() {
                Some(Some(rest)) => {
                    let mut split = Vec::with_capacity(rest.len() + 1);
                    split.push(frame.end - frame.start);
                    split.extend(rest);
                    if split.len() < frame.best_len {
                        frame.best_len = split.len();
                        trace!(
                            event = "segment",
                            start = frame.start,
                            len = frame.end - frame.start,
                            parts = frame.best_len,
                        );
                        frame.best = Some(split);
                    }
                    if frame.best_len == 1 {
                        frame.end = frame.start;
                    }
                    // Drop trailing units up to and including the last
                    // force provider.
                    while frame.end > frame.start {
                        frame.end -= 1;
                        if self.forces[frame.end] > 0.0 {
                            break;
                        }
                    }
                }
                Some(None) => frame.end -= 1,
                None => {}
            }

            while frame.end > frame.start && !self.climbable(frame.start, frame.end) {
                frame.end -= 1;
            }

            if frame.end > frame.start {
                let end = frame.end;
                let budget = frame.best_len.saturating_sub(2);
                match self.lookup(end, budget) {
                    Some(known) => returned = Some(known),
                    None => stack.push(Frame::new(end, budget, n)),
                }
                continue;
            }

            let (done_start, done_parts, best) = (frame.start, frame.max_parts, frame.best.take());
            stack.pop();
            self.record(done_start, done_parts, &best);
            returned = Some(best);
        }
        returned.flatten()
    }

    /// Answers `solve(start, max_parts)` without searching when the memo or
    /// a trivial case settles it.
    fn lookup(&mut self, start: usize, max_parts: usize) -> Option<Option<Vec<usize>>> {
        let remaining = self.forces.len() - start;
        if remaining == 0 {
            return Some(Some(Vec::new()));
        }

        match &self.memo[remaining - 1] {
            Memo::Best(split) => {
                self.memo_hits += 1;
                return Some((split.len() <= max_parts).then(|| split.clone()));
            }
            Memo::Bound(bound) if *bound >= max_parts => {
                self.memo_hits += 1;
                return Some(None);
            }
            Memo::Bound(_) => {}
        }

        if max_parts == 1 {
            let result = self
                .climbable(start, self.forces.len())
                .then(|| vec![remaining]);
            self.record(start, max_parts, &result);
            return Some(result);
        }
        None
    }

    fn record(&mut self, start: usize, max_parts: usize, result: &Option<Vec<usize>>) {
        let slot = self.forces.len() - start - 1;
        self.memo[slot] = match result {
            Some(split) => Memo::Best(split.clone()),
            None => Memo::Bound(max_parts),
        };
    }
}
