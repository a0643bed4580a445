//! Segmentation of a cut into climbable subcuts.
//!
//! Given a head capacity `C > 0` and the net forces `f₁..fₙ` of the units
//! in a cut, find the fewest contiguous segments such that every segment
//! satisfies `C + sum(segment) > 0`.
//!
//! # Algorithms
//!
//! - **Linear**: greedy maximal extension, O(n). Optimal when every force
//!   is non-positive.
//! - **Fastsplit**: longest climbable prefix first, O(n²). Optimal with
//!   power re-collection; a heuristic otherwise.
//! - **Smartsplit**: memoized backtracking, O(n²) worst case. Always
//!   optimal.
//!
//! [`split_forces`] picks whichever of them is cheapest while still exact
//! for the input at hand.
//!
//! Infeasible inputs yield `Ok(None)`. A non-positive capacity is a
//! precondition failure and yields an error.

mod fastsplit;
mod linear;
mod smartsplit;


use std::fmt;
use std::ops::Range;

use railclimb_core::error::{check_grade, check_power_ratio, Result};
use railclimb_core::stock::{Calculative, Train};
use smallvec::SmallVec;
use tracing::debug;

pub use fastsplit::fastsplit;
pub use linear::linear_split;
pub use smartsplit::smartsplit;

/// Segment lengths, in cut order.
///
/// Every length is positive and the lengths sum to the cut length.
///
/// # Examples
///
/// ```
/// use railclimb_solver::split::Split;
///
/// let split = Split::from_lengths([3, 1, 2]);
/// let ranges: Vec<_> = split.ranges().collect();
/// assert_eq!(ranges, vec![0..3, 3..4, 4..6]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Split {
    lengths: SmallVec<[usize; 8]>,
}

impl Split {
    /// The split of an empty cut.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_lengths(lengths: impl IntoIterator<Item = usize>) -> Self {
        let lengths: SmallVec<[usize; 8]> = lengths.into_iter().collect();
        debug_assert!(lengths.iter().all(|&len| len > 0));
        Self { lengths }
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Number of units covered by all segments.
    pub fn unit_count(&self) -> usize {
        self.lengths.iter().sum()
    }

    /// Half-open index range of every segment.
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.lengths.iter().scan(0, |start, &len| {
            let range = *start..*start + len;
            *start += len;
            Some(range)
        })
    }

    /// Slices `cut` into one train per segment.
    ///
    /// # Panics
    ///
    /// Panics if the split covers more units than `cut` has.
    pub fn subcuts(&self, cut: &Train) -> Vec<Train> {
        self.ranges().map(|range| cut.slice(range)).collect()
    }

    /// The ascending train of every trip: power coupled ahead of each
    /// subcut.
    ///
    /// With `collect_tractive`, the tractive units of every subcut join the
    /// power block for the following trips.
    pub fn trips(&self, power: &Train, cut: &Train, collect_tractive: bool) -> Vec<Train> {
        let mut power = power.clone();
        let mut trips = Vec::with_capacity(self.len());
        for subcut in self.subcuts(cut) {
            trips.push(power.join(&subcut));
            if collect_tractive {
                let tractive: Train = subcut.tractive_units().cloned().collect();
                power = power.join(&tractive);
            }
        }
        trips
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, len) in self.lengths.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{len}")?;
        }
        write!(f, ")")
    }
}

/// Segmentation algorithm chosen for a force sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitStrategy {
    /// All forces non-positive: linear greedy.
    Linear,
    /// Positive forces with re-collection: fastsplit collecting net force.
    FastCollect,
    /// Positive forces without re-collection: smartsplit.
    Smart,
}

impl SplitStrategy {
    /// Picks the cheapest algorithm that is exact for `forces`.
    pub fn select(forces: &[f64], collect_net: bool) -> Self {
        if forces.iter().all(|&f| f <= 0.0) {
            SplitStrategy::Linear
        } else if collect_net {
            SplitStrategy::FastCollect
        } else {
            SplitStrategy::Smart
        }
    }
}

impl fmt::Display for SplitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitStrategy::Linear => write!(f, "linear"),
            SplitStrategy::FastCollect => write!(f, "fastsplit"),
            SplitStrategy::Smart => write!(f, "smartsplit"),
        }
    }
}

/// Splits raw forces with the strategy [`SplitStrategy::select`] picks.
pub fn split_forces(capacity: f64, forces: &[f64], collect_net: bool) -> Result<Option<Split>> {
    let strategy = SplitStrategy::select(forces, collect_net);
    debug!(
        event = "split_start",
        strategy = %strategy,
        capacity = capacity,
        units = forces.len(),
    );

    let split = match strategy {
        SplitStrategy::Linear => linear_split(capacity, forces)?,
        SplitStrategy::FastCollect => fastsplit(capacity, forces, true)?,
        SplitStrategy::Smart => smartsplit(capacity, forces)?,
    };

    match &split {
        Some(split) => debug!(event = "split_end", segments = split.len(), split = %split),
        None => debug!(event = "split_end", segments = "infeasible"),
    }
    Ok(split)
}

/// Computes splits of `cut` such that `power` can pull each subcut up
/// `grade`.
///
/// * `power` - Unit(s) used for the climb; its net force is the capacity
/// * `cut` - Units that need to be brought up the grade
/// * `power_ratio` - Maximum throttle to use
/// * `collect_net` - Whether units in a completed subcut that can make the
///   grade on their own join the power for later subcuts
pub fn compute_split(
    power: &impl Calculative,
    cut: &Train,
    grade: f64,
    power_ratio: f64,
    collect_net: bool,
) -> Result<Option<Split>> {
    check_grade(grade)?;
    check_power_ratio(power_ratio)?;

    let capacity = power.net_force(grade, power_ratio);
    let forces: Vec<f64> = cut.iter().map(|x| x.net_force(grade, power_ratio)).collect();
    split_forces(capacity, &forces, collect_net)
}

// prefix[i] is the sum of the first i forces.
fn prefix_sums(forces: &[f64]) -> Vec<f64> {
    let mut prefix = Vec::with_capacity(forces.len() + 1);
    let mut total = 0.0;
    prefix.push(total);
    for &force in forces {
        total += force;
        prefix.push(total);
    }
    prefix
}
