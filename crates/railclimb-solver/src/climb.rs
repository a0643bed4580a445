//! Multi-trip climb planning.
//!
//! The leading power block is chosen by [`collect_front_len`], the rest of
//! the train (the cut) is segmented by [`compute_split`], and every subcut
//! becomes one trip: power and subcut go up, power alone comes back down.
//! The final trip has no return leg.

use std::slice;

use railclimb_core::error::{check_grade, check_power_ratio, Result};
use railclimb_core::stock::{Calculative, Train};
use tracing::{debug, info};

use crate::cluster::collect_front_len;
use crate::split::compute_split;

/// One up-and-down movement.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// Train making its way up the grade.
    pub ascending: Train,
    /// Train heading back down, or `None` once everything is at the top.
    pub returning: Option<Train>,
}

/// Ordered trips relaying a whole train up a grade.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClimbPlan {
    trips: Vec<Trip>,
    initial_power: Train,
    final_power: Train,
}

impl ClimbPlan {
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Number of trips, same as [`len`](Self::len).
    pub fn trip_count(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Trip> {
        self.trips.iter()
    }

    /// Number of trips with a return leg.
    pub fn round_trip_count(&self) -> usize {
        self.trips.iter().filter(|t| t.returning.is_some()).count()
    }

    /// Power block of the first trip.
    pub fn initial_power(&self) -> &Train {
        &self.initial_power
    }

    /// Power block after the last trip, including re-collected units.
    pub fn final_power(&self) -> &Train {
        &self.final_power
    }
}

impl<'a> IntoIterator for &'a ClimbPlan {
    type Item = &'a Trip;
    type IntoIter = slice::Iter<'a, Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ClimbPlan {
    type Item = Trip;
    type IntoIter = std::vec::IntoIter<Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.trips.into_iter()
    }
}

/// Computes the sequence of trips needed to bring `train` up `grade`.
///
/// A siding at the top of the grade is needed unless the plan has a single
/// trip.
///
/// * `grade` - Gradient as a ratio, e.g. 0.10 for a 10% grade
/// * `power_ratio` - Maximum throttle to require
/// * `collect_net` - Whenever a unit that can make the grade on its own is
///   brought up, it joins the power for the following trips. This
///   rearranges the train.
///
/// Returns `Ok(None)` when the train cannot be brought up at all: the power
/// block cannot start itself, or the cut has no climbable split.
///
/// # Errors
///
/// Returns an error for a negative or non-finite grade, or a power ratio
/// outside (0, 1].
///
/// # Examples
///
/// ```
/// use railclimb_core::prefab::{self, Cargo, CargoLoad, Difficulty};
/// use railclimb_core::stock::{concat, repeat};
/// use railclimb_solver::compute_climb;
///
/// let coal = prefab::HOPPER
///     .load(CargoLoad::full(Cargo::Coal), Difficulty::Realistic)
///     .unwrap();
/// let train = concat(prefab::CLIMAX.build(), repeat(coal, 6));
///
/// let plan = compute_climb(&train, 0.1, 1.0, false).unwrap().unwrap();
/// assert!(plan.len() > 1);
/// assert!(plan.trips().last().unwrap().returning.is_none());
/// ```
pub fn compute_climb(
    train: &Train,
    grade: f64,
    power_ratio: f64,
    collect_net: bool,
) -> Result<Option<ClimbPlan>> {
    check_grade(grade)?;
    check_power_ratio(power_ratio)?;

    info!(
        event = "climb_start",
        units = train.len(),
        grade = grade,
        power_ratio = power_ratio,
        collect_net = collect_net,
    );

    if train.is_empty() {
        info!(event = "climb_end", trips = 0usize);
        return Ok(Some(ClimbPlan::default()));
    }

    let power_len = collect_front_len(train, grade, power_ratio);
    let power = train.slice(0..power_len);
    let cut = train.slice(power_len..train.len());

    if !power.can_climb(grade, power_ratio) {
        info!(
            event = "climb_infeasible",
            reason = "power block cannot start",
            power_units = power.len(),
            net_force = power.net_force(grade, power_ratio),
        );
        return Ok(None);
    }

    if cut.is_empty() {
        info!(event = "climb_end", trips = 1usize);
        return Ok(Some(ClimbPlan {
            trips: vec![Trip {
                ascending: power.clone(),
                returning: None,
            }],
            initial_power: power.clone(),
            final_power: power,
        }));
    }

    let Some(split) = compute_split(&power, &cut, grade, power_ratio, collect_net)? else {
        info!(
            event = "climb_infeasible",
            reason = "no climbable split",
            power_units = power.len(),
            cut_units = cut.len(),
        );
        return Ok(None);
    };

    let mut trips = Vec::with_capacity(split.len());
    let mut trip_power = power.clone();
    for subcut in split.subcuts(&cut) {
        let ascending = trip_power.join(&subcut);
        let returning = trip_power.clone();
        if collect_net {
            let collected: Train = subcut
                .iter()
                .filter(|x| x.can_climb(grade, power_ratio))
                .cloned()
                .collect();
            if !collected.is_empty() {
                debug!(
                    event = "power_collected",
                    trip = trips.len(),
                    units = collected.len(),
                    net_force = collected.net_force(grade, power_ratio),
                );
                trip_power = trip_power.join(&collected);
            }
        }
        trips.push(Trip {
            ascending,
            returning: Some(returning),
        });
    }
    if let Some(last) = trips.last_mut() {
        last.returning = None;
    }

    info!(event = "climb_end", trips = trips.len());
    Ok(Some(ClimbPlan {
        trips,
        initial_power: power,
        final_power: trip_power,
    }))
}
