//! Contiguous-run clustering and power block selection.
//!
//! A train is grouped into maximal runs of elements that either all have a
//! strictly positive net force or all have zero or negative net force.
//! The selection queries then pick the run-aligned range with the best
//! total net force, which is the natural block to use as power.

use std::ops::Range;

use railclimb_core::stock::{Calculative, Train};

/// A maximal run of elements sharing a net-force sign class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cluster {
    /// Number of elements in the run.
    pub len: usize,
    /// Sum of the elements' net forces.
    pub net_force: f64,
}

/// Groups `train` into runs of same-sign net force on `grade`.
pub fn cluster_forces(train: &Train, grade: f64, power_ratio: f64) -> Vec<Cluster> {
    let forces: Vec<f64> = train
        .iter()
        .map(|x| x.net_force(grade, power_ratio))
        .collect();
    cluster_net_forces(&forces)
}

/// Groups raw net forces into runs of same sign class.
pub fn cluster_net_forces(forces: &[f64]) -> Vec<Cluster> {
    forces
        .chunk_by(|a, b| (*a > 0.0) == (*b > 0.0))
        .map(|run| Cluster {
            len: run.len(),
            net_force: run.iter().sum(),
        })
        .collect()
}

/// Length of the run-aligned prefix of `train` with the best net force.
///
/// Ties keep the shorter prefix. An empty train yields 0.
pub fn collect_front_len(train: &Train, grade: f64, power_ratio: f64) -> usize {
    best_prefix(&cluster_forces(train, grade, power_ratio))
}

/// The front range of `train` with the best net force.
pub fn collect_front_range(train: &Train, grade: f64, power_ratio: f64) -> Range<usize> {
    0..collect_front_len(train, grade, power_ratio)
}

/// The back range of `train` with the best net force.
pub fn collect_back_range(train: &Train, grade: f64, power_ratio: f64) -> Range<usize> {
    let mut clusters = cluster_forces(train, grade, power_ratio);
    clusters.reverse();
    train.len() - best_prefix(&clusters)..train.len()
}

/// The run-aligned range anywhere in `train` with the best net force.
///
/// Candidate ranges are compared in order of start, then end; the first
/// maximum wins. An empty train yields `0..0`.
pub fn collect_mid_range(train: &Train, grade: f64, power_ratio: f64) -> Range<usize> {
    let clusters = cluster_forces(train, grade, power_ratio);
    if clusters.is_empty() {
        return 0..0;
    }

    let mut bounds = Vec::with_capacity(clusters.len() + 1);
    bounds.push((0usize, 0.0f64));
    for cluster in &clusters {
        let (len, force) = bounds[bounds.len() - 1];
        bounds.push((len + cluster.len, force + cluster.net_force));
    }

    let mut best = 0..0;
    let mut best_force = f64::NEG_INFINITY;
    for (i, &(start, start_force)) in bounds.iter().enumerate() {
        for &(end, end_force) in &bounds[i + 1..] {
            let force = end_force - start_force;
            if force > best_force {
                best_force = force;
                best = start..end;
            }
        }
    }
    best
}

// Left-to-right max-scan over accumulated runs; replaces only on strict
// improvement.
fn best_prefix(clusters: &[Cluster]) -> usize {
    let mut best_len = 0;
    let mut best_force = f64::NEG_INFINITY;
    let mut len = 0;
    let mut force = 0.0;
    for cluster in clusters {
        len += cluster.len;
        force += cluster.net_force;
        if force > best_force {
            best_force = force;
            best_len = len;
        }
    }
    best_len
}
