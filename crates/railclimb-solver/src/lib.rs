//! railclimb Solver Engine
//!
//! This crate plans how a train is relayed up a grade:
//! - Cluster selection of the leading power block
//! - Segmentation of the remaining cut into climbable subcuts
//! - Trip orchestration with optional power re-collection
//!
//! Logging levels:
//! - **INFO**: Climb start/end and infeasible plans
//! - **DEBUG**: Strategy selection, split results, collected power
//! - **TRACE**: Smartsplit memo hits and accepted segments

pub mod climb;
pub mod cluster;
pub mod split;


pub use climb::{compute_climb, ClimbPlan, Trip};
pub use cluster::{
    cluster_forces, cluster_net_forces, collect_back_range, collect_front_len,
    collect_front_range, collect_mid_range, Cluster,
};
pub use split::{
    compute_split, fastsplit, linear_split, smartsplit, split_forces, Split, SplitStrategy,
};
