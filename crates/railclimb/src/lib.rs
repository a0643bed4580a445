//! railclimb - relay planning for trains on a grade
//!
//! Load a climb request, build the train from the prefab catalog and get
//! back the trips needed to bring everything to the top.
//!
//! # Example
//!
//! ```rust
//! use railclimb::prelude::*;
//!
//! let config = ClimbConfig::new()
//!     .with_grade(0.06)
//!     .with_stock(StockEntry::new("heisler"))
//!     .with_stock(StockEntry::new("boxcar").with_count(4));
//!
//! let plan = railclimb::plan(&config).unwrap().unwrap();
//! assert_eq!(plan.trips().last().unwrap().returning, None);
//! ```

pub use railclimb_config::{ClimbConfig, ConfigError, StockEntry};
pub use railclimb_core::{
    concat, prefab, repeat, Calculative, Car, CarGroup, Cargo, CargoLoad, Difficulty,
    RailclimbError, RollingStock, TractiveCar, Train, DEFAULT_POWER_RATIO, FRICTION,
};
pub use railclimb_core::force;
pub use railclimb_solver::{
    cluster, compute_climb, compute_split, split, ClimbPlan, Split, SplitStrategy, Trip,
};

mod planner;
pub use planner::{plan, plan_file, PlanError};

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{compute_climb, compute_split, ClimbPlan, Split, Trip};
    pub use super::{concat, repeat, Calculative, Car, CarGroup, RollingStock, TractiveCar, Train};
    pub use super::{Cargo, CargoLoad, ClimbConfig, Difficulty, StockEntry};
}
