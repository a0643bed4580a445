//! railclimb Core - Force model and rolling-stock types
//!
//! This crate provides the fundamental abstractions for railclimb:
//! - The static starting-force model for a mass on a grade
//! - Rolling stock (cars, tractive cars, car groups) and ordered trains
//! - A prefab catalog of locomotives, cars and cargo

pub mod error;
pub mod force;
pub mod prefab;
pub mod stock;

pub use error::{RailclimbError, Result};
pub use force::{DEFAULT_POWER_RATIO, FRICTION};
pub use prefab::{Cargo, CargoLoad, CarTemplate, Difficulty, LocomotiveTemplate};
pub use stock::{concat, repeat, Calculative, Car, CarGroup, RollingStock, TractiveCar, Train};
