//! Prefab catalog of locomotives, cars and cargo.
//!
//! Templates carry no algorithmic content; they only turn catalog constants
//! into [`RollingStock`](crate::stock::RollingStock) values. Cargo mass is
//! scaled by an explicit [`Difficulty`] rather than any global setting.
//!
//! # Examples
//!
//! ```
//! use railclimb_core::prefab::{self, Cargo, CargoLoad, Difficulty};
//! use railclimb_core::stock::{concat, Calculative};
//!
//! let climax = prefab::CLIMAX.build();
//! let coal = prefab::HOPPER
//!     .load(CargoLoad::of(Cargo::Coal, 5), Difficulty::Realistic)
//!     .unwrap();
//!
//! assert_eq!(coal.name(), "Hopper (Coal x5)");
//! assert_eq!(concat(climax, coal).mass(), 55678.0 + 13200.0 + 5.0 * 2205.0);
//! ```

mod cargo;
mod factory;

#[cfg(test)]
mod tests;

pub use cargo::{Cargo, CargoLoad};
pub use factory::{
    CarTemplate, LocomotiveTemplate, BOXCAR, CABOOSE, CLASS70, CLIMAX, EUREKA, FLATCAR_BULKHEAD,
    FLATCAR_ROUND, FLATCAR_STAKES, HANDCAR, HEISLER, HOPPER, MOGUL, PORTER040, PORTER042, TANKER,
};

use crate::error::{RailclimbError, Result};

/// Cargo mass multiplier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Difficulty {
    Casual,
    Easy,
    Medium,
    Hard,
    #[default]
    Realistic,
}

impl Difficulty {
    /// Fraction of the realistic cargo mass that is applied.
    pub fn multiplier(self) -> f64 {
        match self {
            Difficulty::Casual => 0.0,
            Difficulty::Easy => 0.25,
            Difficulty::Medium => 0.5,
            Difficulty::Hard => 0.75,
            Difficulty::Realistic => 1.0,
        }
    }
}

/// Every locomotive template with its lookup key.
pub const LOCOMOTIVES: &[(&str, &LocomotiveTemplate)] = &[
    ("climax", &CLIMAX),
    ("class70", &CLASS70),
    ("heisler", &HEISLER),
    ("mogul", &MOGUL),
    ("eureka", &EUREKA),
    ("porter040", &PORTER040),
    ("porter042", &PORTER042),
    ("handcar", &HANDCAR),
];

/// Every car template with its lookup key.
pub const CARS: &[(&str, &CarTemplate)] = &[
    ("flatcar_round", &FLATCAR_ROUND),
    ("flatcar_stakes", &FLATCAR_STAKES),
    ("flatcar_bulkhead", &FLATCAR_BULKHEAD),
    ("hopper", &HOPPER),
    ("tanker", &TANKER),
    ("boxcar", &BOXCAR),
    ("caboose", &CABOOSE),
];

/// Looks up a locomotive template by key.
pub fn locomotive(key: &str) -> Option<&'static LocomotiveTemplate> {
    LOCOMOTIVES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, template)| *template)
}

/// Looks up a car template by key.
pub fn car(key: &str) -> Option<&'static CarTemplate> {
    CARS.iter().find(|(k, _)| *k == key).map(|(_, template)| *template)
}

/// Looks up a cargo kind by key.
pub fn cargo(key: &str) -> Result<Cargo> {
    Cargo::ALL
        .iter()
        .copied()
        .find(|c| c.key() == key)
        .ok_or_else(|| RailclimbError::UnknownCargo(key.to_string()))
}
