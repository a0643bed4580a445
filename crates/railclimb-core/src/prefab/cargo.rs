//! Cargo kinds and loads.

use std::fmt;

use crate::error::{RailclimbError, Result};

/// A kind of cargo with a fixed per-unit mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Cargo {
    Logs,
    Cordwood,
    Lumber,
    Beams,
    RawIron,
    Rails,
    Pipes,
    OilBarrels,
    IronOre,
    Coal,
    CrudeOil,
    Tools,
}

impl Cargo {
    pub const ALL: [Cargo; 12] = [
        Cargo::Logs,
        Cargo::Cordwood,
        Cargo::Lumber,
        Cargo::Beams,
        Cargo::RawIron,
        Cargo::Rails,
        Cargo::Pipes,
        Cargo::OilBarrels,
        Cargo::IronOre,
        Cargo::Coal,
        Cargo::CrudeOil,
        Cargo::Tools,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Cargo::Logs => "Logs",
            Cargo::Cordwood => "Cordwood",
            Cargo::Lumber => "Lumber",
            Cargo::Beams => "Beams",
            Cargo::RawIron => "Raw Iron",
            Cargo::Rails => "Rails",
            Cargo::Pipes => "Steel Pipes",
            Cargo::OilBarrels => "Oil Barrels",
            Cargo::IronOre => "Iron Ore",
            Cargo::Coal => "Coal",
            Cargo::CrudeOil => "Crude Oil",
            Cargo::Tools => "Crate Tools",
        }
    }

    /// Lookup key, as used in configuration files.
    pub fn key(self) -> &'static str {
        match self {
            Cargo::Logs => "logs",
            Cargo::Cordwood => "cordwood",
            Cargo::Lumber => "lumber",
            Cargo::Beams => "beams",
            Cargo::RawIron => "raw_iron",
            Cargo::Rails => "rails",
            Cargo::Pipes => "pipes",
            Cargo::OilBarrels => "oil_barrels",
            Cargo::IronOre => "iron_ore",
            Cargo::Coal => "coal",
            Cargo::CrudeOil => "crude_oil",
            Cargo::Tools => "tools",
        }
    }

    /// Mass of one unit at realistic difficulty, in pounds.
    pub fn each_mass(self) -> f64 {
        match self {
            Cargo::Logs => 4409.0,
            Cargo::Cordwood => 2646.0,
            Cargo::Lumber => 2976.0,
            Cargo::Beams => 3109.0,
            Cargo::RawIron => 3285.0,
            Cargo::Rails => 1984.0,
            Cargo::Pipes => 3968.0,
            Cargo::OilBarrels => 302.0,
            Cargo::IronOre | Cargo::Coal | Cargo::CrudeOil => 2205.0,
            Cargo::Tools => 220.0,
        }
    }
}

impl fmt::Display for Cargo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A quantity of cargo destined for one car.
///
/// `quantity: None` fills the car to its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CargoLoad {
    pub cargo: Cargo,
    pub quantity: Option<u32>,
}

impl CargoLoad {
    /// As much `cargo` as the car can hold.
    pub fn full(cargo: Cargo) -> Self {
        Self {
            cargo,
            quantity: None,
        }
    }

    /// Exactly `quantity` units of `cargo`.
    pub fn of(cargo: Cargo, quantity: u32) -> Self {
        Self {
            cargo,
            quantity: Some(quantity),
        }
    }

    /// Multiplies the quantity by `n`; a full load becomes `n` units.
    ///
    /// Saturates at `u32::MAX`, which no car can hold.
    pub fn scaled(self, n: u32) -> Self {
        Self {
            cargo: self.cargo,
            quantity: Some(self.quantity.map_or(n, |q| q.saturating_mul(n))),
        }
    }

    /// Resolves this load against a car limit, returning the decorated
    /// description and the realistic cargo mass.
    pub fn resolve(&self, limit: u32) -> Result<(String, f64)> {
        let count = self.quantity.unwrap_or(limit);
        if count > limit {
            return Err(RailclimbError::CargoLimit {
                cargo: self.cargo.name().to_string(),
                quantity: count,
                limit,
            });
        }
        let description = format!("{} x{}", self.cargo.name(), count);
        Ok((description, f64::from(count) * self.cargo.each_mass()))
    }
}
