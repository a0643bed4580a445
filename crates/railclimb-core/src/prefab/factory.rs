//! Locomotive and car templates.

use crate::error::Result;
use crate::stock::{concat, Car, CarGroup, RollingStock, TractiveCar};

use super::{Cargo, CargoLoad, Difficulty};

/// A named locomotive model, optionally with a tender.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocomotiveTemplate {
    pub name: &'static str,
    pub mass: f64,
    pub tender_mass: Option<f64>,
    pub tractive_effort: f64,
}

impl LocomotiveTemplate {
    const fn solo(name: &'static str, mass: f64, tractive_effort: f64) -> Self {
        Self {
            name,
            mass,
            tender_mass: None,
            tractive_effort,
        }
    }

    const fn tendered(
        name: &'static str,
        mass: f64,
        tender_mass: f64,
        tractive_effort: f64,
    ) -> Self {
        Self {
            name,
            mass,
            tender_mass: Some(tender_mass),
            tractive_effort,
        }
    }

    /// Builds the locomotive under its model name.
    pub fn build(&self) -> RollingStock {
        self.named(self.name)
    }

    /// Builds the locomotive under `name`.
    ///
    /// Tendered models become a car group so that splitting never separates
    /// the tender from its locomotive.
    pub fn named(&self, name: &str) -> RollingStock {
        let locomotive = TractiveCar::new(name, self.mass, self.tractive_effort);
        match self.tender_mass {
            None => locomotive.into(),
            Some(tender_mass) => {
                let tender = Car::new(format!("{name} (Tender)"), tender_mass);
                CarGroup::new(name, concat(locomotive, tender)).into()
            }
        }
    }
}

/// A named car model with the cargo it may carry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarTemplate {
    pub name: &'static str,
    pub empty_mass: f64,
    pub permitted: &'static [(Cargo, u32)],
}

impl CarTemplate {
    /// Maximum units of `cargo` this car holds; zero when not permitted.
    pub fn limit(&self, cargo: Cargo) -> u32 {
        self.permitted
            .iter()
            .find(|(c, _)| *c == cargo)
            .map_or(0, |(_, limit)| *limit)
    }

    /// An empty car under the model name.
    pub fn build(&self) -> RollingStock {
        Car::new(self.name, self.empty_mass).into()
    }

    /// A loaded car named after its model and cargo.
    pub fn load(&self, load: CargoLoad, difficulty: Difficulty) -> Result<RollingStock> {
        self.build_with(None, Some(load), difficulty)
    }

    /// Builds a car with an optional explicit name and optional cargo.
    ///
    /// Without an explicit name, loaded cars are named
    /// `"<model> (<cargo> x<count>)"`.
    pub fn build_with(
        &self,
        name: Option<&str>,
        load: Option<CargoLoad>,
        difficulty: Difficulty,
    ) -> Result<RollingStock> {
        let mut used_name = name.unwrap_or(self.name).to_string();
        let mut mass = self.empty_mass;
        if let Some(load) = load {
            let (description, cargo_mass) = load.resolve(self.limit(load.cargo))?;
            if name.is_none() {
                used_name = format!("{used_name} ({description})");
            }
            mass += cargo_mass * difficulty.multiplier();
        }
        Ok(Car::new(used_name, mass).into())
    }
}

pub const CLIMAX: LocomotiveTemplate = LocomotiveTemplate::solo("Climax", 55678.0, 17486.0);
pub const CLASS70: LocomotiveTemplate =
    LocomotiveTemplate::tendered("D&RG Class 70", 74260.0, 53000.0, 15716.0);
pub const HEISLER: LocomotiveTemplate = LocomotiveTemplate::solo("Heisler", 65731.0, 13219.0);
pub const MOGUL: LocomotiveTemplate =
    LocomotiveTemplate::tendered("Cooke Mogul", 58300.0, 45000.0, 12063.0);
pub const EUREKA: LocomotiveTemplate =
    LocomotiveTemplate::tendered("Eureka", 37919.0, 27573.0, 5620.0);
pub const PORTER040: LocomotiveTemplate =
    LocomotiveTemplate::solo("Porter (0-4-0)", 14236.0, 2916.0);
pub const PORTER042: LocomotiveTemplate =
    LocomotiveTemplate::solo("Porter (0-4-2)", 16236.0, 2916.0);
pub const HANDCAR: LocomotiveTemplate = LocomotiveTemplate::solo("Handcar", 2205.0, 112.0);

pub const FLATCAR_ROUND: CarTemplate = CarTemplate {
    name: "Flatcar - Rounds",
    empty_mass: 8360.0,
    permitted: &[(Cargo::Logs, 6), (Cargo::Pipes, 9)],
};
pub const FLATCAR_STAKES: CarTemplate = CarTemplate {
    name: "Flatcar - Stakes",
    empty_mass: 8800.0,
    permitted: &[
        (Cargo::Lumber, 6),
        (Cargo::Beams, 3),
        (Cargo::RawIron, 3),
        (Cargo::Rails, 10),
    ],
};
pub const FLATCAR_BULKHEAD: CarTemplate = CarTemplate {
    name: "Flatcar - Bulkhead",
    empty_mass: 9020.0,
    permitted: &[(Cargo::Cordwood, 8), (Cargo::OilBarrels, 46)],
};
pub const HOPPER: CarTemplate = CarTemplate {
    name: "Hopper",
    empty_mass: 13200.0,
    permitted: &[(Cargo::IronOre, 10), (Cargo::Coal, 10)],
};
pub const TANKER: CarTemplate = CarTemplate {
    name: "Tanker",
    empty_mass: 30135.0,
    permitted: &[(Cargo::CrudeOil, 12)],
};
pub const BOXCAR: CarTemplate = CarTemplate {
    name: "Box Car",
    empty_mass: 17463.0,
    permitted: &[(Cargo::Tools, 32)],
};
pub const CABOOSE: CarTemplate = CarTemplate {
    name: "Bobber Caboose",
    empty_mass: 11880.0,
    permitted: &[],
};
