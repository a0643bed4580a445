//! Leaf rolling stock and car groups.

use std::fmt;

use super::{Calculative, Train};

/// An unpowered piece of rolling stock.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Car {
    name: String,
    mass: f64,
}

impl Car {
    /// Creates a car with `mass` in pounds.
    pub fn new(name: impl Into<String>, mass: f64) -> Self {
        Self {
            name: name.into(),
            mass,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Calculative for Car {
    fn mass(&self) -> f64 {
        self.mass
    }

    fn tractive_effort(&self) -> f64 {
        0.0
    }
}

/// A piece of rolling stock that applies tractive effort.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TractiveCar {
    name: String,
    mass: f64,
    tractive_effort: f64,
}

impl TractiveCar {
    /// Creates a tractive car with `mass` in pounds and `tractive_effort`
    /// in pounds of force.
    pub fn new(name: impl Into<String>, mass: f64, tractive_effort: f64) -> Self {
        Self {
            name: name.into(),
            mass,
            tractive_effort,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Calculative for TractiveCar {
    fn mass(&self) -> f64 {
        self.mass
    }

    fn tractive_effort(&self) -> f64 {
        self.tractive_effort
    }
}

/// A train treated as one indivisible unit by another train.
///
/// Tendered locomotives are the typical case: for car counts the
/// locomotive and tender are separate, but splitting must never separate
/// them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarGroup {
    name: String,
    train: Train,
}

impl CarGroup {
    pub fn new(name: impl Into<String>, train: impl Into<Train>) -> Self {
        Self {
            name: name.into(),
            train: train.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cars making up this group, in coupling order.
    pub fn train(&self) -> &Train {
        &self.train
    }
}

impl Calculative for CarGroup {
    fn mass(&self) -> f64 {
        self.train.mass()
    }

    fn tractive_effort(&self) -> f64 {
        self.train.tractive_effort()
    }
}

/// One coupling position in a train.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RollingStock {
    Car(Car),
    Tractive(TractiveCar),
    Group(CarGroup),
}

impl RollingStock {
    pub fn name(&self) -> &str {
        match self {
            RollingStock::Car(car) => car.name(),
            RollingStock::Tractive(car) => car.name(),
            RollingStock::Group(group) => group.name(),
        }
    }

    /// Returns the inner train if this is a car group.
    pub fn as_group(&self) -> Option<&CarGroup> {
        match self {
            RollingStock::Group(group) => Some(group),
            _ => None,
        }
    }
}

impl Calculative for RollingStock {
    fn mass(&self) -> f64 {
        match self {
            RollingStock::Car(car) => car.mass(),
            RollingStock::Tractive(car) => car.mass(),
            RollingStock::Group(group) => group.mass(),
        }
    }

    fn tractive_effort(&self) -> f64 {
        match self {
            RollingStock::Car(car) => car.tractive_effort(),
            RollingStock::Tractive(car) => car.tractive_effort(),
            RollingStock::Group(group) => group.tractive_effort(),
        }
    }
}

impl fmt::Display for RollingStock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Car> for RollingStock {
    fn from(car: Car) -> Self {
        RollingStock::Car(car)
    }
}

impl From<TractiveCar> for RollingStock {
    fn from(car: TractiveCar) -> Self {
        RollingStock::Tractive(car)
    }
}

impl From<CarGroup> for RollingStock {
    fn from(group: CarGroup) -> Self {
        RollingStock::Group(group)
    }
}
