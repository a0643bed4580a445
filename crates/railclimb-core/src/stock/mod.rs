//! Rolling stock and trains.
//!
//! Every entity is immutable once built. New values come from composition:
//! - [`Car`] and [`TractiveCar`] are the physical leaf units
//! - [`CarGroup`] couples a short train into one indivisible unit
//!   (a locomotive and its tender)
//! - [`Train`] is an ordered sequence of [`RollingStock`]
//!
//! All of them implement [`Calculative`], whose default methods wrap the
//! free functions in [`crate::force`].

mod car;
mod train;

#[cfg(test)]
mod tests;

pub use car::{Car, CarGroup, RollingStock, TractiveCar};
pub use train::Train;

use crate::force;

/// Anything with a mass and a tractive effort.
///
/// Mass is in pounds, tractive effort in pounds of force.
pub trait Calculative {
    /// Total mass.
    fn mass(&self) -> f64;

    /// Total tractive effort.
    fn tractive_effort(&self) -> f64;

    /// Force needed to start moving upwards on `grade`.
    fn starting_force(&self, grade: f64) -> f64 {
        force::starting_force(self.mass(), grade)
    }

    /// Fraction of the tractive effort needed to start on `grade`.
    fn starting_power(&self, grade: f64) -> f64 {
        force::starting_power(self.tractive_effort(), self.mass(), grade)
    }

    /// Mass that could additionally be started on `grade`.
    fn spare_capacity(&self, grade: f64, power_ratio: f64) -> f64 {
        force::spare_capacity(self.tractive_effort(), self.mass(), grade, power_ratio)
    }

    /// Steepest grade this stock can start on under its own power.
    fn maximum_grade(&self, power_ratio: f64) -> f64 {
        force::maximum_grade(self.tractive_effort(), self.mass(), power_ratio)
    }

    /// Net force on `grade` at `power_ratio`.
    fn net_force(&self, grade: f64, power_ratio: f64) -> f64 {
        force::net_force(self.tractive_effort(), self.mass(), grade, power_ratio)
    }

    /// Whether this stock can start up `grade` unaided.
    fn can_climb(&self, grade: f64, power_ratio: f64) -> bool {
        self.net_force(grade, power_ratio) > 0.0
    }
}

/// Couples `a` in front of `b`, returning a new train.
///
/// Either side may be a single piece of rolling stock or a train.
///
/// # Examples
///
/// ```
/// use railclimb_core::stock::{concat, Car, Calculative, TractiveCar};
///
/// let loco = TractiveCar::new("Porter", 14236.0, 2916.0);
/// let train = concat(loco, Car::new("Caboose", 11880.0));
/// assert_eq!(train.len(), 2);
/// assert_eq!(train.mass(), 26116.0);
/// ```
pub fn concat(a: impl Into<Train>, b: impl Into<Train>) -> Train {
    let a = a.into();
    let b = b.into();
    a.iter().chain(b.iter()).cloned().collect()
}

/// Repeats the elements of `stock` `n` times without regrouping them.
pub fn repeat(stock: impl Into<Train>, n: usize) -> Train {
    stock.into().repeat(n)
}
