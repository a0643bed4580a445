//! Units with known net forces.
//!
//! All fixtures are calibrated for level track at full power
//! ([`SAMPLE_GRADE`], ratio 1.0), where starting force is `0.004 × mass`.

use railclimb_core::stock::{Car, RollingStock, TractiveCar, Train};

/// Grade at which fixture net forces hold.
pub const SAMPLE_GRADE: f64 = 0.0;

/// Mass given to every powered fixture; its starting force is 4.
const POWERED_MASS: f64 = 1000.0;

/// A unit whose net force on level track is `net_force`.
///
/// Positive forces build a tractive car, the rest a plain car. Plain cars
/// carry `250 × |net_force|` pounds, so their forces are exact up to
/// rounding in the last place.
pub fn unit(name: &str, net_force: f64) -> RollingStock {
    if net_force > 0.0 {
        TractiveCar::new(name, POWERED_MASS, net_force + POWERED_MASS * 0.004).into()
    } else {
        Car::new(name, -net_force * 250.0).into()
    }
}

/// A train of [`unit`]s.
pub fn train_of(units: &[(&str, f64)]) -> Train {
    units.iter().map(|&(name, force)| unit(name, force)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use railclimb_core::stock::Calculative;

    #[test]
    fn test_unit_forces() {
        for force in [50.0, 8.0, 0.5, -1.0, -30.0, -125.0] {
            let u = unit("u", force);
            assert!((u.net_force(SAMPLE_GRADE, 1.0) - force).abs() < 1e-9, "{force}");
        }
    }

    #[test]
    fn test_train_of() {
        let train = train_of(&[("loco", 40.0), ("car", -10.0)]);
        assert_eq!(train.names(), vec!["loco", "car"]);
        assert!((train.net_force(SAMPLE_GRADE, 1.0) - 30.0).abs() < 1e-9);
    }
}
