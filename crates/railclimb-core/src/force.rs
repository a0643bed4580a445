//! Static starting-force model for rolling stock on a grade.
//!
//! The equations are based on
//!
//! ```text
//!       M·(α + μ)
//! F = ─────────────
//!      sqrt(α² + 1)
//! ```
//!
//! where α is the grade (as a slope), μ the coefficient of friction,
//! M the total mass (pounds) and F the total force (pounds of force).
//!
//! Functions that have no meaningful answer for a unit without tractive
//! effort return `f64::NAN` rather than an error: "cannot self-power" is a
//! domain answer, not a failure.

/// Coefficient of friction used by every starting-force computation.
pub const FRICTION: f64 = 0.004;

/// Full throttle.
pub const DEFAULT_POWER_RATIO: f64 = 1.0;

/// Force needed to start moving `mass` upwards on `grade`, in pounds of force.
#[inline]
pub fn starting_force(mass: f64, grade: f64) -> f64 {
    mass * (grade + FRICTION) / (grade * grade + 1.0).sqrt()
}

/// Fraction of `tractive_effort` needed to start `mass` upwards on `grade`.
///
/// NaN when `tractive_effort` is not positive.
pub fn starting_power(tractive_effort: f64, mass: f64, grade: f64) -> f64 {
    if tractive_effort > 0.0 {
        starting_force(mass, grade) / tractive_effort
    } else {
        f64::NAN
    }
}

/// Extra mass that could additionally be started up `grade`, in pounds.
pub fn spare_capacity(tractive_effort: f64, mass: f64, grade: f64, power_ratio: f64) -> f64 {
    tractive_effort * power_ratio * (grade * grade + 1.0).sqrt() / (grade + FRICTION) - mass
}

/// Steepest grade at which `spare_capacity` reaches zero.
///
/// NaN when no tractive effort is applied.
///
/// # Examples
///
/// ```
/// use railclimb_core::force::{maximum_grade, net_force};
///
/// let grade = maximum_grade(17486.0, 55678.0, 1.0);
/// assert!(net_force(17486.0, 55678.0, grade, 1.0).abs() < 1e-6);
/// assert!(maximum_grade(0.0, 8800.0, 1.0).is_nan());
/// ```
pub fn maximum_grade(tractive_effort: f64, mass: f64, power_ratio: f64) -> f64 {
    let f = tractive_effort * power_ratio;
    if f == 0.0 {
        return f64::NAN;
    }
    let m2 = mass * mass;
    let f2 = f * f;
    (m2 * FRICTION - f * (m2 * (FRICTION * FRICTION + 1.0) - f2).sqrt()) / (f2 - m2)
}

/// Tractive effort at `power_ratio` minus the starting force on `grade`.
///
/// Positive iff the rolling stock can climb the grade from a standstill
/// under its own power.
#[inline]
pub fn net_force(tractive_effort: f64, mass: f64, grade: f64, power_ratio: f64) -> f64 {
    tractive_effort * power_ratio - starting_force(mass, grade)
}
