//! Ordered trains of rolling stock.

use std::fmt;
use std::ops::Range;
use std::slice;

use super::{Calculative, Car, CarGroup, RollingStock, TractiveCar};

/// Rolling stock in coupling order.
///
/// Order is load-bearing for every positional algorithm; totals are sums
/// over the direct elements and do not depend on it.
///
/// # Examples
///
/// ```
/// use railclimb_core::stock::{Calculative, Car, Train};
///
/// let cars = Train::from(Car::new("Hopper", 13200.0)).repeat(3);
/// assert_eq!(cars.len(), 3);
/// assert_eq!(cars.mass(), 39600.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Train {
    elems: Vec<RollingStock>,
}

impl Train {
    pub fn new(stock: impl IntoIterator<Item = RollingStock>) -> Self {
        Self {
            elems: stock.into_iter().collect(),
        }
    }

    /// A train with no rolling stock.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RollingStock> {
        self.elems.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, RollingStock> {
        self.elems.iter()
    }

    pub fn as_slice(&self) -> &[RollingStock] {
        &self.elems
    }

    /// Copies the elements in `range` into a new train.
    ///
    /// # Panics
    ///
    /// Panics if `range` is out of bounds.
    pub fn slice(&self, range: Range<usize>) -> Train {
        Train::new(self.elems[range].iter().cloned())
    }

    /// Returns a new train with `other` coupled behind this one.
    pub fn join(&self, other: &Train) -> Train {
        self.iter().chain(other.iter()).cloned().collect()
    }

    /// Repeats the element sequence `n` times.
    pub fn repeat(&self, n: usize) -> Train {
        Self {
            elems: (0..n).flat_map(|_| self.elems.iter().cloned()).collect(),
        }
    }

    /// Returns the train in reverse coupling order.
    pub fn reversed(&self) -> Train {
        self.elems.iter().rev().cloned().collect()
    }

    /// Elements that provide tractive effort.
    pub fn tractive_units(&self) -> impl Iterator<Item = &RollingStock> + '_ {
        self.iter().filter(|x| x.tractive_effort() > 0.0)
    }

    /// Elements that provide no tractive effort.
    pub fn passive_units(&self) -> impl Iterator<Item = &RollingStock> + '_ {
        self.iter().filter(|x| x.tractive_effort() == 0.0)
    }

    /// Iterates the physical cars, decomposing car groups one level.
    pub fn flat_iter(&self) -> impl Iterator<Item = &RollingStock> + '_ {
        self.iter().flat_map(|x| match x {
            RollingStock::Group(group) => group.train().as_slice(),
            other => slice::from_ref(other),
        })
    }

    /// Names of the elements in order.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(RollingStock::name).collect()
    }
}

impl Calculative for Train {
    fn mass(&self) -> f64 {
        self.iter().map(Calculative::mass).sum()
    }

    fn tractive_effort(&self) -> f64 {
        self.iter().map(Calculative::tractive_effort).sum()
    }
}

impl fmt::Display for Train {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, stock) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{stock}")?;
        }
        write!(f, "]")
    }
}

impl FromIterator<RollingStock> for Train {
    fn from_iter<I: IntoIterator<Item = RollingStock>>(iter: I) -> Self {
        Train::new(iter)
    }
}

impl<'a> IntoIterator for &'a Train {
    type Item = &'a RollingStock;
    type IntoIter = slice::Iter<'a, RollingStock>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Train {
    type Item = RollingStock;
    type IntoIter = std::vec::IntoIter<RollingStock>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.into_iter()
    }
}

impl From<RollingStock> for Train {
    fn from(stock: RollingStock) -> Self {
        Self { elems: vec![stock] }
    }
}

impl From<Car> for Train {
    fn from(car: Car) -> Self {
        RollingStock::from(car).into()
    }
}

impl From<TractiveCar> for Train {
    fn from(car: TractiveCar) -> Self {
        RollingStock::from(car).into()
    }
}

impl From<CarGroup> for Train {
    fn from(group: CarGroup) -> Self {
        RollingStock::from(group).into()
    }
}

impl From<Vec<RollingStock>> for Train {
    fn from(elems: Vec<RollingStock>) -> Self {
        Self { elems }
    }
}
