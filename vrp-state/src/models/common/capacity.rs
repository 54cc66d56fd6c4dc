#[cfg(test)]
#[path = "../../../tests/unit/models/common/capacity_test.rs"]
mod capacity_test;

use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::{Add, Sub};
use tinyvec::TinyVec;

/// Represents a multi dimensional capacity value: vehicle's capacity, job size or onboard load.
/// Each dimension is independent. Missing trailing dimensions are treated as zero.
#[derive(Clone, Debug, Default)]
pub struct Capacity {
    values: TinyVec<[i32; 4]>,
}

impl Capacity {
    /// Creates a new instance of `Capacity`.
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self { values: values.into_iter().collect() }
    }

    /// Creates a single dimensional capacity.
    pub fn single(value: i32) -> Self {
        Self::new(std::iter::once(value))
    }

    /// Returns an empty capacity.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns value of given dimension.
    pub fn get(&self, dimension: usize) -> i32 {
        self.values.get(dimension).copied().unwrap_or(0)
    }

    /// Returns amount of explicitly set dimensions.
    pub fn dimensions(&self) -> usize {
        self.values.len()
    }

    /// Returns all dimension values.
    pub fn as_slice(&self) -> &[i32] {
        self.values.as_slice()
    }

    /// Returns true if any dimension has non-zero value.
    pub fn is_not_empty(&self) -> bool {
        self.values.iter().any(|value| *value != 0)
    }

    /// Returns per dimension maximum of two values.
    pub fn max_load(&self, other: &Self) -> Self {
        self.zip_with(other, i32::max)
    }

    /// Returns true if `other` can be loaded into this capacity.
    pub fn can_fit(&self, other: &Self) -> bool {
        let size = self.dimensions().max(other.dimensions());
        (0..size).all(|idx| self.get(idx) >= other.get(idx))
    }

    fn zip_with(&self, other: &Self, op: impl Fn(i32, i32) -> i32) -> Self {
        let size = self.dimensions().max(other.dimensions());
        Self { values: (0..size).map(|idx| op(self.get(idx), other.get(idx))).collect() }
    }
}

impl Add for Capacity {
    type Output = Capacity;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add for &Capacity {
    type Output = Capacity;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub for Capacity {
    type Output = Capacity;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub for &Capacity {
    type Output = Capacity;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Sum for Capacity {
    fn sum<I: Iterator<Item = Capacity>>(iter: I) -> Self {
        iter.fold(Capacity::default(), |acc, item| acc + item)
    }
}

impl<'a> Sum<&'a Capacity> for Capacity {
    fn sum<I: Iterator<Item = &'a Capacity>>(iter: I) -> Self {
        iter.fold(Capacity::default(), |acc, item| &acc + item)
    }
}

impl FromIterator<i32> for Capacity {
    fn from_iter<T: IntoIterator<Item = i32>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl PartialEq for Capacity {
    fn eq(&self, other: &Self) -> bool {
        let size = self.dimensions().max(other.dimensions());
        (0..size).all(|idx| self.get(idx) == other.get(idx))
    }
}

impl Eq for Capacity {}

impl Display for Capacity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.values.as_slice())
    }
}

/// Represents activity demand, both static and dynamic.
///
/// Static demand is loaded at the route start (delivery) or carried till the route end (pickup),
/// dynamic demand is picked up and delivered within the same route.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Demand {
    /// Keeps static and dynamic pickup amount.
    pub pickup: (Capacity, Capacity),
    /// Keeps static and dynamic delivery amount.
    pub delivery: (Capacity, Capacity),
}

impl Demand {
    /// Creates a demand with static pickup only.
    pub fn static_pickup(size: Capacity) -> Self {
        Self { pickup: (size, Capacity::empty()), ..Self::default() }
    }

    /// Creates a demand with static delivery only.
    pub fn static_delivery(size: Capacity) -> Self {
        Self { delivery: (size, Capacity::empty()), ..Self::default() }
    }

    /// Creates a demand with dynamic pickup only.
    pub fn dynamic_pickup(size: Capacity) -> Self {
        Self { pickup: (Capacity::empty(), size), ..Self::default() }
    }

    /// Creates a demand with dynamic delivery only.
    pub fn dynamic_delivery(size: Capacity) -> Self {
        Self { delivery: (Capacity::empty(), size), ..Self::default() }
    }

    /// Returns capacity change as difference between pickup and delivery.
    pub fn change(&self) -> Capacity {
        let pickup = &self.pickup.0 + &self.pickup.1;
        let delivery = &self.delivery.0 + &self.delivery.1;

        pickup - delivery
    }

    /// Returns true if demand has no non-zero values.
    pub fn is_empty(&self) -> bool {
        !(self.pickup.0.is_not_empty()
            || self.pickup.1.is_not_empty()
            || self.delivery.0.is_not_empty()
            || self.delivery.1.is_not_empty())
    }
}

impl Add for &Demand {
    type Output = Demand;

    fn add(self, rhs: Self) -> Self::Output {
        Demand {
            pickup: (&self.pickup.0 + &rhs.pickup.0, &self.pickup.1 + &rhs.pickup.1),
            delivery: (&self.delivery.0 + &rhs.delivery.0, &self.delivery.1 + &rhs.delivery.1),
        }
    }
}
