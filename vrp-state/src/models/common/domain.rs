use crate::models::common::{Distance, Float, Timestamp};
use crate::utils::compare_floats;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Represents a point on a plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    /// X value.
    pub x: Float,
    /// Y value.
    pub y: Float,
}

impl Coordinate {
    /// Creates a new instance of `Coordinate`.
    pub fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }

    /// Returns euclidean distance to other coordinate.
    pub fn distance_to(&self, other: &Coordinate) -> Distance {
        let (dx, dy) = (self.x - other.x, self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

/// Specifies a location: a semantic index used by routing data and an optional coordinate.
/// Two locations are considered equal when they have the same index.
#[derive(Clone, Copy, Debug)]
pub struct Location {
    /// A location index.
    pub index: usize,
    /// A location coordinate.
    pub coordinate: Option<Coordinate>,
}

impl Location {
    /// Creates a location without coordinate.
    pub fn new(index: usize) -> Self {
        Self { index, coordinate: None }
    }

    /// Creates a location with coordinate.
    pub fn with_coordinate(index: usize, coordinate: Coordinate) -> Self {
        Self { index, coordinate: Some(coordinate) }
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

/// Specifies a routing profile: an index of routing data and a duration scale factor.
#[derive(Clone, Copy, Debug)]
pub struct Profile {
    /// An index of routing data.
    pub index: usize,
    /// A duration scale factor.
    pub scale: Float,
}

impl Profile {
    /// Creates a new instance of `Profile`.
    pub fn new(index: usize, scale: Option<Float>) -> Self {
        Self { index, scale: scale.unwrap_or(1.) }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new(0, None)
    }
}

/// Represents a schedule.
#[derive(Clone, Debug, Default)]
pub struct Schedule {
    /// Arrival time.
    pub arrival: Timestamp,
    /// Departure time.
    pub departure: Timestamp,
}

impl Schedule {
    /// Creates a new instance of `Schedule`.
    pub fn new(arrival: Timestamp, departure: Timestamp) -> Self {
        Self { arrival, departure }
    }
}

impl PartialEq<Schedule> for Schedule {
    fn eq(&self, other: &Schedule) -> bool {
        compare_floats(self.arrival, other.arrival) == Ordering::Equal
            && compare_floats(self.departure, other.departure) == Ordering::Equal
    }
}

impl Eq for Schedule {}

/// A set of case insensitive skills: required by a job or offered by a vehicle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Skills {
    values: FxHashSet<String>,
}

impl Skills {
    /// Creates a new skill set from given values.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self { values: values.into_iter().map(|skill| skill.as_ref().to_lowercase()).collect() }
    }

    /// Checks whether the skill is present.
    pub fn contains(&self, skill: &str) -> bool {
        self.values.contains(&skill.to_lowercase())
    }

    /// Checks whether all skills are present in other set.
    pub fn is_subset(&self, other: &Skills) -> bool {
        self.values.is_subset(&other.values)
    }

    /// Adds all skills from other set.
    pub fn union_with(&mut self, other: &Skills) {
        self.values.extend(other.values.iter().cloned());
    }

    /// Returns amount of skills.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there is no skills.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns an iterator over skills.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.iter().map(|skill| skill.as_str())
    }
}
