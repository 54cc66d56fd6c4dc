#[cfg(test)]
#[path = "../../../tests/unit/models/problem/costs_test.rs"]
mod costs_test;

use crate::models::common::*;
use crate::models::problem::Vehicle;
use crate::models::solution::Activity;
use crate::utils::GenericResult;

/// Specifies travel time type.
#[derive(Copy, Clone, Debug)]
pub enum TravelTime {
    /// Arrival time type.
    Arrival(Timestamp),
    /// Departure time type
    Departure(Timestamp),
}

/// Provides the way to get routing information for specific locations and vehicle.
pub trait TransportCost: Send + Sync {
    /// Returns transport cost between two locations.
    fn cost(&self, vehicle: &Vehicle, from: Location, to: Location, travel_time: TravelTime) -> Cost {
        let costs = &vehicle.vehicle_type.costs;

        let distance = self.distance(vehicle, from, to, travel_time);
        let duration = self.duration(vehicle, from, to, travel_time);

        distance * costs.per_distance + duration * costs.per_driving_time
    }

    /// Returns travel duration between locations specific for given vehicle.
    fn duration(&self, vehicle: &Vehicle, from: Location, to: Location, travel_time: TravelTime) -> Duration;

    /// Returns travel distance between locations specific for given vehicle.
    fn distance(&self, vehicle: &Vehicle, from: Location, to: Location, travel_time: TravelTime) -> Distance;
}

/// Provides the way to get cost information for specific activities done by specific vehicle.
pub trait ActivityCost: Send + Sync {
    /// Returns cost to perform activity.
    fn cost(&self, vehicle: &Vehicle, activity: &Activity, arrival: Timestamp) -> Cost {
        let costs = &vehicle.vehicle_type.costs;

        let waiting = (activity.place.time.start() - arrival).max(0.);
        let service = self.duration(vehicle, activity, arrival);

        waiting * costs.per_waiting_time + service * costs.per_service_time
    }

    /// Returns operation duration of the activity for given vehicle and arrival time.
    fn duration(&self, vehicle: &Vehicle, activity: &Activity, arrival: Timestamp) -> Duration;

    /// Estimates departure time for activity and vehicle at given arrival time.
    fn estimate_departure(&self, vehicle: &Vehicle, activity: &Activity, arrival: Timestamp) -> Timestamp {
        arrival.max(activity.place.time.start()) + self.duration(vehicle, activity, arrival)
    }
}

/// A vehicle independent activity costs: operation duration is taken from activity place.
#[derive(Default)]
pub struct SimpleActivityCost {}

impl ActivityCost for SimpleActivityCost {
    fn duration(&self, _: &Vehicle, activity: &Activity, _: Timestamp) -> Duration {
        activity.place.duration
    }
}

/// Contains matrix routing data for specific profile.
#[derive(Clone, Debug)]
pub struct MatrixData {
    /// A routing profile index.
    pub index: usize,
    /// Travel durations as a flattened square matrix.
    pub durations: Vec<Duration>,
    /// Travel distances as a flattened square matrix.
    pub distances: Vec<Distance>,
}

impl MatrixData {
    /// Creates `MatrixData` instance.
    pub fn new(index: usize, durations: Vec<Duration>, distances: Vec<Distance>) -> Self {
        Self { index, durations, distances }
    }
}

/// A time agnostic transport cost based on routing matrices, one per profile.
#[derive(Debug)]
pub struct MatrixTransportCost {
    durations: Vec<Vec<Duration>>,
    distances: Vec<Vec<Distance>>,
    size: usize,
}

impl MatrixTransportCost {
    /// Creates an instance of `MatrixTransportCost`. Profiles should have consecutive indices
    /// starting from zero and square matrices of the same size.
    pub fn new(mut costs: Vec<MatrixData>) -> GenericResult<Self> {
        costs.sort_by_key(|data| data.index);

        if costs.is_empty() {
            return Err("no routing matrices are specified".into());
        }

        if costs.iter().enumerate().any(|(idx, data)| idx != data.index) {
            return Err("routing profiles should have consecutive indices starting from zero".into());
        }

        let size = (costs[0].durations.len() as Float).sqrt().round() as usize;

        if costs.iter().any(|data| data.durations.len() != size * size || data.distances.len() != size * size) {
            return Err("routing matrices should be square and have the same size".into());
        }

        let (durations, distances) = costs.into_iter().map(|data| (data.durations, data.distances)).unzip();

        Ok(Self { durations, distances, size })
    }
}

impl TransportCost for MatrixTransportCost {
    /// Panics when location or profile index is outside of routing data.
    fn duration(&self, vehicle: &Vehicle, from: Location, to: Location, _: TravelTime) -> Duration {
        let profile = &vehicle.vehicle_type.profile;
        self.durations[profile.index][from.index * self.size + to.index] * profile.scale
    }

    /// Panics when location or profile index is outside of routing data.
    fn distance(&self, vehicle: &Vehicle, from: Location, to: Location, _: TravelTime) -> Distance {
        self.distances[vehicle.vehicle_type.profile.index][from.index * self.size + to.index]
    }
}

/// A transport cost which uses euclidean distance between location coordinates and a fixed speed.
/// Locations without coordinates are considered to be at the origin.
#[derive(Debug)]
pub struct EuclideanTransportCost {
    speed: Float,
}

impl EuclideanTransportCost {
    /// Creates an instance of `EuclideanTransportCost` with given speed.
    pub fn new(speed: Float) -> GenericResult<Self> {
        if speed > 0. && speed.is_finite() {
            Ok(Self { speed })
        } else {
            Err(format!("speed should be a positive finite number, got: {speed}").into())
        }
    }

    fn euclidean(from: Location, to: Location) -> Distance {
        let origin = Coordinate::new(0., 0.);
        from.coordinate.unwrap_or(origin).distance_to(&to.coordinate.unwrap_or(origin))
    }
}

impl Default for EuclideanTransportCost {
    fn default() -> Self {
        Self { speed: 1. }
    }
}

impl TransportCost for EuclideanTransportCost {
    fn duration(&self, vehicle: &Vehicle, from: Location, to: Location, _: TravelTime) -> Duration {
        Self::euclidean(from, to) / self.speed * vehicle.vehicle_type.profile.scale
    }

    fn distance(&self, _: &Vehicle, from: Location, to: Location, _: TravelTime) -> Distance {
        Self::euclidean(from, to)
    }
}
