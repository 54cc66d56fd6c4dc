#[cfg(test)]
#[path = "../../../tests/unit/models/problem/fleet_test.rs"]
mod fleet_test;

use crate::models::common::{Capacity, Float, Location, Profile, Skills, Timestamp};
use crate::utils::GenericResult;
use rustc_hash::FxHashSet;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// A stable index of a vehicle within [`Fleet`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VehicleIdx(pub usize);

impl Display for VehicleIdx {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents operating costs for vehicle.
#[derive(Clone, Debug)]
pub struct Costs {
    /// A fixed cost to use a vehicle.
    pub fixed: Float,
    /// Cost per distance unit.
    pub per_distance: Float,
    /// Cost per driving time unit.
    pub per_driving_time: Float,
    /// Cost per waiting time unit.
    pub per_waiting_time: Float,
    /// Cost per service time unit.
    pub per_service_time: Float,
}

impl Default for Costs {
    fn default() -> Self {
        Self { fixed: 0., per_distance: 1., per_driving_time: 0., per_waiting_time: 0., per_service_time: 0. }
    }
}

/// Represents a vehicle type: properties shared by many vehicles.
#[derive(Clone, Debug)]
pub struct VehicleType {
    /// A vehicle type id.
    pub id: String,
    /// A capacity of the vehicle.
    pub capacity: Capacity,
    /// A routing profile.
    pub profile: Profile,
    /// Operating costs.
    pub costs: Costs,
}

impl VehicleType {
    /// Creates a new instance of `VehicleType` with default profile and costs.
    pub fn new(id: impl Into<String>, capacity: Capacity) -> Self {
        Self { id: id.into(), capacity, profile: Profile::default(), costs: Costs::default() }
    }
}

/// Represents a vehicle.
#[derive(Clone, Debug)]
pub struct Vehicle {
    index: VehicleIdx,
    /// A vehicle id.
    pub id: String,
    /// A vehicle type.
    pub vehicle_type: Arc<VehicleType>,
    /// A location where vehicle starts.
    pub start_location: Location,
    /// A location where vehicle ends, if differs from start location.
    pub end_location: Option<Location>,
    /// The earliest time when vehicle can depart.
    pub earliest_departure: Timestamp,
    /// The latest time when vehicle should finish its route.
    pub latest_arrival: Timestamp,
    /// Whether vehicle has to return to depot.
    pub return_to_depot: bool,
    /// Whether vehicle's departure can be shifted to avoid waiting at the first activity.
    pub variable_departure: bool,
    /// Skills offered by the vehicle.
    pub skills: Skills,
}

impl Vehicle {
    /// Creates a new vehicle which returns to its start location. Index is assigned when
    /// the vehicle is added to [`Fleet`].
    pub fn new(
        id: impl Into<String>,
        vehicle_type: Arc<VehicleType>,
        start_location: Location,
        earliest_departure: Timestamp,
        latest_arrival: Timestamp,
    ) -> Self {
        Self {
            index: VehicleIdx::default(),
            id: id.into(),
            vehicle_type,
            start_location,
            end_location: None,
            earliest_departure,
            latest_arrival,
            return_to_depot: true,
            variable_departure: false,
            skills: Skills::default(),
        }
    }

    /// Sets an end location different from start.
    pub fn with_end_location(mut self, location: Location) -> Self {
        self.end_location = Some(location);
        self
    }

    /// Sets whether vehicle should return to depot.
    pub fn with_return_to_depot(mut self, return_to_depot: bool) -> Self {
        self.return_to_depot = return_to_depot;
        self
    }

    /// Sets whether vehicle has variable departure time.
    pub fn with_variable_departure(mut self, variable_departure: bool) -> Self {
        self.variable_departure = variable_departure;
        self
    }

    /// Sets offered skills.
    pub fn with_skills(mut self, skills: Skills) -> Self {
        self.skills = skills;
        self
    }

    /// Returns vehicle index.
    pub fn index(&self) -> VehicleIdx {
        self.index
    }

    /// Returns a location where route ends or `None` for an open route.
    pub fn route_end(&self) -> Option<Location> {
        self.return_to_depot.then(|| self.end_location.unwrap_or(self.start_location))
    }
}

/// Represents available vehicles.
#[derive(Clone, Debug, Default)]
pub struct Fleet {
    vehicles: Vec<Arc<Vehicle>>,
}

impl Fleet {
    /// Adds a vehicle to the fleet and returns its index.
    pub fn add(&mut self, mut vehicle: Vehicle) -> GenericResult<VehicleIdx> {
        if vehicle.earliest_departure < 0. || !(vehicle.earliest_departure <= vehicle.latest_arrival) {
            return Err(format!(
                "vehicle '{}' has invalid shift: [{}, {}]",
                vehicle.id, vehicle.earliest_departure, vehicle.latest_arrival
            )
            .into());
        }

        if self.vehicles.iter().any(|existing| existing.id == vehicle.id) {
            return Err(format!("duplicate vehicle id: '{}'", vehicle.id).into());
        }

        let index = VehicleIdx(self.vehicles.len());
        vehicle.index = index;
        self.vehicles.push(Arc::new(vehicle));

        Ok(index)
    }

    /// Returns vehicle by its index.
    pub fn get(&self, index: VehicleIdx) -> Option<&Arc<Vehicle>> {
        self.vehicles.get(index.0)
    }

    /// Returns all vehicles.
    pub fn vehicles(&self) -> &[Arc<Vehicle>] {
        self.vehicles.as_slice()
    }

    /// Returns ids of all distinct vehicle types.
    pub fn vehicle_types(&self) -> FxHashSet<&str> {
        self.vehicles.iter().map(|vehicle| vehicle.vehicle_type.id.as_str()).collect()
    }
}

/// Specifies for which vehicles vehicle dependent states are calculated.
#[derive(Clone, Debug, Default)]
pub enum VehiclesToUpdate {
    /// Only the vehicle which serves the route.
    #[default]
    CurrentVehicle,
    /// The vehicle which serves the route and every vehicle of the fleet.
    FleetVehicles(Arc<Fleet>),
}

impl VehiclesToUpdate {
    /// Returns vehicles to be updated for a route served by given vehicle. The current vehicle
    /// always comes first, the rest are deduplicated by index.
    pub fn vehicles(&self, current: &Arc<Vehicle>) -> Vec<Arc<Vehicle>> {
        match self {
            Self::CurrentVehicle => vec![current.clone()],
            Self::FleetVehicles(fleet) => std::iter::once(current.clone())
                .chain(fleet.vehicles().iter().filter(|vehicle| vehicle.index != current.index).cloned())
                .collect(),
        }
    }
}
