#[cfg(test)]
#[path = "../../../tests/unit/models/solution/route_test.rs"]
mod route_test;

use crate::models::common::Timestamp;
use crate::models::problem::Vehicle;
use crate::models::solution::{Activity, TourActivities};
use crate::utils::GenericResult;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// A stable route identity used as a key of route states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(pub usize);

impl Display for RouteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a route: a vehicle with its start, job activities and optional end.
#[derive(Clone, Debug)]
pub struct Route {
    id: RouteId,
    vehicle: Arc<Vehicle>,

    /// A route start.
    pub start: Activity,
    /// A route end, absent when vehicle does not return to depot.
    pub end: Option<Activity>,
    /// Job activities.
    pub tour: TourActivities,
}

impl Route {
    /// Creates an empty route.
    pub fn new(id: RouteId, vehicle: Arc<Vehicle>, start: Activity, end: Option<Activity>) -> GenericResult<Self> {
        if !start.is_start() || end.as_ref().is_some_and(|end| !end.is_end()) {
            return Err(format!("route {id} should be created with start and end activities").into());
        }

        Ok(Self { id, vehicle, start, end, tour: TourActivities::default() })
    }

    /// Returns route identity.
    pub fn id(&self) -> RouteId {
        self.id
    }

    /// Returns a vehicle which serves the route.
    pub fn vehicle(&self) -> &Arc<Vehicle> {
        &self.vehicle
    }

    /// Returns departure time from the route start.
    pub fn departure(&self) -> Timestamp {
        self.start.schedule.departure
    }

    /// Returns all activities including route start and end.
    pub fn all_activities(&self) -> impl Iterator<Item = &Activity> + '_ {
        std::iter::once(&self.start).chain(self.tour.iter()).chain(self.end.iter())
    }
}
