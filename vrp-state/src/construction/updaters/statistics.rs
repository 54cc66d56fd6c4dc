#[cfg(test)]
#[path = "../../../tests/unit/construction/updaters/statistics_test.rs"]
mod statistics_test;

use super::*;
use crate::models::common::{Distance, Location, Timestamp};
use crate::models::problem::Vehicle;

/// Updates cumulative travelled distance at each activity and route totals: distance and duration.
/// Relies on activity schedules, so it runs after [`ActivityTimesUpdater`].
pub struct RouteStatisticsUpdater {
    transport: Arc<dyn TransportCost>,
    vehicle: Option<Arc<Vehicle>>,
    previous: (Location, Timestamp),
    distance: Distance,
}

impl RouteStatisticsUpdater {
    /// Creates a new instance of `RouteStatisticsUpdater`.
    pub fn new(transport: Arc<dyn TransportCost>) -> Self {
        Self { transport, vehicle: None, previous: (Location::new(0), 0.), distance: 0. }
    }

    fn distance_to(&self, vehicle: &Vehicle, location: Location) -> Distance {
        let (previous_location, departure) = self.previous;
        self.transport.distance(vehicle, previous_location, location, TravelTime::Departure(departure))
    }
}

impl StateUpdater for RouteStatisticsUpdater {
    fn order(&self) -> Option<TraversalOrder> {
        Some(TraversalOrder::Forward)
    }

    fn begin(&mut self, route: &mut Route, _: &mut StateManager) -> StateResult<()> {
        self.vehicle = Some(route.vehicle().clone());
        self.previous = (route.start.place.location, route.start.schedule.departure);
        self.distance = 0.;

        Ok(())
    }

    fn visit(&mut self, activity: &mut Activity, state: &mut StateManager) -> StateResult<()> {
        let Some(vehicle) = self.vehicle.clone() else { return Ok(()) };

        self.distance += self.distance_to(&vehicle, activity.place.location);
        self.previous = (activity.place.location, activity.schedule.departure);

        state.set_distance_at(activity.id(), self.distance);

        Ok(())
    }

    fn finish(&mut self, route: &mut Route, state: &mut StateManager) -> StateResult<()> {
        let Some(vehicle) = self.vehicle.take() else { return Ok(()) };

        let end_time = match route.end.as_ref() {
            Some(end) => {
                self.distance += self.distance_to(&vehicle, end.place.location);
                end.schedule.arrival
            }
            None => self.previous.1,
        };

        state.set_distance(route.id(), self.distance);
        state.set_duration(route.id(), end_time - route.departure());

        Ok(())
    }
}
