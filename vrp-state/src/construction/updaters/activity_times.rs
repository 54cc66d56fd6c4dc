#[cfg(test)]
#[path = "../../../tests/unit/construction/updaters/activity_times_test.rs"]
mod activity_times_test;

use super::*;
use crate::models::common::{Location, Schedule, Timestamp};
use crate::models::problem::Vehicle;

/// Specifies when an operation starts once a vehicle arrives at activity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActivityPolicy {
    /// Operation starts at arrival or when time window opens, whichever is later.
    #[default]
    AsSoonAsTimeWindowOpens,
    /// Operation starts at arrival, even if time window is not open yet.
    AsSoonAsArrived,
}

/// Updates arrival and departure of each activity starting from route departure. Writes the
/// earliest operation start time of each activity.
pub struct ActivityTimesUpdater {
    transport: Arc<dyn TransportCost>,
    activity: Arc<dyn ActivityCost>,
    policy: ActivityPolicy,
    vehicle: Option<Arc<Vehicle>>,
    previous: (Location, Timestamp),
}

impl ActivityTimesUpdater {
    /// Creates a new instance of `ActivityTimesUpdater`.
    pub fn new(transport: Arc<dyn TransportCost>, activity: Arc<dyn ActivityCost>, policy: ActivityPolicy) -> Self {
        Self { transport, activity, policy, vehicle: None, previous: (Location::new(0), 0.) }
    }

    fn arrival_at(&self, vehicle: &Vehicle, location: Location) -> Timestamp {
        let (previous_location, departure) = self.previous;
        departure + self.transport.duration(vehicle, previous_location, location, TravelTime::Departure(departure))
    }
}

impl StateUpdater for ActivityTimesUpdater {
    fn order(&self) -> Option<TraversalOrder> {
        Some(TraversalOrder::Forward)
    }

    fn begin(&mut self, route: &mut Route, _: &mut StateManager) -> StateResult<()> {
        self.vehicle = Some(route.vehicle().clone());
        self.previous = (route.start.place.location, route.start.schedule.departure);

        Ok(())
    }

    fn visit(&mut self, activity: &mut Activity, state: &mut StateManager) -> StateResult<()> {
        let Some(vehicle) = self.vehicle.clone() else { return Ok(()) };

        let arrival = self.arrival_at(&vehicle, activity.place.location);
        let earliest_start = arrival.max(activity.place.time.start());

        let operation_start = match self.policy {
            ActivityPolicy::AsSoonAsTimeWindowOpens => earliest_start,
            ActivityPolicy::AsSoonAsArrived => arrival,
        };
        let departure = operation_start + self.activity.duration(&vehicle, activity, arrival);

        activity.schedule = Schedule::new(arrival, departure);
        state.set_earliest_operation_start_time_at(activity.id(), earliest_start);

        self.previous = (activity.place.location, departure);

        Ok(())
    }

    fn finish(&mut self, route: &mut Route, _: &mut StateManager) -> StateResult<()> {
        let Some(vehicle) = self.vehicle.take() else { return Ok(()) };

        if let Some(end) = route.end.as_mut() {
            let arrival = self.arrival_at(&vehicle, end.place.location);
            end.schedule = Schedule::new(arrival, arrival);
        }

        Ok(())
    }
}
