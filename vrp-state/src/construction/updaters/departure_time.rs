#[cfg(test)]
#[path = "../../../tests/unit/construction/updaters/departure_time_test.rs"]
mod departure_time_test;

use super::*;
use crate::models::common::{Schedule, Timestamp};

/// Sets route departure time. A vehicle with fixed departure leaves at its earliest departure time,
/// a vehicle with variable departure postpones it to avoid waiting at the first activity, but not
/// later than its latest arrival.
pub struct DepartureTimeUpdater {
    transport: Arc<dyn TransportCost>,
}

impl DepartureTimeUpdater {
    /// Creates a new instance of `DepartureTimeUpdater`.
    pub fn new(transport: Arc<dyn TransportCost>) -> Self {
        Self { transport }
    }

    fn get_departure(&self, route: &Route) -> Timestamp {
        let vehicle = route.vehicle();
        let earliest = vehicle.earliest_departure;

        match route.tour.get(0) {
            Some(first) if vehicle.variable_departure => {
                let start_to_first = self.transport.duration(
                    vehicle,
                    route.start.place.location,
                    first.place.location,
                    TravelTime::Departure(earliest),
                );

                #[allow(clippy::manual_clamp)]
                earliest.max(first.place.time.start() - start_to_first).min(vehicle.latest_arrival)
            }
            _ => earliest,
        }
    }
}

impl StateUpdater for DepartureTimeUpdater {
    fn order(&self) -> Option<TraversalOrder> {
        Some(TraversalOrder::Forward)
    }

    fn begin(&mut self, route: &mut Route, state: &mut StateManager) -> StateResult<()> {
        let departure = self.get_departure(route);

        route.start.schedule = Schedule::new(departure, departure);
        state.set_departure_time(route.id(), departure);

        Ok(())
    }
}
