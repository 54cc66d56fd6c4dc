#[cfg(test)]
#[path = "../../../tests/unit/construction/updaters/practical_time_windows_test.rs"]
mod practical_time_windows_test;

use super::*;
use crate::models::common::{Float, Location, Timestamp};
use crate::models::problem::{Vehicle, VehicleIdx, VehiclesToUpdate};
use crate::models::solution::RouteId;

/// Keeps backward recursion state for one vehicle.
struct VehicleWindow {
    vehicle: Arc<Vehicle>,
    latest: Timestamp,
    next_location: Option<Location>,
    is_feasible: bool,
}

/// Updates the latest operation start time of each activity: the latest time which still allows
/// to serve every following activity in its time window and to finish the route before the
/// vehicle's latest arrival.
///
/// The value depends on the vehicle, so it is calculated for every vehicle provided by
/// [`VehiclesToUpdate`] and stored as vehicle dependent activity state. The value for the route
/// vehicle is also stored as plain activity state. When an activity cannot be started in time by
/// some vehicle, the route is marked with [`SWITCH_NOT_FEASIBLE`] flag for that vehicle.
pub struct PracticalTimeWindowsUpdater {
    transport: Arc<dyn TransportCost>,
    activity: Arc<dyn ActivityCost>,
    vehicles_to_update: VehiclesToUpdate,
    route: Option<(RouteId, VehicleIdx)>,
    windows: Vec<VehicleWindow>,
}

impl PracticalTimeWindowsUpdater {
    /// Creates a new instance of `PracticalTimeWindowsUpdater`.
    pub fn new(
        transport: Arc<dyn TransportCost>,
        activity: Arc<dyn ActivityCost>,
        vehicles_to_update: VehiclesToUpdate,
    ) -> Self {
        Self { transport, activity, vehicles_to_update, route: None, windows: vec![] }
    }
}

impl StateUpdater for PracticalTimeWindowsUpdater {
    fn order(&self) -> Option<TraversalOrder> {
        Some(TraversalOrder::Reverse)
    }

    fn begin(&mut self, route: &mut Route, _: &mut StateManager) -> StateResult<()> {
        self.route = Some((route.id(), route.vehicle().index()));

        self.windows.clear();
        self.windows.extend(self.vehicles_to_update.vehicles(route.vehicle()).into_iter().map(|vehicle| {
            VehicleWindow {
                latest: vehicle.latest_arrival,
                next_location: vehicle.route_end(),
                is_feasible: true,
                vehicle,
            }
        }));

        Ok(())
    }

    fn visit(&mut self, activity: &mut Activity, state: &mut StateManager) -> StateResult<()> {
        let Some((_, route_vehicle)) = self.route else { return Ok(()) };

        for window in self.windows.iter_mut() {
            let vehicle = window.vehicle.as_ref();

            let latest_start = if window.latest == Float::MAX {
                activity.place.time.end()
            } else {
                let travel = window.next_location.map_or(0., |next| {
                    self.transport.duration(vehicle, activity.place.location, next, TravelTime::Arrival(window.latest))
                });
                let duration = self.activity.duration(vehicle, activity, activity.schedule.arrival);

                activity.place.time.end().min(window.latest - travel - duration)
            };

            if latest_start < activity.place.time.start() {
                window.is_feasible = false;
            }

            state.set_latest_operation_start_time_for(activity.id(), vehicle.index(), latest_start);
            if vehicle.index() == route_vehicle {
                state.set_latest_operation_start_time_at(activity.id(), latest_start);
            }

            window.latest = latest_start;
            window.next_location = Some(activity.place.location);
        }

        Ok(())
    }

    fn finish(&mut self, _: &mut Route, state: &mut StateManager) -> StateResult<()> {
        let Some((route_id, _)) = self.route.take() else { return Ok(()) };

        self.windows.drain(..).for_each(|window| {
            state.set_switch_not_feasible_for(route_id, window.vehicle.index(), !window.is_feasible);
        });

        Ok(())
    }
}
