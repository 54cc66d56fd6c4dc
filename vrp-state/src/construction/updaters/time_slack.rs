#[cfg(test)]
#[path = "../../../tests/unit/construction/updaters/time_slack_test.rs"]
mod time_slack_test;

use super::*;
use crate::models::common::Duration;

/// Updates time slack at each activity: difference between its latest operation start time and the
/// earliest time when operation can start given current schedule. Also updates total waiting time
/// from each activity till the route end.
///
/// Runs after [`PracticalTimeWindowsUpdater`] within the same reverse traversal. Route time slack is
/// a slack at the first activity or the whole free time budget of the vehicle for an empty route.
pub struct TimeSlackUpdater {
    transport: Arc<dyn TransportCost>,
    future_waiting: Duration,
    first_slack: Option<Duration>,
}

impl TimeSlackUpdater {
    /// Creates a new instance of `TimeSlackUpdater`.
    pub fn new(transport: Arc<dyn TransportCost>) -> Self {
        Self { transport, future_waiting: 0., first_slack: None }
    }

    fn get_route_budget(&self, route: &Route) -> Duration {
        let vehicle = route.vehicle();
        let departure = route.departure();

        let return_time = route.end.as_ref().map_or(0., |end| {
            self.transport.duration(
                vehicle,
                route.start.place.location,
                end.place.location,
                TravelTime::Departure(departure),
            )
        });

        vehicle.latest_arrival - departure - return_time
    }
}

impl StateUpdater for TimeSlackUpdater {
    fn order(&self) -> Option<TraversalOrder> {
        Some(TraversalOrder::Reverse)
    }

    fn begin(&mut self, _: &mut Route, _: &mut StateManager) -> StateResult<()> {
        self.future_waiting = 0.;
        self.first_slack = None;

        Ok(())
    }

    fn visit(&mut self, activity: &mut Activity, state: &mut StateManager) -> StateResult<()> {
        let arrival = activity.schedule.arrival;
        let operation_start = arrival.max(activity.place.time.start());
        let latest_start = *state.get_latest_operation_start_time_at(activity.id())?;

        let slack = latest_start - operation_start;
        self.future_waiting += operation_start - arrival;

        state.set_time_slack_at(activity.id(), slack);
        state.set_future_waiting_at(activity.id(), self.future_waiting);

        self.first_slack = Some(slack);

        Ok(())
    }

    fn finish(&mut self, route: &mut Route, state: &mut StateManager) -> StateResult<()> {
        let slack = match self.first_slack.take() {
            Some(slack) => slack,
            None => self.get_route_budget(route),
        };

        state.set_time_slack(route.id(), slack);

        Ok(())
    }
}
