#[cfg(test)]
#[path = "../../../tests/unit/construction/updaters/loads_test.rs"]
mod loads_test;

use super::*;
use crate::models::common::{Capacity, Demand};
use crate::models::problem::Job;

/// Updates onboard load.
///
/// Route level states are maintained from lifecycle notifications: the load at the route start is
/// a sum of static deliveries, the load at the route end is a sum of static pickups. Load at each
/// activity is a running sum of load changes starting from the load at the route start.
#[derive(Default)]
pub struct LoadUpdater {
    current: Capacity,
}

impl LoadUpdater {
    fn update_route_loads(
        &self,
        route: &Route,
        state: &mut StateManager,
        update: impl Fn(Capacity, Capacity) -> Capacity,
        demand: &Demand,
    ) -> StateResult<()> {
        let beginning = find_route_load(state, LOAD_AT_BEGINNING, route)?;
        let end = find_route_load(state, LOAD_AT_END, route)?;

        state.set_load_at_beginning(route.id(), update(beginning, demand.delivery.0.clone()));
        state.set_load_at_end(route.id(), update(end, demand.pickup.0.clone()));

        Ok(())
    }
}

impl StateUpdater for LoadUpdater {
    fn order(&self) -> Option<TraversalOrder> {
        Some(TraversalOrder::Forward)
    }

    fn begin(&mut self, route: &mut Route, state: &mut StateManager) -> StateResult<()> {
        self.current = find_route_load(state, LOAD_AT_BEGINNING, route)?;

        Ok(())
    }

    fn visit(&mut self, activity: &mut Activity, state: &mut StateManager) -> StateResult<()> {
        self.current = &self.current + &activity.load_change();
        state.set_load_at(activity.id(), self.current.clone());

        Ok(())
    }

    fn insertion_started(&mut self, route: &Route, state: &mut StateManager) -> StateResult<()> {
        let (beginning, end) = route.tour.iter().fold(
            (Capacity::empty(), Capacity::empty()),
            |(beginning, end), activity| {
                let demand = activity.demand();
                (&beginning + &demand.delivery.0, &end + &demand.pickup.0)
            },
        );

        state.set_load_at_beginning(route.id(), beginning);
        state.set_load_at_end(route.id(), end);

        Ok(())
    }

    fn job_inserted(&mut self, route: &Route, job: &Job, state: &mut StateManager) -> StateResult<()> {
        self.update_route_loads(route, state, |total, value| total + value, &job.demand())
    }

    fn job_removed(&mut self, route: &Route, job: &Job, state: &mut StateManager) -> StateResult<()> {
        self.update_route_loads(route, state, |total, value| total - value, &job.demand())
    }
}

/// Returns route load state or empty load if it is not yet calculated.
pub(crate) fn find_route_load(state: &StateManager, id: StateId, route: &Route) -> StateResult<Capacity> {
    Ok(state.find_route_state::<Capacity>(id, route.id())?.cloned().unwrap_or_default())
}
