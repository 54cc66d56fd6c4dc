#[cfg(test)]
#[path = "../../../tests/unit/construction/updaters/max_load_test.rs"]
mod max_load_test;

use super::*;
use crate::construction::updaters::loads::find_route_load;
use crate::models::common::Capacity;

/// Updates maximum load reached from the route start up to each activity and maximum load of the
/// whole route. Runs after [`LoadUpdater`].
#[derive(Default)]
pub struct PastMaxLoadUpdater {
    max_load: Capacity,
}

impl StateUpdater for PastMaxLoadUpdater {
    fn order(&self) -> Option<TraversalOrder> {
        Some(TraversalOrder::Forward)
    }

    fn begin(&mut self, route: &mut Route, state: &mut StateManager) -> StateResult<()> {
        self.max_load = find_route_load(state, LOAD_AT_BEGINNING, route)?;

        Ok(())
    }

    fn visit(&mut self, activity: &mut Activity, state: &mut StateManager) -> StateResult<()> {
        self.max_load = self.max_load.max_load(state.get_load_at(activity.id())?);
        state.set_past_max_load_at(activity.id(), self.max_load.clone());

        Ok(())
    }

    fn finish(&mut self, route: &mut Route, state: &mut StateManager) -> StateResult<()> {
        state.set_max_load(route.id(), std::mem::take(&mut self.max_load));

        Ok(())
    }
}

/// Updates maximum load reached from each activity till the route end.
#[derive(Default)]
pub struct FutureMaxLoadUpdater {
    max_load: Capacity,
}

impl StateUpdater for FutureMaxLoadUpdater {
    fn order(&self) -> Option<TraversalOrder> {
        Some(TraversalOrder::Reverse)
    }

    fn begin(&mut self, route: &mut Route, state: &mut StateManager) -> StateResult<()> {
        self.max_load = find_route_load(state, LOAD_AT_END, route)?;

        Ok(())
    }

    fn visit(&mut self, activity: &mut Activity, state: &mut StateManager) -> StateResult<()> {
        self.max_load = self.max_load.max_load(state.get_load_at(activity.id())?);
        state.set_future_max_load_at(activity.id(), self.max_load.clone());

        Ok(())
    }
}
