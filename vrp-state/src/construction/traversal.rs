//! Drivers which run state updaters over route activities in forward or reverse order.

#[cfg(test)]
#[path = "../../tests/unit/construction/traversal_test.rs"]
mod traversal_test;

use crate::construction::states::{StateManager, StateResult};
use crate::models::problem::Job;
use crate::models::solution::{Activity, ReverseCursor, Route};

/// Specifies in which order an updater visits route activities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraversalOrder {
    /// From the route start to its end.
    Forward,
    /// From the route end to its start.
    Reverse,
}

/// Updates states of a route and its activities.
///
/// An updater is stateful: `begin` is called before the first activity is visited, `visit` once per
/// job activity in traversal order and `finish` after the last one. Route start and end are not
/// visited, they are accessible in `begin` and `finish`. Lifecycle notifications are used for route
/// level bookkeeping which does not need a full traversal.
pub trait StateUpdater: Send + Sync {
    /// Returns traversal order or `None` when updater works on route level only.
    fn order(&self) -> Option<TraversalOrder>;

    /// Starts traversal of the route.
    fn begin(&mut self, _route: &mut Route, _state: &mut StateManager) -> StateResult<()> {
        Ok(())
    }

    /// Visits job activity.
    fn visit(&mut self, _activity: &mut Activity, _state: &mut StateManager) -> StateResult<()> {
        Ok(())
    }

    /// Finishes traversal of the route.
    fn finish(&mut self, _route: &mut Route, _state: &mut StateManager) -> StateResult<()> {
        Ok(())
    }

    /// Notifies that a new insertion round is started for the route.
    fn insertion_started(&mut self, _route: &Route, _state: &mut StateManager) -> StateResult<()> {
        Ok(())
    }

    /// Notifies that the job was inserted into the route.
    fn job_inserted(&mut self, _route: &Route, _job: &Job, _state: &mut StateManager) -> StateResult<()> {
        Ok(())
    }

    /// Notifies that the job was removed from the route.
    fn job_removed(&mut self, _route: &Route, _job: &Job, _state: &mut StateManager) -> StateResult<()> {
        Ok(())
    }
}

/// Runs updaters from the route start to its end.
#[derive(Default)]
pub struct RouteActivityVisitor {
    updaters: Vec<Box<dyn StateUpdater>>,
}

impl RouteActivityVisitor {
    /// Adds an updater: updaters are applied in order of their addition at each activity.
    pub fn add_updater(&mut self, updater: Box<dyn StateUpdater>) -> &mut Self {
        self.updaters.push(updater);
        self
    }

    /// Returns amount of updaters.
    pub fn size(&self) -> usize {
        self.updaters.len()
    }

    /// Returns all updaters.
    pub fn updaters_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn StateUpdater>> + '_ {
        self.updaters.iter_mut()
    }

    /// Visits route activities in forward order.
    pub fn visit(&mut self, route: &mut Route, state: &mut StateManager) -> StateResult<()> {
        if self.updaters.is_empty() {
            return Ok(());
        }

        self.updaters.iter_mut().try_for_each(|updater| updater.begin(route, state))?;

        for activity in route.tour.iter_mut() {
            self.updaters.iter_mut().try_for_each(|updater| updater.visit(activity, state))?;
        }

        self.updaters.iter_mut().try_for_each(|updater| updater.finish(route, state))
    }
}

/// Runs updaters from the route end to its start.
#[derive(Default)]
pub struct ReverseRouteActivityVisitor {
    updaters: Vec<Box<dyn StateUpdater>>,
    cursor: ReverseCursor,
}

impl ReverseRouteActivityVisitor {
    /// Adds an updater: updaters are applied in order of their addition at each activity.
    pub fn add_updater(&mut self, updater: Box<dyn StateUpdater>) -> &mut Self {
        self.updaters.push(updater);
        self
    }

    /// Returns amount of updaters.
    pub fn size(&self) -> usize {
        self.updaters.len()
    }

    /// Returns all updaters.
    pub fn updaters_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn StateUpdater>> + '_ {
        self.updaters.iter_mut()
    }

    /// Visits route activities in reverse order.
    pub fn visit(&mut self, route: &mut Route, state: &mut StateManager) -> StateResult<()> {
        if self.updaters.is_empty() {
            return Ok(());
        }

        self.updaters.iter_mut().try_for_each(|updater| updater.begin(route, state))?;

        self.cursor.reset(&route.tour);
        while let Some(activity) = self.cursor.next_activity_mut(&mut route.tour) {
            self.updaters.iter_mut().try_for_each(|updater| updater.visit(activity, state))?;
        }

        self.updaters.iter_mut().try_for_each(|updater| updater.finish(route, state))
    }
}
