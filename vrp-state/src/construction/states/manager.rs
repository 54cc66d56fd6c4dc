#[cfg(test)]
#[path = "../../../tests/unit/construction/states/manager_test.rs"]
mod manager_test;

use super::*;
use crate::models::problem::VehicleIdx;
use crate::models::solution::{ActivityId, RouteId};
use nohash_hasher::IntMap;
use rustc_hash::FxHashMap;
use std::any::Any;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A stored state value with the name of its type.
#[derive(Clone)]
struct StateEntry {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl StateEntry {
    fn new<T: Send + Sync + 'static>(value: T) -> Self {
        Self { value: Arc::new(value), type_name: std::any::type_name::<T>() }
    }
}

type StateMap = IntMap<StateId, StateEntry>;
type VehicleStateMap = FxHashMap<(VehicleIdx, StateId), StateEntry>;

/// Keeps typed states of problem, routes and activities.
///
/// Every value is stored together with its type: reading it as another type fails with
/// [`StateError::TypeMismatch`]. Reading a value which was never written falls back to a default
/// registered with [`StateManager::add_default`], otherwise `get_*` methods fail with
/// [`StateError::Missing`] while `find_*` methods return `None`.
#[derive(Clone)]
pub struct StateManager {
    names: FxHashMap<String, StateId>,
    ids: Vec<String>,
    defaults: StateMap,
    problem: StateMap,
    routes: FxHashMap<RouteId, StateMap>,
    route_vehicles: FxHashMap<RouteId, VehicleStateMap>,
    activities: FxHashMap<ActivityId, StateMap>,
    activity_vehicles: FxHashMap<ActivityId, VehicleStateMap>,
}

impl StateManager {
    /// Creates a new instance of `StateManager` with built-in states registered.
    pub fn new() -> Self {
        let ids = BUILT_IN_STATES.iter().map(|(_, name)| name.to_string()).collect::<Vec<_>>();
        let names = BUILT_IN_STATES.iter().map(|(id, name)| (name.to_string(), *id)).collect();

        Self {
            names,
            ids,
            defaults: Default::default(),
            problem: Default::default(),
            routes: Default::default(),
            route_vehicles: Default::default(),
            activities: Default::default(),
            activity_vehicles: Default::default(),
        }
    }

    /// Creates a new user defined state id. Returns an existing id if the name is already
    /// registered by user, fails if the name belongs to a built-in state.
    pub fn create_state_id(&mut self, name: &str) -> StateResult<StateId> {
        if BUILT_IN_STATES.iter().any(|(_, built_in)| *built_in == name) {
            return Err(StateError::ReservedName(name.to_string()));
        }

        if let Some(id) = self.names.get(name) {
            return Ok(*id);
        }

        let id = StateId(self.ids.len());
        self.ids.push(name.to_string());
        self.names.insert(name.to_string(), id);

        Ok(id)
    }

    /// Returns state id by its name.
    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.names.get(name).copied()
    }

    /// Returns state name by its id.
    pub fn state_name(&self, id: StateId) -> &str {
        self.ids.get(id.0).map_or("unknown", |name| name.as_str())
    }

    /// Adds a default value which is returned in any scope when the state is not written.
    /// Defaults survive [`StateManager::clear`].
    pub fn add_default<T: Send + Sync + 'static>(&mut self, id: StateId, value: T) {
        self.defaults.insert(id, StateEntry::new(value));
    }

    /// Removes all written states keeping defaults and registered state ids.
    pub fn clear(&mut self) {
        self.problem.clear();
        self.routes.clear();
        self.route_vehicles.clear();
        self.activities.clear();
        self.activity_vehicles.clear();
    }

    /// Removes all states of the activity, including vehicle dependent ones.
    pub fn remove_activity_states(&mut self, activity: ActivityId) {
        self.activities.remove(&activity);
        self.activity_vehicles.remove(&activity);
    }

    /// Removes all states of the route, including vehicle dependent ones.
    pub fn remove_route_states(&mut self, route: RouteId) {
        self.routes.remove(&route);
        self.route_vehicles.remove(&route);
    }

    /// Puts problem state.
    pub fn put_problem_state<T: Send + Sync + 'static>(&mut self, id: StateId, value: T) {
        self.problem.insert(id, StateEntry::new(value));
    }

    /// Gets problem state.
    pub fn get_problem_state<T: Send + Sync + 'static>(&self, id: StateId) -> StateResult<&T> {
        self.require(id, "problem", self.find_problem_state(id))
    }

    /// Finds problem state.
    pub fn find_problem_state<T: Send + Sync + 'static>(&self, id: StateId) -> StateResult<Option<&T>> {
        self.resolve(id, self.problem.get(&id))
    }

    /// Puts route state.
    pub fn put_route_state<T: Send + Sync + 'static>(&mut self, id: StateId, route: RouteId, value: T) {
        self.routes.entry(route).or_default().insert(id, StateEntry::new(value));
    }

    /// Gets route state.
    pub fn get_route_state<T: Send + Sync + 'static>(&self, id: StateId, route: RouteId) -> StateResult<&T> {
        self.require(id, "route", self.find_route_state(id, route))
    }

    /// Finds route state.
    pub fn find_route_state<T: Send + Sync + 'static>(&self, id: StateId, route: RouteId) -> StateResult<Option<&T>> {
        self.resolve(id, self.routes.get(&route).and_then(|states| states.get(&id)))
    }

    /// Puts vehicle dependent route state.
    pub fn put_route_vehicle_state<T: Send + Sync + 'static>(
        &mut self,
        id: StateId,
        route: RouteId,
        vehicle: VehicleIdx,
        value: T,
    ) {
        self.route_vehicles.entry(route).or_default().insert((vehicle, id), StateEntry::new(value));
    }

    /// Gets vehicle dependent route state.
    pub fn get_route_vehicle_state<T: Send + Sync + 'static>(
        &self,
        id: StateId,
        route: RouteId,
        vehicle: VehicleIdx,
    ) -> StateResult<&T> {
        self.require(id, "route vehicle", self.find_route_vehicle_state(id, route, vehicle))
    }

    /// Finds vehicle dependent route state.
    pub fn find_route_vehicle_state<T: Send + Sync + 'static>(
        &self,
        id: StateId,
        route: RouteId,
        vehicle: VehicleIdx,
    ) -> StateResult<Option<&T>> {
        self.resolve(id, self.route_vehicles.get(&route).and_then(|states| states.get(&(vehicle, id))))
    }

    /// Puts activity state.
    pub fn put_activity_state<T: Send + Sync + 'static>(&mut self, id: StateId, activity: ActivityId, value: T) {
        self.activities.entry(activity).or_default().insert(id, StateEntry::new(value));
    }

    /// Gets activity state.
    pub fn get_activity_state<T: Send + Sync + 'static>(&self, id: StateId, activity: ActivityId) -> StateResult<&T> {
        self.require(id, "activity", self.find_activity_state(id, activity))
    }

    /// Finds activity state.
    pub fn find_activity_state<T: Send + Sync + 'static>(
        &self,
        id: StateId,
        activity: ActivityId,
    ) -> StateResult<Option<&T>> {
        self.resolve(id, self.activities.get(&activity).and_then(|states| states.get(&id)))
    }

    /// Puts vehicle dependent activity state.
    pub fn put_activity_vehicle_state<T: Send + Sync + 'static>(
        &mut self,
        id: StateId,
        activity: ActivityId,
        vehicle: VehicleIdx,
        value: T,
    ) {
        self.activity_vehicles.entry(activity).or_default().insert((vehicle, id), StateEntry::new(value));
    }

    /// Gets vehicle dependent activity state.
    pub fn get_activity_vehicle_state<T: Send + Sync + 'static>(
        &self,
        id: StateId,
        activity: ActivityId,
        vehicle: VehicleIdx,
    ) -> StateResult<&T> {
        self.require(id, "activity vehicle", self.find_activity_vehicle_state(id, activity, vehicle))
    }

    /// Finds vehicle dependent activity state.
    pub fn find_activity_vehicle_state<T: Send + Sync + 'static>(
        &self,
        id: StateId,
        activity: ActivityId,
        vehicle: VehicleIdx,
    ) -> StateResult<Option<&T>> {
        self.resolve(id, self.activity_vehicles.get(&activity).and_then(|states| states.get(&(vehicle, id))))
    }

    fn resolve<'a, T: Send + Sync + 'static>(
        &'a self,
        id: StateId,
        entry: Option<&'a StateEntry>,
    ) -> StateResult<Option<&'a T>> {
        match entry.or_else(|| self.defaults.get(&id)) {
            Some(entry) => (*entry.value).downcast_ref::<T>().map(Some).ok_or_else(|| StateError::TypeMismatch {
                state: self.state_name(id).to_string(),
                expected: std::any::type_name::<T>(),
                actual: entry.type_name,
            }),
            None => Ok(None),
        }
    }

    fn require<'a, T>(
        &self,
        id: StateId,
        scope: &'static str,
        value: StateResult<Option<&'a T>>,
    ) -> StateResult<&'a T> {
        value?.ok_or_else(|| StateError::Missing { state: self.state_name(id).to_string(), scope })
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for StateManager {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateManager")
            .field("states", &self.ids)
            .field("routes", &self.routes.len())
            .field("activities", &self.activities.len())
            .finish_non_exhaustive()
    }
}
