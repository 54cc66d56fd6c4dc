//! Glue which keeps route states consistent with route modifications.

#[cfg(test)]
#[path = "../../tests/unit/construction/context_test.rs"]
mod context_test;

use crate::construction::states::{StateManager, StateResult};
use crate::construction::traversal::*;
use crate::construction::updaters::*;
use crate::models::Problem;
use crate::models::problem::*;
use crate::models::solution::{Route, RouteId};
use crate::utils::{Environment, GenericError, GenericResult, parallel_map_mut};
use std::sync::Arc;

/// Notifies state updaters about route modifications and recomputes route states.
pub struct StateUpdateManager {
    forward: RouteActivityVisitor,
    reverse: ReverseRouteActivityVisitor,
    route_level: Vec<Box<dyn StateUpdater>>,
    environment: Arc<Environment>,
}

impl StateUpdateManager {
    /// Notifies that a new insertion round is started for the route and recomputes its states.
    pub fn insertion_started(&mut self, route: &mut Route, state: &mut StateManager) -> StateResult<()> {
        self.notify(|updater| updater.insertion_started(route, state))?;
        self.recompute(route, state)?;

        self.environment.log_verbose(&format!(
            "insertion started for route {}: {} jobs, {} activities",
            route.id(),
            route.tour.job_count(),
            route.tour.len()
        ));

        Ok(())
    }

    /// Notifies that the job is inserted into the route and recomputes its states.
    pub fn job_inserted(&mut self, route: &mut Route, job: &Job, state: &mut StateManager) -> StateResult<()> {
        self.notify(|updater| updater.job_inserted(route, job, state))?;
        self.recompute(route, state)
    }

    /// Notifies that the job is removed from the route and recomputes its states.
    pub fn job_removed(&mut self, route: &mut Route, job: &Job, state: &mut StateManager) -> StateResult<()> {
        self.notify(|updater| updater.job_removed(route, job, state))?;
        self.recompute(route, state)
    }

    /// Recomputes route states running forward, reverse and route level updaters.
    pub fn recompute(&mut self, route: &mut Route, state: &mut StateManager) -> StateResult<()> {
        self.forward.visit(route, state)?;
        self.reverse.visit(route, state)?;

        self.route_level.iter_mut().try_for_each(|updater| {
            updater.begin(route, state)?;
            updater.finish(route, state)
        })
    }

    fn notify<F>(&mut self, mut action: F) -> StateResult<()>
    where
        F: FnMut(&mut Box<dyn StateUpdater>) -> StateResult<()>,
    {
        self.forward
            .updaters_mut()
            .chain(self.reverse.updaters_mut())
            .chain(self.route_level.iter_mut())
            .try_for_each(&mut action)
    }
}

/// Builds [`StateUpdateManager`] with built-in updaters registered in order they depend on each
/// other:
/// * forward: departure time, activity times, route statistics, loads, past max load
/// * reverse: future max load, practical time windows, time slack
/// * route level: skills, if jobs are provided
///
/// Custom updaters are added after built-in ones.
pub struct StateUpdateManagerBuilder {
    transport: Arc<dyn TransportCost>,
    activity: Arc<dyn ActivityCost>,
    policy: ActivityPolicy,
    vehicles_to_update: VehiclesToUpdate,
    environment: Arc<Environment>,
    jobs: Option<Arc<Jobs>>,
    updaters: Vec<Box<dyn StateUpdater>>,
}

impl StateUpdateManagerBuilder {
    /// Creates a new instance of `StateUpdateManagerBuilder`.
    pub fn new(transport: Arc<dyn TransportCost>, activity: Arc<dyn ActivityCost>) -> Self {
        Self {
            transport,
            activity,
            policy: ActivityPolicy::default(),
            vehicles_to_update: VehiclesToUpdate::default(),
            environment: Arc::new(Environment::default()),
            jobs: None,
            updaters: vec![],
        }
    }

    /// Creates a builder using problem costs, jobs and environment.
    pub fn from_problem(problem: &Problem) -> Self {
        Self::new(problem.transport.clone(), problem.activity.clone())
            .with_jobs(problem.jobs.clone())
            .with_environment(problem.environment.clone())
    }

    /// Sets activity policy.
    pub fn with_activity_policy(mut self, policy: ActivityPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets vehicles for which vehicle dependent states are calculated.
    pub fn with_vehicles_to_update(mut self, vehicles_to_update: VehiclesToUpdate) -> Self {
        self.vehicles_to_update = vehicles_to_update;
        self
    }

    /// Sets environment.
    pub fn with_environment(mut self, environment: Arc<Environment>) -> Self {
        self.environment = environment;
        self
    }

    /// Sets jobs which enables route skills calculation.
    pub fn with_jobs(mut self, jobs: Arc<Jobs>) -> Self {
        self.jobs = Some(jobs);
        self
    }

    /// Adds a custom updater.
    pub fn add_updater(mut self, updater: Box<dyn StateUpdater>) -> Self {
        self.updaters.push(updater);
        self
    }

    /// Builds a [`StateUpdateManager`].
    pub fn build(self) -> StateUpdateManager {
        let transport = self.transport;
        let activity = self.activity;

        let mut updaters: Vec<Box<dyn StateUpdater>> = vec![
            Box::new(DepartureTimeUpdater::new(transport.clone())),
            Box::new(ActivityTimesUpdater::new(transport.clone(), activity.clone(), self.policy)),
            Box::new(RouteStatisticsUpdater::new(transport.clone())),
            Box::new(LoadUpdater::default()),
            Box::new(PastMaxLoadUpdater::default()),
            Box::new(FutureMaxLoadUpdater::default()),
            Box::new(PracticalTimeWindowsUpdater::new(transport.clone(), activity, self.vehicles_to_update)),
            Box::new(TimeSlackUpdater::new(transport)),
        ];

        if let Some(jobs) = self.jobs {
            updaters.push(Box::new(SkillsUpdater::new(jobs)));
        }

        updaters.extend(self.updaters);

        let mut forward = RouteActivityVisitor::default();
        let mut reverse = ReverseRouteActivityVisitor::default();
        let mut route_level = vec![];

        updaters.into_iter().for_each(|updater| match updater.order() {
            Some(TraversalOrder::Forward) => {
                forward.add_updater(updater);
            }
            Some(TraversalOrder::Reverse) => {
                reverse.add_updater(updater);
            }
            None => route_level.push(updater),
        });

        StateUpdateManager { forward, reverse, route_level, environment: self.environment }
    }
}

/// Keeps routes of one solution together with their states.
pub struct SolutionContext {
    /// The original problem.
    pub problem: Arc<Problem>,
    /// Route and activity states.
    pub state: StateManager,

    routes: Vec<Route>,
    updater: StateUpdateManager,
    factory: JobActivityFactory,
    next_route_id: usize,
}

impl SolutionContext {
    /// Creates a new solution context with default state updaters.
    pub fn new(problem: Arc<Problem>) -> Self {
        let updater = StateUpdateManagerBuilder::from_problem(problem.as_ref()).build();
        Self::with_updater(problem, updater)
    }

    /// Creates a new solution context with given state update manager.
    pub fn with_updater(problem: Arc<Problem>, updater: StateUpdateManager) -> Self {
        Self {
            problem,
            state: StateManager::default(),
            routes: vec![],
            updater,
            factory: JobActivityFactory::default(),
            next_route_id: 0,
        }
    }

    /// Adds an empty route served by the vehicle and computes its states.
    pub fn add_route(&mut self, vehicle: VehicleIdx) -> GenericResult<RouteId> {
        let vehicle = self
            .problem
            .fleet
            .get(vehicle)
            .cloned()
            .ok_or_else(|| format!("unknown vehicle index: {vehicle}"))?;

        let start = self.factory.create_start(&vehicle)?;
        let end = self.factory.create_end(&vehicle)?;

        let id = RouteId(self.next_route_id);
        self.next_route_id += 1;

        let mut route = Route::new(id, vehicle, start, end)?;
        self.updater.insertion_started(&mut route, &mut self.state)?;
        self.routes.push(route);

        Ok(id)
    }

    /// Starts a new insertion round: clears all states and recomputes them for every route.
    pub fn insertion_started(&mut self) -> GenericResult<()> {
        self.state.clear();

        for route in self.routes.iter_mut() {
            self.updater.insertion_started(route, &mut self.state)?;
        }

        Ok(())
    }

    /// Inserts job activities into the route one after another starting at given index and updates
    /// route states.
    pub fn insert_job(&mut self, route: RouteId, job: JobIdx, index: usize) -> GenericResult<()> {
        let size = self.problem.jobs.get(job).map_or(1, |job| job.places().len());
        let indices = (index..index.saturating_add(size)).collect::<Vec<_>>();

        self.insert_job_at(route, job, indices.as_slice())
    }

    /// Inserts job activities into the route and updates route states. Indices specify positions of
    /// job activities in the resulting tour, one per activity in order they have to be visited, and
    /// must be strictly increasing.
    ///
    /// When a job place has several applicable time windows, the activity gets the first one which
    /// ends not earlier than the vehicle arrival, or the last one if all of them end earlier.
    pub fn insert_job_at(&mut self, route: RouteId, job: JobIdx, indices: &[usize]) -> GenericResult<()> {
        let job = self.problem.jobs.get(job).ok_or_else(|| format!("unknown job index: {job}"))?;

        if self.routes.iter().any(|route| route.tour.has_job(job.index())) {
            return Err(format!("job '{}' is already assigned", job.id).into());
        }

        let route = find_route_mut(&mut self.routes, route)?;
        validate_indices(job, indices, route.tour.len())?;

        let times = self.factory.time_windows(job, route.vehicle())?;
        let activities = self.factory.create_activities(job, route.vehicle())?;

        for (index, activity) in indices.iter().zip(activities) {
            route.tour.insert_activity(*index, activity)?;
        }

        for (index, times) in indices.iter().zip(times).filter(|(_, times)| times.len() > 1) {
            self.updater.recompute(route, &mut self.state)?;

            if let Some(activity) = route.tour.get_mut(*index) {
                let arrival = activity.schedule.arrival;
                let time = times.iter().find(|time| time.end() >= arrival).or_else(|| times.last());

                if let Some(time) = time {
                    activity.place.time = time.clone();
                }
            }
        }

        self.updater.job_inserted(route, job, &mut self.state)?;

        Ok(())
    }

    /// Removes the job from the route, drops states of its activities and updates route states.
    /// Returns false if the route does not serve the job.
    pub fn remove_job(&mut self, route: RouteId, job: JobIdx) -> GenericResult<bool> {
        let job = self.problem.jobs.get(job).ok_or_else(|| format!("unknown job index: {job}"))?;
        let route = find_route_mut(&mut self.routes, route)?;

        let activities = route.tour.job_activities(job.index()).map(|activity| activity.id()).collect::<Vec<_>>();
        if !route.tour.remove_job(job.index()) {
            return Ok(false);
        }

        activities.into_iter().for_each(|activity| self.state.remove_activity_states(activity));
        self.updater.job_removed(route, job, &mut self.state)?;

        Ok(true)
    }

    /// Recomputes states of every route without notifying updaters.
    pub fn recompute(&mut self) -> GenericResult<()> {
        for route in self.routes.iter_mut() {
            self.updater.recompute(route, &mut self.state)?;
        }

        Ok(())
    }

    /// Returns route by its id.
    pub fn route(&self, route: RouteId) -> Option<&Route> {
        self.routes.iter().find(|r| r.id() == route)
    }

    /// Returns all routes.
    pub fn routes(&self) -> &[Route] {
        self.routes.as_slice()
    }
}

/// Starts a new insertion round for independent solutions in parallel. Returns errors of failed
/// solutions joined into one, if any.
pub fn recompute_solutions(solutions: &mut [SolutionContext], environment: &Environment) -> GenericResult<()> {
    let errors = parallel_map_mut(solutions, |solution| solution.insertion_started())
        .into_iter()
        .filter_map(Result::err)
        .collect::<Vec<_>>();

    let routes = solutions.iter().map(|solution| solution.routes().len()).sum::<usize>();

    environment.log(&format!(
        "recomputed {} solutions with {routes} routes in total, failed: {}",
        solutions.len(),
        errors.len()
    ));

    if errors.is_empty() { Ok(()) } else { Err(GenericError::join_many(&errors, ", ").into()) }
}

fn find_route_mut(routes: &mut [Route], id: RouteId) -> GenericResult<&mut Route> {
    routes.iter_mut().find(|route| route.id() == id).ok_or_else(|| format!("unknown route: {id}").into())
}

fn validate_indices(job: &Job, indices: &[usize], tour_size: usize) -> GenericResult<()> {
    let expected = job.places().len();
    if indices.len() != expected {
        return Err(format!("job '{}' requires {expected} insertion indices, got {}", job.id, indices.len()).into());
    }

    if indices.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(format!("insertion indices of job '{}' are not strictly increasing: {indices:?}", job.id).into());
    }

    match indices.last() {
        Some(last) if *last >= tour_size + expected => {
            Err(format!("insertion index {last} is out of range: size is {tour_size}").into())
        }
        _ => Ok(()),
    }
}
