use super::*;
use crate::construction::states::*;
use crate::helpers::construction::*;
use crate::helpers::models::create_test_problem;
use crate::helpers::models::problem::*;
use crate::models::common::{Capacity, Location, TimeWindow, TimeWindows};
use crate::models::solution::Activity;
use crate::utils::InfoLogger;
use std::sync::Mutex;

/// Collects all built-in states of the solution as strings to simplify comparison.
fn collect_states(solution: &SolutionContext) -> Vec<String> {
    let state = &solution.state;

    solution
        .routes()
        .iter()
        .flat_map(|route| {
            let route_states = format!(
                "route {}: {:?} {:?} {:?} {:?} {:?} {:?} {:?}",
                route.id(),
                state.get_load_at_beginning(route.id()),
                state.get_load_at_end(route.id()),
                state.get_max_load(route.id()),
                state.get_departure_time(route.id()),
                state.get_time_slack(route.id()),
                state.get_distance(route.id()),
                state.get_duration(route.id()),
            );

            let activity_states = route.all_activities().map(|activity| {
                let id = activity.id();
                format!(
                    "activity {id}: {:?} {:?} {:?} {:?} {:?} {:?} {:?} {:?}",
                    activity.schedule,
                    state.find_activity_state::<Capacity>(LOAD, id),
                    state.find_activity_state::<Capacity>(FUTURE_MAXLOAD, id),
                    state.find_activity_state::<Capacity>(PAST_MAXLOAD, id),
                    state.find_activity_state::<f64>(LATEST_OPERATION_START_TIME, id),
                    state.find_activity_state::<f64>(TIME_SLACK, id),
                    state.find_activity_state::<f64>(FUTURE_WAITING, id),
                    state.find_activity_state::<f64>(DISTANCE, id),
                )
            });

            std::iter::once(route_states).chain(activity_states).collect::<Vec<_>>()
        })
        .collect()
}

struct DoubleLoadUpdater {
    state_id: Option<StateId>,
}

impl StateUpdater for DoubleLoadUpdater {
    fn order(&self) -> Option<TraversalOrder> {
        Some(TraversalOrder::Forward)
    }

    fn begin(&mut self, _: &mut Route, state: &mut StateManager) -> StateResult<()> {
        self.state_id = Some(state.create_state_id("double_load")?);
        Ok(())
    }

    fn visit(&mut self, activity: &mut Activity, state: &mut StateManager) -> StateResult<()> {
        let Some(state_id) = self.state_id else { return Ok(()) };
        let load = state.get_load_at(activity.id())?.clone();

        state.put_activity_state(state_id, activity.id(), &load + &load);

        Ok(())
    }
}

struct FailOnRecomputeUpdater;

impl StateUpdater for FailOnRecomputeUpdater {
    fn order(&self) -> Option<TraversalOrder> {
        None
    }

    fn insertion_started(&mut self, route: &Route, _: &mut StateManager) -> StateResult<()> {
        if route.tour.is_empty() {
            Ok(())
        } else {
            Err(StateError::Missing { state: "custom".to_string(), scope: "route" })
        }
    }
}

fn create_recording_environment(is_verbose: bool) -> (Arc<Mutex<Vec<String>>>, Environment) {
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let logger_messages = messages.clone();
    let logger: InfoLogger = Arc::new(move |msg: &str| logger_messages.lock().unwrap().push(msg.to_string()));

    (messages, Environment::new(logger, is_verbose))
}

fn create_failing_solution() -> SolutionContext {
    let problem = create_test_problem(vec![test_service("job1", 1, 1)], vec![test_vehicle("v1")]);
    let updater = StateUpdateManagerBuilder::from_problem(problem.as_ref())
        .add_updater(Box::new(FailOnRecomputeUpdater))
        .build();

    let mut solution = SolutionContext::with_updater(problem, updater);
    let route = solution.add_route(VehicleIdx(0)).unwrap();
    solution.insert_job(route, JobIdx(0), 0).unwrap();

    solution
}

#[test]
fn can_add_routes_with_unique_ids() {
    let vehicles = vec![test_vehicle("v1"), test_vehicle("v2")];
    let mut solution = SolutionContext::new(create_test_problem(vec![], vehicles));

    let first = solution.add_route(VehicleIdx(0)).unwrap();
    let second = solution.add_route(VehicleIdx(1)).unwrap();

    assert_ne!(first, second);
    assert_eq!(solution.routes().len(), 2);
    assert_eq!(solution.route(second).map(|route| route.vehicle().id.as_str()), Some("v2"));
    assert!(solution.add_route(VehicleIdx(2)).is_err());
}

#[test]
fn can_insert_job_activities_consecutively() {
    let jobs = vec![test_service("job1", 1, 1), test_service("job2", 2, 1), test_shipment("job3", 3, 4, 1)];
    let mut solution = SolutionContext::new(create_test_problem(jobs, vec![test_vehicle("v1")]));
    let route = solution.add_route(VehicleIdx(0)).unwrap();

    solution.insert_job(route, JobIdx(0), 0).unwrap();
    solution.insert_job(route, JobIdx(1), 1).unwrap();
    solution.insert_job(route, JobIdx(2), 1).unwrap();

    let names = solution.route(route).unwrap().tour.iter().map(|activity| activity.name()).collect::<Vec<_>>();
    assert_eq!(names, vec!["service", "pickupShipment", "deliverShipment", "service"]);
}

fn create_job_with_two_time_windows(location: usize) -> Job {
    let times = TimeWindows::strict(vec![TimeWindow::new(0., 10.).unwrap(), TimeWindow::new(50., 60.).unwrap()]);
    let place = Place::new(Location::new(location), 0., times.unwrap());

    Job::new("job1", JobKind::Service(place), Capacity::single(1))
}

parameterized_test! {can_select_time_window_by_arrival, (location, expected_time, expected_slack), {
    let jobs = vec![create_job_with_two_time_windows(location)];
    let (solution, route) = create_solution_with_jobs(jobs, vec![test_vehicle("v1")]);
    let (route, state) = get_route_with_state(&solution, route);
    let activity = route.tour.get(0).unwrap();

    assert_eq!(activity.place.time, TimeWindow::new(expected_time.0, expected_time.1).unwrap());
    assert_eq!(activity.schedule.arrival, location as f64);
    assert_eq!(state.get_time_slack_at(activity.id()), Ok(&expected_slack));
}}

can_select_time_window_by_arrival! {
    case01_first_window: (5, (0., 10.), 5.),
    case02_second_window: (30, (50., 60.), 10.),
    case03_late_arrival: (70, (50., 60.), -10.),
}

#[test]
fn can_insert_shipment_activities_at_independent_positions() {
    let jobs = vec![test_shipment("job1", 1, 2, 10), test_shipment("job2", 3, 4, 5)];
    let mut solution = SolutionContext::new(create_test_problem(jobs, vec![test_vehicle("v1")]));
    let route = solution.add_route(VehicleIdx(0)).unwrap();

    solution.insert_job_at(route, JobIdx(0), &[0, 1]).unwrap();
    solution.insert_job_at(route, JobIdx(1), &[1, 3]).unwrap();

    let jobs = solution.route(route).unwrap().tour.iter().filter_map(|activity| activity.job()).collect::<Vec<_>>();
    assert_eq!(jobs, vec![JobIdx(0), JobIdx(1), JobIdx(0), JobIdx(1)]);
}

parameterized_test! {can_reject_invalid_insertion_indices, indices, {
    let jobs = vec![test_service("job1", 1, 1), test_shipment("job2", 2, 3, 1)];
    let (mut solution, route) = create_solution_with_jobs(jobs, vec![test_vehicle("v1")]);
    solution.remove_job(route, JobIdx(1)).unwrap();
    let before = collect_states(&solution);

    let result = solution.insert_job_at(route, JobIdx(1), indices);

    assert!(result.is_err());
    assert_eq!(collect_states(&solution), before);
}}

can_reject_invalid_insertion_indices! {
    case01_missing_index: &[0],
    case02_extra_index: &[0, 1, 2],
    case03_same_indices: &[1, 1],
    case04_decreasing_indices: &[1, 0],
    case05_out_of_range: &[0, 3],
}

parameterized_test! {can_reject_invalid_insertion, (route, job, index), {
    let jobs = vec![test_service("job1", 1, 1), test_service("job2", 2, 1), test_service("job3", 3, 1)];
    let (mut solution, route_id) = create_solution_with_jobs(jobs, vec![test_vehicle("v1")]);
    solution.remove_job(route_id, JobIdx(2)).unwrap();
    let before = collect_states(&solution);

    let result = solution.insert_job(RouteId(route), JobIdx(job), index);

    assert!(result.is_err());
    assert_eq!(collect_states(&solution), before);
}}

can_reject_invalid_insertion! {
    case01_already_assigned_job: (0, 1, 0),
    case02_unknown_job: (0, 5, 0),
    case03_unknown_route: (3, 2, 0),
    case04_out_of_range: (0, 2, 3),
}

#[test]
fn can_reject_insertion_out_of_range() {
    let jobs = vec![test_service("job1", 1, 1)];
    let mut solution = SolutionContext::new(create_test_problem(jobs, vec![test_vehicle("v1")]));
    let route = solution.add_route(VehicleIdx(0)).unwrap();

    assert!(solution.insert_job(route, JobIdx(0), 1).is_err());
    assert!(solution.route(route).unwrap().tour.is_empty());
    assert!(solution.insert_job(route, JobIdx(0), 0).is_ok());
}

#[test]
fn can_remove_job_with_its_states() {
    let jobs = vec![test_pickup("job1", 1, 1), test_shipment("job2", 2, 3, 1)];
    let (mut solution, route) = create_solution_with_jobs(jobs, vec![test_vehicle("v1")]);
    let removed =
        solution.route(route).unwrap().tour.job_activities(JobIdx(1)).map(|a| a.id()).collect::<Vec<_>>();
    assert_eq!(removed.len(), 2);

    assert!(solution.remove_job(route, JobIdx(1)).unwrap());
    assert!(!solution.remove_job(route, JobIdx(1)).unwrap());

    removed.into_iter().for_each(|id| {
        assert!(matches!(solution.state.get_load_at(id), Err(StateError::Missing { .. })));
        assert_eq!(solution.state.find_activity_state::<f64>(TIME_SLACK, id), Ok(None));
    });
    assert_eq!(solution.route(route).unwrap().tour.job_count(), 1);
}

#[test]
fn can_recompute_states_idempotently() {
    let mut solution = create_random_solution(42, 20, 3);
    let incremental = collect_states(&solution);

    solution.insertion_started().unwrap();
    let first = collect_states(&solution);
    solution.insertion_started().unwrap();
    solution.recompute().unwrap();
    let second = collect_states(&solution);

    assert_eq!(first, incremental);
    assert_eq!(second, first);
}

#[test]
fn can_recompute_solutions_in_parallel() {
    let seeds = [1, 2, 3, 4, 5];
    let mut parallel = seeds.iter().map(|seed| create_random_solution(*seed, 15, 2)).collect::<Vec<_>>();
    let mut sequential = seeds.iter().map(|seed| create_random_solution(*seed, 15, 2)).collect::<Vec<_>>();

    recompute_solutions(parallel.as_mut_slice(), &Environment::silent()).unwrap();
    sequential.iter_mut().for_each(|solution| solution.insertion_started().unwrap());

    let parallel = parallel.iter().map(collect_states).collect::<Vec<_>>();
    let sequential = sequential.iter().map(collect_states).collect::<Vec<_>>();
    assert_eq!(parallel, sequential);
}

#[test]
fn can_report_failed_solutions() {
    let (messages, environment) = create_recording_environment(false);
    let mut solutions = vec![create_random_solution(1, 5, 1), create_failing_solution()];

    let result = recompute_solutions(solutions.as_mut_slice(), &environment);

    assert_eq!(result, Err("state 'custom' is missing in route scope".into()));
    assert_eq!(*messages.lock().unwrap(), vec!["recomputed 2 solutions with 2 routes in total, failed: 1"]);
}

#[test]
fn can_run_custom_updater_after_built_in_ones() {
    let jobs = vec![test_delivery("job1", 1, 3), test_pickup("job2", 2, 2)];
    let problem = create_test_problem(jobs, vec![test_vehicle("v1")]);
    let updater = StateUpdateManagerBuilder::from_problem(problem.as_ref())
        .add_updater(Box::new(DoubleLoadUpdater { state_id: None }))
        .build();
    let mut solution = SolutionContext::with_updater(problem, updater);
    let route = solution.add_route(VehicleIdx(0)).unwrap();
    solution.insert_job(route, JobIdx(0), 0).unwrap();
    solution.insert_job(route, JobIdx(1), 1).unwrap();

    let state_id = solution.state.state_id("double_load").unwrap();
    let loads = solution
        .route(route)
        .unwrap()
        .tour
        .iter()
        .map(|activity| solution.state.get_activity_state::<Capacity>(state_id, activity.id()).unwrap().get(0))
        .collect::<Vec<_>>();

    assert_eq!(loads, vec![0, 4]);
}

#[test]
fn can_log_insertion_rounds_in_verbose_mode() {
    let (messages, environment) = create_recording_environment(true);
    let problem = Problem {
        environment: Arc::new(environment),
        ..create_test_problem(vec![test_service("job1", 1, 1)], vec![test_vehicle("v1")]).as_ref().clone()
    };
    let mut solution = SolutionContext::new(Arc::new(problem));
    let route = solution.add_route(VehicleIdx(0)).unwrap();
    solution.insert_job(route, JobIdx(0), 0).unwrap();

    solution.insertion_started().unwrap();

    assert_eq!(
        *messages.lock().unwrap(),
        vec![
            "insertion started for route 0: 0 jobs, 0 activities",
            "insertion started for route 0: 1 jobs, 1 activities"
        ]
    );
}

#[test]
fn can_skip_skills_when_jobs_are_not_provided() {
    let problem = create_test_problem(vec![test_service("job1", 1, 1)], vec![test_vehicle("v1")]);
    let updater = StateUpdateManagerBuilder::new(problem.transport.clone(), problem.activity.clone())
        .with_activity_policy(ActivityPolicy::AsSoonAsArrived)
        .with_environment(Arc::new(Environment::silent()))
        .build();
    let mut solution = SolutionContext::with_updater(problem, updater);

    let route = solution.add_route(VehicleIdx(0)).unwrap();

    assert!(solution.state.get_skills(route).is_err());
    assert!(solution.state.get_time_slack(route).is_ok());
}
