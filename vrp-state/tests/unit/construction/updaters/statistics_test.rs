use super::*;
use crate::helpers::construction::update_route_states;
use crate::helpers::models::problem::*;
use crate::helpers::models::solution::*;

fn create_updaters() -> Vec<Box<dyn StateUpdater>> {
    let transport = TestTransportCost::new_shared();

    vec![
        Box::new(DepartureTimeUpdater::new(transport.clone())),
        Box::new(ActivityTimesUpdater::new(transport.clone(), test_activity_cost(), ActivityPolicy::default())),
        Box::new(RouteStatisticsUpdater::new(transport)),
    ]
}

fn create_route(vehicle: Vehicle) -> Route {
    RouteBuilder::new(vehicle)
        .add_activity(ActivityBuilder::new(2).location(5).duration(2.).build())
        .add_activity(ActivityBuilder::new(3).location(10).duration(3.).time_window(20., 1000.).build())
        .build()
}

parameterized_test! {can_update_route_statistics, (vehicle, expected_distances, expected_totals), {
    let mut route = create_route(vehicle);
    let mut state = StateManager::default();

    update_route_states(&mut route, &mut state, create_updaters());

    let distances =
        route.tour.iter().map(|activity| *state.get_distance_at(activity.id()).unwrap()).collect::<Vec<_>>();
    assert_eq!(distances, expected_distances);
    assert_eq!(state.get_distance(route.id()), Ok(&expected_totals.0));
    assert_eq!(state.get_duration(route.id()), Ok(&expected_totals.1));
}}

can_update_route_statistics! {
    case01_closed_route: (test_vehicle("v1"), vec![5., 10.], (20., 33.)),
    case02_open_route: (VehicleBuilder::new("v1").open().build(), vec![5., 10.], (10., 23.)),
    case03_late_departure: (VehicleBuilder::new("v1").shift(10., 1000.).build(), vec![5., 10.], (20., 25.)),
}

#[test]
fn can_update_statistics_of_empty_route() {
    let mut route = RouteBuilder::new(VehicleBuilder::new("v1").end(4).build()).build();
    let mut state = StateManager::default();

    update_route_states(&mut route, &mut state, create_updaters());

    assert_eq!(state.get_distance(route.id()), Ok(&4.));
    assert_eq!(state.get_duration(route.id()), Ok(&4.));
}
