use super::*;
use crate::helpers::models::problem::*;
use crate::models::common::{Capacity, Location, OverlappingTimeWindows, TimeWindowCondition, TimeWindows};
use crate::models::problem::{JobIdx, Jobs, Place as JobPlace};

fn add_to_jobs(job: Job) -> Job {
    let jobs = std::iter::once(job).collect::<Jobs>();
    jobs.all().next().cloned().unwrap()
}

#[test]
fn can_create_shipment_activities() {
    let mut factory = JobActivityFactory::default();
    let job = add_to_jobs(test_shipment("job", 1, 2, 5));

    let activities = factory.create_activities(&job, &test_vehicle("v1")).unwrap();

    assert_eq!(activities.len(), 2);
    assert_eq!(activities[0].kind(), ActivityKind::PickupShipment(JobIdx(0)));
    assert_eq!(activities[1].kind(), ActivityKind::DeliverShipment(JobIdx(0)));
    assert_eq!(activities[0].load_change(), Capacity::single(5));
    assert_eq!(activities[1].load_change(), Capacity::single(-5));
    assert_ne!(activities[0].id(), activities[1].id());
}

parameterized_test! {can_create_single_activity, (job, kind, load_change), {
    let mut factory = JobActivityFactory::default();
    let job = add_to_jobs(job);

    let activities = factory.create_activities(&job, &test_vehicle("v1")).unwrap();

    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].name(), kind);
    assert_eq!(activities[0].load_change(), Capacity::single(load_change));
}}

can_create_single_activity! {
    case01_service: (test_service("job", 1, 3), "service", 3),
    case02_pickup: (test_pickup("job", 1, 3), "pickup", 3),
    case03_delivery: (test_delivery("job", 1, 3), "delivery", -3),
    case04_exchange: (test_exchange("job", 1, 3, 5), "exchange", -2),
}

parameterized_test! {can_create_activities_with_demand_of_job, job, {
    let job = add_to_jobs(job);

    let activities = JobActivityFactory::default().create_activities(&job, &test_vehicle("v1")).unwrap();
    let total = activities.iter().fold(Demand::default(), |total, activity| &total + activity.demand());

    assert_eq!(total, job.demand());
    assert_eq!(activities.len(), job.place_demands().len());
}}

can_create_activities_with_demand_of_job! {
    case01_service: test_service("job", 1, 3),
    case02_pickup: test_pickup("job", 1, 3),
    case03_delivery: test_delivery("job", 1, 3),
    case04_shipment: test_shipment("job", 1, 2, 3),
    case05_exchange: test_exchange("job", 1, 3, 5),
}

#[test]
fn can_return_all_applicable_time_windows() {
    let times = TimeWindows::strict(vec![TimeWindow::new(0., 10.).unwrap(), TimeWindow::new(50., 60.).unwrap()]);
    let place = JobPlace::new(Location::new(1), 0., times.unwrap());
    let job = add_to_jobs(Job::new("job", JobKind::Service(place), Capacity::single(1)));
    let mut factory = JobActivityFactory::default();

    let times = factory.time_windows(&job, &test_vehicle("v1")).unwrap();
    let activities = factory.create_activities(&job, &test_vehicle("v1")).unwrap();

    assert_eq!(times, vec![vec![TimeWindow::new(0., 10.).unwrap(), TimeWindow::new(50., 60.).unwrap()]]);
    assert_eq!(activities[0].place.time, TimeWindow::new(0., 10.).unwrap());
}

#[test]
fn can_use_time_window_applicable_for_vehicle_type() {
    let truck_only = TimeWindowCondition::VehicleTypes(vec!["truck".to_string()]);
    let mut times = OverlappingTimeWindows::default();
    times.add_included(TimeWindow::new(50., 60.).unwrap(), Some(truck_only));
    let place = JobPlace::new(Location::new(1), 0., TimeWindows::Overlapping(times));
    let job = add_to_jobs(Job::new("job", JobKind::Service(place), Capacity::single(1)));
    let mut factory = JobActivityFactory::default();

    let truck = factory.create_activities(&job, &VehicleBuilder::new("v1").vehicle_type("truck").build()).unwrap();
    let car = factory.create_activities(&job, &VehicleBuilder::new("v2").vehicle_type("car").build()).unwrap();

    assert_eq!(truck[0].place.time, TimeWindow::new(50., 60.).unwrap());
    assert_eq!(car[0].place.time, TimeWindow::max());
}

#[test]
fn can_fail_when_no_time_window_is_applicable() {
    let mut times = OverlappingTimeWindows::default();
    times.add_excluded(TimeWindow::max(), None);
    let place = JobPlace::new(Location::new(1), 0., TimeWindows::Overlapping(times));
    let job = add_to_jobs(Job::new("job", JobKind::Service(place), Capacity::single(1)));

    let result = JobActivityFactory::default().create_activities(&job, &test_vehicle("v1"));

    assert!(result.is_err());
}

#[test]
fn can_create_route_boundaries() {
    let mut factory = JobActivityFactory::default();
    let vehicle = VehicleBuilder::new("v1").start(3).end(5).shift(10., 100.).build();
    let open_vehicle = VehicleBuilder::new("v2").open().build();

    let start = factory.create_start(&vehicle).unwrap();
    let end = factory.create_end(&vehicle).unwrap().unwrap();

    assert!(start.is_start());
    assert!(end.is_end());
    assert_eq!(start.place.location.index, 3);
    assert_eq!(end.place.location.index, 5);
    assert_eq!(start.place.time, TimeWindow::new(10., 100.).unwrap());
    assert!(start.demand().is_empty());
    assert!(factory.create_end(&open_vehicle).unwrap().is_none());
}
