use super::*;
use crate::helpers::models::problem::*;

parameterized_test! {can_get_job_demand, (job, expected), {
    let demand = job.demand();

    assert_eq!(demand.pickup, (expected.0, expected.1));
    assert_eq!(demand.delivery, (expected.2, expected.3));
}}

can_get_job_demand! {
    case01_service: (test_service("job", 1, 5),
        (Capacity::single(5), Capacity::empty(), Capacity::empty(), Capacity::empty())),
    case02_pickup: (test_pickup("job", 1, 5),
        (Capacity::single(5), Capacity::empty(), Capacity::empty(), Capacity::empty())),
    case03_delivery: (test_delivery("job", 1, 5),
        (Capacity::empty(), Capacity::empty(), Capacity::single(5), Capacity::empty())),
    case04_shipment: (test_shipment("job", 1, 2, 5),
        (Capacity::empty(), Capacity::single(5), Capacity::empty(), Capacity::single(5))),
    case05_exchange: (test_exchange("job", 1, 3, 7),
        (Capacity::single(3), Capacity::empty(), Capacity::single(7), Capacity::empty())),
}

#[test]
fn can_get_places_in_visit_order() {
    let shipment = test_shipment("job", 1, 2, 5);

    let locations = shipment.places().iter().map(|place| place.location.index).collect::<Vec<_>>();

    assert_eq!(locations, vec![1, 2]);
    assert_eq!(test_service("job", 3, 1).places().len(), 1);
}

#[test]
fn can_assign_indices_when_adding_jobs() {
    let jobs = vec![test_service("job1", 1, 1), test_pickup("job2", 2, 1)].into_iter().collect::<Jobs>();

    assert_eq!(jobs.size(), 2);
    assert_eq!(jobs.get(JobIdx(0)).map(|job| job.id.as_str()), Some("job1"));
    assert_eq!(jobs.get(JobIdx(1)).map(|job| job.index()), Some(JobIdx(1)));
    assert!(jobs.get(JobIdx(2)).is_none());
    assert_eq!(jobs.all().map(|job| job.id.clone()).collect::<Vec<_>>(), vec!["job1", "job2"]);
}

#[test]
fn can_set_case_insensitive_skills() {
    let job = test_service("job", 1, 1).with_skills(Skills::new(["Fridge", "lift"]));

    assert!(job.skills.contains("fridge"));
    assert!(job.skills.contains("LIFT"));
    assert_eq!(job.skills.len(), 2);
}
