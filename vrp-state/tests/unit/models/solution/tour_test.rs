use super::*;
use crate::helpers::models::solution::*;
use crate::models::solution::ActivityKind;

fn create_tour(activities: Vec<Activity>) -> TourActivities {
    let mut tour = TourActivities::default();
    activities.into_iter().for_each(|activity| {
        tour.add_activity(activity).unwrap();
    });

    tour
}

fn get_ids(tour: &TourActivities) -> Vec<usize> {
    tour.iter().map(|activity| activity.id().0).collect()
}

fn shipment_activity(id: usize, job: usize, is_pickup: bool) -> Activity {
    let kind = if is_pickup {
        ActivityKind::PickupShipment(JobIdx(job))
    } else {
        ActivityKind::DeliverShipment(JobIdx(job))
    };

    ActivityBuilder::new(id).kind(kind).build()
}

fn create_shipment_tour() -> TourActivities {
    create_tour(vec![shipment_activity(1, 7, true), test_job_activity(2, 2, 2), shipment_activity(3, 7, false)])
}

#[test]
fn can_add_and_insert_activities() {
    let mut tour = create_tour(vec![test_job_activity(1, 1, 1), test_job_activity(2, 2, 2)]);

    tour.insert_activity(0, test_job_activity(3, 3, 3)).unwrap();
    tour.insert_activity(3, test_job_activity(4, 4, 4)).unwrap();

    assert_eq!(get_ids(&tour), vec![3, 1, 2, 4]);
    assert_eq!(tour.len(), 4);
    assert_eq!(tour.job_count(), 4);
    assert!(tour.has_job(JobIdx(3)));
}

parameterized_test! {can_reject_invalid_insertion, (index, activity), {
    let mut tour = create_tour(vec![test_job_activity(1, 1, 1)]);

    assert!(tour.insert_activity(index, activity).is_err());
    assert_eq!(get_ids(&tour), vec![1]);
}}

can_reject_invalid_insertion! {
    case01_out_of_range: (2, test_job_activity(2, 2, 2)),
    case02_duplicate_identity: (0, test_job_activity(1, 2, 2)),
    case03_start: (0, ActivityBuilder::new(5).kind(ActivityKind::Start).build()),
    case04_end: (1, ActivityBuilder::new(5).kind(ActivityKind::End).build()),
}

#[test]
fn can_keep_job_while_any_of_its_activities_remains() {
    let mut tour = create_shipment_tour();

    let removed = tour.remove_activity(ActivityId(1));

    assert_eq!(removed.map(|activity| activity.id()), Some(ActivityId(1)));
    assert!(tour.has_job(JobIdx(7)));
    assert_eq!(tour.job_activities(JobIdx(7)).count(), 1);

    tour.remove_activity(ActivityId(3));

    assert!(!tour.has_job(JobIdx(7)));
    assert_eq!(get_ids(&tour), vec![2]);
    assert!(tour.remove_activity(ActivityId(3)).is_none());
}

#[test]
fn can_remove_job_with_all_activities() {
    let mut tour = create_shipment_tour();

    assert!(tour.remove_job(JobIdx(7)));
    assert!(!tour.remove_job(JobIdx(7)));
    assert_eq!(get_ids(&tour), vec![2]);
    assert_eq!(tour.jobs().collect::<Vec<_>>(), vec![JobIdx(2)]);
}

#[test]
fn can_get_activities_by_index_and_identity() {
    let mut tour = create_tour(vec![test_job_activity(1, 1, 1), test_job_activity(2, 2, 2)]);

    assert_eq!(tour.index_of(ActivityId(2)), Some(1));
    assert_eq!(tour.index_of(ActivityId(5)), None);
    assert_eq!(tour.get(0).map(|activity| activity.id()), Some(ActivityId(1)));

    if let Some(activity) = tour.get_mut(1) {
        activity.schedule.arrival = 42.;
    }
    tour.iter_mut().for_each(|activity| activity.schedule.departure = 50.);

    assert_eq!(tour.get(1).map(|activity| activity.schedule.arrival), Some(42.));
    assert!(tour.iter().all(|activity| activity.schedule.departure == 50.));
    assert!(!tour.is_empty());
    assert!(TourActivities::default().is_empty());
}

#[test]
fn can_iterate_in_reverse_with_cursor() {
    let mut tour = create_tour((1..=3).map(|idx| test_job_activity(idx, idx, idx)).collect());
    let mut cursor = ReverseCursor::new(&tour);

    let mut ids = vec![];
    while let Some(activity) = cursor.next_activity(&tour) {
        ids.push(activity.id().0);
    }
    assert_eq!(ids, vec![3, 2, 1]);
    assert!(cursor.next_index().is_none());

    cursor.seek(1);
    if let Some(activity) = cursor.next_activity_mut(&mut tour) {
        activity.schedule.arrival = 10.;
    }
    assert_eq!(tour.get(1).map(|activity| activity.schedule.arrival), Some(10.));
    assert_eq!(cursor.next_index(), Some(0));

    cursor.reset(&tour);
    assert_eq!(cursor.next_index(), Some(2));
}

#[test]
fn can_seek_cursor_beyond_tour_size() {
    let tour = create_tour(vec![test_job_activity(1, 1, 1)]);
    let mut cursor = ReverseCursor::new(&tour);

    cursor.seek(usize::MAX);

    assert_eq!(cursor.next_index(), Some(usize::MAX - 1));
    assert!(cursor.next_activity(&tour).is_none());
}
