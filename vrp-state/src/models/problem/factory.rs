#[cfg(test)]
#[path = "../../../tests/unit/models/problem/factory_test.rs"]
mod factory_test;

use crate::models::common::{Demand, TimeWindow, TimeWindowContext};
use crate::models::problem::{Job, JobKind, Vehicle};
use crate::models::solution::{Activity, ActivityId, ActivityKind, Place};
use crate::utils::{GenericError, GenericResult};

/// Creates activities for jobs and route boundaries. Each created activity gets a new identity
/// which is unique within the factory.
#[derive(Clone, Debug, Default)]
pub struct JobActivityFactory {
    next_id: usize,
}

impl JobActivityFactory {
    /// Creates job activities in order they have to be visited by the given vehicle. Each activity
    /// gets the earliest time window applicable for the vehicle. Fails if any job place has no such
    /// time window.
    pub fn create_activities(&mut self, job: &Job, vehicle: &Vehicle) -> GenericResult<Vec<Activity>> {
        let times = self.time_windows(job, vehicle)?;

        activity_kinds(job)
            .into_iter()
            .zip(job.place_demands())
            .zip(times)
            .map(|((kind, (place, demand)), times)| {
                let time = times.into_iter().next().ok_or_else(|| no_time_window_error(job, vehicle))?;
                let place = Place { location: place.location, duration: place.duration, time };

                Ok(Activity::new(self.next_id(), kind, place, demand))
            })
            .collect()
    }

    /// Returns time windows applicable for the vehicle at every job place, in order places are
    /// visited. Fails if any job place has no applicable time window.
    pub fn time_windows(&self, job: &Job, vehicle: &Vehicle) -> GenericResult<Vec<Vec<TimeWindow>>> {
        let context = TimeWindowContext::for_vehicle_type(vehicle.vehicle_type.id.as_str());

        job.places()
            .into_iter()
            .map(|place| {
                let times = place.times.applicable(&context);
                if times.is_empty() { Err(no_time_window_error(job, vehicle)) } else { Ok(times) }
            })
            .collect()
    }

    /// Creates a start activity of the route served by the vehicle.
    pub fn create_start(&mut self, vehicle: &Vehicle) -> GenericResult<Activity> {
        let time = TimeWindow::new(vehicle.earliest_departure, vehicle.latest_arrival)?;
        let place = Place { location: vehicle.start_location, duration: 0., time };

        Ok(Activity::new(self.next_id(), ActivityKind::Start, place, Demand::default()))
    }

    /// Creates an end activity of the route served by the vehicle. Returns `None` when the
    /// vehicle does not return to depot.
    pub fn create_end(&mut self, vehicle: &Vehicle) -> GenericResult<Option<Activity>> {
        let Some(location) = vehicle.route_end() else {
            return Ok(None);
        };

        let time = TimeWindow::new(vehicle.earliest_departure, vehicle.latest_arrival)?;
        let place = Place { location, duration: 0., time };

        Ok(Some(Activity::new(self.next_id(), ActivityKind::End, place, Demand::default())))
    }

    fn next_id(&mut self) -> ActivityId {
        let id = ActivityId(self.next_id);
        self.next_id += 1;

        id
    }
}

fn activity_kinds(job: &Job) -> Vec<ActivityKind> {
    let index = job.index();
    match &job.kind {
        JobKind::Service(_) => vec![ActivityKind::Service(index)],
        JobKind::Pickup(_) => vec![ActivityKind::Pickup(index)],
        JobKind::Delivery(_) => vec![ActivityKind::Delivery(index)],
        JobKind::Shipment { .. } => vec![ActivityKind::PickupShipment(index), ActivityKind::DeliverShipment(index)],
        JobKind::Break(_) => vec![ActivityKind::Break(index)],
        JobKind::Exchange { .. } => vec![ActivityKind::Exchange(index)],
    }
}

fn no_time_window_error(job: &Job, vehicle: &Vehicle) -> GenericError {
    format!("job '{}' has no time window applicable for vehicle type '{}'", job.id, vehicle.vehicle_type.id).into()
}
