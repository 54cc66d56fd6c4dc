use crate::helpers::models::problem::test_vehicle;
use crate::models::problem::{Fleet, JobActivityFactory, Vehicle};
use crate::models::solution::*;
use std::sync::Arc;

/// Adds vehicle to a fresh fleet, so it gets a proper index.
pub fn indexed_vehicle(vehicle: Vehicle) -> Arc<Vehicle> {
    let mut fleet = Fleet::default();
    let index = fleet.add(vehicle).expect("cannot add vehicle");

    fleet.get(index).cloned().expect("cannot get vehicle")
}

/// Builds a route. Start and end get identities 0 and 1, so job activities should use other ones.
pub struct RouteBuilder(Route);

impl RouteBuilder {
    pub fn new(vehicle: Vehicle) -> Self {
        let vehicle = indexed_vehicle(vehicle);

        let mut factory = JobActivityFactory::default();
        let start = factory.create_start(&vehicle).expect("cannot create start");
        let end = factory.create_end(&vehicle).expect("cannot create end");

        Self(Route::new(RouteId(0), vehicle, start, end).expect("cannot create route"))
    }

    pub fn with_default_vehicle() -> Self {
        Self::new(test_vehicle("v1"))
    }

    pub fn add_activity(&mut self, activity: Activity) -> &mut Self {
        self.0.tour.add_activity(activity).expect("cannot add activity");
        self
    }

    pub fn add_activities(&mut self, activities: impl IntoIterator<Item = Activity>) -> &mut Self {
        activities.into_iter().for_each(|activity| {
            self.add_activity(activity);
        });
        self
    }

    pub fn build(&mut self) -> Route {
        self.0.clone()
    }
}
