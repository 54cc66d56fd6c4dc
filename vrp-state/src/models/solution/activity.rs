#[cfg(test)]
#[path = "../../../tests/unit/models/solution/activity_test.rs"]
mod activity_test;

use crate::models::common::{Capacity, Demand, Duration, Location, Schedule, TimeWindow};
use crate::models::problem::JobIdx;
use std::fmt::{Display, Formatter};

/// A stable activity identity used as a key of activity states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActivityId(pub usize);

impl Display for ActivityId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Specifies activity kind. Job activities keep a reference to their job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    /// A route start.
    Start,
    /// A route end.
    End,
    /// A service job activity.
    Service(JobIdx),
    /// A standalone pickup.
    Pickup(JobIdx),
    /// A standalone delivery.
    Delivery(JobIdx),
    /// A pickup of the shipment.
    PickupShipment(JobIdx),
    /// A delivery of the shipment.
    DeliverShipment(JobIdx),
    /// A break.
    Break(JobIdx),
    /// An exchange: delivery and pickup at the same place.
    Exchange(JobIdx),
}

/// Specifies activity place.
#[derive(Clone, Debug)]
pub struct Place {
    /// Location where activity is performed.
    pub location: Location,
    /// Specifies operation duration.
    pub duration: Duration,
    /// Time window when activity can be started.
    pub time: TimeWindow,
}

/// Represents activity which is needed to be performed.
#[derive(Clone, Debug)]
pub struct Activity {
    id: ActivityId,
    kind: ActivityKind,
    demand: Demand,

    /// Specifies activity place.
    pub place: Place,
    /// Specifies activity schedule: arrival and departure time.
    pub schedule: Schedule,
}

impl Activity {
    /// Creates a new activity. Route boundaries never carry any demand.
    pub fn new(id: ActivityId, kind: ActivityKind, place: Place, demand: Demand) -> Self {
        let demand = if kind.job().is_some() { demand } else { Demand::default() };
        let start = place.time.start();

        Self { id, kind, demand, place, schedule: Schedule::new(start, start) }
    }

    /// Returns activity identity.
    pub fn id(&self) -> ActivityId {
        self.id
    }

    /// Returns activity kind.
    pub fn kind(&self) -> ActivityKind {
        self.kind
    }

    /// Returns activity demand.
    pub fn demand(&self) -> &Demand {
        &self.demand
    }

    /// Returns a job served by the activity, if any.
    pub fn job(&self) -> Option<JobIdx> {
        self.kind.job()
    }

    /// Checks whether activity is a route start.
    pub fn is_start(&self) -> bool {
        matches!(self.kind, ActivityKind::Start)
    }

    /// Checks whether activity is a route end.
    pub fn is_end(&self) -> bool {
        matches!(self.kind, ActivityKind::End)
    }

    /// Returns activity kind name.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Returns signed load change: positive when onboard load increases.
    pub fn load_change(&self) -> Capacity {
        self.demand.change()
    }

    /// Returns a copy of the activity with a new identity and a reset schedule.
    pub fn duplicate(&self, id: ActivityId) -> Self {
        Self::new(id, self.kind, self.place.clone(), self.demand.clone())
    }
}

impl ActivityKind {
    /// Returns a job, if any.
    pub fn job(&self) -> Option<JobIdx> {
        match *self {
            Self::Start | Self::End => None,
            Self::Service(job)
            | Self::Pickup(job)
            | Self::Delivery(job)
            | Self::PickupShipment(job)
            | Self::DeliverShipment(job)
            | Self::Break(job)
            | Self::Exchange(job) => Some(job),
        }
    }

    /// Returns kind name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Service(_) => "service",
            Self::Pickup(_) => "pickup",
            Self::Delivery(_) => "delivery",
            Self::PickupShipment(_) => "pickupShipment",
            Self::DeliverShipment(_) => "deliverShipment",
            Self::Break(_) => "break",
            Self::Exchange(_) => "exchange",
        }
    }
}
