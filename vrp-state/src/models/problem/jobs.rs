#[cfg(test)]
#[path = "../../../tests/unit/models/problem/jobs_test.rs"]
mod jobs_test;

use crate::models::common::{Capacity, Demand, Duration, Location, Skills, TimeWindows};
use std::fmt::{Display, Formatter};

/// A stable index of a job within [`Jobs`] arena.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobIdx(pub usize);

impl Display for JobIdx {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Specifies a place where a job activity happens.
#[derive(Clone, Debug)]
pub struct Place {
    /// A location of the place.
    pub location: Location,
    /// A duration of the operation.
    pub duration: Duration,
    /// Time windows when operation can start.
    pub times: TimeWindows,
}

impl Place {
    /// Creates a new instance of `Place`.
    pub fn new(location: Location, duration: Duration, times: TimeWindows) -> Self {
        Self { location, duration, times }
    }
}

/// Specifies a kind of job.
#[derive(Clone, Debug)]
pub enum JobKind {
    /// A job which is served by a single visit without any cargo movement beyond its size,
    /// which stays onboard till the end of the route.
    Service(Place),
    /// Picks up cargo which is carried to the end of the route.
    Pickup(Place),
    /// Delivers cargo which has to be loaded at the route start.
    Delivery(Place),
    /// A pickup and delivery pair which has to be served by the same route.
    Shipment {
        /// A pickup place.
        pickup: Place,
        /// A delivery place.
        delivery: Place,
    },
    /// A driver break.
    Break(Place),
    /// Delivers cargo loaded at the route start and picks up job size amount of cargo
    /// at the same place.
    Exchange {
        /// A place where exchange happens.
        place: Place,
        /// An amount to deliver.
        delivery: Capacity,
    },
}

/// Represents a job: some work which has to be done by a vehicle.
#[derive(Clone, Debug)]
pub struct Job {
    index: JobIdx,
    /// A job id.
    pub id: String,
    /// A job kind.
    pub kind: JobKind,
    /// A job size: pickup or delivery amount.
    pub size: Capacity,
    /// Skills required to serve the job.
    pub skills: Skills,
}

impl Job {
    /// Creates a new job. Its index is assigned when the job is added to [`Jobs`].
    pub fn new(id: impl Into<String>, kind: JobKind, size: Capacity) -> Self {
        Self { index: JobIdx::default(), id: id.into(), kind, size, skills: Skills::default() }
    }

    /// Sets required skills.
    pub fn with_skills(mut self, skills: Skills) -> Self {
        self.skills = skills;
        self
    }

    /// Returns job index.
    pub fn index(&self) -> JobIdx {
        self.index
    }

    /// Returns job places in order they should be visited together with demand of the activity
    /// performed at each place.
    pub fn place_demands(&self) -> Vec<(&Place, Demand)> {
        let size = self.size.clone();
        match &self.kind {
            JobKind::Service(place) | JobKind::Pickup(place) => vec![(place, Demand::static_pickup(size))],
            JobKind::Delivery(place) => vec![(place, Demand::static_delivery(size))],
            JobKind::Shipment { pickup, delivery } => {
                vec![(pickup, Demand::dynamic_pickup(size.clone())), (delivery, Demand::dynamic_delivery(size))]
            }
            JobKind::Break(place) => vec![(place, Demand::default())],
            JobKind::Exchange { place, delivery } => vec![(
                place,
                Demand { pickup: (size, Capacity::empty()), delivery: (delivery.clone(), Capacity::empty()) },
            )],
        }
    }

    /// Returns job places in order they should be visited.
    pub fn places(&self) -> Vec<&Place> {
        self.place_demands().into_iter().map(|(place, _)| place).collect()
    }

    /// Returns a total job demand as a sum of its activities demand.
    pub fn demand(&self) -> Demand {
        self.place_demands().iter().fold(Demand::default(), |total, (_, demand)| &total + demand)
    }
}

/// An arena which stores all jobs of the problem.
#[derive(Clone, Debug, Default)]
pub struct Jobs {
    jobs: Vec<Job>,
}

impl Jobs {
    /// Adds a job and returns its index.
    pub fn add(&mut self, mut job: Job) -> JobIdx {
        let index = JobIdx(self.jobs.len());
        job.index = index;
        self.jobs.push(job);

        index
    }

    /// Returns job by its index.
    pub fn get(&self, index: JobIdx) -> Option<&Job> {
        self.jobs.get(index.0)
    }

    /// Returns all jobs.
    pub fn all(&self) -> impl Iterator<Item = &Job> + '_ {
        self.jobs.iter()
    }

    /// Returns amount of jobs.
    pub fn size(&self) -> usize {
        self.jobs.len()
    }
}

impl FromIterator<Job> for Jobs {
    fn from_iter<T: IntoIterator<Item = Job>>(iter: T) -> Self {
        let mut jobs = Jobs::default();
        iter.into_iter().for_each(|job| {
            jobs.add(job);
        });

        jobs
    }
}
