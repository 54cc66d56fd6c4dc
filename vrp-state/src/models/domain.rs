use crate::models::problem::{ActivityCost, Fleet, Jobs, TransportCost};
use crate::utils::Environment;
use std::sync::Arc;

/// Defines VRP problem: everything which stays unchanged while routes are modified.
#[derive(Clone)]
pub struct Problem {
    /// Specifies used fleet.
    pub fleet: Arc<Fleet>,

    /// Specifies all jobs.
    pub jobs: Arc<Jobs>,

    /// Specifies activity costs.
    pub activity: Arc<dyn ActivityCost>,

    /// Specifies transport costs.
    pub transport: Arc<dyn TransportCost>,

    /// Specifies environment.
    pub environment: Arc<Environment>,
}
