//! This module reimports commonly used types.

pub use crate::construction::context::{
    SolutionContext, StateUpdateManager, StateUpdateManagerBuilder, recompute_solutions,
};
pub use crate::construction::states::*;
pub use crate::construction::traversal::{StateUpdater, TraversalOrder};
pub use crate::construction::updaters::ActivityPolicy;

pub use crate::models::Problem;
pub use crate::models::common::*;
pub use crate::models::problem::*;
pub use crate::models::solution::{Activity, ActivityId, ActivityKind, Route, RouteId, TourActivities};

pub use crate::utils::{Environment, GenericError, GenericResult, InfoLogger};
