//! This crate contains a route state propagation engine for ***Vehicle Routing Problem***.
//!
//! It keeps, for every route and every activity of a solution, typed states which are needed
//! to check feasibility of route modifications without full route simulation: onboard load and
//! its maximum before and after each activity, the latest operation start time which keeps the
//! rest of the route feasible for the route vehicle or any other fleet vehicle, time slack, and
//! route statistics.
//!
//! States are recomputed by state updaters run over route activities in forward or reverse order.
//! The typical flow is:
//!
//! * create a [`models::Problem`] with jobs, fleet and routing costs
//! * create a [`construction::context::SolutionContext`] and add routes to it
//! * insert or remove jobs: states of the modified route are updated immediately
//! * read states from [`construction::states::StateManager`] using typed accessors, e.g.
//!   [`construction::states::LoadActivityState`]

#[macro_use]
mod macros;

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod construction;
pub mod models;
pub mod prelude;
pub mod utils;
