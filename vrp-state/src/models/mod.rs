//! A collection of models to represent problem and solution in Vehicle Routing Problem domain.

mod domain;
pub use self::domain::*;

pub mod common;
pub mod problem;
pub mod solution;
