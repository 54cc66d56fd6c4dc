//! Route state propagation: state storage, updaters and drivers which run them.

pub mod context;
pub mod states;
pub mod traversal;
pub mod updaters;
