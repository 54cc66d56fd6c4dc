//! A typed state storage and identifiers of built-in states.

mod accessors;
pub use self::accessors::*;

mod error;
pub use self::error::*;

mod ids;
pub use self::ids::*;

mod manager;
pub use self::manager::*;
