//! Common models.

mod capacity;
pub use self::capacity::*;

mod domain;
pub use self::domain::*;

mod primitives;
pub use self::primitives::*;

mod time_window;
pub use self::time_window::*;

mod time_windows;
pub use self::time_windows::*;
