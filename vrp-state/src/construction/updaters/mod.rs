//! State updaters which propagate route and activity states.

use crate::construction::states::*;
use crate::construction::traversal::{StateUpdater, TraversalOrder};
use crate::models::problem::{ActivityCost, TransportCost, TravelTime};
use crate::models::solution::{Activity, Route};
use std::sync::Arc;

mod activity_times;
pub use self::activity_times::*;

mod departure_time;
pub use self::departure_time::*;

mod loads;
pub use self::loads::*;

mod max_load;
pub use self::max_load::*;

mod practical_time_windows;
pub use self::practical_time_windows::*;

mod skills;
pub use self::skills::*;

mod statistics;
pub use self::statistics::*;

mod time_slack;
pub use self::time_slack::*;
