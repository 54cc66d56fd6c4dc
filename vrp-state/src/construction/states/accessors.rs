//! Typed accessors of built-in states.

use super::*;
use crate::models::common::{Capacity, Distance, Duration, Skills, Timestamp};
use crate::models::problem::VehicleIdx;
use crate::models::solution::{ActivityId, RouteId};

activity_state_accessor!(Load typeof Capacity = LOAD);
activity_state_accessor!(FutureMaxLoad typeof Capacity = FUTURE_MAXLOAD);
activity_state_accessor!(PastMaxLoad typeof Capacity = PAST_MAXLOAD);
activity_state_accessor!(LatestOperationStartTime typeof Timestamp = LATEST_OPERATION_START_TIME);
activity_state_accessor!(EarliestOperationStartTime typeof Timestamp = EARLIEST_OPERATION_START_TIME);
activity_state_accessor!(TimeSlack typeof Duration = TIME_SLACK);
activity_state_accessor!(FutureWaiting typeof Duration = FUTURE_WAITING);
activity_state_accessor!(Distance typeof Distance = DISTANCE);

activity_vehicle_state_accessor!(LatestOperationStartTime typeof Timestamp = LATEST_OPERATION_START_TIME);

route_state_accessor!(LoadAtBeginning typeof Capacity = LOAD_AT_BEGINNING);
route_state_accessor!(LoadAtEnd typeof Capacity = LOAD_AT_END);
route_state_accessor!(MaxLoad typeof Capacity = MAXLOAD);
route_state_accessor!(DepartureTime typeof Timestamp = DEPARTURE_TIME);
route_state_accessor!(TimeSlack typeof Duration = TIME_SLACK);
route_state_accessor!(Distance typeof Distance = DISTANCE);
route_state_accessor!(Duration typeof Duration = DURATION);
route_state_accessor!(Skills typeof Skills = SKILLS);

route_vehicle_state_accessor!(SwitchNotFeasible typeof bool = SWITCH_NOT_FEASIBLE);
