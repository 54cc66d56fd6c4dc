use std::fmt::{Display, Formatter};

/// An identifier of a state kept in [`super::StateManager`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub(crate) usize);

impl nohash_hasher::IsEnabled for StateId {}

impl Display for StateId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Onboard load at activity.
pub const LOAD: StateId = StateId(0);
/// Load which has to be taken at the route start.
pub const LOAD_AT_BEGINNING: StateId = StateId(1);
/// Load which stays onboard at the route end.
pub const LOAD_AT_END: StateId = StateId(2);
/// Maximum load from activity till the route end.
pub const FUTURE_MAXLOAD: StateId = StateId(3);
/// Maximum load from the route start till activity.
pub const PAST_MAXLOAD: StateId = StateId(4);
/// Maximum load over the route.
pub const MAXLOAD: StateId = StateId(5);
/// The latest operation start time which keeps the rest of the route feasible.
pub const LATEST_OPERATION_START_TIME: StateId = StateId(6);
/// The earliest operation start time given current schedule.
pub const EARLIEST_OPERATION_START_TIME: StateId = StateId(7);
/// Time which can be spent at activity without violating downstream time windows.
pub const TIME_SLACK: StateId = StateId(8);
/// Total waiting time from activity till the route end.
pub const FUTURE_WAITING: StateId = StateId(9);
/// A flag that the route cannot be served by a specific vehicle.
pub const SWITCH_NOT_FEASIBLE: StateId = StateId(10);
/// Skills required by route jobs.
pub const SKILLS: StateId = StateId(11);
/// Departure time from the route start.
pub const DEPARTURE_TIME: StateId = StateId(12);
/// Travelled distance.
pub const DISTANCE: StateId = StateId(13);
/// Route duration.
pub const DURATION: StateId = StateId(14);

pub(crate) const BUILT_IN_STATES: &[(StateId, &str)] = &[
    (LOAD, "load"),
    (LOAD_AT_BEGINNING, "load_at_beginning"),
    (LOAD_AT_END, "load_at_end"),
    (FUTURE_MAXLOAD, "future_maxload"),
    (PAST_MAXLOAD, "past_maxload"),
    (MAXLOAD, "maxload"),
    (LATEST_OPERATION_START_TIME, "latest_operation_start_time"),
    (EARLIEST_OPERATION_START_TIME, "earliest_operation_start_time"),
    (TIME_SLACK, "time_slack"),
    (FUTURE_WAITING, "future_waiting"),
    (SWITCH_NOT_FEASIBLE, "switch_not_feasible"),
    (SKILLS, "skills"),
    (DEPARTURE_TIME, "departure_time"),
    (DISTANCE, "distance"),
    (DURATION, "duration"),
];
