#[cfg(test)]
#[path = "../../../tests/unit/models/common/time_windows_test.rs"]
mod time_windows_test;

use crate::models::common::{TimeWindow, Timestamp};
use crate::utils::GenericResult;

/// Specifies a context in which time windows are evaluated.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeWindowContext<'a> {
    /// A vehicle type id, if known.
    pub vehicle_type: Option<&'a str>,
}

impl<'a> TimeWindowContext<'a> {
    /// Creates a context for given vehicle type.
    pub fn for_vehicle_type(vehicle_type: &'a str) -> Self {
        Self { vehicle_type: Some(vehicle_type) }
    }
}

/// Specifies when a time window is applicable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimeWindowCondition {
    /// Applicable only for vehicles of the listed types.
    VehicleTypes(Vec<String>),
}

impl TimeWindowCondition {
    /// Checks whether condition holds within the given context.
    pub fn is_satisfied(&self, context: &TimeWindowContext<'_>) -> bool {
        match self {
            Self::VehicleTypes(types) => {
                context.vehicle_type.is_some_and(|vehicle_type| types.iter().any(|t| t == vehicle_type))
            }
        }
    }
}

/// A time window with optional applicability condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConditionalTimeWindow {
    /// A time window.
    pub time: TimeWindow,
    /// A condition: when absent, time window is always applicable.
    pub condition: Option<TimeWindowCondition>,
}

impl ConditionalTimeWindow {
    fn is_applicable(&self, context: &TimeWindowContext<'_>) -> bool {
        self.condition.as_ref().is_none_or(|condition| condition.is_satisfied(context))
    }
}

/// A set of pairwise non-overlapping time windows sorted by start.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StrictTimeWindows {
    windows: Vec<TimeWindow>,
}

impl StrictTimeWindows {
    /// Adds a time window. Fails if it overlaps with any existing one.
    pub fn add(&mut self, time: TimeWindow) -> GenericResult<&mut Self> {
        if let Some(existing) = self.windows.iter().find(|existing| time.overlaps(existing)) {
            return Err(format!(
                "time window [{}, {}] overlaps with existing [{}, {}]",
                time.start(),
                time.end(),
                existing.start(),
                existing.end()
            )
            .into());
        }

        let idx = self.windows.partition_point(|existing| existing.start() <= time.start());
        self.windows.insert(idx, time);

        Ok(self)
    }

    /// Returns all time windows.
    pub fn windows(&self) -> &[TimeWindow] {
        self.windows.as_slice()
    }
}

/// A set of time windows which are allowed to overlap. It consists of included and excluded
/// (blackout) windows, both sorted by start. The actual windows are obtained by subtracting
/// applicable excluded windows from applicable included ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverlappingTimeWindows {
    included: Vec<ConditionalTimeWindow>,
    excluded: Vec<ConditionalTimeWindow>,
}

impl OverlappingTimeWindows {
    /// Adds an included time window.
    pub fn add_included(&mut self, time: TimeWindow, condition: Option<TimeWindowCondition>) -> &mut Self {
        insert_sorted(&mut self.included, ConditionalTimeWindow { time, condition });
        self
    }

    /// Adds an excluded time window.
    pub fn add_excluded(&mut self, time: TimeWindow, condition: Option<TimeWindowCondition>) -> &mut Self {
        insert_sorted(&mut self.excluded, ConditionalTimeWindow { time, condition });
        self
    }

    /// Returns included time windows.
    pub fn included(&self) -> &[ConditionalTimeWindow] {
        self.included.as_slice()
    }

    /// Returns excluded time windows.
    pub fn excluded(&self) -> &[ConditionalTimeWindow] {
        self.excluded.as_slice()
    }

    /// Returns time windows applicable within the given context. An empty result means that
    /// there is no time when an operation can start.
    pub fn applicable(&self, context: &TimeWindowContext<'_>) -> Vec<TimeWindow> {
        let mut result = self
            .included
            .iter()
            .filter(|tw| tw.is_applicable(context))
            .map(|tw| tw.time.clone())
            .collect::<Vec<_>>();

        if result.is_empty() {
            result.push(TimeWindow::max());
        }

        self.excluded.iter().filter(|tw| tw.is_applicable(context)).for_each(|excluded| {
            result = result.iter().flat_map(|included| subtract(included, &excluded.time)).collect();
        });

        result
    }
}

/// Time windows of a job place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimeWindows {
    /// Non-overlapping time windows.
    Strict(StrictTimeWindows),
    /// Time windows which can overlap and have exclusions.
    Overlapping(OverlappingTimeWindows),
}

impl TimeWindows {
    /// Creates strict time windows with a single time window.
    pub fn single(time: TimeWindow) -> Self {
        Self::Strict(StrictTimeWindows { windows: vec![time] })
    }

    /// Creates strict time windows from a list, fails if any of them overlaps.
    pub fn strict(times: impl IntoIterator<Item = TimeWindow>) -> GenericResult<Self> {
        let mut windows = StrictTimeWindows::default();
        times.into_iter().try_for_each(|time| windows.add(time).map(|_| ()))?;

        Ok(Self::Strict(windows))
    }

    /// Returns time windows applicable within the given context. Empty strict time windows are
    /// interpreted as unlimited.
    pub fn applicable(&self, context: &TimeWindowContext<'_>) -> Vec<TimeWindow> {
        match self {
            Self::Strict(strict) if strict.windows.is_empty() => vec![TimeWindow::max()],
            Self::Strict(strict) => strict.windows.clone(),
            Self::Overlapping(overlapping) => overlapping.applicable(context),
        }
    }

    /// Returns the earliest applicable time window, if any.
    pub fn first_applicable(&self, context: &TimeWindowContext<'_>) -> Option<TimeWindow> {
        self.applicable(context).into_iter().next()
    }
}

impl Default for TimeWindows {
    fn default() -> Self {
        Self::Strict(StrictTimeWindows::default())
    }
}

fn insert_sorted(windows: &mut Vec<ConditionalTimeWindow>, window: ConditionalTimeWindow) {
    let idx = windows.partition_point(|existing| existing.time.start() <= window.time.start());
    windows.insert(idx, window);
}

/// Subtracts excluded time window from included one producing zero, one or two remainders.
fn subtract(included: &TimeWindow, excluded: &TimeWindow) -> Vec<TimeWindow> {
    let (is, ie) = (included.start(), included.end());
    let (es, ee) = (excluded.start(), excluded.end());

    let remainder = |start: Timestamp, end: Timestamp| TimeWindow::new_clamped(start, end, included.soft());

    if ee <= is || es >= ie {
        // no overlap
        vec![included.clone()]
    } else if es <= is && ee >= ie {
        vec![]
    } else if es <= is {
        vec![remainder(ee, ie)]
    } else if ee >= ie {
        vec![remainder(is, es)]
    } else {
        vec![remainder(is, es), remainder(ee, ie)]
    }
}
