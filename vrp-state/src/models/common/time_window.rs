#[cfg(test)]
#[path = "../../../tests/unit/models/common/time_window_test.rs"]
mod time_window_test;

use crate::models::common::{Duration, Float, Timestamp};
use crate::utils::{GenericResult, compare_floats};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Represents a time window: an interval `[start, end]` when an operation is allowed to start.
/// Optionally, it has a tighter soft interval which is preferred, but not required.
///
/// The bounds always satisfy `0 <= start <= soft start <= soft end <= end`.
#[derive(Clone, Debug)]
pub struct TimeWindow {
    start: Timestamp,
    end: Timestamp,
    soft: Option<(Timestamp, Timestamp)>,
}

impl TimeWindow {
    /// Creates a new hard [`TimeWindow`].
    pub fn new(start: Timestamp, end: Timestamp) -> GenericResult<Self> {
        validate_bounds(start, None, end)?;

        Ok(Self { start, end, soft: None })
    }

    /// Creates a new [`TimeWindow`] with soft bounds inside hard ones.
    pub fn with_soft(
        start: Timestamp,
        soft_start: Timestamp,
        soft_end: Timestamp,
        end: Timestamp,
    ) -> GenericResult<Self> {
        validate_bounds(start, Some((soft_start, soft_end)), end)?;

        Ok(Self { start, end, soft: Some((soft_start, soft_end)) })
    }

    /// Returns unlimited time window.
    pub fn max() -> Self {
        Self { start: 0., end: Float::MAX, soft: None }
    }

    /// Creates a time window from already ordered bounds keeping only that part of soft bounds
    /// which fits into the new hard ones.
    pub(crate) fn new_clamped(start: Timestamp, end: Timestamp, soft: Option<(Timestamp, Timestamp)>) -> Self {
        let soft = soft
            .map(|(soft_start, soft_end)| (soft_start.max(start), soft_end.min(end)))
            .filter(|(soft_start, soft_end)| soft_start <= soft_end);

        Self { start, end, soft }
    }

    /// Returns hard earliest time.
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// Returns hard latest time.
    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Returns soft bounds if they are set.
    pub fn soft(&self) -> Option<(Timestamp, Timestamp)> {
        self.soft
    }

    /// Returns soft earliest time, falls back to hard one.
    pub fn soft_start(&self) -> Timestamp {
        self.soft.map_or(self.start, |(start, _)| start)
    }

    /// Returns soft latest time, falls back to hard one.
    pub fn soft_end(&self) -> Timestamp {
        self.soft.map_or(self.end, |(_, end)| end)
    }

    /// Returns time window length.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Checks whether time window has intersection with another one (boundaries inclusive).
    pub fn intersects(&self, other: &Self) -> bool {
        compare_floats(self.start, other.end) != Ordering::Greater
            && compare_floats(other.start, self.end) != Ordering::Greater
    }

    /// Checks whether given time is inside time window.
    pub fn contains(&self, time: Timestamp) -> bool {
        self.start <= time && time <= self.end
    }

    /// Checks whether this time window overlaps with other one in a way that they cannot be kept
    /// in the same non-overlapping set: its start or end is strictly inside the other, or it fully
    /// contains the other. Touching boundaries are not considered as overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        let starts_inside = other.start < self.start && self.start < other.end;
        let ends_inside = other.start < self.end && self.end < other.end;
        let contains_other = self.start <= other.start && other.end <= self.end;

        starts_inside || ends_inside || contains_other
    }
}

impl PartialEq<TimeWindow> for TimeWindow {
    fn eq(&self, other: &TimeWindow) -> bool {
        let soft_eq = match (self.soft, other.soft) {
            (Some((ls, le)), Some((rs, re))) => {
                compare_floats(ls, rs) == Ordering::Equal && compare_floats(le, re) == Ordering::Equal
            }
            (None, None) => true,
            _ => false,
        };

        soft_eq
            && compare_floats(self.start, other.start) == Ordering::Equal
            && compare_floats(self.end, other.end) == Ordering::Equal
    }
}

impl Eq for TimeWindow {}

impl Hash for TimeWindow {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.to_bits().hash(state);
        self.end.to_bits().hash(state);
        self.soft.map(|(start, end)| (start.to_bits(), end.to_bits())).hash(state);
    }
}

fn validate_bounds(start: Timestamp, soft: Option<(Timestamp, Timestamp)>, end: Timestamp) -> GenericResult<()> {
    let (soft_start, soft_end) = soft.unwrap_or((start, end));

    // NOTE comparisons are written so that any NaN bound fails validation
    let is_valid = 0. <= start && start <= soft_start && soft_start <= soft_end && soft_end <= end;

    if is_valid {
        Ok(())
    } else if soft.is_some() {
        Err(format!(
            "invalid time window: expected 0 <= start <= soft start <= soft end <= end, \
             got start: {start}, soft: [{soft_start}, {soft_end}], end: {end}"
        )
        .into())
    } else {
        Err(format!("invalid time window: expected 0 <= start <= end, got [{start}, {end}]").into())
    }
}
