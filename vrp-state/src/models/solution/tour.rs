#[cfg(test)]
#[path = "../../../tests/unit/models/solution/tour_test.rs"]
mod tour_test;

use crate::models::problem::JobIdx;
use crate::models::solution::{Activity, ActivityId};
use crate::utils::GenericResult;
use rustc_hash::FxHashSet;
use std::slice::{Iter, IterMut};

/// Represents job activities of a route in the order they are performed, plus a set of jobs
/// they serve. A job is in the set iff at least one of its activities is in the sequence.
#[derive(Clone, Debug, Default)]
pub struct TourActivities {
    activities: Vec<Activity>,
    jobs: FxHashSet<JobIdx>,
}

impl TourActivities {
    /// Appends activity to the end of sequence.
    pub fn add_activity(&mut self, activity: Activity) -> GenericResult<&mut Self> {
        self.insert_activity(self.activities.len(), activity)
    }

    /// Inserts activity at specified index. Fails when the activity is already present or index is
    /// out of range.
    pub fn insert_activity(&mut self, index: usize, activity: Activity) -> GenericResult<&mut Self> {
        if activity.is_start() || activity.is_end() {
            return Err(format!("cannot add route boundary '{}' as a tour activity", activity.name()).into());
        }

        if self.activities.iter().any(|existing| existing.id() == activity.id()) {
            return Err(format!("activity {} is already present in the tour", activity.id()).into());
        }

        if index > self.activities.len() {
            return Err(format!("insertion index {index} is out of range: size is {}", self.activities.len()).into());
        }

        if let Some(job) = activity.job() {
            self.jobs.insert(job);
        }
        self.activities.insert(index, activity);

        Ok(self)
    }

    /// Removes activity by its identity. Its job stays served only if some other activity of the
    /// same job remains in the sequence.
    pub fn remove_activity(&mut self, id: ActivityId) -> Option<Activity> {
        let position = self.index_of(id)?;
        let removed = self.activities.remove(position);

        if let Some(job) = removed.job() {
            let has_sibling = self.activities.iter().any(|activity| activity.job() == Some(job));
            if !has_sibling {
                self.jobs.remove(&job);
            }
        }

        Some(removed)
    }

    /// Removes all activities of the job. Returns true if anything was removed.
    pub fn remove_job(&mut self, job: JobIdx) -> bool {
        let size = self.activities.len();
        self.activities.retain(|activity| activity.job() != Some(job));

        let has_removed_activities = size != self.activities.len();
        let has_removed_job = self.jobs.remove(&job);

        debug_assert_eq!(has_removed_activities, has_removed_job, "inconsistent tour state for job {job}");

        has_removed_activities
    }

    /// Returns an iterator over activities in forward order.
    pub fn iter(&self) -> Iter<'_, Activity> {
        self.activities.iter()
    }

    /// Returns a mutable iterator over activities in forward order. Use [`Self::remove_activity`]
    /// to remove activities.
    pub fn iter_mut(&mut self) -> IterMut<'_, Activity> {
        self.activities.iter_mut()
    }

    /// Returns activity at given index.
    pub fn get(&self, index: usize) -> Option<&Activity> {
        self.activities.get(index)
    }

    /// Returns mutable activity at given index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Activity> {
        self.activities.get_mut(index)
    }

    /// Returns index of the activity with given identity.
    pub fn index_of(&self, id: ActivityId) -> Option<usize> {
        self.activities.iter().position(|activity| activity.id() == id)
    }

    /// Checks whether job is served.
    pub fn has_job(&self, job: JobIdx) -> bool {
        self.jobs.contains(&job)
    }

    /// Returns all served jobs.
    pub fn jobs(&self) -> impl Iterator<Item = JobIdx> + '_ {
        self.jobs.iter().copied()
    }

    /// Returns amount of served jobs.
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Returns activities of the job.
    pub fn job_activities(&self, job: JobIdx) -> impl Iterator<Item = &Activity> + '_ {
        self.activities.iter().filter(move |activity| activity.job() == Some(job))
    }

    /// Returns amount of activities.
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Checks whether there is no activities.
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

/// A reverse cursor over tour activities. It keeps only a position, so it can be reset or moved
/// to any index without allocation and reused across traversals.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReverseCursor {
    remaining: usize,
}

impl ReverseCursor {
    /// Creates a cursor positioned after the last activity.
    pub fn new(tour: &TourActivities) -> Self {
        Self { remaining: tour.len() }
    }

    /// Moves cursor after the last activity.
    pub fn reset(&mut self, tour: &TourActivities) {
        self.remaining = tour.len();
    }

    /// Moves cursor so that the next returned activity is at given index.
    pub fn seek(&mut self, index: usize) {
        self.remaining = index.saturating_add(1);
    }

    /// Returns the next index in reverse order.
    pub fn next_index(&mut self) -> Option<usize> {
        self.remaining = self.remaining.checked_sub(1)?;
        Some(self.remaining)
    }

    /// Returns the next activity in reverse order.
    pub fn next_activity<'a>(&mut self, tour: &'a TourActivities) -> Option<&'a Activity> {
        self.next_index().and_then(|index| tour.get(index))
    }

    /// Returns the next mutable activity in reverse order.
    pub fn next_activity_mut<'a>(&mut self, tour: &'a mut TourActivities) -> Option<&'a mut Activity> {
        self.next_index().and_then(|index| tour.get_mut(index))
    }
}
