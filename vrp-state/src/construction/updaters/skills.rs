#[cfg(test)]
#[path = "../../../tests/unit/construction/updaters/skills_test.rs"]
mod skills_test;

use super::*;
use crate::models::common::Skills;
use crate::models::problem::Jobs;

/// Updates skills required by route jobs.
pub struct SkillsUpdater {
    jobs: Arc<Jobs>,
}

impl SkillsUpdater {
    /// Creates a new instance of `SkillsUpdater`.
    pub fn new(jobs: Arc<Jobs>) -> Self {
        Self { jobs }
    }
}

impl StateUpdater for SkillsUpdater {
    fn order(&self) -> Option<TraversalOrder> {
        None
    }

    fn finish(&mut self, route: &mut Route, state: &mut StateManager) -> StateResult<()> {
        let skills =
            route.tour.jobs().filter_map(|job| self.jobs.get(job)).fold(Skills::default(), |mut acc, job| {
                acc.union_with(&job.skills);
                acc
            });

        state.set_skills(route.id(), skills);

        Ok(())
    }
}
