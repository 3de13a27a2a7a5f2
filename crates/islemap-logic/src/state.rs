//! Read-only game state the map screen derives node inputs from.
//!
//! Holds the level list, the player's age group and best scores handed in
//! by the host. Unlock order is per age-group track: the first island of a
//! track is always open, each later one opens once the island before it
//! has at least one star.

use std::collections::BTreeMap;

use crate::island::IslandNodeInputs;
use crate::level::{AgeGroup, LevelDef};
use crate::stars::stars_for_score;

#[derive(Debug, Clone)]
pub struct KidsGameState {
    pub levels: Vec<LevelDef>,
    pub age_group: AgeGroup,
    /// Best score percentage per level id.
    pub best_scores: BTreeMap<String, u32>,
}

impl KidsGameState {
    pub fn new(levels: Vec<LevelDef>, age_group: AgeGroup) -> Self {
        Self {
            levels,
            age_group,
            best_scores: BTreeMap::new(),
        }
    }

    pub fn with_scores(mut self, best_scores: BTreeMap<String, u32>) -> Self {
        self.best_scores = best_scores;
        self
    }

    pub fn level(&self, level_id: &str) -> Option<&LevelDef> {
        self.levels.iter().find(|l| l.id == level_id)
    }

    /// Levels of one age group, in list order.
    pub fn track(&self, age: AgeGroup) -> Vec<&LevelDef> {
        self.levels.iter().filter(|l| l.age_group == age).collect()
    }

    /// Position of a level within its own age-group track.
    pub fn track_index(&self, level_id: &str) -> Option<usize> {
        let level = self.level(level_id)?;
        self.track(level.age_group)
            .iter()
            .position(|l| l.id == level_id)
    }

    pub fn star_count(&self, level_id: &str) -> u8 {
        self.best_scores
            .get(level_id)
            .map_or(0, |&s| stars_for_score(s))
    }

    pub fn is_unlocked(&self, level_id: &str) -> bool {
        let Some(level) = self.level(level_id) else {
            return false;
        };
        let track = self.track(level.age_group);
        match track.iter().position(|l| l.id == level_id) {
            Some(0) => true,
            Some(i) => self.star_count(&track[i - 1].id) > 0,
            None => false,
        }
    }

    /// First open level in the player's track that has no stars yet.
    pub fn next_level_id(&self) -> Option<&str> {
        self.track(self.age_group)
            .into_iter()
            .find(|l| self.is_unlocked(&l.id) && self.star_count(&l.id) == 0)
            .map(|l| l.id.as_str())
    }

    /// Inputs for a single node. Use [`Self::map_inputs`] to build a whole map.
    pub fn node_inputs(&self, level_id: &str) -> Option<IslandNodeInputs> {
        let level = self.level(level_id)?;
        Some(IslandNodeInputs {
            unlocked: self.is_unlocked(level_id),
            is_next: self.next_level_id() == Some(level_id),
            age_group_matches: level.age_group == self.age_group,
            star_count: self.star_count(level_id),
        })
    }

    /// Inputs for every node of one track, in track order, in a single pass.
    /// The next level is resolved once rather than per node.
    pub fn track_inputs(&self, age: AgeGroup) -> Vec<(&LevelDef, IslandNodeInputs)> {
        let next = self.next_level_id();
        let mut prev_stars: Option<u8> = None;
        self.track(age)
            .into_iter()
            .map(|level| {
                let star_count = self.star_count(&level.id);
                let unlocked = prev_stars.map_or(true, |s| s > 0);
                prev_stars = Some(star_count);
                let inputs = IslandNodeInputs {
                    unlocked,
                    is_next: next == Some(level.id.as_str()),
                    age_group_matches: age == self.age_group,
                    star_count,
                };
                (level, inputs)
            })
            .collect()
    }

    /// Total stars earned on one track, for the map header.
    pub fn track_stars(&self, age: AgeGroup) -> u32 {
        self.track(age)
            .iter()
            .map(|l| self.star_count(&l.id) as u32)
            .sum()
    }
}
