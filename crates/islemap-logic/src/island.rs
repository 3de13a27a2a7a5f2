//! Island node model: what one level tile on the map shows.
//!
//! An island node is driven entirely by a [`LevelDef`] and four flags
//! supplied by the map screen ([`IslandNodeInputs`]). Every rendering
//! decision the client makes (lock glyph, star badge, next ring, opacity,
//! decoration, screen-reader text) comes from here, so it can be tested
//! without a window.
//!
//! ```
//! use islemap_logic::island::{IslandNode, IslandNodeInputs, NodeVisual};
//! use islemap_logic::level::{AgeGroup, LevelDef};
//!
//! let level = LevelDef::new("cove", "Coral Cove", "fish", AgeGroup::Little);
//! let inputs = IslandNodeInputs {
//!     unlocked: true,
//!     is_next: false,
//!     age_group_matches: true,
//!     star_count: 2,
//! };
//! let mut taps = 0;
//! let mut node = IslandNode::new(&level, inputs, || taps += 1);
//! assert_eq!(node.visual(), NodeVisual::Unlocked);
//! assert_eq!(node.accessibility_label(), "Coral Cove, 2 stars");
//! node.tap();
//! drop(node);
//! assert_eq!(taps, 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::animation::DecorAnimation;
use crate::constants::opacity;
use crate::constants::thresholds::MAX_STARS;
use crate::level::LevelDef;
use crate::stars;

/// Caller-supplied state for one node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IslandNodeInputs {
    pub unlocked: bool,
    /// This is the level the player should play next.
    pub is_next: bool,
    /// The level's age group is the player's age group.
    pub age_group_matches: bool,
    /// Stars earned, 0–3.
    pub star_count: u8,
}

/// Which of the three mutually exclusive looks the island takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeVisual {
    /// Level belongs to a different age band. Wins over lock state.
    WrongAgeGroup,
    Locked,
    Unlocked,
}

impl NodeVisual {
    pub fn resolve(inputs: &IslandNodeInputs) -> Self {
        if !inputs.age_group_matches {
            NodeVisual::WrongAgeGroup
        } else if inputs.unlocked {
            NodeVisual::Unlocked
        } else {
            NodeVisual::Locked
        }
    }

    pub fn opacity(self) -> f32 {
        match self {
            NodeVisual::WrongAgeGroup => opacity::WRONG_AGE_GROUP,
            NodeVisual::Locked => opacity::LOCKED,
            NodeVisual::Unlocked => opacity::UNLOCKED,
        }
    }
}

/// Render-ready view of one island plus its tap action.
pub struct IslandNode<'a, F: FnMut()> {
    level: &'a LevelDef,
    inputs: IslandNodeInputs,
    action: F,
}

impl<'a, F: FnMut()> IslandNode<'a, F> {
    pub fn new(level: &'a LevelDef, inputs: IslandNodeInputs, action: F) -> Self {
        Self {
            level,
            inputs,
            action,
        }
    }

    pub fn level(&self) -> &LevelDef {
        self.level
    }

    pub fn inputs(&self) -> IslandNodeInputs {
        self.inputs
    }

    pub fn visual(&self) -> NodeVisual {
        NodeVisual::resolve(&self.inputs)
    }

    /// Lock glyph: only for a locked level in the player's own age group.
    pub fn shows_lock(&self) -> bool {
        self.visual() == NodeVisual::Locked
    }

    pub fn shows_star_badge(&self) -> bool {
        self.inputs.star_count > 0 && self.inputs.age_group_matches
    }

    pub fn shows_next_indicator(&self) -> bool {
        self.inputs.is_next && self.visual() == NodeVisual::Unlocked
    }

    pub fn opacity(&self) -> f32 {
        self.visual().opacity()
    }

    pub fn star_fill(&self) -> [bool; MAX_STARS] {
        stars::star_fill(self.inputs.star_count)
    }

    /// Decorative micro-animation for the icon. `None` for unknown icons.
    pub fn decoration(&self) -> Option<DecorAnimation> {
        DecorAnimation::for_icon(&self.level.icon)
    }

    pub fn accessibility_label(&self) -> String {
        let name = &self.level.name;
        match self.visual() {
            NodeVisual::WrongAgeGroup => {
                format!("{}, for {}", name, self.level.age_group.label())
            }
            NodeVisual::Locked => format!("{}, locked", name),
            NodeVisual::Unlocked => {
                let mut label = name.clone();
                if self.inputs.is_next {
                    label.push_str(", next level");
                }
                match stars::clamp_stars(self.inputs.star_count) {
                    0 => {}
                    1 => label.push_str(", 1 star"),
                    n => label.push_str(&format!(", {} stars", n)),
                }
                label
            }
        }
    }

    pub fn accessibility_hint(&self) -> Option<&'static str> {
        match self.visual() {
            NodeVisual::Unlocked => Some("Plays this level"),
            _ => None,
        }
    }

    /// Fire the action. Every tap fires, whatever the visual state; the
    /// map screen decides what a tap on a locked island means.
    pub fn tap(&mut self) {
        (self.action)();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::AgeGroup;

    fn level() -> LevelDef {
        LevelDef::new("palm_beach", "Palm Beach", "palm", AgeGroup::Middle)
    }

    fn inputs(unlocked: bool, is_next: bool, matches: bool, stars: u8) -> IslandNodeInputs {
        IslandNodeInputs {
            unlocked,
            is_next,
            age_group_matches: matches,
            star_count: stars,
        }
    }

    #[test]
    fn test_wrong_age_group_wins() {
        let l = level();
        for unlocked in [true, false] {
            let node = IslandNode::new(&l, inputs(unlocked, true, false, 3), || {});
            assert_eq!(node.visual(), NodeVisual::WrongAgeGroup);
            assert!(!node.shows_lock());
            assert!(!node.shows_next_indicator());
            assert_eq!(node.opacity(), opacity::WRONG_AGE_GROUP);
        }
    }

    #[test]
    fn test_lock_only_when_locked() {
        let l = level();
        let locked = IslandNode::new(&l, inputs(false, false, true, 0), || {});
        let open = IslandNode::new(&l, inputs(true, false, true, 0), || {});
        assert!(locked.shows_lock());
        assert!(!open.shows_lock());
    }

    #[test]
    fn test_star_badge_needs_stars_and_matching_age() {
        let l = level();
        assert!(IslandNode::new(&l, inputs(true, false, true, 1), || {}).shows_star_badge());
        assert!(!IslandNode::new(&l, inputs(true, false, true, 0), || {}).shows_star_badge());
        assert!(!IslandNode::new(&l, inputs(true, false, false, 2), || {}).shows_star_badge());
    }

    #[test]
    fn test_next_indicator_needs_unlocked() {
        let l = level();
        assert!(IslandNode::new(&l, inputs(true, true, true, 0), || {}).shows_next_indicator());
        assert!(!IslandNode::new(&l, inputs(false, true, true, 0), || {}).shows_next_indicator());
    }

    #[test]
    fn test_label_star_count_only_when_positive() {
        let l = level();
        let none = IslandNode::new(&l, inputs(true, false, true, 0), || {});
        let one = IslandNode::new(&l, inputs(true, false, true, 1), || {});
        let three = IslandNode::new(&l, inputs(true, true, true, 3), || {});
        assert_eq!(none.accessibility_label(), "Palm Beach");
        assert_eq!(one.accessibility_label(), "Palm Beach, 1 star");
        assert_eq!(
            three.accessibility_label(),
            "Palm Beach, next level, 3 stars"
        );
    }

    #[test]
    fn test_label_locked_and_wrong_age() {
        let l = level();
        let locked = IslandNode::new(&l, inputs(false, false, true, 0), || {});
        let wrong = IslandNode::new(&l, inputs(true, false, false, 2), || {});
        assert_eq!(locked.accessibility_label(), "Palm Beach, locked");
        assert_eq!(wrong.accessibility_label(), "Palm Beach, for ages 6 to 8");
        assert_eq!(locked.accessibility_hint(), None);
        assert_eq!(wrong.accessibility_hint(), None);

        let open = IslandNode::new(&l, inputs(true, false, true, 0), || {});
        assert_eq!(open.accessibility_hint(), Some("Plays this level"));
        let wrong_locked = IslandNode::new(&l, inputs(false, true, false, 0), || {});
        assert_eq!(wrong_locked.accessibility_hint(), None);
    }

    #[test]
    fn test_label_and_badge_agree_above_max_stars() {
        let l = LevelDef::new("reef", "Reef", "fish", AgeGroup::Middle);
        let node = IslandNode::new(&l, inputs(true, false, true, 7), || {});
        assert_eq!(node.accessibility_label(), "Reef, 3 stars");
        assert_eq!(node.star_fill(), [true, true, true]);
    }

    #[test]
    fn test_tap_fires_once_per_tap() {
        let l = level();
        let mut count = 0;
        {
            let mut node = IslandNode::new(&l, inputs(false, false, true, 0), || count += 1);
            node.tap();
            node.tap();
        }
        assert_eq!(count, 2);
    }

    #[test]
    fn test_unknown_icon_has_no_decoration() {
        let l = LevelDef::new("x", "Mystery", "dragon", AgeGroup::Big);
        let node = IslandNode::new(&l, inputs(true, false, true, 0), || {});
        assert_eq!(node.decoration(), None);
    }
}
