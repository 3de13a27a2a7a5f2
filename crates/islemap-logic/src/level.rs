//! Level definitions and the age bands that gate them.

use serde::{Deserialize, Serialize};

/// One of the three player age bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Little,
    Middle,
    Big,
}

impl AgeGroup {
    pub fn all() -> &'static [AgeGroup] {
        &[AgeGroup::Little, AgeGroup::Middle, AgeGroup::Big]
    }

    /// Inclusive age range in years.
    pub fn age_range(self) -> (u8, u8) {
        match self {
            AgeGroup::Little => (3, 5),
            AgeGroup::Middle => (6, 8),
            AgeGroup::Big => (9, 12),
        }
    }

    /// Short label used in accessibility text, e.g. "ages 3 to 5".
    pub fn label(self) -> String {
        let (lo, hi) = self.age_range();
        format!("ages {} to {}", lo, hi)
    }

    pub fn for_age(years: u8) -> Option<AgeGroup> {
        Self::all().iter().copied().find(|g| {
            let (lo, hi) = g.age_range();
            (lo..=hi).contains(&years)
        })
    }

    pub fn parse(s: &str) -> Option<AgeGroup> {
        match s.trim().to_ascii_lowercase().as_str() {
            "little" => Some(AgeGroup::Little),
            "middle" => Some(AgeGroup::Middle),
            "big" => Some(AgeGroup::Big),
            _ => None,
        }
    }
}

/// A playable level as shown on the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDef {
    /// Stable identifier, unique across the catalog.
    pub id: String,
    /// Display name read out by screen readers.
    pub name: String,
    /// Icon identifier (see [`crate::constants::icons`]).
    pub icon: String,
    pub age_group: AgeGroup,
}

impl LevelDef {
    pub fn new(id: &str, name: &str, icon: &str, age_group: AgeGroup) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            age_group,
        }
    }
}
