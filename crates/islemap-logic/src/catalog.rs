//! Level catalog, the JSON file listing every island on the map.
//!
//! ```json
//! {
//!   "levels": [
//!     { "id": "coral_cove", "name": "Coral Cove", "icon": "fish", "age_group": "little" }
//!   ],
//!   "progress": { "coral_cove": 80 }
//! }
//! ```
//!
//! `progress` is optional display data (best score per level id) handed in
//! by the host; nothing is written back.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::constants::icons;
use crate::level::{AgeGroup, LevelDef};
use crate::state::KidsGameState;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LevelCatalog {
    pub levels: Vec<LevelDef>,
    #[serde(default)]
    pub progress: BTreeMap<String, u32>,
}

impl LevelCatalog {
    pub fn into_state(self, age_group: AgeGroup) -> KidsGameState {
        KidsGameState::new(self.levels, age_group).with_scores(self.progress)
    }

    pub fn count(&self, age: AgeGroup) -> usize {
        self.levels.iter().filter(|l| l.age_group == age).count()
    }
}

/// Errors that can occur loading a catalog
#[derive(Debug)]
pub enum CatalogError {
    Parse(serde_json::Error),
    Empty,
    DuplicateId(String),
    EmptyName(String),
    EmptyTrack(AgeGroup),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e)
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Parse(e) => write!(f, "Catalog parse error: {}", e),
            CatalogError::Empty => write!(f, "Catalog has no levels"),
            CatalogError::DuplicateId(id) => write!(f, "Duplicate level id '{}'", id),
            CatalogError::EmptyName(id) => write!(f, "Level '{}' has an empty name", id),
            CatalogError::EmptyTrack(age) => {
                write!(f, "No levels for age group {:?} ({})", age, age.label())
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

/// Check a catalog, returning every problem found.
pub fn validate_catalog(catalog: &LevelCatalog) -> Vec<CatalogError> {
    let mut errors = Vec::new();

    if catalog.levels.is_empty() {
        errors.push(CatalogError::Empty);
        return errors;
    }

    let mut seen = BTreeSet::new();
    for level in &catalog.levels {
        if !seen.insert(level.id.as_str()) {
            errors.push(CatalogError::DuplicateId(level.id.clone()));
        }
        if level.name.trim().is_empty() {
            errors.push(CatalogError::EmptyName(level.id.clone()));
        }
    }

    for &age in AgeGroup::all() {
        if catalog.count(age) == 0 {
            errors.push(CatalogError::EmptyTrack(age));
        }
    }

    errors
}

/// Parse and validate a catalog. Unknown icons and progress entries for
/// missing levels are tolerated with a warning.
pub fn load_catalog(json: &str) -> Result<LevelCatalog, CatalogError> {
    let catalog: LevelCatalog = serde_json::from_str(json)?;

    if let Some(err) = validate_catalog(&catalog).into_iter().next() {
        return Err(err);
    }

    for level in &catalog.levels {
        if !icons::is_known(&level.icon) {
            log::warn!(
                "Level '{}' uses unknown icon '{}', no decoration",
                level.id,
                level.icon
            );
        }
    }
    for id in catalog.progress.keys() {
        if !catalog.levels.iter().any(|l| &l.id == id) {
            log::warn!("Progress entry for unknown level '{}'", id);
        }
    }

    log::debug!(
        "Loaded catalog: {} levels ({} little, {} middle, {} big)",
        catalog.levels.len(),
        catalog.count(AgeGroup::Little),
        catalog.count(AgeGroup::Middle),
        catalog.count(AgeGroup::Big)
    );

    Ok(catalog)
}
