//! State management for the island map client.
//!
//! Contains resource types, events and Bevy components used throughout the client.

use bevy::prelude::*;
use islemap_logic::animation::{DecorAnimation, NodeAnimationState};
use islemap_logic::level::AgeGroup;
use islemap_logic::state::KidsGameState;

// ============================================================================
// RESOURCES
// ============================================================================

#[derive(Resource)]
pub struct MapViewConfig {
    pub age_group: AgeGroup,
    /// Catalog file to load instead of the bundled one.
    pub catalog_path: Option<String>,
}

impl Default for MapViewConfig {
    fn default() -> Self {
        Self {
            age_group: AgeGroup::Little,
            catalog_path: None,
        }
    }
}

impl MapViewConfig {
    pub fn from_args() -> Self {
        Self::from_arg_list(std::env::args().skip(1))
    }

    /// Parse flags (without the program name). Unknown flags are skipped and
    /// a flag missing its value is ignored.
    pub fn from_arg_list<I: IntoIterator<Item = String>>(args: I) -> Self {
        let args: Vec<String> = args.into_iter().collect();
        let mut config = Self::default();
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--age-group" | "-a" if i + 1 < args.len() => {
                    match AgeGroup::parse(&args[i + 1]) {
                        Some(age) => config.age_group = age,
                        None => warn!(
                            "Unknown age group '{}', keeping {:?}",
                            args[i + 1],
                            config.age_group
                        ),
                    }
                    i += 2;
                }
                "--catalog" | "-c" if i + 1 < args.len() => {
                    config.catalog_path = Some(args[i + 1].clone());
                    i += 2;
                }
                _ => i += 1,
            }
        }
        config
    }
}

#[derive(Resource)]
pub struct MapState {
    pub game: KidsGameState,
    /// Rebuild island entities on the next frame.
    pub dirty: bool,
}

impl Default for MapState {
    fn default() -> Self {
        Self {
            game: KidsGameState::new(Vec::new(), AgeGroup::Little),
            dirty: true,
        }
    }
}

/// Number of on-screen nodes with a pulse or decoration running.
#[derive(Resource, Default)]
pub struct ActiveAnimations(pub usize);

#[derive(Resource, Default)]
pub struct SelectionState {
    /// Accessibility label of the last tapped island.
    pub last_tapped: Option<String>,
    pub tap_count: u32,
}

// ============================================================================
// EVENTS
// ============================================================================

/// The island node's tap action.
#[derive(Event, Debug, Clone)]
pub struct IslandTapped {
    pub level_id: String,
}

// ============================================================================
// BEVY COMPONENTS
// ============================================================================

#[derive(Component)]
pub struct MapRoot;

#[derive(Component)]
pub struct HeaderText;

/// One island on the map. Carries the button `Interaction`.
#[derive(Component)]
pub struct IslandNodeEntity {
    pub level_id: String,
}

/// Transient animation flags plus what the node wants animated.
#[derive(Component)]
pub struct NodeAnimation {
    pub state: NodeAnimationState,
    pub shows_next: bool,
    pub decoration: Option<DecorAnimation>,
    /// `Time::elapsed_secs` when the node appeared.
    pub appeared_at: f32,
}

#[derive(Component)]
pub struct NextRing {
    pub owner: Entity,
}

/// Icon disc on the island body, moved by the decoration.
#[derive(Component)]
pub struct IslandIcon {
    pub owner: Entity,
    pub phase: f32,
    pub base_color: Color,
    /// Node-level opacity the decoration multiplies into.
    pub opacity: f32,
}

#[derive(Component)]
pub struct LockGlyph;

#[derive(Component)]
pub struct StarBadge;
