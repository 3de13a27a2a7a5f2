//! UI constants for the island map: sizes, durations, thresholds and opacities.
//!
//! Plain `const` values with no engine dependency. The Bevy client reads
//! them for layout and animation; the harness checks them for sanity.

pub mod layout {
    /// Diameter of an island body, in logical pixels.
    pub const NODE_SIZE: f32 = 84.0;
    pub const ICON_SIZE: f32 = 40.0;
    /// Star badge pill height.
    pub const BADGE_SIZE: f32 = 26.0;
    pub const STAR_SIZE: f32 = 14.0;
    pub const LOCK_SIZE: f32 = 30.0;
    /// Outer ring of the "next" indicator. Must exceed `NODE_SIZE`.
    pub const NEXT_RING_SIZE: f32 = 108.0;
    /// Horizontal distance between consecutive islands on a track.
    pub const NODE_SPACING_X: f32 = 170.0;
    /// Vertical swing of the sea path islands sit on.
    pub const PATH_AMPLITUDE: f32 = 36.0;
    /// Islands per full wave of the sea path.
    pub const PATH_WAVELENGTH: f32 = 4.0;
    pub const MAP_MARGIN: f32 = 36.0;
    /// Space above the first track for the map title.
    pub const HEADER_HEIGHT: f32 = 48.0;
}

pub mod durations {
    /// Seconds for one full grow-and-shrink of the next indicator.
    pub const PULSE_PERIOD: f32 = 1.6;
    /// Seconds for one cycle of sway, bob, drift and wiggle decorations.
    pub const DECOR_PERIOD: f32 = 2.4;
    pub const TWINKLE_PERIOD: f32 = 1.2;
    /// Seconds per full turn of spinning decorations.
    pub const SPIN_PERIOD: f32 = 6.0;
}

pub mod thresholds {
    /// Minimum score percentage for one star.
    pub const STAR_ONE: u32 = 50;
    pub const STAR_TWO: u32 = 75;
    pub const STAR_THREE: u32 = 90;
    pub const MAX_STARS: usize = 3;
    /// Peak scale of the pulsing next indicator.
    pub const PULSE_SCALE: f32 = 1.12;
    pub const SWAY_DEGREES: f32 = 8.0;
    pub const BOB_PIXELS: f32 = 5.0;
    pub const DRIFT_PIXELS: f32 = 7.0;
    pub const WIGGLE_DEGREES: f32 = 4.0;
    /// Lowest opacity a twinkling decoration fades to.
    pub const TWINKLE_MIN_OPACITY: f32 = 0.45;
}

pub mod opacity {
    pub const WRONG_AGE_GROUP: f32 = 0.35;
    pub const LOCKED: f32 = 0.6;
    pub const UNLOCKED: f32 = 1.0;
}

/// Icon identifiers a `LevelDef` may carry. Anything else renders
/// without a decoration.
pub mod icons {
    pub const LEAF: &str = "leaf";
    pub const PALM: &str = "palm";
    pub const FISH: &str = "fish";
    pub const BOAT: &str = "boat";
    pub const SUN: &str = "sun";
    pub const STAR: &str = "star";
    pub const CLOUD: &str = "cloud";
    pub const BUTTERFLY: &str = "butterfly";
    pub const SHELL: &str = "shell";

    pub const ALL: [&str; 9] = [LEAF, PALM, FISH, BOAT, SUN, STAR, CLOUD, BUTTERFLY, SHELL];

    pub fn is_known(icon: &str) -> bool {
        ALL.contains(&icon)
    }
}
