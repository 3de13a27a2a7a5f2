//! Decorative motion for island nodes: the next-indicator pulse and icon
//! micro-animations.
//!
//! Curves are pure functions of elapsed seconds so the client only has to
//! feed `Time` in and copy the pose out. Nothing here affects game state.

use std::f32::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::durations::{DECOR_PERIOD, PULSE_PERIOD, SPIN_PERIOD, TWINKLE_PERIOD};
use crate::constants::icons;
use crate::constants::thresholds::{
    BOB_PIXELS, DRIFT_PIXELS, PULSE_SCALE, SWAY_DEGREES, TWINKLE_MIN_OPACITY, WIGGLE_DEGREES,
};

/// The two transient phase flags a node keeps while it is on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeAnimationState {
    pub pulsing: bool,
    pub decor_active: bool,
}

impl NodeAnimationState {
    /// Start animations when the node appears.
    pub fn appear(&mut self, shows_next: bool, decoration: Option<DecorAnimation>) {
        self.pulsing = shows_next;
        self.decor_active = decoration.is_some();
    }

    /// Reset when the node leaves the screen.
    pub fn disappear(&mut self) {
        *self = Self::default();
    }
}

/// Smooth 0 → 1 → 0 over one period (ease-in-out, autoreversing).
fn ping_pong(t: f32, period: f32) -> f32 {
    let phase = (t / period).rem_euclid(1.0);
    0.5 - 0.5 * (phase * TAU).cos()
}

/// Scale of the next-indicator ring at `t` seconds after it appeared.
pub fn pulse_scale(t: f32) -> f32 {
    1.0 + (PULSE_SCALE - 1.0) * ping_pong(t, PULSE_PERIOD)
}

/// Decorative micro-animation picked from the level icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorAnimation {
    /// Rock side to side around the base.
    Sway,
    /// Float up and down.
    Bob,
    /// Slow continuous rotation.
    Spin,
    /// Fade and grow softly.
    Twinkle,
    /// Slide left and right.
    Drift,
    /// Quick small rotations.
    Wiggle,
}

impl DecorAnimation {
    pub fn for_icon(icon: &str) -> Option<Self> {
        match icon {
            icons::LEAF | icons::PALM => Some(DecorAnimation::Sway),
            icons::FISH | icons::BOAT => Some(DecorAnimation::Bob),
            icons::SUN => Some(DecorAnimation::Spin),
            icons::STAR => Some(DecorAnimation::Twinkle),
            icons::CLOUD => Some(DecorAnimation::Drift),
            icons::BUTTERFLY | icons::SHELL => Some(DecorAnimation::Wiggle),
            _ => None,
        }
    }

    /// Pose at `t` seconds. `phase` in `[0, 1)` shifts the cycle.
    pub fn sample(self, t: f32, phase: f32) -> DecorPose {
        let mut pose = DecorPose::default();
        match self {
            DecorAnimation::Sway => {
                let s = ((t / DECOR_PERIOD + phase) * TAU).sin();
                pose.rotation = (SWAY_DEGREES * s).to_radians();
            }
            DecorAnimation::Bob => {
                pose.offset_y = -BOB_PIXELS * ping_pong(t + phase * DECOR_PERIOD, DECOR_PERIOD);
            }
            DecorAnimation::Spin => {
                pose.rotation = ((t / SPIN_PERIOD + phase) * TAU).rem_euclid(TAU);
            }
            DecorAnimation::Twinkle => {
                let k = ping_pong(t + phase * TWINKLE_PERIOD, TWINKLE_PERIOD);
                pose.opacity = 1.0 - (1.0 - TWINKLE_MIN_OPACITY) * k;
                pose.scale = 1.0 + 0.08 * k;
            }
            DecorAnimation::Drift => {
                pose.offset_x = DRIFT_PIXELS * ((t / DECOR_PERIOD + phase) * TAU).sin();
            }
            DecorAnimation::Wiggle => {
                // Four wiggles per decor cycle
                let s = ((t / DECOR_PERIOD + phase) * 4.0 * TAU).sin();
                pose.rotation = (WIGGLE_DEGREES * s).to_radians();
            }
        }
        pose
    }
}

/// Offset/rotation/scale/opacity applied on top of the icon's resting layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecorPose {
    pub offset_x: f32,
    pub offset_y: f32,
    /// Radians.
    pub rotation: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl Default for DecorPose {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            rotation: 0.0,
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

/// Deterministic phase in `[0, 1)` so neighbouring islands don't move in
/// lockstep. Same id, same phase.
pub fn phase_offset(level_id: &str) -> f32 {
    // FNV-1a
    let mut seed: u64 = 0xcbf2_9ce4_8422_2325;
    for b in level_id.bytes() {
        seed ^= b as u64;
        seed = seed.wrapping_mul(0x0100_0000_01b3);
    }
    let mut rng = StdRng::seed_from_u64(seed);
    rng.gen_range(0.0..1.0)
}

/// Largest rotation any decoration reaches, except `Spin`.
pub fn max_rocking_angle() -> f32 {
    SWAY_DEGREES.max(WIGGLE_DEGREES).to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_range() {
        assert!((pulse_scale(0.0) - 1.0).abs() < 1e-5);
        assert!((pulse_scale(PULSE_PERIOD / 2.0) - PULSE_SCALE).abs() < 1e-4);
        for i in 0..100 {
            let s = pulse_scale(i as f32 * 0.037);
            assert!((1.0..=PULSE_SCALE + 1e-5).contains(&s));
        }
    }

    #[test]
    fn test_icon_dispatch() {
        assert_eq!(DecorAnimation::for_icon("leaf"), Some(DecorAnimation::Sway));
        assert_eq!(DecorAnimation::for_icon("fish"), Some(DecorAnimation::Bob));
        assert_eq!(DecorAnimation::for_icon("sun"), Some(DecorAnimation::Spin));
        assert_eq!(DecorAnimation::for_icon("star"), Some(DecorAnimation::Twinkle));
        assert_eq!(DecorAnimation::for_icon("cloud"), Some(DecorAnimation::Drift));
        assert_eq!(DecorAnimation::for_icon("shell"), Some(DecorAnimation::Wiggle));
        assert_eq!(DecorAnimation::for_icon("Leaf"), None);
        assert_eq!(DecorAnimation::for_icon(""), None);
    }

    #[test]
    fn test_every_known_icon_animates() {
        for icon in icons::ALL {
            assert!(DecorAnimation::for_icon(icon).is_some(), "{icon}");
        }
    }

    #[test]
    fn test_poses_stay_bounded() {
        let all = [
            DecorAnimation::Sway,
            DecorAnimation::Bob,
            DecorAnimation::Twinkle,
            DecorAnimation::Drift,
            DecorAnimation::Wiggle,
        ];
        for anim in all {
            for i in 0..200 {
                let p = anim.sample(i as f32 * 0.05, 0.3);
                assert!(p.offset_x.abs() <= DRIFT_PIXELS + 1e-4);
                assert!(p.offset_y.abs() <= BOB_PIXELS + 1e-4);
                assert!(p.rotation.abs() <= max_rocking_angle() + 1e-4);
                assert!((TWINKLE_MIN_OPACITY - 1e-4..=1.0).contains(&p.opacity));
            }
        }
        let spin = DecorAnimation::Spin.sample(SPIN_PERIOD * 0.25, 0.0);
        assert!((spin.rotation - TAU / 4.0).abs() < 1e-3);
    }

    #[test]
    fn test_phase_offset_deterministic() {
        let a = phase_offset("coral_cove");
        assert_eq!(a, phase_offset("coral_cove"));
        assert!((0.0..1.0).contains(&a));
    }

    #[test]
    fn test_lifecycle_flags() {
        let mut state = NodeAnimationState::default();
        state.appear(true, Some(DecorAnimation::Bob));
        assert!(state.pulsing && state.decor_active);
        state.disappear();
        assert_eq!(state, NodeAnimationState::default());

        state.appear(false, None);
        assert!(!state.pulsing && !state.decor_active);
    }
}
