//! Pure logic for the island map level-select screen.
//!
//! Everything that decides what an island tile shows lives here, free of
//! any engine, so it can be unit-tested and shared by the Bevy client and
//! the headless harness.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`animation`] | Next-indicator pulse, icon micro-animations, lifecycle flags |
//! | [`catalog`] | JSON level catalog loading and validation |
//! | [`constants`] | UI sizes, durations, thresholds, opacities, icon ids |
//! | [`island`] | Island node model: visual state, badges, accessibility, tap |
//! | [`layout`] | Island positions along the sea path |
//! | [`level`] | `LevelDef` and the three age groups |
//! | [`stars`] | Score-to-star thresholds |
//! | [`state`] | `KidsGameState`: tracks, unlock chain, node inputs |

pub mod animation;
pub mod catalog;
pub mod constants;
pub mod island;
pub mod layout;
pub mod level;
pub mod stars;
pub mod state;
