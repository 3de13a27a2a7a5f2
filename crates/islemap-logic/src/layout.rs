//! Where islands sit on the map: a winding sea path, left to right.

use std::f32::consts::TAU;

use crate::constants::layout::{
    HEADER_HEIGHT, MAP_MARGIN, NODE_SIZE, NODE_SPACING_X, PATH_AMPLITUDE, PATH_WAVELENGTH,
};

/// Centre of the island at `track_index`, in map pixels from the top-left.
pub fn node_position(track_index: usize) -> (f32, f32) {
    let i = track_index as f32;
    let x = MAP_MARGIN + NODE_SIZE / 2.0 + i * NODE_SPACING_X;
    let y = MAP_MARGIN + PATH_AMPLITUDE + NODE_SIZE / 2.0
        - PATH_AMPLITUDE * (i / PATH_WAVELENGTH * TAU).sin();
    (x, y)
}

/// Width and height of a map holding `count` islands.
pub fn map_extent(count: usize) -> (f32, f32) {
    let height = 2.0 * (MAP_MARGIN + PATH_AMPLITUDE) + NODE_SIZE;
    if count == 0 {
        return (2.0 * MAP_MARGIN, height);
    }
    let width = 2.0 * MAP_MARGIN + NODE_SIZE + (count - 1) as f32 * NODE_SPACING_X;
    (width, height)
}

/// Top edge of the band holding track `row` (tracks stack top to bottom).
pub fn track_offset(row: usize) -> f32 {
    HEADER_HEIGHT + row as f32 * map_extent(0).1
}
