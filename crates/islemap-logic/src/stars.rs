//! Star rating from score percentage.

use crate::constants::thresholds::{MAX_STARS, STAR_ONE, STAR_THREE, STAR_TWO};

/// Stars earned for a best score given as a percentage (0–100).
/// Scores above 100 are treated as 100.
pub fn stars_for_score(percent: u32) -> u8 {
    let p = percent.min(100);
    if p >= STAR_THREE {
        3
    } else if p >= STAR_TWO {
        2
    } else if p >= STAR_ONE {
        1
    } else {
        0
    }
}

/// A star count as displayed: never more than `MAX_STARS`.
pub fn clamp_stars(star_count: u8) -> u8 {
    star_count.min(MAX_STARS as u8)
}

/// Filled/empty state of each star slot in the badge row.
pub fn star_fill(star_count: u8) -> [bool; MAX_STARS] {
    let shown = clamp_stars(star_count) as usize;
    let mut row = [false; MAX_STARS];
    for (i, slot) in row.iter_mut().enumerate() {
        *slot = shown > i;
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(stars_for_score(0), 0);
        assert_eq!(stars_for_score(STAR_ONE - 1), 0);
        assert_eq!(stars_for_score(STAR_ONE), 1);
        assert_eq!(stars_for_score(STAR_TWO - 1), 1);
        assert_eq!(stars_for_score(STAR_TWO), 2);
        assert_eq!(stars_for_score(STAR_THREE), 3);
        assert_eq!(stars_for_score(100), 3);
    }

    #[test]
    fn test_score_clamped() {
        assert_eq!(stars_for_score(250), 3);
    }

    #[test]
    fn test_star_fill() {
        assert_eq!(star_fill(0), [false, false, false]);
        assert_eq!(star_fill(2), [true, true, false]);
        // Saturates
        assert_eq!(star_fill(7), [true, true, true]);
    }

    #[test]
    fn test_clamp_stars() {
        assert_eq!(clamp_stars(0), 0);
        assert_eq!(clamp_stars(3), 3);
        assert_eq!(clamp_stars(7), 3);
        assert_eq!(clamp_stars(u8::MAX), 3);
    }
}
