//! Island Map Headless Harness
//!
//! Validates the bundled level catalog and sweeps the island node
//! rendering rules without opening a window.
//!
//! Usage:
//!   cargo run -p islemap-simtest
//!   cargo run -p islemap-simtest -- --verbose

use islemap_logic::animation::{self, DecorAnimation};
use islemap_logic::catalog::{self, LevelCatalog};
use islemap_logic::constants::{durations, icons, opacity, thresholds};
use islemap_logic::island::{IslandNode, IslandNodeInputs, NodeVisual};
use islemap_logic::layout;
use islemap_logic::level::{AgeGroup, LevelDef};
use islemap_logic::stars;

// ── Level catalog (same JSON the client embeds) ─────────────────────────
const LEVELS_JSON: &str = include_str!("../../../data/levels.json");

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Island Map Harness ===\n");

    let mut results = Vec::new();

    // 1. Catalog validation
    let catalog = validate_catalog_data(&mut results);

    // 2. Star thresholds
    results.extend(validate_stars());

    // 3. Node rendering rules sweep
    results.extend(validate_node_rules());

    // 4. Catalog-driven map state
    if let Some(catalog) = catalog {
        results.extend(validate_map_state(catalog));
    }

    // 5. Animation curves and layout
    results.extend(validate_animation_and_layout());

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Catalog ──────────────────────────────────────────────────────────

fn validate_catalog_data(results: &mut Vec<TestResult>) -> Option<LevelCatalog> {
    println!("--- Level Catalog ---");

    let raw: serde_json::Value = match serde_json::from_str(LEVELS_JSON) {
        Ok(v) => v,
        Err(e) => {
            results.push(TestResult {
                name: "catalog_json".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            return None;
        }
    };
    let raw_count = raw["levels"].as_array().map_or(0, |a| a.len());

    let catalog = match catalog::load_catalog(LEVELS_JSON) {
        Ok(c) => c,
        Err(e) => {
            results.push(TestResult {
                name: "catalog_load".into(),
                passed: false,
                detail: e.to_string(),
            });
            return None;
        }
    };

    results.push(TestResult {
        name: "catalog_all_levels_loaded".into(),
        passed: raw_count == catalog.levels.len(),
        detail: format!("{} raw entries, {} loaded", raw_count, catalog.levels.len()),
    });

    let unknown: Vec<&str> = catalog
        .levels
        .iter()
        .filter(|l| !icons::is_known(&l.icon))
        .map(|l| l.id.as_str())
        .collect();
    results.push(TestResult {
        name: "catalog_known_icons".into(),
        passed: unknown.is_empty(),
        detail: if unknown.is_empty() {
            "every level uses a known icon".into()
        } else {
            format!("unknown icons on: {}", unknown.join(", "))
        },
    });

    let per_track: Vec<String> = AgeGroup::all()
        .iter()
        .map(|&g| format!("{:?}={}", g, catalog.count(g)))
        .collect();
    results.push(TestResult {
        name: "catalog_tracks_populated".into(),
        passed: AgeGroup::all().iter().all(|&g| catalog.count(g) > 0),
        detail: per_track.join(" "),
    });

    let bad_scores: Vec<&String> = catalog
        .progress
        .iter()
        .filter(|(_, s)| **s > 100)
        .map(|(id, _)| id)
        .collect();
    results.push(TestResult {
        name: "catalog_scores_in_range".into(),
        passed: bad_scores.is_empty(),
        detail: format!(
            "{} progress entries, {} above 100",
            catalog.progress.len(),
            bad_scores.len()
        ),
    });

    Some(catalog)
}

// ── 2. Stars ────────────────────────────────────────────────────────────

fn validate_stars() -> Vec<TestResult> {
    println!("--- Star Thresholds ---");
    let mut results = Vec::new();

    let mut monotonic = true;
    let mut prev = 0;
    for score in 0..=120 {
        let s = stars::stars_for_score(score);
        if s < prev || s as usize > thresholds::MAX_STARS {
            monotonic = false;
        }
        prev = s;
    }
    results.push(TestResult {
        name: "stars_monotonic".into(),
        passed: monotonic,
        detail: "stars never drop as score rises, never exceed max".into(),
    });

    let edges = [
        (thresholds::STAR_ONE, 1),
        (thresholds::STAR_TWO, 2),
        (thresholds::STAR_THREE, 3),
    ];
    let edges_ok = edges.iter().all(|&(score, want)| {
        stars::stars_for_score(score) == want && stars::stars_for_score(score - 1) == want - 1
    });
    results.push(TestResult {
        name: "stars_threshold_edges".into(),
        passed: edges_ok,
        detail: format!(
            "1★ at {}, 2★ at {}, 3★ at {}",
            thresholds::STAR_ONE,
            thresholds::STAR_TWO,
            thresholds::STAR_THREE
        ),
    });

    results
}

// ── 3. Node rules ───────────────────────────────────────────────────────

fn validate_node_rules() -> Vec<TestResult> {
    println!("--- Island Node Rules ---");
    let mut results = Vec::new();
    let level = LevelDef::new("lookout", "Lookout Point", "leaf", AgeGroup::Middle);

    let mut combos = 0;
    let mut badge_fail = 0;
    let mut lock_fail = 0;
    let mut precedence_fail = 0;
    let mut label_fail = 0;
    let mut next_fail = 0;
    let mut opacity_fail = 0;
    let mut hint_fail = 0;

    for unlocked in [false, true] {
        for is_next in [false, true] {
            for age_group_matches in [false, true] {
                for star_count in 0..=3u8 {
                    combos += 1;
                    let inputs = IslandNodeInputs {
                        unlocked,
                        is_next,
                        age_group_matches,
                        star_count,
                    };
                    let node = IslandNode::new(&level, inputs, || {});

                    if node.shows_star_badge() != (star_count > 0 && age_group_matches) {
                        badge_fail += 1;
                    }
                    if node.shows_lock() && unlocked {
                        lock_fail += 1;
                    }
                    if !age_group_matches && node.visual() != NodeVisual::WrongAgeGroup {
                        precedence_fail += 1;
                    }
                    let label = node.accessibility_label();
                    let has_count = label.contains(&format!("{} star", star_count));
                    if star_count == 0 && label.contains(" star") {
                        label_fail += 1;
                    }
                    if star_count > 0 && node.visual() == NodeVisual::Unlocked && !has_count {
                        label_fail += 1;
                    }
                    if node.shows_next_indicator() && !(unlocked && age_group_matches) {
                        next_fail += 1;
                    }
                    let want_opacity = match node.visual() {
                        NodeVisual::WrongAgeGroup => opacity::WRONG_AGE_GROUP,
                        NodeVisual::Locked => opacity::LOCKED,
                        NodeVisual::Unlocked => opacity::UNLOCKED,
                    };
                    if node.opacity() != want_opacity {
                        opacity_fail += 1;
                    }
                    let wants_hint = unlocked && age_group_matches;
                    if node.accessibility_hint().is_some() != wants_hint {
                        hint_fail += 1;
                    }
                }
            }
        }
    }

    let rules = [
        ("node_badge_rule", badge_fail, "star badge iff stars > 0 and age matches"),
        ("node_lock_rule", lock_fail, "lock only when not unlocked"),
        ("node_age_precedence", precedence_fail, "wrong age group wins"),
        ("node_label_stars", label_fail, "label mentions stars only when > 0"),
        ("node_next_rule", next_fail, "next ring only on open, matching islands"),
        ("node_opacity", opacity_fail, "opacity follows visual state"),
        ("node_hint_rule", hint_fail, "play hint only on open, matching islands"),
    ];
    for (name, fails, what) in rules {
        results.push(TestResult {
            name: name.into(),
            passed: fails == 0,
            detail: format!("{} ({} of {} combos failed)", what, fails, combos),
        });
    }

    results
}

// ── 4. Map state ────────────────────────────────────────────────────────

fn validate_map_state(catalog: LevelCatalog) -> Vec<TestResult> {
    println!("--- Map State ---");
    let mut results = Vec::new();

    for &age in AgeGroup::all() {
        let state = catalog.clone().into_state(age);
        let track = state.track(age);

        let first_open = track.first().is_some_and(|l| state.is_unlocked(&l.id));
        results.push(TestResult {
            name: format!("map_{:?}_first_open", age).to_lowercase(),
            passed: first_open,
            detail: format!("{} islands on track", track.len()),
        });

        // An island can only be open if everything before it is open
        let mut seen_locked = false;
        let mut chain_ok = true;
        for l in &track {
            let open = state.is_unlocked(&l.id);
            if seen_locked && open {
                chain_ok = false;
            }
            if !open {
                seen_locked = true;
            }
        }
        results.push(TestResult {
            name: format!("map_{:?}_unlock_chain", age).to_lowercase(),
            passed: chain_ok,
            detail: "no open island after a locked one".into(),
        });

        let next = state.next_level_id().map(str::to_string);
        let next_ok = match &next {
            Some(id) => state.is_unlocked(id) && state.star_count(id) == 0,
            None => track.iter().all(|l| state.star_count(&l.id) > 0),
        };
        results.push(TestResult {
            name: format!("map_{:?}_next_level", age).to_lowercase(),
            passed: next_ok,
            detail: format!(
                "next={} stars={}",
                next.as_deref().unwrap_or("none"),
                state.track_stars(age)
            ),
        });
    }

    results
}

// ── 5. Animation & layout ───────────────────────────────────────────────

fn validate_animation_and_layout() -> Vec<TestResult> {
    println!("--- Animation & Layout ---");
    let mut results = Vec::new();

    let steps = 240;
    let mut pulse_ok = true;
    for i in 0..steps {
        let t = durations::PULSE_PERIOD * 2.0 * i as f32 / steps as f32;
        let s = animation::pulse_scale(t);
        if !(1.0..=thresholds::PULSE_SCALE + 1e-4).contains(&s) {
            pulse_ok = false;
        }
    }
    results.push(TestResult {
        name: "anim_pulse_range".into(),
        passed: pulse_ok,
        detail: format!("scale stays in 1.0..={}", thresholds::PULSE_SCALE),
    });

    let mapped: Vec<String> = icons::ALL
        .iter()
        .map(|i| format!("{}={:?}", i, DecorAnimation::for_icon(i)))
        .collect();
    results.push(TestResult {
        name: "anim_icons_mapped".into(),
        passed: icons::ALL.iter().all(|i| DecorAnimation::for_icon(i).is_some())
            && DecorAnimation::for_icon("unknown").is_none(),
        detail: mapped.join(" "),
    });

    let mut opacity_ok = true;
    for i in 0..steps {
        let pose = DecorAnimation::Twinkle.sample(i as f32 * 0.02, 0.5);
        if pose.opacity < thresholds::TWINKLE_MIN_OPACITY - 1e-4 || pose.opacity > 1.0 {
            opacity_ok = false;
        }
    }
    results.push(TestResult {
        name: "anim_twinkle_opacity".into(),
        passed: opacity_ok,
        detail: format!("opacity stays in {}..=1.0", thresholds::TWINKLE_MIN_OPACITY),
    });

    let count = 8;
    let (w, h) = layout::map_extent(count);
    let inside = (0..count).all(|i| {
        let (x, y) = layout::node_position(i);
        x > 0.0 && x < w && y > 0.0 && y < h
    });
    results.push(TestResult {
        name: "layout_inside_map".into(),
        passed: inside,
        detail: format!("{} islands in {:.0}x{:.0}", count, w, h),
    });

    results
}
