//! Island map construction.
//!
//! Loads the level catalog, then (re)builds one UI button per level. All
//! three age-group tracks are drawn, stacked top to bottom; islands outside
//! the player's track take the wrong-age-group look.

use accesskit::{Node as AccessNode, Role};
use bevy::a11y::AccessibilityNode;
use bevy::prelude::*;
use islemap_logic::animation;
use islemap_logic::catalog::{self, CatalogError, LevelCatalog};
use islemap_logic::constants::{icons, layout as sizes, thresholds::MAX_STARS};
use islemap_logic::island::{IslandNode, IslandNodeInputs, NodeVisual};
use islemap_logic::layout;
use islemap_logic::level::{AgeGroup, LevelDef};
use islemap_logic::state::KidsGameState;

use crate::state::{
    HeaderText, IslandIcon, IslandNodeEntity, LockGlyph, MapRoot, MapState, MapViewConfig,
    NextRing, NodeAnimation, SelectionState, StarBadge,
};

const BUNDLED_LEVELS: &str = include_str!("../../../data/levels.json");

const SEA: Color = Color::srgb(0.16, 0.52, 0.74);
const SAND: Color = Color::srgb(0.93, 0.84, 0.58);
const RING_GOLD: Color = Color::srgb(1.0, 0.82, 0.2);
const STAR_ON: Color = Color::srgb(1.0, 0.8, 0.1);
const STAR_OFF: Color = Color::srgba(1.0, 1.0, 1.0, 0.35);

fn read_catalog(config: &MapViewConfig) -> Result<LevelCatalog, String> {
    match &config.catalog_path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;
            catalog::load_catalog(&json).map_err(|e: CatalogError| format!("{}: {}", path, e))
        }
        None => catalog::load_catalog(BUNDLED_LEVELS).map_err(|e| e.to_string()),
    }
}

/// Startup: load the catalog into `MapState`. A bad catalog leaves an empty map.
pub fn load_map(config: Res<MapViewConfig>, mut map: ResMut<MapState>) {
    let game = match read_catalog(&config) {
        Ok(catalog) => catalog.into_state(config.age_group),
        Err(e) => {
            warn!("Failed to load level catalog ({}), showing empty map", e);
            KidsGameState::new(Vec::new(), config.age_group)
        }
    };

    info!(
        "Island map: {} levels, player {:?} ({}), next={}",
        game.levels.len(),
        game.age_group,
        game.age_group.label(),
        game.next_level_id().unwrap_or("none")
    );

    map.game = game;
    map.dirty = true;
}

pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Fill color of the icon disc for an icon id.
fn icon_tint(icon: &str) -> Color {
    match icon {
        icons::LEAF | icons::PALM => Color::srgb(0.3, 0.7, 0.3),
        icons::FISH => Color::srgb(1.0, 0.55, 0.2),
        icons::BOAT => Color::srgb(0.85, 0.85, 0.95),
        icons::SUN => Color::srgb(1.0, 0.78, 0.15),
        icons::STAR => Color::srgb(1.0, 0.92, 0.4),
        icons::CLOUD => Color::srgb(0.92, 0.95, 1.0),
        icons::BUTTERFLY => Color::srgb(0.75, 0.45, 0.9),
        icons::SHELL => Color::srgb(0.98, 0.7, 0.75),
        _ => Color::srgb(0.6, 0.6, 0.6),
    }
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    let a = color.alpha();
    color.with_alpha(a * alpha)
}

/// Rebuild the map when dirty: despawn the old root, spawn a fresh tree.
pub fn rebuild_map(
    mut commands: Commands,
    time: Res<Time>,
    mut map: ResMut<MapState>,
    roots: Query<Entity, With<MapRoot>>,
) {
    if !map.dirty {
        return;
    }
    map.dirty = false;

    for entity in roots.iter() {
        commands.entity(entity).despawn_recursive();
    }

    let game = &map.game;
    let now = time.elapsed_secs();

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            BackgroundColor(SEA),
            MapRoot,
        ))
        .with_children(|root| {
            root.spawn((
                Text::new(""),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(sizes::MAP_MARGIN),
                    top: Val::Px(12.0),
                    ..default()
                },
                HeaderText,
            ));

            for (row, &age) in AgeGroup::all().iter().enumerate() {
                let top = layout::track_offset(row);
                root.spawn((
                    Text::new(age.label()),
                    TextFont {
                        font_size: 13.0,
                        ..default()
                    },
                    TextColor(Color::srgba(1.0, 1.0, 1.0, 0.7)),
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(8.0),
                        top: Val::Px(top + 4.0),
                        ..default()
                    },
                ));
                for (index, (level, inputs)) in game.track_inputs(age).into_iter().enumerate() {
                    spawn_island(root, level, inputs, index, top, now);
                }
            }
        });
}

fn spawn_island(
    root: &mut ChildBuilder,
    level: &LevelDef,
    inputs: IslandNodeInputs,
    track_index: usize,
    band_top: f32,
    now: f32,
) {
    let node = IslandNode::new(level, inputs, || {});
    let opacity = node.opacity();
    let (cx, cy) = layout::node_position(track_index);
    let ring = sizes::NEXT_RING_SIZE;

    let mut access = AccessNode::new(Role::Button);
    access.set_label(node.accessibility_label());
    if let Some(hint) = node.accessibility_hint() {
        access.set_description(hint);
    }

    let mut island = root.spawn((
        Button,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(cx - ring / 2.0),
            top: Val::Px(band_top + cy - ring / 2.0),
            width: Val::Px(ring),
            height: Val::Px(ring),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(Color::NONE),
        AccessibilityNode(access),
        IslandNodeEntity {
            level_id: level.id.clone(),
        },
        NodeAnimation {
            state: Default::default(),
            shows_next: node.shows_next_indicator(),
            decoration: node.decoration(),
            appeared_at: now,
        },
    ));
    let owner = island.id();

    island.with_children(|parent| {
        // Next indicator ring
        parent.spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Px(ring),
                height: Val::Px(ring),
                border: UiRect::all(Val::Px(4.0)),
                ..default()
            },
            BorderColor(RING_GOLD),
            BorderRadius::MAX,
            if node.shows_next_indicator() {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            },
            NextRing { owner },
        ));

        // Island body
        let body_color = match node.visual() {
            NodeVisual::Locked => Color::srgb(0.7, 0.68, 0.62),
            _ => SAND,
        };
        parent
            .spawn((
                Node {
                    width: Val::Px(sizes::NODE_SIZE),
                    height: Val::Px(sizes::NODE_SIZE),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..default()
                },
                BackgroundColor(with_alpha(body_color, opacity)),
                BorderRadius::MAX,
            ))
            .with_children(|body| {
                let tint = icon_tint(&level.icon);
                body.spawn((
                    Node {
                        width: Val::Px(sizes::ICON_SIZE),
                        height: Val::Px(sizes::ICON_SIZE),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    BackgroundColor(with_alpha(tint, opacity)),
                    BorderRadius::MAX,
                    IslandIcon {
                        owner,
                        phase: animation::phase_offset(&level.id),
                        base_color: tint,
                        opacity,
                    },
                ))
                .with_children(|icon| {
                    let initial: String = level.name.chars().take(1).collect();
                    icon.spawn((
                        Text::new(initial),
                        TextFont {
                            font_size: 20.0,
                            ..default()
                        },
                        TextColor(with_alpha(Color::srgb(0.2, 0.2, 0.25), opacity)),
                    ));
                });

                body.spawn((
                    Text::new("LOCK"),
                    TextFont {
                        font_size: 11.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    Node {
                        position_type: PositionType::Absolute,
                        width: Val::Px(sizes::LOCK_SIZE * 1.4),
                        height: Val::Px(sizes::LOCK_SIZE * 0.6),
                        justify_content: JustifyContent::Center,
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.2, 0.2, 0.25, 0.85)),
                    BorderRadius::all(Val::Px(4.0)),
                    if node.shows_lock() {
                        Visibility::Inherited
                    } else {
                        Visibility::Hidden
                    },
                    LockGlyph,
                ));
            });

        // Star badge
        parent
            .spawn((
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(0.0),
                    height: Val::Px(sizes::BADGE_SIZE),
                    padding: UiRect::horizontal(Val::Px(6.0)),
                    column_gap: Val::Px(3.0),
                    align_items: AlignItems::Center,
                    ..default()
                },
                BackgroundColor(Color::srgba(0.1, 0.2, 0.35, 0.85)),
                BorderRadius::all(Val::Px(sizes::BADGE_SIZE / 2.0)),
                if node.shows_star_badge() {
                    Visibility::Inherited
                } else {
                    Visibility::Hidden
                },
                StarBadge,
            ))
            .with_children(|badge| {
                let fill = node.star_fill();
                for filled in fill.iter().take(MAX_STARS) {
                    badge.spawn((
                        Node {
                            width: Val::Px(sizes::STAR_SIZE),
                            height: Val::Px(sizes::STAR_SIZE),
                            ..default()
                        },
                        BackgroundColor(if *filled { STAR_ON } else { STAR_OFF }),
                        BorderRadius::all(Val::Px(3.0)),
                        Transform::from_rotation(Quat::from_rotation_z(
                            std::f32::consts::FRAC_PI_4,
                        )),
                    ));
                }
            });

        // Name label under the island
        parent.spawn((
            Text::new(level.name.clone()),
            TextFont {
                font_size: 13.0,
                ..default()
            },
            TextColor(with_alpha(Color::WHITE, opacity)),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(ring),
                ..default()
            },
        ));
    });
}

/// Header: player age group, stars on the track, last tapped island.
pub fn update_header(
    map: Res<MapState>,
    selection: Res<SelectionState>,
    mut header: Query<(&mut Text, Ref<HeaderText>)>,
) {
    let Ok((mut text, marker)) = header.get_single_mut() else {
        return;
    };
    if !map.is_changed() && !selection.is_changed() && !marker.is_added() {
        return;
    }
    let game = &map.game;
    let track = game.track(game.age_group);
    let max = track.len() * MAX_STARS;
    let tapped = selection
        .last_tapped
        .as_deref()
        .map(|l| format!(" | Tapped: {}", l))
        .unwrap_or_default();
    **text = format!(
        "Island Map | {} | Stars {}/{} | [1][2][3] change age group{}",
        game.age_group.label(),
        game.track_stars(game.age_group),
        max,
        tapped
    );
}
