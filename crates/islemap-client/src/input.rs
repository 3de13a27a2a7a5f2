//! Input handling for the island map: island taps and age-group keys.

use bevy::prelude::*;
use islemap_logic::island::IslandNode;
use islemap_logic::level::AgeGroup;

use crate::state::{IslandNodeEntity, IslandTapped, MapState, SelectionState};

/// Turn a press on an island button into its tap action.
pub fn island_interaction(
    interactions: Query<(&Interaction, &IslandNodeEntity), Changed<Interaction>>,
    mut taps: EventWriter<IslandTapped>,
) {
    for (interaction, island) in &interactions {
        if *interaction == Interaction::Pressed {
            taps.send(IslandTapped {
                level_id: island.level_id.clone(),
            });
        }
    }
}

/// Run each tapped island's action through the node model.
pub fn handle_island_taps(
    mut taps: EventReader<IslandTapped>,
    map: Res<MapState>,
    mut selection: ResMut<SelectionState>,
) {
    for tap in taps.read() {
        let game = &map.game;
        let (Some(level), Some(inputs)) =
            (game.level(&tap.level_id), game.node_inputs(&tap.level_id))
        else {
            warn!("Tap on unknown island '{}'", tap.level_id);
            continue;
        };

        let view = IslandNode::new(level, inputs, || {});
        let (label, visual) = (view.accessibility_label(), view.visual());

        let mut node = IslandNode::new(level, inputs, || {
            info!("Island tapped: {} ({:?})", label, visual);
            selection.last_tapped = Some(label.clone());
            selection.tap_count += 1;
        });
        node.tap();
    }
}

/// Keys 1/2/3 switch the player's age group and rebuild the map.
pub fn age_group_keys(keyboard: Res<ButtonInput<KeyCode>>, mut map: ResMut<MapState>) {
    let picked = if keyboard.just_pressed(KeyCode::Digit1) {
        Some(AgeGroup::Little)
    } else if keyboard.just_pressed(KeyCode::Digit2) {
        Some(AgeGroup::Middle)
    } else if keyboard.just_pressed(KeyCode::Digit3) {
        Some(AgeGroup::Big)
    } else {
        None
    };

    if let Some(age) = picked {
        if age != map.game.age_group {
            info!("Age group -> {:?} ({})", age, age.label());
            map.game.age_group = age;
            map.dirty = true;
        }
    }
}
