//! Island Map - level select screen (Bevy client)
//!
//! Draws every level of the catalog as an island on a winding sea path.
//! The player's own age-group track is in full color with its next island
//! pulsing; tapping an island fires its action.
//!
//! Usage:
//!   cargo run -p islemap-client
//!   cargo run -p islemap-client -- --age-group middle --catalog data/levels.json

mod animation;
mod input;
mod map;
mod state;

use bevy::prelude::*;

use state::{ActiveAnimations, IslandTapped, MapState, MapViewConfig, SelectionState};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Island Map".to_string(),
                resolution: (1280.0, 800.0).into(),
                present_mode: bevy::window::PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(MapViewConfig::from_args())
        .insert_resource(MapState::default())
        .insert_resource(SelectionState::default())
        .insert_resource(ActiveAnimations::default())
        .add_event::<IslandTapped>()
        .add_observer(animation::stop_node_animations)
        .add_systems(Startup, (map::setup_camera, map::load_map))
        .add_systems(
            Update,
            (
                input::age_group_keys,
                map::rebuild_map,
                animation::start_node_animations,
                input::island_interaction,
                input::handle_island_taps,
                animation::animate_next_rings,
                animation::animate_decorations,
                map::update_header,
            )
                .chain(),
        )
        .run();
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use islemap_logic::level::{AgeGroup, LevelDef};
    use islemap_logic::state::KidsGameState;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(SelectionState::default())
            .add_event::<IslandTapped>()
            .add_systems(Update, input::handle_island_taps);
        let levels = vec![
            LevelDef::new("a1", "Sandy Start", "shell", AgeGroup::Little),
            LevelDef::new("a2", "Palm Path", "palm", AgeGroup::Little),
            LevelDef::new("b1", "Reef Run", "fish", AgeGroup::Middle),
        ];
        app.insert_resource(MapState {
            game: KidsGameState::new(levels, AgeGroup::Little),
            dirty: false,
        });
        app
    }

    #[test]
    fn test_tap_event_runs_node_action() {
        let mut app = test_app();
        app.world_mut().send_event(IslandTapped {
            level_id: "a1".into(),
        });
        app.update();
        let sel = app.world().resource::<SelectionState>();
        assert_eq!(sel.tap_count, 1);
        assert_eq!(sel.last_tapped.as_deref(), Some("Sandy Start, next level"));
    }

    #[test]
    fn test_each_tap_runs_action_once() {
        let mut app = test_app();
        for id in ["a1", "b1", "a1"] {
            app.world_mut().send_event(IslandTapped {
                level_id: id.into(),
            });
        }
        app.update();
        let sel = app.world().resource::<SelectionState>();
        assert_eq!(sel.tap_count, 3);
        assert_eq!(sel.last_tapped.as_deref(), Some("Sandy Start, next level"));
    }

    #[test]
    fn test_tap_on_locked_island_still_fires() {
        let mut app = test_app();
        app.world_mut().send_event(IslandTapped {
            level_id: "a2".into(),
        });
        app.update();
        let sel = app.world().resource::<SelectionState>();
        assert_eq!(sel.last_tapped.as_deref(), Some("Palm Path, locked"));
    }

    #[test]
    fn test_unknown_island_ignored() {
        let mut app = test_app();
        app.world_mut().send_event(IslandTapped {
            level_id: "nope".into(),
        });
        app.update();
        assert_eq!(app.world().resource::<SelectionState>().tap_count, 0);
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_config_defaults() {
        let config = MapViewConfig::default();
        assert_eq!(config.age_group, AgeGroup::Little);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_from_arg_list_flags() {
        let config = MapViewConfig::from_arg_list(args(&["--age-group", "big"]));
        assert_eq!(config.age_group, AgeGroup::Big);
        assert!(config.catalog_path.is_none());

        let config =
            MapViewConfig::from_arg_list(args(&["-c", "levels/custom.json", "-a", "middle"]));
        assert_eq!(config.age_group, AgeGroup::Middle);
        assert_eq!(config.catalog_path.as_deref(), Some("levels/custom.json"));
    }

    #[test]
    fn test_from_arg_list_bad_values() {
        let config = MapViewConfig::from_arg_list(args(&["--age-group", "teen"]));
        assert_eq!(config.age_group, AgeGroup::Little);

        // Trailing flag with no value
        let config = MapViewConfig::from_arg_list(args(&["-a", "big", "--catalog"]));
        assert_eq!(config.age_group, AgeGroup::Big);
        assert!(config.catalog_path.is_none());

        let config = MapViewConfig::from_arg_list(args(&["--verbose", "-a"]));
        assert_eq!(config.age_group, AgeGroup::Little);
    }

    fn spawn_anim(world: &mut World, shows_next: bool) -> Entity {
        world
            .spawn(state::NodeAnimation {
                state: Default::default(),
                shows_next,
                decoration: None,
                appeared_at: 0.0,
            })
            .id()
    }

    #[test]
    fn test_start_animation_sets_flags() {
        let mut world = World::new();
        world.insert_resource(Time::<()>::default());
        world.insert_resource(ActiveAnimations::default());
        let e = spawn_anim(&mut world, true);
        world
            .run_system_once(animation::start_node_animations)
            .expect("system runs");
        let anim = world.get::<state::NodeAnimation>(e).unwrap();
        assert!(anim.state.pulsing);
        assert!(!anim.state.decor_active);
        assert_eq!(world.resource::<ActiveAnimations>().0, 1);
    }

    #[test]
    fn test_despawn_stops_animations() {
        let mut world = World::new();
        world.insert_resource(Time::<()>::default());
        world.insert_resource(ActiveAnimations::default());
        world.add_observer(animation::stop_node_animations);
        world.flush();
        let pulsing = spawn_anim(&mut world, true);
        let idle = spawn_anim(&mut world, false);
        world
            .run_system_once(animation::start_node_animations)
            .expect("system runs");
        assert_eq!(world.resource::<ActiveAnimations>().0, 1);

        world.despawn(idle);
        assert_eq!(world.resource::<ActiveAnimations>().0, 1);
        world.despawn(pulsing);
        world.flush();
        assert_eq!(world.resource::<ActiveAnimations>().0, 0);
    }

    #[test]
    fn test_removing_animation_resets_flags() {
        let mut world = World::new();
        world.insert_resource(Time::<()>::default());
        world.insert_resource(ActiveAnimations::default());
        world.add_observer(animation::stop_node_animations);
        world.flush();
        let e = spawn_anim(&mut world, true);
        world
            .run_system_once(animation::start_node_animations)
            .expect("system runs");
        let removed = world.entity_mut(e).take::<state::NodeAnimation>().unwrap();
        assert!(!removed.state.pulsing);
        assert_eq!(world.resource::<ActiveAnimations>().0, 0);
    }
}
