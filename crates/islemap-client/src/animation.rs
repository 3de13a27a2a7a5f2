//! Island node micro-animations: next-ring pulse and icon decorations.

use bevy::prelude::*;
use islemap_logic::animation::pulse_scale;

use crate::state::{ActiveAnimations, IslandIcon, NextRing, NodeAnimation};

/// Set the transient flags when a node first appears.
pub fn start_node_animations(
    time: Res<Time>,
    mut active: ResMut<ActiveAnimations>,
    mut added: Query<&mut NodeAnimation, Added<NodeAnimation>>,
) {
    let now = time.elapsed_secs();
    for mut anim in &mut added {
        let (shows_next, decoration) = (anim.shows_next, anim.decoration);
        anim.state.appear(shows_next, decoration);
        anim.appeared_at = now;
        if anim.state.pulsing || anim.state.decor_active {
            active.0 += 1;
        }
    }
}

/// Clear the transient flags as a node leaves the map (despawn or removal).
pub fn stop_node_animations(
    trigger: Trigger<OnRemove, NodeAnimation>,
    mut active: ResMut<ActiveAnimations>,
    mut anims: Query<&mut NodeAnimation>,
) {
    let Ok(mut anim) = anims.get_mut(trigger.entity()) else {
        return;
    };
    if anim.state.pulsing || anim.state.decor_active {
        active.0 = active.0.saturating_sub(1);
    }
    anim.state.disappear();
}

/// Grow and shrink the ring around the next island.
pub fn animate_next_rings(
    time: Res<Time>,
    nodes: Query<&NodeAnimation>,
    mut rings: Query<(&NextRing, &mut Transform)>,
) {
    let t = time.elapsed_secs();
    for (ring, mut tf) in &mut rings {
        let Ok(anim) = nodes.get(ring.owner) else {
            continue;
        };
        let scale = if anim.state.pulsing {
            pulse_scale(t - anim.appeared_at)
        } else {
            1.0
        };
        tf.scale = Vec3::new(scale, scale, 1.0);
    }
}

/// Apply the icon's decorative pose: offset, rotation, scale and fade.
pub fn animate_decorations(
    time: Res<Time>,
    nodes: Query<&NodeAnimation>,
    mut icons: Query<(&IslandIcon, &mut Node, &mut Transform, &mut BackgroundColor)>,
) {
    let t = time.elapsed_secs();
    for (icon, mut node, mut tf, mut bg) in &mut icons {
        let Ok(anim) = nodes.get(icon.owner) else {
            continue;
        };
        let decoration = match anim.decoration {
            Some(d) if anim.state.decor_active => d,
            _ => continue,
        };
        let pose = decoration.sample(t - anim.appeared_at, icon.phase);

        node.left = Val::Px(pose.offset_x);
        node.top = Val::Px(pose.offset_y);
        tf.rotation = Quat::from_rotation_z(-pose.rotation);
        tf.scale = Vec3::new(pose.scale, pose.scale, 1.0);
        let alpha = icon.base_color.alpha() * icon.opacity * pose.opacity;
        bg.0 = icon.base_color.with_alpha(alpha);
    }
}
