//! Collectible orb field: initial scatter and the per-frame contact sweep.

use collision::Aabb;
use engine_core::{Entity, MeshInstance, Pickup, Transform, Vec3, World};
use rand::Rng;

use crate::events::GameEvent;

/// Resting height of an orb above the ground plane.
pub const PICKUP_HEIGHT: f32 = 0.25;
/// Half-extents of an orb's collision volume.
pub const PICKUP_HALF_EXTENTS: Vec3 = Vec3::new(0.25, 0.25, 0.25);
/// Renderer mesh id for orbs.
pub const PICKUP_MESH_ID: u32 = 1;

/// Spawn a single orb at a position.
pub fn spawn_at(world: &mut World, position: Vec3) -> Entity {
    world.spawn((
        Transform::from_position(position),
        Pickup,
        MeshInstance::new(PICKUP_MESH_ID, 0),
    ))
}

/// Scatter `count` orbs uniformly over the field at a fixed height.
///
/// Each axis is an independent draw; no minimum separation, overlapping orbs
/// are possible and fine.
pub fn scatter(world: &mut World, rng: &mut impl Rng, count: usize, half_extent: f32) {
    for _ in 0..count {
        let x = rng.gen_range(-half_extent..half_extent);
        let z = rng.gen_range(-half_extent..half_extent);
        spawn_at(world, Vec3::new(x, PICKUP_HEIGHT, z));
    }
}

/// Collision volume of an orb at `position`.
pub fn bounds(position: Vec3) -> Aabb {
    Aabb::from_center_half_extents(position, PICKUP_HALF_EXTENTS)
}

/// Test every live orb against the avatar's bounds and despawn the hits.
///
/// Hits are collected while the query borrow is live and despawned after it
/// ends, so removal never skips or double-processes the rest of the sweep.
/// Returns the number collected.
pub fn sweep(world: &mut World, avatar_bounds: &Aabb, events: &mut Vec<GameEvent>) -> usize {
    let mut collected = Vec::new();
    for (entity, (transform, _)) in world.query::<(&Transform, &Pickup)>().iter() {
        if avatar_bounds.intersects(&bounds(transform.position)) {
            collected.push((entity, transform.position));
        }
    }
    for &(entity, position) in &collected {
        world.despawn(entity).ok();
        log::debug!("pickup collected at ({:.1}, {:.1})", position.x, position.z);
        events.push(GameEvent::PickupCollected { position });
    }
    collected.len()
}

/// Number of orbs still in the field.
pub fn live_count(world: &World) -> usize {
    world.query::<&Pickup>().iter().count()
}
