//! Spawn queue draining.
//!
//! [`drain_spawn_queue`] runs before the level schedule. It empties the
//! [`SpawnQueue`] in FIFO order, spawns each request from the catalog and
//! registers the new entity in the [`KindIndex`]. A request for a kind the
//! queue cannot produce aborts the drain with an error; the run is not
//! expected to continue after that.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::catalog;
use crate::components::kind::EntityKind;
use crate::error::SpawnError;
use crate::resources::animationstore::AnimationStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::kindindex::KindIndex;
use crate::resources::spawnqueue::SpawnQueue;

/// Spawn one catalog entity with its corner at `position` and index it.
pub fn spawn_kind(world: &mut World, kind: EntityKind, position: Vec2) -> Result<Entity, SpawnError> {
    let entity = {
        let store = world.resource::<AnimationStore>();
        match kind {
            EntityKind::Player => {
                let config = world.resource::<GameConfig>();
                let bundle = catalog::player_bundle(store, config, position)?;
                world.spawn(bundle).id()
            }
            EntityKind::Collectible => {
                let bundle = catalog::collectible_bundle(store, position)?;
                world.spawn(bundle).id()
            }
            EntityKind::Obstacle => {
                let bundle = catalog::obstacle_bundle(store, position)?;
                world.spawn(bundle).id()
            }
            EntityKind::Hazard => {
                let bundle = catalog::hazard_bundle(store, position)?;
                world.spawn(bundle).id()
            }
            EntityKind::Effect | EntityKind::Banner | EntityKind::Scenery => {
                return Err(SpawnError::UnsupportedKind(kind));
            }
        }
    };
    world.resource_mut::<KindIndex>().insert(kind, entity);
    debug!("Spawned {} {:?} at ({}, {})", kind, entity, position.x, position.y);
    Ok(entity)
}

/// Empty the spawn queue. Returns how many entities were created.
pub fn drain_spawn_queue(world: &mut World) -> Result<usize, SpawnError> {
    let mut spawned = 0;
    while let Some(request) = world.resource_mut::<SpawnQueue>().pop() {
        spawn_kind(world, request.kind, request.position)?;
        spawned += 1;
    }
    Ok(spawned)
}
