//! Scene setup and teardown.
//!
//! Scenes are built directly on the [`World`]. A transition requested
//! through [`NextGameState`] is applied by [`apply_pending_state`] at the
//! start of the next frame: every entity is despawned, per-scene resources
//! are reset, and the new scene is built.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, info};

use crate::catalog;
use crate::components::dimensions::Dimensions;
use crate::components::kind::EntityKind;
use crate::error::SpawnError;
use crate::resources::animationstore::AnimationStore;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::kindindex::KindIndex;
use crate::resources::levellayout::LevelLayout;
use crate::resources::levelstate::LevelState;
use crate::resources::levelstatus::{LevelStats, LevelStatus};
use crate::resources::spawnqueue::SpawnQueue;
use crate::resources::worldbounds::WorldBounds;
use crate::systems::spawn::spawn_kind;

const MENU_SIZE: Vec2 = Vec2::new(800.0, 600.0);
const MENU_TEXT_OFFSET: f32 = 100.0;

/// Despawn everything and reset the per-scene resources.
pub fn clean_all_entities(world: &mut World) {
    let entities: Vec<Entity> = world.query::<Entity>().iter(world).collect();
    let count = entities.len();
    for entity in entities {
        world.despawn(entity);
    }
    world.resource_mut::<KindIndex>().clear();
    world.resource_mut::<SpawnQueue>().clear();
    *world.resource_mut::<LevelState>() = LevelState::default();
    *world.resource_mut::<LevelStats>() = LevelStats::default();
    *world.resource_mut::<LevelStatus>() = LevelStatus::default();
    debug!("Cleaned {} entities", count);
}

fn spawn_scenery(world: &mut World, bundle: catalog::ActorBundle) -> Entity {
    let entity = world.spawn(bundle).id();
    world
        .resource_mut::<KindIndex>()
        .insert(EntityKind::Scenery, entity);
    entity
}

/// Title screen: water, title raised above the center, start prompt below it.
pub fn enter_menu(world: &mut World) -> Result<(), SpawnError> {
    let center = MENU_SIZE * 0.5;
    let (water, title, prompt) = {
        let store = world.resource::<AnimationStore>();
        (
            catalog::scenery(store, catalog::WATER, Vec2::ZERO)?.with_size(MENU_SIZE.x, MENU_SIZE.y),
            catalog::scenery(store, catalog::TITLE, Vec2::ZERO)?
                .centered_at(center)
                .moved_by(Vec2::new(0.0, MENU_TEXT_OFFSET)),
            catalog::scenery(store, catalog::MSG_START, Vec2::ZERO)?
                .centered_at(center)
                .moved_by(Vec2::new(0.0, -MENU_TEXT_OFFSET)),
        )
    };
    let bounds = WorldBounds::from_dimensions(&water.dimensions);
    spawn_scenery(world, water);
    spawn_scenery(world, title);
    spawn_scenery(world, prompt);
    world.insert_resource(bounds);
    world.resource_mut::<Camera2DRes>().center_on(center, &bounds);
    info!("Entered menu");
    Ok(())
}

/// A fresh level: background sized to the world, the player, and the layout
/// queued for spawning. Play starts only if the layout has something in it.
pub fn enter_level(world: &mut World) -> Result<(), SpawnError> {
    let config = world.resource::<GameConfig>().clone();
    let background = catalog::scenery(
        world.resource::<AnimationStore>(),
        catalog::WATER_BORDER,
        Vec2::ZERO,
    )?
    .with_size(config.world_width, config.world_height);
    let bounds = WorldBounds::from_dimensions(&background.dimensions);
    spawn_scenery(world, background);
    world.insert_resource(bounds);

    let start = Vec2::new(config.player_start_x, config.player_start_y);
    let player = spawn_kind(world, EntityKind::Player, start)?;
    let player_size = world
        .get::<Dimensions>(player)
        .map(|d| d.size())
        .unwrap_or(Vec2::ZERO);

    let layout = world.resource::<LevelLayout>().clone();
    let mut queue = SpawnQueue::default();
    for entry in &layout.spawns {
        let (kind, position) = entry.resolve()?;
        queue.push(kind, position);
    }
    world.insert_resource(queue);
    world.resource_mut::<LevelState>().play = !layout.is_empty();

    world.resource_mut::<Camera2DRes>().center_on(start + player_size * 0.5, &bounds);
    info!(
        "Entered level {}x{} with {} queued spawns",
        bounds.width,
        bounds.height,
        layout.spawns.len()
    );
    Ok(())
}

/// Apply a pending scene change, if one was requested.
///
/// Returns the state entered, or `None` if nothing was pending.
pub fn apply_pending_state(world: &mut World) -> Result<Option<GameStates>, SpawnError> {
    let Some(next) = world.resource_mut::<NextGameState>().take() else {
        return Ok(None);
    };
    let previous = world.resource::<GameState>().get();
    info!("Game state {:?} -> {:?}", previous, next);

    clean_all_entities(world);
    match next {
        GameStates::Menu => enter_menu(world)?,
        GameStates::Level => enter_level(world)?,
        GameStates::None => {}
    }
    world.resource_mut::<GameState>().set(next);
    Ok(Some(next))
}
