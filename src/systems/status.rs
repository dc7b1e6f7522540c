//! Status readout.
//!
//! Rebuilds [`LevelStatus`] every level frame: counts per kind, the pending
//! spawn queue, how many entities live in the world and which banners are
//! up. Purely informational.

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::banner::Banner;
use crate::components::kind::EntityKind;
use crate::components::layer::Layer;
use crate::resources::kindindex::KindIndex;
use crate::resources::levelstatus::{LevelStats, LevelStatus};
use crate::resources::spawnqueue::SpawnQueue;

pub fn status(
    layers: Query<&Layer>,
    banners: Query<&Banner>,
    index: Res<KindIndex>,
    queue: Res<SpawnQueue>,
    stats: Res<LevelStats>,
    mut status: ResMut<LevelStatus>,
) {
    let pending: Vec<String> = queue
        .iter()
        .map(|r| format!("{}@({}, {})", r.kind, r.position.x, r.position.y))
        .collect();
    let world = layers.iter().filter(|l| **l == Layer::World).count();
    let ui: Vec<&str> = banners.iter().map(|b| b.name).collect();

    status.lines = vec![
        format!("obstacles: {}", index.count(EntityKind::Obstacle)),
        format!("collectibles: {}", index.count(EntityKind::Collectible)),
        format!("hazards: {}", index.count(EntityKind::Hazard)),
        format!("queue: [{}]", pending.join(", ")),
        format!("world entities: {}", world),
        format!("ui: [{}]", ui.join(", ")),
        format!("collected: {} effects: {}", stats.collected, stats.effects_spawned),
    ];
    trace!("{}", status.text());
}
