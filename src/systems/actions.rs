//! Timed action system.
//!
//! Ticks every [`Actions`] component. When a
//! [`Remove`](crate::components::actions::Action::Remove) action completes,
//! the entity is dropped from the [`KindIndex`] and despawned.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::actions::Actions;
use crate::components::kind::EntityKind;
use crate::components::rotation::Rotation;
use crate::components::tint::Tint;
use crate::resources::kindindex::KindIndex;
use crate::resources::worldtime::WorldTime;

pub fn actions_system(
    mut query: Query<(
        Entity,
        &mut Actions,
        &mut Tint,
        &mut Rotation,
        Option<&EntityKind>,
    )>,
    time: Res<WorldTime>,
    mut index: ResMut<KindIndex>,
    mut commands: Commands,
) {
    for (entity, mut actions, mut tint, mut rotation, kind) in query.iter_mut() {
        if actions.is_empty() {
            continue;
        }
        if actions.tick(time.delta, &mut tint, &mut rotation) {
            if let Some(kind) = kind {
                index.remove(*kind, entity);
            }
            commands.entity(entity).try_despawn();
            debug!("Removed {:?} after its actions", entity);
        }
    }
}
