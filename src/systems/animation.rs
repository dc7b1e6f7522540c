//! Animation system.
//!
//! Advances every [`Animation`] by the frame delta unless it is paused, then
//! despawns [`Transient`] entities whose non-looping animation has finished.
//!
//! # Animation Flow
//!
//! 1. Animation data is defined in [`AnimationStore`]
//! 2. Entities have an [`Animation`] component pointing to a key
//! 3. This system advances the elapsed time
//! 4. [`draw_list`](crate::systems::render::draw_list) asks the store for the frame to show

use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::animation::Animation;
use crate::components::kind::EntityKind;
use crate::components::transient::Transient;
use crate::resources::animationstore::AnimationStore;
use crate::resources::kindindex::KindIndex;
use crate::resources::worldtime::WorldTime;

pub fn animation(
    mut query: Query<(Entity, &mut Animation, Option<&Transient>, Option<&EntityKind>)>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
    mut index: ResMut<KindIndex>,
    mut commands: Commands,
) {
    for (entity, mut anim, transient, kind) in query.iter_mut() {
        anim.advance(time.delta);

        if transient.is_none() {
            continue;
        }
        let Some(resource) = animation_store.get(&anim.animation_key) else {
            warn!("Transient {:?} plays unknown animation '{}'", entity, anim.animation_key);
            continue;
        };
        if resource.is_finished(anim.elapsed_time) {
            if let Some(kind) = kind {
                index.remove(*kind, entity);
            }
            commands.entity(entity).try_despawn();
            debug!("Transient {:?} finished", entity);
        }
    }
}
