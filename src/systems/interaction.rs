//! Player interactions.
//!
//! Runs only while the level is in play. Each frame, in this order:
//!
//! 1. **collect** – every uncollected collectible the player overlaps is
//!    marked collected, fades out and is removed afterwards; a whirlpool
//!    effect is spawned centered on it.
//! 2. **hazard** – touching any hazard kills the player, who stops reacting
//!    to input and fades out.
//! 3. **solid** – the player is pushed out of every obstacle it overlaps,
//!    one obstacle at a time, along the minimum translation vector.
//!
//! Candidates come from the [`KindIndex`], in spawn order.

use bevy_ecs::prelude::*;
use log::{debug, error, info};

use crate::catalog;
use crate::components::actions::{Action, Actions};
use crate::components::boundary::{BoundaryPolygon, Pose};
use crate::components::collectible::Collectible;
use crate::components::dimensions::Dimensions;
use crate::components::kind::EntityKind;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::resources::animationstore::AnimationStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::kindindex::KindIndex;
use crate::resources::levelstatus::LevelStats;

#[allow(clippy::too_many_arguments, clippy::type_complexity)]
pub fn interaction(
    mut players: Query<
        (
            &mut MapPosition,
            &Dimensions,
            &Rotation,
            &Scale,
            &BoundaryPolygon,
            &mut Player,
            &mut Actions,
        ),
        With<Player>,
    >,
    others: Query<
        (
            &MapPosition,
            &Dimensions,
            &Rotation,
            &Scale,
            &BoundaryPolygon,
        ),
        Without<Player>,
    >,
    mut collectibles: Query<(&mut Collectible, &mut Actions), Without<Player>>,
    mut index: ResMut<KindIndex>,
    mut stats: ResMut<LevelStats>,
    store: Res<AnimationStore>,
    config: Res<GameConfig>,
    mut commands: Commands,
) {
    let Some((mut position, dimensions, rotation, scale, boundary, mut player, mut actions)) =
        players.iter_mut().next()
    else {
        return;
    };

    // collect
    let candidates = index.entities(EntityKind::Collectible).to_vec();
    for entity in candidates {
        let Ok((other_pos, other_dims, other_rot, other_scale, other_boundary)) = others.get(entity)
        else {
            continue;
        };
        let Ok((mut collectible, mut other_actions)) = collectibles.get_mut(entity) else {
            continue;
        };
        if collectible.collected {
            continue;
        }
        let other_pose = Pose::new(other_pos, other_dims, other_rot, other_scale);
        let pose = Pose::new(&position, dimensions, rotation, scale);
        if !boundary.overlaps(&pose, other_boundary, &other_pose) {
            continue;
        }

        collectible.collected = true;
        other_actions.clear();
        other_actions
            .run(Action::fade_out(config.fade_out))
            .after(Action::Remove);
        stats.collected += 1;
        debug!("Collected {:?}", entity);

        let center = other_pos.pos + other_dims.size() * 0.5;
        match catalog::effect_bundle(&store, center) {
            Ok(bundle) => {
                let effect = commands.spawn(bundle).id();
                index.insert(EntityKind::Effect, effect);
                stats.effects_spawned += 1;
            }
            Err(e) => error!("Could not spawn collection effect: {}", e),
        }
    }

    // hazard
    if player.alive {
        let pose = Pose::new(&position, dimensions, rotation, scale);
        let touched = index.entities(EntityKind::Hazard).iter().any(|&entity| {
            others
                .get(entity)
                .is_ok_and(|(p, d, r, s, b)| boundary.overlaps(&pose, b, &Pose::new(p, d, r, s)))
        });
        if touched && player.die() {
            actions.clear();
            actions.run(Action::fade_out(config.fade_out));
            info!("Player hit a hazard");
        }
    }

    // solid
    for &entity in index.entities(EntityKind::Obstacle) {
        let Ok((p, d, r, s, b)) = others.get(entity) else {
            continue;
        };
        let pose = Pose::new(&position, dimensions, rotation, scale);
        if let Some(direction) =
            boundary.prevent_overlap(&mut position, &pose, b, &Pose::new(p, d, r, s))
        {
            debug!("Pushed out of {:?} towards {:?}", entity, direction);
        }
    }
}
