//! Terminal-condition check.
//!
//! Runs only while the level is in play. Lose holds when the player is dead,
//! win when no collectible is left in the world (fading ones still count).
//! The configured [`TerminalPriority`](crate::resources::levelstate::TerminalPriority)
//! decides which wins a tie. On either outcome play stops and the matching
//! banner is spawned on the UI layer.

use bevy_ecs::prelude::*;
use log::{error, info};

use crate::catalog;
use crate::components::kind::EntityKind;
use crate::components::player::Player;
use crate::resources::animationstore::AnimationStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::kindindex::KindIndex;
use crate::resources::levelstate::{LevelState, Outcome, evaluate_outcome};

pub fn outcome(
    players: Query<&Player>,
    mut level: ResMut<LevelState>,
    mut index: ResMut<KindIndex>,
    store: Res<AnimationStore>,
    config: Res<GameConfig>,
    mut commands: Commands,
) {
    let alive = index
        .first(EntityKind::Player)
        .and_then(|entity| players.get(entity).ok())
        .is_none_or(|player| player.alive);
    let remaining = index.count(EntityKind::Collectible);

    let Some(result) = evaluate_outcome(level.play, alive, remaining, config.terminal_priority)
    else {
        return;
    };
    level.finish(result);

    let name = match result {
        Outcome::Won => catalog::MSG_WIN,
        Outcome::Lost => catalog::MSG_LOSE,
    };
    info!("Level finished: {:?}", result);
    match catalog::banner_bundle(&store, &config, name) {
        Ok(bundle) => {
            let banner = commands.spawn(bundle).id();
            index.insert(EntityKind::Banner, banner);
        }
        Err(e) => error!("Could not spawn banner: {}", e),
    }
}
