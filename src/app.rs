//! Frame driver.
//!
//! [`App`] owns the ECS [`World`] and the per-frame [`Schedule`]. The host
//! calls [`App::update`] once per rendered frame with the frame delta and
//! its keyboard. One frame:
//!
//! 1. advance [`WorldTime`]
//! 2. snapshot the keyboard into [`InputState`]
//! 3. apply a pending scene change
//! 4. in a level, drain the spawn queue
//! 5. run the schedule: animation → actions → menu controller → player
//!    input → physics → face motion → world clamp → camera → interactions →
//!    outcome → status

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::info;

use crate::catalog;
use crate::components::kind::EntityKind;
use crate::error::SpawnError;
use crate::game;
use crate::resources::animationstore::AnimationStore;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::{InputState, KeyboardSource};
use crate::resources::kindindex::KindIndex;
use crate::resources::levellayout::LevelLayout;
use crate::resources::levelstate::LevelState;
use crate::resources::levelstatus::{LevelStats, LevelStatus};
use crate::resources::screensize::ScreenSize;
use crate::resources::spawnqueue::SpawnQueue;
use crate::resources::worldbounds::WorldBounds;
use crate::resources::worldtime::WorldTime;
use crate::systems::actions::actions_system;
use crate::systems::animation::animation;
use crate::systems::boundtoworld::bound_to_world;
use crate::systems::camera::camera_follow;
use crate::systems::facing::face_motion;
use crate::systems::gamestate::{level_is_playing, state_is_level, state_is_menu};
use crate::systems::input::refresh_input;
use crate::systems::interaction::interaction;
use crate::systems::menu::menu_controller;
use crate::systems::movement::movement;
use crate::systems::outcome::outcome;
use crate::systems::playerinput::player_input;
use crate::systems::render::{DrawList, draw_list};
use crate::systems::spawn::drain_spawn_queue;
use crate::systems::status::status;
use crate::systems::time::update_world_time;

pub struct App {
    world: World,
    schedule: Schedule,
}

impl App {
    /// Build the world and request the title screen for the first frame.
    pub fn new(config: GameConfig, layout: LevelLayout) -> Self {
        let mut world = World::new();

        let viewport = Vec2::new(config.viewport_width, config.viewport_height);
        let mut store = AnimationStore::default();
        catalog::register_animations(&mut store);

        world.insert_resource(WorldTime::default());
        world.insert_resource(ScreenSize {
            w: viewport.x,
            h: viewport.y,
        });
        world.insert_resource(Camera2DRes::new(viewport));
        world.insert_resource(WorldBounds::new(viewport.x, viewport.y));
        world.insert_resource(config);
        world.insert_resource(layout);
        world.insert_resource(store);
        world.insert_resource(InputState::default());
        world.insert_resource(GameState::new());
        world.insert_resource(NextGameState::new());
        world.insert_resource(LevelState::default());
        world.insert_resource(LevelStats::default());
        world.insert_resource(LevelStatus::default());
        world.insert_resource(SpawnQueue::default());
        world.insert_resource(KindIndex::default());

        world.resource_mut::<NextGameState>().set(GameStates::Menu);

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                animation,
                actions_system,
                menu_controller.run_if(state_is_menu),
                (player_input, movement, face_motion, bound_to_world, camera_follow)
                    .chain()
                    .run_if(state_is_level),
                (interaction, outcome).chain().run_if(level_is_playing),
                status.run_if(state_is_level),
            )
                .chain(),
        );

        info!("World ready, viewport {}x{}", viewport.x, viewport.y);
        Self { world, schedule }
    }

    /// Advance one frame.
    ///
    /// An error means a spawn request could not be honoured. The world is
    /// then inconsistent and the caller should stop.
    pub fn update(&mut self, dt: f32, keyboard: &dyn KeyboardSource) -> Result<(), SpawnError> {
        update_world_time(&mut self.world, dt);
        refresh_input(&mut self.world, keyboard);
        game::apply_pending_state(&mut self.world)?;

        if self.world.resource::<GameState>().is(GameStates::Level) {
            drain_spawn_queue(&mut self.world)?;
        }

        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
        Ok(())
    }

    /// Ask for a scene change at the start of the next frame.
    pub fn request_state(&mut self, state: GameStates) {
        self.world.resource_mut::<NextGameState>().set(state);
    }

    pub fn state(&self) -> GameStates {
        self.world.resource::<GameState>().get()
    }

    pub fn level(&self) -> LevelState {
        *self.world.resource::<LevelState>()
    }

    /// Queue a spawn for the next level frame.
    pub fn enqueue(&mut self, kind: EntityKind, position: Vec2) {
        self.world.resource_mut::<SpawnQueue>().push(kind, position);
    }

    /// Turn interaction and outcome evaluation on or off.
    pub fn set_play(&mut self, play: bool) {
        self.world.resource_mut::<LevelState>().play = play;
    }

    pub fn stats(&self) -> LevelStats {
        *self.world.resource::<LevelStats>()
    }

    pub fn status(&self) -> &LevelStatus {
        self.world.resource::<LevelStatus>()
    }

    pub fn draw_list(&mut self) -> DrawList {
        draw_list(&mut self.world)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
