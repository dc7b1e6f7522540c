//! Entity catalog.
//!
//! Asset keys, animation registration and the component bundles for every
//! [`EntityKind`]. A kind is a configuration of the shared components, not a
//! separate behaviour: physics, collision and actions are all the same
//! systems, switched on by which components the bundle includes.
//!
//! | Kind        | Animation            | Boundary | Extras                                   |
//! |-------------|----------------------|----------|------------------------------------------|
//! | Player      | 6-frame swim loop    | 8-gon    | input, physics, face motion, camera      |
//! | Collectible | still                | 8-gon    | rotates 30° per second forever           |
//! | Obstacle    | still                | 8-gon    | solid                                    |
//! | Hazard      | still                | 8-gon    | kills the player                         |
//! | Effect      | 10-frame sheet, once | none     | 25 % opacity, removed when finished      |
//! | Banner      | still                | none     | UI layer, fades in after a delay         |

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::actions::{Action, Actions};
use crate::components::animation::Animation;
use crate::components::banner::Banner;
use crate::components::boundary::BoundaryPolygon;
use crate::components::boundtoworld::BoundToWorld;
use crate::components::cameratarget::CameraTarget;
use crate::components::collectible::Collectible;
use crate::components::dimensions::Dimensions;
use crate::components::facemotion::FaceMotion;
use crate::components::kind::EntityKind;
use crate::components::layer::Layer;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::tint::Tint;
use crate::components::transient::Transient;
use crate::components::zindex::ZIndex;
use crate::error::SpawnError;
use crate::resources::animationstore::{AnimationResource, AnimationStore};
use crate::resources::gameconfig::GameConfig;

pub const ASSET_ROOT: &str = "starfish/";

pub const WATER: &str = "water";
pub const WATER_BORDER: &str = "water-border";
pub const TITLE: &str = "starfish-collector";
pub const MSG_START: &str = "message-start";
pub const MSG_WIN: &str = "you-win";
pub const MSG_LOSE: &str = "game-over";
pub const TURTLE: &str = "turtle";
pub const STARFISH: &str = "starfish";
pub const ROCK: &str = "rock";
pub const SHARK: &str = "sharky";
pub const WHIRLPOOL: &str = "whirlpool";

/// Sides of the polygon approximating the round sprites.
pub const ROUND_SIDES: usize = 8;
/// Degrees a collectible turns every second.
pub const COLLECTIBLE_SPIN: f32 = 30.0;
pub const EFFECT_OPACITY: f32 = 0.25;

const ACTOR_SIZE: f32 = 64.0;
const TURTLE_FRAMES: usize = 6;
const TURTLE_FRAME_DURATION: f32 = 0.1;
const WHIRLPOOL_ROWS: usize = 2;
const WHIRLPOOL_COLS: usize = 5;
const WHIRLPOOL_FRAME_DURATION: f32 = 0.1;

const Z_SCENERY: i32 = 0;
const Z_PROP: i32 = 1;
const Z_PLAYER: i32 = 2;
const Z_EFFECT: i32 = 3;
const Z_BANNER: i32 = 10;

fn asset(name: &str) -> String {
    format!("{}{}.png", ASSET_ROOT, name)
}

fn background(name: &str) -> String {
    format!("{}{}.jpg", ASSET_ROOT, name)
}

/// Register every animation the game uses.
pub fn register_animations(store: &mut AnimationStore) {
    let turtle_files: Vec<String> = (1..=TURTLE_FRAMES)
        .map(|i| asset(&format!("{}-{}", TURTLE, i)))
        .collect();
    store.insert(
        TURTLE,
        AnimationResource::from_files(
            &turtle_files,
            ACTOR_SIZE,
            ACTOR_SIZE,
            TURTLE_FRAME_DURATION,
            true,
        ),
    );
    for name in [STARFISH, ROCK, SHARK] {
        store.insert(name, AnimationResource::single(&asset(name), ACTOR_SIZE, ACTOR_SIZE));
    }
    store.insert(
        WHIRLPOOL,
        AnimationResource::from_sheet(
            &asset(WHIRLPOOL),
            ACTOR_SIZE * WHIRLPOOL_COLS as f32,
            ACTOR_SIZE * WHIRLPOOL_ROWS as f32,
            WHIRLPOOL_ROWS,
            WHIRLPOOL_COLS,
            WHIRLPOOL_FRAME_DURATION,
            false,
        ),
    );
    store.insert(WATER, AnimationResource::single(&background(WATER), 800.0, 600.0));
    store.insert(
        WATER_BORDER,
        AnimationResource::single(&background(WATER_BORDER), 1200.0, 900.0),
    );
    store.insert(TITLE, AnimationResource::single(&asset(TITLE), 500.0, 100.0));
    store.insert(MSG_START, AnimationResource::single(&asset(MSG_START), 400.0, 75.0));
    store.insert(MSG_WIN, AnimationResource::single(&asset(MSG_WIN), 400.0, 100.0));
    store.insert(MSG_LOSE, AnimationResource::single(&asset(MSG_LOSE), 400.0, 100.0));
}

/// Components every catalog entity carries.
#[derive(Bundle, Clone, Debug)]
pub struct ActorBundle {
    pub kind: EntityKind,
    pub position: MapPosition,
    pub dimensions: Dimensions,
    pub rotation: Rotation,
    pub scale: Scale,
    pub tint: Tint,
    pub animation: Animation,
    pub zindex: ZIndex,
    pub layer: Layer,
}

impl ActorBundle {
    /// Actor at `position` sized after the first frame of `animation_key`.
    pub fn new(
        store: &AnimationStore,
        kind: EntityKind,
        animation_key: &str,
        position: Vec2,
    ) -> Result<Self, SpawnError> {
        let (width, height) = store
            .get(animation_key)
            .and_then(AnimationResource::frame_size)
            .ok_or_else(|| SpawnError::MissingAnimation(animation_key.to_string()))?;
        Ok(Self {
            kind,
            position: MapPosition::new(position.x, position.y),
            dimensions: Dimensions::new(width, height),
            rotation: Rotation::default(),
            scale: Scale::default(),
            tint: Tint::default(),
            animation: Animation::new(animation_key),
            zindex: ZIndex(Z_PROP),
            layer: Layer::World,
        })
    }

    pub fn with_z(mut self, z: i32) -> Self {
        self.zindex = ZIndex(z);
        self
    }

    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.tint.set_opacity(opacity);
        self
    }

    /// Stretch to `width × height`, keeping the texture-derived pivot.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.dimensions.set_size(width, height);
        self
    }

    /// Place so its center sits at `center`.
    pub fn centered_at(mut self, center: Vec2) -> Self {
        self.position.center_at(center, &self.dimensions);
        self
    }

    pub fn moved_by(mut self, delta: Vec2) -> Self {
        self.position.translate(delta);
        self
    }

    fn round_boundary(&self) -> BoundaryPolygon {
        BoundaryPolygon::regular(ROUND_SIDES, &self.dimensions)
    }
}

pub fn player_bundle(
    store: &AnimationStore,
    config: &GameConfig,
    position: Vec2,
) -> Result<impl Bundle + use<>, SpawnError> {
    let actor = ActorBundle::new(store, EntityKind::Player, TURTLE, position)?.with_z(Z_PLAYER);
    let boundary = actor.round_boundary();
    Ok((
        actor,
        boundary,
        RigidBody::with_physics(
            config.player_acceleration,
            config.player_max_speed,
            config.player_deceleration,
        ),
        Player::default(),
        FaceMotion,
        BoundToWorld,
        CameraTarget,
        Actions::new(),
    ))
}

pub fn collectible_bundle(
    store: &AnimationStore,
    position: Vec2,
) -> Result<impl Bundle + use<>, SpawnError> {
    let actor = ActorBundle::new(store, EntityKind::Collectible, STARFISH, position)?;
    let boundary = actor.round_boundary();
    let mut actions = Actions::new();
    actions.run(Action::rotate_forever(COLLECTIBLE_SPIN, 1.0));
    Ok((actor, boundary, Collectible::default(), actions))
}

pub fn obstacle_bundle(
    store: &AnimationStore,
    position: Vec2,
) -> Result<impl Bundle + use<>, SpawnError> {
    let actor = ActorBundle::new(store, EntityKind::Obstacle, ROCK, position)?;
    let boundary = actor.round_boundary();
    Ok((actor, boundary))
}

pub fn hazard_bundle(
    store: &AnimationStore,
    position: Vec2,
) -> Result<impl Bundle + use<>, SpawnError> {
    let actor = ActorBundle::new(store, EntityKind::Hazard, SHARK, position)?;
    let boundary = actor.round_boundary();
    Ok((actor, boundary))
}

/// Collection puff centered on `center`.
pub fn effect_bundle(
    store: &AnimationStore,
    center: Vec2,
) -> Result<impl Bundle + use<>, SpawnError> {
    let actor = ActorBundle::new(store, EntityKind::Effect, WHIRLPOOL, Vec2::ZERO)?
        .with_z(Z_EFFECT)
        .with_opacity(EFFECT_OPACITY)
        .centered_at(center);
    Ok((actor, Transient))
}

/// End-of-level message, invisible until it fades in.
pub fn banner_bundle(
    store: &AnimationStore,
    config: &GameConfig,
    name: &'static str,
) -> Result<impl Bundle + use<>, SpawnError> {
    let center = Vec2::new(config.viewport_width, config.viewport_height) * 0.5;
    let actor = ActorBundle::new(store, EntityKind::Banner, name, Vec2::ZERO)?
        .with_layer(Layer::Ui)
        .with_z(Z_BANNER)
        .with_opacity(0.0)
        .centered_at(center);
    let mut actions = Actions::new();
    actions
        .run(Action::delay(config.banner_delay))
        .after(Action::fade_in(config.banner_fade));
    Ok((actor, actions, Banner { name }))
}

/// Background or decoration image.
pub fn scenery(
    store: &AnimationStore,
    key: &str,
    position: Vec2,
) -> Result<ActorBundle, SpawnError> {
    Ok(ActorBundle::new(store, EntityKind::Scenery, key, position)?.with_z(Z_SCENERY))
}
