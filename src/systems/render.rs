//! Draw list construction.
//!
//! The crate does not draw anything itself. [`draw_list`] walks the world
//! and produces the ordered [`DrawCommand`]s a host renderer needs: world
//! layer first, then UI, each sorted by [`ZIndex`]. World-layer entities
//! outside the camera view are culled. Entities whose animation has no frame
//! to show are skipped.

use std::sync::Arc;

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::warn;

use crate::components::animation::Animation;
use crate::components::dimensions::Dimensions;
use crate::components::layer::Layer;
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::tint::Tint;
use crate::components::zindex::ZIndex;
use crate::geometry::Rect;
use crate::resources::animationstore::AnimationStore;
use crate::resources::camera2d::Camera2DRes;

#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub entity: Entity,
    pub layer: Layer,
    pub z: ZIndex,
    pub tex_key: Arc<str>,
    /// Source rectangle inside the texture.
    pub region: Rect,
    /// Minimum corner, in world units for the world layer and screen units for UI.
    pub position: Vec2,
    pub origin: Vec2,
    pub size: Vec2,
    pub scale: Vec2,
    pub rotation: f32,
    pub tint: Tint,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawList {
    /// World point at the center of the screen.
    pub camera: Vec2,
    pub commands: Vec<DrawCommand>,
}

pub fn draw_list(world: &mut World) -> DrawList {
    let camera = world.get_resource::<Camera2DRes>().copied();
    let view = camera.map(|c| c.view_rect());

    let mut commands: Vec<DrawCommand> = {
        let mut q = world.query::<(
            Entity,
            &Animation,
            &MapPosition,
            &Dimensions,
            Option<&Rotation>,
            Option<&Scale>,
            Option<&Tint>,
            Option<&ZIndex>,
            Option<&Layer>,
        )>();
        let Some(store) = world.get_resource::<AnimationStore>() else {
            return DrawList::default();
        };
        q.iter(world)
            .filter_map(|(entity, anim, pos, dims, rot, scale, tint, z, layer)| {
                let Some(frame) = store
                    .get(&anim.animation_key)
                    .and_then(|a| a.key_frame(anim.elapsed_time))
                else {
                    warn!("No frame for '{}' on {:?}", anim.animation_key, entity);
                    return None;
                };
                let layer = layer.copied().unwrap_or_default();
                let bounds = Rect::new(pos.pos.x, pos.pos.y, dims.width, dims.height);
                if layer == Layer::World && view.is_some_and(|v| !v.overlaps(&bounds)) {
                    return None;
                }
                Some(DrawCommand {
                    entity,
                    layer,
                    z: z.copied().unwrap_or_default(),
                    tex_key: Arc::clone(&frame.tex_key),
                    region: frame.region,
                    position: pos.pos,
                    origin: dims.origin,
                    size: dims.size(),
                    scale: scale.map(|s| s.scale).unwrap_or(Vec2::ONE),
                    rotation: rot.map(|r| r.degrees).unwrap_or(0.0),
                    tint: tint.copied().unwrap_or_default(),
                })
            })
            .collect()
    };
    commands.sort_by_key(|c| (c.layer, c.z));

    DrawList {
        camera: camera.map(|c| c.position).unwrap_or(Vec2::ZERO),
        commands,
    }
}
