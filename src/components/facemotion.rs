//! Face-motion marker.
//!
//! Entities with [`FaceMotion`] turn to their direction of travel while
//! moving and pause their animation while standing still. A stationary
//! entity keeps whatever rotation it had.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct FaceMotion;
