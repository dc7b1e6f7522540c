//! Self-removing entity marker.
//!
//! Entities tagged [`Transient`] are despawned by the
//! [`animation`](crate::systems::animation::animation) system as soon as their
//! non-looping animation reports finished.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Transient;
