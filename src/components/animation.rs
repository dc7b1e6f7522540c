//! Per-entity animation playback state.
//!
//! The frames themselves live in the
//! [`AnimationStore`](crate::resources::animationstore::AnimationStore); the
//! component only remembers which animation is playing and for how long.
use bevy_ecs::prelude::Component;

#[derive(Debug, Clone, Component, PartialEq)]
pub struct Animation {
    pub animation_key: String,
    pub elapsed_time: f32,
    /// While paused the elapsed time does not advance.
    pub paused: bool,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            elapsed_time: 0.0,
            paused: false,
        }
    }

    /// Advance the playback clock unless paused.
    pub fn advance(&mut self, dt: f32) {
        if !self.paused {
            self.elapsed_time += dt;
        }
    }

    /// Switch to another animation and restart it.
    pub fn play(&mut self, animation_key: impl Into<String>) {
        self.animation_key = animation_key.into();
        self.elapsed_time = 0.0;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}
