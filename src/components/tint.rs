//! Color tint component for rendering sprites.
//!
//! The [`Tint`] component modulates an entity's sprite when it is drawn. The
//! alpha channel doubles as the entity's opacity, which is what fade actions
//! animate (see [`crate::components::actions`]).

use bevy_ecs::prelude::Component;

/// RGBA color modulation, each channel in `0.0..=1.0`.
#[derive(Component, Clone, Debug, Copy, PartialEq)]
pub struct Tint {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Tint {
    /// Create a new Tint with the specified RGBA values (clamped to `0.0..=1.0`).
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// White with the given opacity.
    pub fn with_opacity(opacity: f32) -> Self {
        Self::new(1.0, 1.0, 1.0, opacity)
    }

    pub fn opacity(&self) -> f32 {
        self.a
    }

    /// Set opacity from 0 (transparent) to 1 (opaque).
    pub fn set_opacity(&mut self, opacity: f32) {
        self.a = opacity.clamp(0.0, 1.0);
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_opaque_white() {
        let t = Tint::default();
        assert_eq!(t, Tint::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(t.opacity(), 1.0);
    }

    #[test]
    fn test_set_opacity_clamps() {
        let mut t = Tint::default();
        t.set_opacity(1.5);
        assert_eq!(t.a, 1.0);
        t.set_opacity(-0.5);
        assert_eq!(t.a, 0.0);
        t.set_opacity(0.25);
        assert_eq!(t.opacity(), 0.25);
    }
}
