//! Kinematic body component with input-driven acceleration.
//!
//! The [`RigidBody`] component stores a velocity, an acceleration accumulator
//! and three tuning values:
//! - `acceleration` – magnitude of each [`RigidBody::accelerate_at_angle`] push
//! - `max_speed` – speed is clamped to `[0, max_speed]` after every step
//! - `deceleration` – speed lost per second on frames without acceleration
//!
//! Accelerations requested during a frame are summed and consumed by
//! [`RigidBody::apply_physics`], which is called once per frame by the
//! [`movement`](crate::systems::movement::movement) system.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Default speed limit for bodies that never set one.
pub const DEFAULT_MAX_SPEED: f32 = 1000.0;

/// Kinematic body storing velocity and a per-frame acceleration accumulator.
///
/// # Example
/// ```
/// use starfish_collector::components::rigidbody::RigidBody;
///
/// let mut rb = RigidBody::with_physics(40.0, 200.0, 40.0);
/// rb.accelerate_at_angle(0.0);
/// rb.accelerate_at_angle(90.0);
/// let step = rb.apply_physics(1.0 / 60.0);
/// assert!(step.x > 0.0 && step.y > 0.0);
/// ```
#[derive(Component, Clone, Debug, PartialEq)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vec2,
    /// Acceleration requested this frame, reset by `apply_physics`.
    pub accumulated: Vec2,
    /// Length of each `accelerate_at_angle` contribution (units/s²).
    pub acceleration: f32,
    /// Upper bound for speed (units/s).
    pub max_speed: f32,
    /// Speed lost per second while no acceleration is applied (units/s²).
    pub deceleration: f32,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody at rest with no acceleration and the default speed limit.
    pub fn new() -> Self {
        Self::with_physics(0.0, DEFAULT_MAX_SPEED, 0.0)
    }

    /// Create a RigidBody with physics parameters configured.
    pub fn with_physics(acceleration: f32, max_speed: f32, deceleration: f32) -> Self {
        Self {
            velocity: Vec2::ZERO,
            accumulated: Vec2::ZERO,
            acceleration,
            max_speed,
            deceleration,
        }
    }

    /// Add an `acceleration`-long vector pointing at `angle` degrees to this
    /// frame's accumulator. Multiple calls per frame sum up.
    pub fn accelerate_at_angle(&mut self, angle: f32) {
        let (sin, cos) = angle.to_radians().sin_cos();
        self.accumulated += Vec2::new(cos, sin) * self.acceleration;
    }

    /// Accelerate in the direction the entity is facing.
    pub fn accelerate_forward(&mut self, rotation_degrees: f32) {
        self.accelerate_at_angle(rotation_degrees);
    }

    /// Integrate one frame and return the position delta.
    ///
    /// Order: apply accumulated acceleration, decelerate only if nothing was
    /// accumulated, clamp speed to `[0, max_speed]`, compute displacement,
    /// reset the accumulator.
    pub fn apply_physics(&mut self, dt: f32) -> Vec2 {
        self.velocity += self.accumulated * dt;

        let mut speed = self.speed();
        if self.accumulated.length() == 0.0 {
            speed -= self.deceleration * dt;
        }
        speed = speed.clamp(0.0, self.max_speed.max(0.0));
        self.set_speed(speed);

        self.accumulated = Vec2::ZERO;
        self.velocity * dt
    }

    /// Current speed (velocity magnitude).
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Set speed while maintaining the current direction of velocity.
    ///
    /// A zero velocity has no direction; in that case the new velocity points
    /// at 0 degrees.
    pub fn set_speed(&mut self, new_speed: f32) {
        if self.velocity.length() == 0.0 {
            self.velocity = Vec2::new(new_speed, 0.0);
        } else {
            self.velocity = self.velocity.normalize() * new_speed;
        }
    }

    pub fn is_moving(&self) -> bool {
        self.speed() > 0.0
    }

    /// Direction of motion in degrees, in `[0, 360)`.
    pub fn motion_angle(&self) -> f32 {
        let angle = self.velocity.y.atan2(self.velocity.x).to_degrees();
        if angle < 0.0 { angle + 360.0 } else { angle }
    }

    /// Point the velocity at `angle` degrees, keeping its magnitude.
    /// Has no effect while the body is at rest.
    pub fn set_motion_angle(&mut self, angle: f32) {
        let speed = self.speed();
        let (sin, cos) = angle.to_radians().sin_cos();
        self.velocity = Vec2::new(cos, sin) * speed;
    }

    /// Set the velocity of the RigidBody.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }
}
