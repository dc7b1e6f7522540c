//! Timed visual actions attached to an entity.
//!
//! An [`Actions`] component is a tiny per-entity scheduler. Actions started
//! with [`Actions::run`] play in parallel; actions added with
//! [`Actions::after`] wait in a queue until every *finite* running action has
//! completed, then start one at a time. Rotations that repeat forever never
//! block the queue.
//!
//! The [`actions_system`](crate::systems::actions::actions_system) advances
//! the component once per frame and despawns the entity when a
//! [`Action::Remove`] completes.

use std::collections::VecDeque;

use bevy_ecs::prelude::Component;

use crate::components::rotation::Rotation;
use crate::components::tint::Tint;

/// A single timed effect.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Interpolate the tint opacity. `from` is captured on the first step
    /// when `None`.
    Fade {
        from: Option<f32>,
        to: f32,
        duration: f32,
        elapsed: f32,
    },
    /// Do nothing for `duration` seconds.
    Delay { duration: f32, elapsed: f32 },
    /// Rotate by `degrees` over `duration` seconds, or keep rotating at that
    /// rate forever when `forever` is set.
    RotateBy {
        degrees: f32,
        duration: f32,
        elapsed: f32,
        forever: bool,
    },
    /// Ask for the owning entity to be despawned.
    Remove,
}

/// What a single step of an action produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepResult {
    pub finished: bool,
    pub remove: bool,
}

impl Action {
    pub fn fade_to(to: f32, duration: f32) -> Self {
        Action::Fade {
            from: None,
            to,
            duration,
            elapsed: 0.0,
        }
    }

    pub fn fade_in(duration: f32) -> Self {
        Self::fade_to(1.0, duration)
    }

    pub fn fade_out(duration: f32) -> Self {
        Self::fade_to(0.0, duration)
    }

    pub fn delay(duration: f32) -> Self {
        Action::Delay {
            duration,
            elapsed: 0.0,
        }
    }

    pub fn rotate_by(degrees: f32, duration: f32) -> Self {
        Action::RotateBy {
            degrees,
            duration,
            elapsed: 0.0,
            forever: false,
        }
    }

    /// Rotate `degrees` every `duration` seconds, indefinitely.
    pub fn rotate_forever(degrees: f32, duration: f32) -> Self {
        Action::RotateBy {
            degrees,
            duration,
            elapsed: 0.0,
            forever: true,
        }
    }

    /// True unless this action never completes on its own.
    pub fn is_finite(&self) -> bool {
        !matches!(self, Action::RotateBy { forever: true, .. })
    }

    /// Advance by `dt` seconds, applying the effect to `tint` and `rotation`.
    pub fn step(&mut self, dt: f32, tint: &mut Tint, rotation: &mut Rotation) -> StepResult {
        match self {
            Action::Fade {
                from,
                to,
                duration,
                elapsed,
            } => {
                let start = *from.get_or_insert(tint.opacity());
                *elapsed += dt;
                let t = if *duration <= 0.0 {
                    1.0
                } else {
                    (*elapsed / *duration).min(1.0)
                };
                tint.set_opacity(start + (*to - start) * t);
                StepResult {
                    finished: t >= 1.0,
                    remove: false,
                }
            }
            Action::Delay { duration, elapsed } => {
                *elapsed += dt;
                StepResult {
                    finished: *elapsed >= *duration,
                    remove: false,
                }
            }
            Action::RotateBy {
                degrees,
                duration,
                elapsed,
                forever,
            } => {
                if *duration <= 0.0 {
                    rotation.degrees += *degrees;
                    return StepResult {
                        finished: !*forever,
                        remove: false,
                    };
                }
                let step = if *forever {
                    dt
                } else {
                    dt.min((*duration - *elapsed).max(0.0))
                };
                *elapsed += step;
                rotation.degrees += *degrees * step / *duration;
                StepResult {
                    finished: !*forever && *elapsed >= *duration,
                    remove: false,
                }
            }
            Action::Remove => StepResult {
                finished: true,
                remove: true,
            },
        }
    }
}

#[derive(Component, Clone, Debug, Default, PartialEq)]
pub struct Actions {
    pub running: Vec<Action>,
    pub queued: VecDeque<Action>,
}

impl Actions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `action` immediately, alongside anything already running.
    pub fn run(&mut self, action: Action) -> &mut Self {
        self.running.push(action);
        self
    }

    /// Start `action` once all finite actions ahead of it have finished.
    pub fn after(&mut self, action: Action) -> &mut Self {
        self.queued.push_back(action);
        self
    }

    /// Drop every running and queued action.
    pub fn clear(&mut self) {
        self.running.clear();
        self.queued.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.running.is_empty() && self.queued.is_empty()
    }

    fn blocking(&self) -> bool {
        self.running.iter().any(Action::is_finite)
    }

    /// Advance all actions by `dt`. Returns true if a `Remove` completed.
    pub fn tick(&mut self, dt: f32, tint: &mut Tint, rotation: &mut Rotation) -> bool {
        while !self.blocking() {
            match self.queued.pop_front() {
                Some(next) => self.running.push(next),
                None => break,
            }
        }

        let mut remove = false;
        self.running.retain_mut(|action| {
            let result = action.step(dt, tint, rotation);
            remove |= result.remove;
            !result.finished
        });
        remove
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;
    const DT: f32 = 0.125;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn run_for(actions: &mut Actions, tint: &mut Tint, rot: &mut Rotation, secs: f32) -> bool {
        let steps = (secs / DT).round() as usize;
        let mut removed = false;
        for _ in 0..steps {
            removed |= actions.tick(DT, tint, rot);
        }
        removed
    }

    // ==================== SINGLE ACTIONS ====================

    #[test]
    fn test_fade_out_reaches_zero() {
        let mut tint = Tint::default();
        let mut rot = Rotation::default();
        let mut actions = Actions::new();
        actions.run(Action::fade_out(1.0));
        run_for(&mut actions, &mut tint, &mut rot, 0.5);
        assert!(approx_eq(tint.opacity(), 0.5));
        run_for(&mut actions, &mut tint, &mut rot, 0.5);
        assert!(approx_eq(tint.opacity(), 0.0));
        assert!(actions.is_empty());
    }

    #[test]
    fn test_fade_captures_current_opacity() {
        let mut tint = Tint::with_opacity(0.5);
        let mut rot = Rotation::default();
        let mut fade = Action::fade_in(1.0);
        fade.step(0.5, &mut tint, &mut rot);
        assert!(approx_eq(tint.opacity(), 0.75));
    }

    #[test]
    fn test_rotate_forever_never_finishes() {
        let mut tint = Tint::default();
        let mut rot = Rotation::default();
        let mut actions = Actions::new();
        actions.run(Action::rotate_forever(30.0, 1.0));
        run_for(&mut actions, &mut tint, &mut rot, 3.0);
        assert!(approx_eq(rot.degrees, 90.0));
        assert_eq!(actions.running.len(), 1);
    }

    #[test]
    fn test_rotate_by_stops_exactly() {
        let mut tint = Tint::default();
        let mut rot = Rotation::default();
        let mut action = Action::rotate_by(45.0, 0.25);
        let mut finished = false;
        for _ in 0..5 {
            finished = action.step(DT, &mut tint, &mut rot).finished;
        }
        assert!(finished);
        assert!(approx_eq(rot.degrees, 45.0));
    }

    // ==================== SEQUENCING ====================

    #[test]
    fn test_after_waits_for_finite_actions() {
        let mut tint = Tint::with_opacity(0.0);
        let mut rot = Rotation::default();
        let mut actions = Actions::new();
        actions.run(Action::delay(1.0)).after(Action::fade_in(1.0));
        run_for(&mut actions, &mut tint, &mut rot, 1.0);
        assert!(approx_eq(tint.opacity(), 0.0));
        run_for(&mut actions, &mut tint, &mut rot, 1.1);
        assert!(approx_eq(tint.opacity(), 1.0));
    }

    #[test]
    fn test_forever_rotation_does_not_block_queue() {
        let mut tint = Tint::default();
        let mut rot = Rotation::default();
        let mut actions = Actions::new();
        actions
            .run(Action::rotate_forever(30.0, 1.0))
            .after(Action::Remove);
        assert!(actions.tick(DT, &mut tint, &mut rot));
    }

    #[test]
    fn test_fade_then_remove() {
        let mut tint = Tint::default();
        let mut rot = Rotation::default();
        let mut actions = Actions::new();
        actions.run(Action::fade_out(1.0)).after(Action::Remove);
        assert!(!run_for(&mut actions, &mut tint, &mut rot, 1.0));
        assert!(actions.tick(DT, &mut tint, &mut rot));
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut actions = Actions::new();
        actions.run(Action::delay(1.0)).after(Action::Remove);
        actions.clear();
        assert!(actions.is_empty());
    }
}
