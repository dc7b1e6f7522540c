//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world. Components define data such as position, size, motion,
//! collision shape, animation and timed actions.
//!
//! Submodules overview:
//! - [`actions`] – timed fade/delay/rotate/remove actions and easing curves
//! - [`animation`] – playback state for animations in the store
//! - [`banner`] – end-of-level message tag
//! - [`boundary`] – collision polygon re-projected from the current pose
//! - [`boundtoworld`] – marker for entities clamped to the world bounds
//! - [`cameratarget`] – marker for the entity the camera follows
//! - [`collectible`] – collectible state
//! - [`dimensions`] – size and rotation/scale pivot
//! - [`facemotion`] – marker for entities that face their motion direction
//! - [`kind`] – entity kind tag
//! - [`layer`] – world or UI presentation layer
//! - [`mapposition`] – world-space position (minimum corner) of an entity
//! - [`player`] – the keyboard-driven entity
//! - [`rigidbody`] – kinematic body with acceleration, deceleration and speed cap
//! - [`rotation`] – rotation angle in degrees
//! - [`scale`] – 2D scale factor
//! - [`tint`] – color modulation and opacity
//! - [`transient`] – marker for entities removed when their animation ends
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod actions;
pub mod animation;
pub mod banner;
pub mod boundary;
pub mod boundtoworld;
pub mod cameratarget;
pub mod collectible;
pub mod dimensions;
pub mod facemotion;
pub mod kind;
pub mod layer;
pub mod mapposition;
pub mod player;
pub mod rigidbody;
pub mod rotation;
pub mod scale;
pub mod tint;
pub mod transient;
pub mod zindex;
