//! Starfish Collector library.
//!
//! A small top-down collecting game on an ECS: a turtle swims around a
//! bounded sea picking up starfish, bumping into rocks and avoiding a shark.
//! The crate exposes the components, resources and systems for integration
//! tests and for hosts that bring their own renderer.
//!
//! - [`geometry`] – convex polygons, SAT overlap and minimum translation
//! - [`components`] – per-entity data (kinematics, collision, animation, actions)
//! - [`resources`] – world-wide state (config, bounds, camera, level state)
//! - [`systems`] – per-frame logic
//! - [`catalog`] – entity kinds and their bundles
//! - [`game`] – scene setup and teardown
//! - [`app`] – the frame driver

pub mod app;
pub mod catalog;
pub mod components;
pub mod error;
pub mod game;
pub mod geometry;
pub mod resources;
pub mod systems;
