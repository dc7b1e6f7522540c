//! Game systems.
//!
//! This module groups the ECS systems that advance the simulation one frame,
//! plus the exclusive helpers the frame driver calls around the schedule.
//!
//! Submodules overview
//! - [`actions`] – tick timed actions and despawn on `Remove`
//! - [`animation`] – advance animations and drop finished transients
//! - [`boundtoworld`] – clamp entities to the world bounds
//! - [`camera`] – follow the camera target
//! - [`facing`] – rotate to the motion angle, pause animation when idle
//! - [`gamestate`] – run conditions for scenes and play
//! - [`input`] – copy host keyboard state into [`crate::resources::input::InputState`]
//! - [`interaction`] – collect, hazard and solid rules for the player
//! - [`menu`] – title screen controller
//! - [`movement`] – integrate rigid bodies
//! - [`outcome`] – win/lose detection and banners
//! - [`playerinput`] – arrow keys to acceleration
//! - [`render`] – build the ordered draw list
//! - [`spawn`] – drain the spawn queue through the catalog
//! - [`status`] – refresh the status readout
//! - [`time`] – update simulation time and delta

pub mod actions;
pub mod animation;
pub mod boundtoworld;
pub mod camera;
pub mod facing;
pub mod gamestate;
pub mod input;
pub mod interaction;
pub mod menu;
pub mod movement;
pub mod outcome;
pub mod playerinput;
pub mod render;
pub mod spawn;
pub mod status;
pub mod time;
