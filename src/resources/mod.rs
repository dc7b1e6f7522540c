//! ECS resources.
//!
//! World-wide state shared by systems.
//!
//! - [`animationstore`] – animation definitions keyed by name
//! - [`camera2d`] – camera center and viewport
//! - [`gameconfig`] – INI-backed configuration
//! - [`gamestate`] – current scene and pending transition
//! - [`input`] – keyboard snapshot and the host keyboard trait
//! - [`kindindex`] – live entities by kind
//! - [`levellayout`] – spawn list a level starts with
//! - [`levelstate`] – play flag, outcome and terminal rules
//! - [`levelstatus`] – status readout and level counters
//! - [`screensize`] – logical viewport size
//! - [`spawnqueue`] – pending spawn requests
//! - [`worldbounds`] – the playable rectangle
//! - [`worldtime`] – simulation clock

pub mod animationstore;
pub mod camera2d;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod kindindex;
pub mod levellayout;
pub mod levelstate;
pub mod levelstatus;
pub mod screensize;
pub mod spawnqueue;
pub mod worldbounds;
pub mod worldtime;
