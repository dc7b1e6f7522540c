//! Status readout and per-level counters.

use bevy_ecs::prelude::Resource;

/// Human-readable status lines, rebuilt every level frame.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelStatus {
    pub lines: Vec<String>,
}

impl LevelStatus {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Running totals for the current level.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelStats {
    pub effects_spawned: usize,
    pub collected: usize,
}
