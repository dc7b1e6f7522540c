//! Level layout resource.
//!
//! A layout is the list of spawn requests a level starts with. It is read
//! from JSON:
//!
//! ```json
//! { "spawns": [ { "kind": "starfish", "x": 400, "y": 400 },
//!               { "kind": "rock", "x": 200, "y": 150 } ] }
//! ```
//!
//! Kind names are resolved when the level is built, so a typo surfaces as a
//! [`SpawnError::UnknownKind`](crate::error::SpawnError::UnknownKind).

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::kind::EntityKind;
use crate::error::SpawnError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnEntry {
    pub kind: String,
    pub x: f32,
    pub y: f32,
}

impl SpawnEntry {
    pub fn new(kind: EntityKind, x: f32, y: f32) -> Self {
        Self {
            kind: kind.name().to_string(),
            x,
            y,
        }
    }

    pub fn resolve(&self) -> Result<(EntityKind, Vec2), SpawnError> {
        let kind = self
            .kind
            .parse::<EntityKind>()
            .map_err(SpawnError::UnknownKind)?;
        Ok((kind, Vec2::new(self.x, self.y)))
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LevelLayout {
    #[serde(default)]
    pub spawns: Vec<SpawnEntry>,
}

impl LevelLayout {
    /// A layout with nothing in it. The level then waits for its spawn
    /// queue to be filled from outside.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in layout used when no file is given.
    pub fn standard() -> Self {
        use EntityKind::*;
        let spawns = [
            (Collectible, 400.0, 400.0),
            (Collectible, 500.0, 100.0),
            (Collectible, 100.0, 450.0),
            (Collectible, 200.0, 250.0),
            (Collectible, 950.0, 700.0),
            (Obstacle, 200.0, 150.0),
            (Obstacle, 100.0, 300.0),
            (Obstacle, 300.0, 350.0),
            (Obstacle, 450.0, 200.0),
            (Obstacle, 750.0, 600.0),
            (Hazard, 800.0, 250.0),
        ]
        .into_iter()
        .map(|(kind, x, y)| SpawnEntry::new(kind, x, y))
        .collect();
        Self { spawns }
    }

    /// Loads a layout from a JSON file at the specified path.
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let file_content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read layout '{}': {}", path, e))?;
        Self::from_json(&file_content).map_err(|e| format!("Invalid layout '{}': {}", path, e))
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.spawns.is_empty()
    }

    pub fn push(&mut self, kind: EntityKind, x: f32, y: f32) {
        self.spawns.push(SpawnEntry::new(kind, x, y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_json_with_aliases() {
        let layout = LevelLayout::from_json(
            r#"{"spawns":[{"kind":"starfish","x":100,"y":100},{"kind":"rock","x":1.5,"y":2}]}"#,
        )
        .expect("valid layout");
        assert_eq!(layout.spawns.len(), 2);
        assert_eq!(
            layout.spawns[0].resolve().ok(),
            Some((EntityKind::Collectible, Vec2::new(100.0, 100.0)))
        );
        assert_eq!(
            layout.spawns[1].resolve().ok(),
            Some((EntityKind::Obstacle, Vec2::new(1.5, 2.0)))
        );
    }

    #[test]
    fn test_unknown_kind_resolves_to_error() {
        let entry = SpawnEntry {
            kind: "kraken".into(),
            x: 0.0,
            y: 0.0,
        };
        assert_eq!(entry.resolve(), Err(SpawnError::UnknownKind("kraken".into())));
    }

    #[test]
    fn test_missing_spawns_is_empty() {
        assert!(LevelLayout::from_json("{}").expect("valid").is_empty());
        assert!(LevelLayout::from_json("[").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"spawns":[{{"kind":"shark","x":150,"y":50}}]}}"#).expect("write");
        let path = file.path().to_string_lossy().to_string();
        let layout = LevelLayout::load_from_file(&path).expect("load");
        assert_eq!(layout.spawns.len(), 1);
        assert_eq!(
            layout.spawns[0].resolve(),
            Ok((EntityKind::Hazard, Vec2::new(150.0, 50.0)))
        );
        assert!(LevelLayout::load_from_file("/definitely/not/here.json").is_err());
    }

    #[test]
    fn test_standard_layout_is_playable() {
        let layout = LevelLayout::standard();
        assert!(layout.spawns.iter().all(|s| s.resolve().is_ok()));
        assert!(
            layout
                .spawns
                .iter()
                .any(|s| s.resolve().ok().map(|r| r.0) == Some(EntityKind::Collectible))
        );
    }
}
