//! Entity kind tag.
//!
//! Every catalog entity carries an [`EntityKind`]. The
//! [`KindIndex`](crate::resources::kindindex::KindIndex) resource keeps the
//! live entities of each kind so systems can look them up directly.
use std::fmt;
use std::str::FromStr;

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Player,
    Collectible,
    Obstacle,
    Hazard,
    /// Short-lived visual effect, removed when its animation finishes.
    Effect,
    /// End-of-level message.
    Banner,
    /// Backgrounds and menu images.
    Scenery,
}

impl EntityKind {
    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Player => "player",
            EntityKind::Collectible => "collectible",
            EntityKind::Obstacle => "obstacle",
            EntityKind::Hazard => "hazard",
            EntityKind::Effect => "effect",
            EntityKind::Banner => "banner",
            EntityKind::Scenery => "scenery",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    /// Accepts the canonical names plus the sprite names used in level files
    /// (`turtle`, `starfish`, `rock`, `shark`, `whirlpool`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "player" | "turtle" => Ok(EntityKind::Player),
            "collectible" | "starfish" => Ok(EntityKind::Collectible),
            "obstacle" | "rock" => Ok(EntityKind::Obstacle),
            "hazard" | "shark" => Ok(EntityKind::Hazard),
            "effect" | "whirlpool" => Ok(EntityKind::Effect),
            "banner" => Ok(EntityKind::Banner),
            "scenery" => Ok(EntityKind::Scenery),
            other => Err(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("starfish".parse(), Ok(EntityKind::Collectible));
        assert_eq!(" Rock ".parse(), Ok(EntityKind::Obstacle));
        assert_eq!("shark".parse(), Ok(EntityKind::Hazard));
        assert_eq!("obstacle".parse(), Ok(EntityKind::Obstacle));
        assert_eq!("kraken".parse::<EntityKind>(), Err("kraken".to_string()));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in [EntityKind::Player, EntityKind::Effect, EntityKind::Scenery] {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }
}
