//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// 2D position in either simulation units or canvas pixels
pub type Point = glam::DVec2;

/// Simulation tick counter (snapshot granularity)
pub type Tick = u64;

/// Identifier of the bot process that owns a canvas
pub type ProcessId = u32;

/// Identifier of a ship or planet within the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u32);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

/// Diagnostic layer a draw call belongs to.
///
/// Each layer is toggled independently; see [`crate::core::config::CategoryPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayCategory {
    /// Navigation paths
    Navigation,
    /// Order intents (ship to target)
    Order,
    /// Comet trajectories
    Comet,
    /// Kite trajectories
    Kite,
    /// Planets and ships, drawn once per tick
    Map,
}

impl OverlayCategory {
    pub const ALL: [OverlayCategory; 5] = [
        OverlayCategory::Navigation,
        OverlayCategory::Order,
        OverlayCategory::Comet,
        OverlayCategory::Kite,
        OverlayCategory::Map,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde_names() {
        let json = serde_json::to_string(&OverlayCategory::Navigation).unwrap();
        assert_eq!(json, "\"navigation\"");
        let parsed: OverlayCategory = serde_json::from_str("\"kite\"").unwrap();
        assert_eq!(parsed, OverlayCategory::Kite);
    }

    #[test]
    fn test_entity_id_is_transparent() {
        let id: EntityId = serde_json::from_str("42").unwrap();
        assert_eq!(id, EntityId(42));
        assert_eq!(id.to_string(), "42");
    }
}
