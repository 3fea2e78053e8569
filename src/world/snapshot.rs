//! Owned, serializable world state for one tick

use serde::{Deserialize, Serialize};

use super::{Entity, WorldView};
use crate::core::types::{EntityId, PlayerId, Point, ProcessId, Tick};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub id: EntityId,
    pub position: Point,
    pub radius: f64,
    #[serde(default)]
    pub owner: Option<PlayerId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub id: EntityId,
    pub position: Point,
    pub radius: f64,
    pub owner: PlayerId,
}

impl Entity for Planet {
    fn position(&self) -> Point {
        self.position
    }

    fn radius(&self) -> f64 {
        self.radius
    }
}

impl Entity for Ship {
    fn position(&self) -> Point {
        self.position
    }

    fn radius(&self) -> f64 {
        self.radius
    }
}

/// Frozen copy of the world at one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub width: f64,
    pub height: f64,
    pub process_id: ProcessId,
    pub tick: Tick,
    pub me: PlayerId,
    #[serde(default)]
    pub planets: Vec<Planet>,
    #[serde(default)]
    pub ships: Vec<Ship>,
}

impl WorldSnapshot {
    /// Empty world of the given size at tick 0
    pub fn new(width: f64, height: f64, process_id: ProcessId) -> Self {
        Self {
            width,
            height,
            process_id,
            tick: 0,
            me: PlayerId(0),
            planets: Vec::new(),
            ships: Vec::new(),
        }
    }

    pub fn at_tick(mut self, tick: Tick) -> Self {
        self.tick = tick;
        self
    }
}

impl WorldView for WorldSnapshot {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn process_id(&self) -> ProcessId {
        self.process_id
    }

    fn tick(&self) -> Tick {
        self.tick
    }

    fn me(&self) -> PlayerId {
        self.me
    }

    fn planets(&self) -> &[Planet] {
        &self.planets
    }

    fn ships(&self) -> &[Ship] {
        &self.ships
    }
}
