//! Recorded runs replayed through the overlay.
//!
//! A scenario is a JSON file holding the world dimensions and, per tick,
//! the planets, ships and diagnostic annotations the bot produced.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{OverlayError, Result};
use crate::core::types::{OverlayCategory, PlayerId, Point, ProcessId, Tick};
use crate::render::{Canvas, Overlay, Style};
use crate::world::{Entity, Planet, Ship, WorldSnapshot};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Circle { center: Point, radius: f64 },
    Line { from: Point, to: Point },
    Polyline { points: Vec<Point> },
    Polygon { points: Vec<Point> },
    Text { text: String, anchor: Point },
    Arc {
        source: Point,
        target: Point,
        radius: f64,
        /// Degrees
        low: f64,
        /// Degrees
        high: f64,
    },
}

/// One diagnostic draw call recorded by the bot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub category: OverlayCategory,
    #[serde(flatten)]
    pub style: Style,
    pub shape: Shape,
}

/// Circle annotation as an entity
struct Disc {
    center: Point,
    radius: f64,
}

impl Entity for Disc {
    fn position(&self) -> Point {
        self.center
    }

    fn radius(&self) -> f64 {
        self.radius
    }
}

impl Annotation {
    pub fn draw<C: Canvas>(&self, overlay: &mut Overlay<'_, C>, world: &WorldSnapshot) {
        let (style, category) = (self.style, self.category);
        match &self.shape {
            Shape::Circle { center, radius } => {
                let disc = Disc {
                    center: *center,
                    radius: *radius,
                };
                overlay.draw_entity(world, &disc, style, category);
            }
            Shape::Line { from, to } => overlay.draw_line(world, from, to, style, category),
            Shape::Polyline { points } => overlay.draw_polyline(world, points, style, category),
            Shape::Polygon { points } => overlay.draw_polygon(world, points, style, category),
            Shape::Text { text, anchor } => overlay.draw_string(world, text, *anchor, style, category),
            Shape::Arc {
                source,
                target,
                radius,
                low,
                high,
            } => overlay.draw_arc(world, source, target, *radius, *low, *high, style, category),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickFrame {
    pub tick: Tick,
    #[serde(default)]
    pub planets: Vec<Planet>,
    #[serde(default)]
    pub ships: Vec<Ship>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub width: f64,
    pub height: f64,
    pub process_id: ProcessId,
    #[serde(default = "default_me")]
    pub me: PlayerId,
    pub ticks: Vec<TickFrame>,
}

fn default_me() -> PlayerId {
    PlayerId(0)
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        let scenario: Self = serde_json::from_str(contents)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// World dimensions must be finite and positive; the canvas height is
    /// derived from them.
    pub fn validate(&self) -> Result<()> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(self.width) || !valid(self.height) {
            return Err(OverlayError::InvalidWorld {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// World state as seen at `frame`
    pub fn world_at(&self, frame: &TickFrame) -> WorldSnapshot {
        WorldSnapshot {
            width: self.width,
            height: self.height,
            process_id: self.process_id,
            tick: frame.tick,
            me: self.me,
            planets: frame.planets.clone(),
            ships: frame.ships.clone(),
        }
    }
}

/// Frame counts from a replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub written: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Draw every tick of `scenario`, flushing one snapshot per tick.
///
/// A tick whose snapshot cannot be written is counted and the replay
/// moves on; overlay output never stops the run.
pub fn replay<C: Canvas>(scenario: &Scenario, overlay: &mut Overlay<'_, C>) -> ReplaySummary {
    let mut summary = ReplaySummary::default();

    for frame in &scenario.ticks {
        let world = scenario.world_at(frame);
        for annotation in &frame.annotations {
            annotation.draw(overlay, &world);
        }
        match overlay.show_map(&world) {
            Ok(Some(path)) => {
                tracing::debug!("Tick {} written to {:?}", frame.tick, path);
                summary.written += 1;
            }
            Ok(None) => summary.skipped += 1,
            Err(e) => {
                tracing::error!("Tick {}: {}", frame.tick, e);
                summary.failed += 1;
            }
        }
    }

    tracing::info!(
        "Replay done: {} written, {} failed, {} skipped",
        summary.written,
        summary.failed,
        summary.skipped
    );
    summary
}
