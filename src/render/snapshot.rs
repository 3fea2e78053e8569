//! Per-tick map drawing and snapshot persistence.

use std::path::PathBuf;

use crate::core::config::{OverlayConfig, SnapshotConfig};
use crate::core::error::Result;
use crate::core::types::{OverlayCategory, ProcessId, Tick};
use crate::world::WorldView;

use super::canvas::Canvas;
use super::colors::{self, owner_color};
use super::overlay::Overlay;
use super::raster::RasterCanvas;
use super::style::Style;

/// Stroke width for ship outlines
const SHIP_OUTLINE_WIDTH: f64 = 0.5;

/// Stroke width for id labels
const LABEL_WIDTH: f64 = 1.0;

/// `<dir>/<process>-<tick>.<ext>`, with the tick zero-padded to
/// `tick_width` digits.
pub fn snapshot_path(snapshots: &SnapshotConfig, process_id: ProcessId, tick: Tick) -> PathBuf {
    let name = format!(
        "{}-{:0width$}.{}",
        process_id,
        tick,
        snapshots.extension,
        width = snapshots.tick_width
    );
    snapshots.dir.join(name)
}

impl<'cfg> Overlay<'cfg, RasterCanvas> {
    /// Raster overlay sized for `world`. No canvas is created while the
    /// master switch is off, so disabled runs skip the pixel buffer.
    pub fn with_raster<W: WorldView + ?Sized>(config: &'cfg OverlayConfig, world: &W) -> Result<Self> {
        let canvas = if config.enabled {
            Some(RasterCanvas::for_world(
                config.canvas_width,
                world.width(),
                world.height(),
                config.background,
            )?)
        } else {
            None
        };
        Ok(Self::new(config, canvas))
    }
}

impl<C: Canvas> Overlay<'_, C> {
    /// Persist the canvas for this tick, then reset it to the background.
    ///
    /// Returns the written path, or `None` when no canvas is attached. The
    /// canvas is reset even if saving fails, so the next tick starts clean.
    pub fn flush(&mut self, process_id: ProcessId, tick: Tick) -> Result<Option<PathBuf>> {
        let Some(canvas) = self.canvas.as_mut() else {
            return Ok(None);
        };

        let path = snapshot_path(&self.config.snapshots, process_id, tick);
        tracing::debug!("Saving image to path: {:?}", path);
        let saved = canvas.save(&path);

        canvas.set_color(self.config.background);
        canvas.clear();

        match saved {
            Ok(()) => Ok(Some(path)),
            Err(e) => {
                tracing::warn!("Snapshot for tick {} not written: {}", tick, e);
                Err(e)
            }
        }
    }

    /// Draw every planet and ship on the map layer, then flush the tick.
    ///
    /// Call once per tick, after all other overlay drawing for that tick.
    pub fn show_map<W: WorldView + ?Sized>(&mut self, world: &W) -> Result<Option<PathBuf>> {
        if self.canvas.is_none() {
            if !self.announced {
                tracing::info!("Display is detached, not saving images");
                self.announced = true;
            }
            return Ok(None);
        }
        if !self.announced {
            tracing::info!("Display attached, saving images");
            self.announced = true;
        }

        let me = world.me();
        for planet in world.planets() {
            tracing::trace!("Drawing circle for planet {:?}", planet);
            let fill = Style::fill(owner_color(planet.owner, me));
            self.draw_entity(world, planet, fill, OverlayCategory::Map);
            let label = Style::stroke(colors::LABEL, LABEL_WIDTH);
            self.draw_string(world, &planet.id.to_string(), planet.position, label, OverlayCategory::Map);
        }

        for ship in world.ships() {
            tracing::trace!("Drawing circle for ship {:?}", ship);
            let outline = Style::stroke(owner_color(Some(ship.owner), me), SHIP_OUTLINE_WIDTH);
            self.draw_entity(world, ship, outline, OverlayCategory::Map);
            let label = Style::stroke(colors::LABEL, LABEL_WIDTH);
            self.draw_string(world, &ship.id.to_string(), ship.position, label, OverlayCategory::Map);
        }

        self.flush(world.process_id(), world.tick())
    }
}
