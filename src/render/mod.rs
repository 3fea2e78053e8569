//! Debug overlay rendering.
//!
//! Projects simulation state onto a fixed-width canvas, one snapshot per
//! tick. This module is READ-ONLY with respect to the simulation.

pub mod arc;
pub mod canvas;
pub mod colors;
pub mod overlay;
pub mod projector;
pub mod raster;
pub mod recording;
pub mod snapshot;
pub mod style;

pub use arc::{arc_span_radians, normalize_arc_span};
pub use canvas::Canvas;
pub use colors::Color;
pub use overlay::{should_draw, Overlay};
pub use projector::{scale_ratio, Projector};
pub use raster::RasterCanvas;
pub use recording::{DrawCommand, RecordingCanvas};
pub use snapshot::snapshot_path;
pub use style::{apply_style, draw_and_style, Style};
