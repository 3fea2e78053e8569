//! World-to-canvas projection.
//!
//! A single uniform ratio maps simulation units to pixels, so the canvas
//! keeps the world's aspect ratio and every primitive scales alike.

use crate::core::types::Point;

/// Pixels per simulation unit: `canvas_width / world_width`
#[inline]
pub fn scale_ratio(canvas_width: u32, world_width: f64) -> f64 {
    canvas_width as f64 / world_width
}

/// Projection for one draw call. Built fresh from the current world width
/// each time, never cached across calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    ratio: f64,
}

impl Projector {
    pub fn new(canvas_width: u32, world_width: f64) -> Self {
        Self {
            ratio: scale_ratio(canvas_width, world_width),
        }
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Simulation point to canvas point
    #[inline]
    pub fn point(&self, p: Point) -> Point {
        p * self.ratio
    }

    /// Simulation length (radius, distance) to pixels
    #[inline]
    pub fn length(&self, len: f64) -> f64 {
        len * self.ratio
    }
}
