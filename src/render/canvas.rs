//! Drawing surface the overlay projects onto.
//!
//! The overlay depends only on this capability set. Shapes are appended
//! to a *current path*; `stroke` and `fill` paint that path with the
//! current color and then discard it.

use std::path::Path;

use crate::core::error::Result;
use crate::core::types::Point;

use super::colors::Color;

pub trait Canvas {
    /// Pixel dimensions (width, height)
    fn size(&self) -> (u32, u32);

    fn set_color(&mut self, color: Color);

    fn set_line_width(&mut self, width: f64);

    /// Append a closed circle sub-path
    fn circle(&mut self, center: Point, radius: f64);

    /// Append an open two-point sub-path
    fn line(&mut self, from: Point, to: Point);

    /// Append an open arc sub-path from `start` to `end` (radians).
    ///
    /// The sweep runs in the direction of `end - start`.
    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64);

    /// Append a text run with its baseline starting at `anchor`.
    /// Glyph size is native to the canvas.
    fn text(&mut self, text: &str, anchor: Point);

    /// Paint the outline of the current path, then clear the path
    fn stroke(&mut self);

    /// Paint the interior of the current path, then clear the path
    fn fill(&mut self);

    /// Paint every pixel with the current color and drop the current path
    fn clear(&mut self);

    /// Persist the current contents
    fn save(&mut self, path: &Path) -> Result<()>;
}
