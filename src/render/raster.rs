//! Raster canvas backed by a `tiny_skia::Pixmap`.
//!
//! Anti-aliasing is off so every pixel is either background or ink, which
//! keeps snapshots diffable tick to tick. Labels are rendered with an
//! embedded DejaVu Sans Mono face through `rusttype`.

use std::path::Path;

use image::{Rgb, RgbImage};
use rusttype::{point, Font, Scale};
use tiny_skia::{ColorU8, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::canvas::Canvas;
use super::colors::Color;
use super::projector::scale_ratio;
use crate::core::error::{OverlayError, Result};
use crate::core::types::Point;

static LABEL_FONT: &[u8] = include_bytes!("../../assets/DejaVuSansMono.ttf");

/// Label glyph height in canvas pixels, independent of the world ratio
const LABEL_PX: f32 = 14.0;

/// Glyph coverage at or above this paints the pixel
const LABEL_COVERAGE: f32 = 0.5;

/// Largest canvas side accepted, in pixels
pub const MAX_CANVAS_SIDE: u32 = 32_768;

/// Target length of one flattened arc segment, in pixels
const CURVE_STEP: f64 = 2.0;

const MAX_CURVE_SEGMENTS: usize = 1024;

#[derive(Debug, Clone)]
struct TextRun {
    text: String,
    anchor: Point,
}

pub struct RasterCanvas {
    pixmap: Pixmap,
    font: Font<'static>,
    color: Color,
    line_width: f64,
    path: PathBuilder,
    texts: Vec<TextRun>,
}

impl RasterCanvas {
    /// Blank canvas cleared to `background`
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self> {
        if width > MAX_CANVAS_SIDE || height > MAX_CANVAS_SIDE {
            return Err(OverlayError::CanvasSize { width, height });
        }
        let mut pixmap = Pixmap::new(width, height).ok_or(OverlayError::CanvasSize { width, height })?;
        pixmap.fill(skia_color(background));
        let font = Font::try_from_bytes(LABEL_FONT).ok_or(OverlayError::LabelFont)?;

        Ok(Self {
            pixmap,
            font,
            color: background,
            line_width: 1.0,
            path: PathBuilder::new(),
            texts: Vec::new(),
        })
    }

    /// Canvas sized for a world: fixed width, height scaled by the same
    /// ratio as every projected coordinate.
    pub fn for_world(canvas_width: u32, world_width: f64, world_height: f64, background: Color) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(world_width) || !valid(world_height) {
            return Err(OverlayError::InvalidWorld {
                width: world_width,
                height: world_height,
            });
        }

        let ratio = scale_ratio(canvas_width, world_width);
        let scaled = world_height * ratio;
        if scaled > MAX_CANVAS_SIDE as f64 {
            return Err(OverlayError::CanvasSize {
                width: canvas_width,
                height: u32::try_from(scaled as u64).unwrap_or(u32::MAX),
            });
        }
        let height = (scaled as u32).max(1);
        tracing::debug!(
            "Creating {}x{} raster canvas (ratio {:.4})",
            canvas_width,
            height,
            ratio
        );
        Self::new(canvas_width, height, background)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        let p = self.pixmap.pixel(x, y)?;
        Some([p.red(), p.green(), p.blue()])
    }

    /// Opaque RGB copy of the canvas, as written to disk
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.pixmap.width(), self.pixmap.height(), |x, y| {
            Rgb(self.pixel(x, y).unwrap_or([0, 0, 0]))
        })
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    fn paint(&self) -> Paint<'static> {
        let [r, g, b] = self.color.to_rgb8();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, 255);
        paint.anti_alias = false;
        paint
    }

    fn take_path(&mut self) -> Option<tiny_skia::Path> {
        std::mem::replace(&mut self.path, PathBuilder::new()).finish()
    }

    fn paint_texts(&mut self) {
        let texts = std::mem::take(&mut self.texts);
        let [r, g, b] = self.color.to_rgb8();
        let ink = ColorU8::from_rgba(r, g, b, 255).premultiply();
        let scale = Scale::uniform(LABEL_PX);
        let (width, height) = (self.pixmap.width() as i32, self.pixmap.height() as i32);
        let pixels = self.pixmap.pixels_mut();

        for run in texts.iter().filter(|run| run.anchor.is_finite()) {
            // Baseline sits on the anchor
            let origin = point(run.anchor.x as f32, run.anchor.y as f32);
            for glyph in self.font.layout(&run.text, scale, origin) {
                let Some(bb) = glyph.pixel_bounding_box() else {
                    continue;
                };
                glyph.draw(|gx, gy, v| {
                    let x = bb.min.x + gx as i32;
                    let y = bb.min.y + gy as i32;
                    if v >= LABEL_COVERAGE && (0..width).contains(&x) && (0..height).contains(&y) {
                        pixels[(y * width + x) as usize] = ink;
                    }
                });
            }
        }
    }
}

impl Canvas for RasterCanvas {
    fn size(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn circle(&mut self, center: Point, radius: f64) {
        if center.is_finite() && radius.is_finite() && radius > 0.0 {
            self.path.push_circle(center.x as f32, center.y as f32, radius as f32);
        }
    }

    fn line(&mut self, from: Point, to: Point) {
        if from.is_finite() && to.is_finite() {
            self.path.move_to(from.x as f32, from.y as f32);
            self.path.line_to(to.x as f32, to.y as f32);
        }
    }

    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64) {
        let sweep = end - start;
        if !center.is_finite() || !radius.is_finite() || !start.is_finite() || !sweep.is_finite() {
            return;
        }
        let segments = curve_segments(sweep, radius).max(2);
        for i in 0..=segments {
            let theta = start + sweep * i as f64 / segments as f64;
            let p = center + radius * Point::new(theta.cos(), theta.sin());
            if i == 0 {
                self.path.move_to(p.x as f32, p.y as f32);
            } else {
                self.path.line_to(p.x as f32, p.y as f32);
            }
        }
    }

    fn text(&mut self, text: &str, anchor: Point) {
        self.texts.push(TextRun {
            text: text.to_string(),
            anchor,
        });
    }

    fn stroke(&mut self) {
        if let Some(path) = self.take_path() {
            let stroke = Stroke {
                width: self.line_width.max(1.0) as f32,
                ..Stroke::default()
            };
            let paint = self.paint();
            self.pixmap
                .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
        self.paint_texts();
    }

    fn fill(&mut self) {
        // Every sub-path is implicitly closed for filling
        if let Some(path) = self.take_path() {
            let paint = self.paint();
            self.pixmap
                .fill_path(&path, &paint, FillRule::EvenOdd, Transform::identity(), None);
        }
        self.paint_texts();
    }

    fn clear(&mut self) {
        self.pixmap.fill(skia_color(self.color));
        self.path = PathBuilder::new();
        self.texts.clear();
    }

    fn save(&mut self, path: &Path) -> Result<()> {
        self.to_rgb_image()
            .save(path)
            .map_err(|source| OverlayError::Snapshot {
                path: path.to_path_buf(),
                source,
            })
    }
}

fn skia_color(color: Color) -> tiny_skia::Color {
    let [r, g, b] = color.to_rgb8();
    tiny_skia::Color::from_rgba8(r, g, b, 255)
}

/// Segment count for a curve of angular extent `sweep` at `radius` pixels
fn curve_segments(sweep: f64, radius: f64) -> usize {
    let length = (sweep * radius).abs();
    if !length.is_finite() {
        return 0;
    }
    ((length / CURVE_STEP).ceil() as usize).min(MAX_CURVE_SEGMENTS)
}
