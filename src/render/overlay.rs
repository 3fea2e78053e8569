//! Gated drawing primitives.
//!
//! Every primitive checks the gate first and does nothing at all (no
//! projection, no canvas call) when its category is off. Otherwise it
//! projects through a [`Projector`] rebuilt from the current world width,
//! emits one shape and styles it.

use crate::core::config::{OverlayConfig, OverlayPolicy};
use crate::core::types::{OverlayCategory, Point};
use crate::world::{Entity, WorldView};

use super::arc::arc_span_radians;
use super::canvas::Canvas;
use super::projector::Projector;
use super::style::{draw_and_style, Style};

/// Owns the (optional) canvas for one simulation instance.
///
/// A `None` canvas is the disabled mode: every call is a silent no-op.
pub struct Overlay<'cfg, C: Canvas> {
    pub(super) config: &'cfg OverlayConfig,
    pub(super) canvas: Option<C>,
    pub(super) announced: bool,
}

impl<'cfg, C: Canvas> Overlay<'cfg, C> {
    pub fn new(config: &'cfg OverlayConfig, canvas: Option<C>) -> Self {
        Self {
            config,
            canvas,
            announced: false,
        }
    }

    /// Overlay with nothing to draw onto
    pub fn detached(config: &'cfg OverlayConfig) -> Self {
        Self::new(config, None)
    }

    pub fn config(&self) -> &OverlayConfig {
        self.config
    }

    pub fn canvas(&self) -> Option<&C> {
        self.canvas.as_ref()
    }

    pub fn canvas_mut(&mut self) -> Option<&mut C> {
        self.canvas.as_mut()
    }

    pub fn into_canvas(self) -> Option<C> {
        self.canvas
    }

    /// Whether draw calls for `category` are materialized
    pub fn should_draw(&self, category: OverlayCategory) -> bool {
        should_draw(&self.config.policy(), self.canvas.is_some(), category)
    }

    /// The canvas, if and only if `category` passes the gate
    fn gated(&mut self, category: OverlayCategory) -> Option<&mut C> {
        if self.should_draw(category) {
            self.canvas.as_mut()
        } else {
            None
        }
    }

    /// Circle at the entity's position with its radius
    pub fn draw_entity<W, E>(&mut self, world: &W, entity: &E, style: Style, category: OverlayCategory)
    where
        W: WorldView + ?Sized,
        E: Entity + ?Sized,
    {
        let config = self.config;
        let Some(canvas) = self.gated(category) else {
            return;
        };
        let proj = Projector::new(config.canvas_width, world.width());
        let center = proj.point(entity.position());
        let radius = proj.length(entity.radius());
        draw_and_style(canvas, style, |c| c.circle(center, radius));
    }

    pub fn draw_line<W, A, B>(&mut self, world: &W, start: &A, end: &B, style: Style, category: OverlayCategory)
    where
        W: WorldView + ?Sized,
        A: Entity + ?Sized,
        B: Entity + ?Sized,
    {
        let config = self.config;
        let Some(canvas) = self.gated(category) else {
            return;
        };
        let proj = Projector::new(config.canvas_width, world.width());
        let from = proj.point(start.position());
        let to = proj.point(end.position());
        draw_and_style(canvas, style, |c| c.line(from, to));
    }

    /// Consecutive segments through `points`; nothing for fewer than two
    pub fn draw_polyline<W, E>(&mut self, world: &W, points: &[E], style: Style, category: OverlayCategory)
    where
        W: WorldView + ?Sized,
        E: Entity,
    {
        if !self.should_draw(category) {
            return;
        }
        for pair in points.windows(2) {
            self.draw_line(world, &pair[0], &pair[1], style, category);
        }
    }

    /// Polyline plus a closing segment back to the first point.
    /// Fewer than two points draw nothing.
    pub fn draw_polygon<W, E>(&mut self, world: &W, points: &[E], style: Style, category: OverlayCategory)
    where
        W: WorldView + ?Sized,
        E: Entity,
    {
        if !self.should_draw(category) || points.len() < 2 {
            return;
        }
        self.draw_polyline(world, points, style, category);
        self.draw_line(world, &points[points.len() - 1], &points[0], style, category);
    }

    /// Text anchored at a projected point; glyph size is not scaled
    pub fn draw_string<W>(&mut self, world: &W, text: &str, anchor: Point, style: Style, category: OverlayCategory)
    where
        W: WorldView + ?Sized,
    {
        let config = self.config;
        let Some(canvas) = self.gated(category) else {
            return;
        };
        let proj = Projector::new(config.canvas_width, world.width());
        let at = proj.point(anchor);
        draw_and_style(canvas, style, |c| c.text(text, at));
    }

    /// Arc of `radius` around `source`, from `low` to `high` degrees,
    /// taking the shorter way around when the raw gap exceeds a half turn.
    ///
    /// `target` does not affect the geometry.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_arc<W, S, T>(
        &mut self,
        world: &W,
        source: &S,
        target: &T,
        radius: f64,
        low: f64,
        high: f64,
        style: Style,
        category: OverlayCategory,
    ) where
        W: WorldView + ?Sized,
        S: Entity + ?Sized,
        T: Entity + ?Sized,
    {
        let config = self.config;
        let Some(canvas) = self.gated(category) else {
            return;
        };
        let proj = Projector::new(config.canvas_width, world.width());
        let center = proj.point(source.position());
        let r = proj.length(radius);
        let (start, end) = arc_span_radians(low, high);
        tracing::trace!(
            "Arc around {:?} toward {:?}: {:.2}..{:.2} rad",
            source.position(),
            target.position(),
            start,
            end
        );
        draw_and_style(canvas, style, |c| c.arc(center, r, start, end));
    }
}

/// The gate: canvas attached, master switch on, category on
pub fn should_draw(policy: &OverlayPolicy, canvas_attached: bool, category: OverlayCategory) -> bool {
    canvas_attached && policy.allows(category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CategoryPolicy;
    use crate::render::colors::{BLACK, OWN};
    use crate::render::recording::{DrawCommand, RecordingCanvas};
    use crate::world::WorldSnapshot;

    fn enabled_config() -> OverlayConfig {
        OverlayConfig {
            enabled: true,
            canvas_width: 3600,
            categories: CategoryPolicy::all(),
            ..OverlayConfig::default()
        }
    }

    fn world() -> WorldSnapshot {
        WorldSnapshot::new(240.0, 160.0, 1)
    }

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_gate_requires_canvas() {
        let config = enabled_config();
        let overlay: Overlay<RecordingCanvas> = Overlay::detached(&config);
        for category in OverlayCategory::ALL {
            assert!(!overlay.should_draw(category));
        }
    }

    #[test]
    fn test_gate_respects_category_flag() {
        let mut config = enabled_config();
        config.categories.kite = false;
        let overlay = Overlay::new(&config, Some(RecordingCanvas::new(10, 10)));
        assert!(!overlay.should_draw(OverlayCategory::Kite));
        assert!(overlay.should_draw(OverlayCategory::Comet));
    }

    #[test]
    fn test_entity_projected_and_filled() {
        let config = enabled_config();
        let mut overlay = Overlay::new(&config, Some(RecordingCanvas::new(3600, 2400)));
        let planet = crate::world::Planet {
            id: crate::core::types::EntityId(1),
            position: Point::new(10.0, 20.0),
            radius: 2.0,
            owner: None,
        };
        overlay.draw_entity(&world(), &planet, Style::fill(BLACK), OverlayCategory::Map);
        let canvas = overlay.canvas().unwrap();
        assert_eq!(
            canvas.commands(),
            &[
                DrawCommand::Circle {
                    center: Point::new(150.0, 300.0),
                    radius: 30.0
                },
                DrawCommand::SetColor { color: BLACK },
                DrawCommand::Fill,
            ]
        );
    }

    #[test]
    fn test_polyline_and_polygon_segments() {
        let config = enabled_config();
        let mut overlay = Overlay::new(&config, Some(RecordingCanvas::new(3600, 2400)));
        // Ratio 15 on a 240-wide world
        let path = pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0)]);
        let (p0, p1, p2) = (Point::new(0.0, 0.0), Point::new(30.0, 0.0), Point::new(30.0, 30.0));

        overlay.draw_polyline(&world(), &path, Style::stroke(OWN, 1.0), OverlayCategory::Navigation);
        assert_eq!(overlay.canvas_mut().unwrap().lines(), vec![(p0, p1), (p1, p2)]);

        overlay.canvas_mut().unwrap().take_commands();
        overlay.draw_polygon(&world(), &path, Style::stroke(OWN, 1.0), OverlayCategory::Kite);
        assert_eq!(overlay.canvas().unwrap().lines(), vec![(p0, p1), (p1, p2), (p2, p0)]);
    }

    #[test]
    fn test_degenerate_paths_are_noops() {
        let config = enabled_config();
        let mut overlay = Overlay::new(&config, Some(RecordingCanvas::new(10, 10)));
        let single = pts(&[(1.0, 1.0)]);
        let empty: Vec<Point> = Vec::new();
        overlay.draw_polyline(&world(), &single, Style::stroke(OWN, 1.0), OverlayCategory::Order);
        overlay.draw_polyline(&world(), &empty, Style::stroke(OWN, 1.0), OverlayCategory::Order);
        overlay.draw_polygon(&world(), &single, Style::stroke(OWN, 1.0), OverlayCategory::Order);
        overlay.draw_polygon(&world(), &empty, Style::stroke(OWN, 1.0), OverlayCategory::Order);
        assert!(overlay.canvas().unwrap().commands().is_empty());
    }

    #[test]
    fn test_two_point_polygon_goes_there_and_back() {
        let config = enabled_config();
        let mut overlay = Overlay::new(&config, Some(RecordingCanvas::new(3600, 2400)));
        let path = pts(&[(0.0, 0.0), (1.0, 0.0)]);
        overlay.draw_polygon(&world(), &path, Style::stroke(OWN, 1.0), OverlayCategory::Kite);
        let (a, b) = (Point::new(0.0, 0.0), Point::new(15.0, 0.0));
        assert_eq!(overlay.canvas().unwrap().lines(), vec![(a, b), (b, a)]);
    }

    #[test]
    fn test_string_anchor_scaled_text_untouched() {
        let config = enabled_config();
        let mut overlay = Overlay::new(&config, Some(RecordingCanvas::new(3600, 2400)));
        overlay.draw_string(&world(), "17", Point::new(4.0, 6.0), Style::stroke(BLACK, 1.0), OverlayCategory::Map);
        assert_eq!(
            overlay.canvas().unwrap().commands()[0],
            DrawCommand::Text {
                text: "17".into(),
                anchor: Point::new(60.0, 90.0)
            }
        );
    }

    #[test]
    fn test_arc_uses_normalized_span() {
        let config = enabled_config();
        let mut overlay = Overlay::new(&config, Some(RecordingCanvas::new(3600, 2400)));
        let source = Point::new(10.0, 10.0);
        let target = Point::new(50.0, 50.0);
        overlay.draw_arc(&world(), &source, &target, 4.0, 10.0, 200.0, Style::stroke(OWN, 2.0), OverlayCategory::Comet);
        match &overlay.canvas().unwrap().commands()[0] {
            DrawCommand::Arc { center, radius, start, end } => {
                assert_eq!(*center, Point::new(150.0, 150.0));
                assert_eq!(*radius, 60.0);
                assert_eq!(*start, 10.0_f64.to_radians());
                assert_eq!(*end, (-160.0_f64).to_radians());
            }
            other => panic!("expected arc, got {:?}", other),
        }
    }

    #[test]
    fn test_disabled_category_leaves_canvas_untouched() {
        let mut config = enabled_config();
        config.categories = CategoryPolicy::none();
        let mut overlay = Overlay::new(&config, Some(RecordingCanvas::new(10, 10)));
        let p = Point::new(1.0, 1.0);
        let w = world();
        let style = Style::stroke(OWN, 1.0);
        for category in OverlayCategory::ALL {
            overlay.draw_entity(&w, &p, style, category);
            overlay.draw_line(&w, &p, &p, style, category);
            overlay.draw_polyline(&w, &[p, p], style, category);
            overlay.draw_polygon(&w, &[p, p, p], style, category);
            overlay.draw_string(&w, "x", p, style, category);
            overlay.draw_arc(&w, &p, &p, 1.0, 0.0, 90.0, style, category);
        }
        assert!(overlay.canvas().unwrap().commands().is_empty());
    }
}
