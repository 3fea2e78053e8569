//! Stroke/fill finalization for emitted shapes.

use serde::{Deserialize, Serialize};

use super::canvas::Canvas;
use super::colors::Color;

/// Color plus stroke width for one draw call.
///
/// `width > 0` strokes the outline at that width; `width <= 0` fills.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub color: Color,
    pub width: f64,
}

impl Style {
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }

    pub const fn stroke(color: Color, width: f64) -> Self {
        Self { color, width }
    }

    pub const fn fill(color: Color) -> Self {
        Self { color, width: 0.0 }
    }

    pub fn is_fill(&self) -> bool {
        self.width <= 0.0 || self.width.is_nan()
    }
}

/// Paint the canvas's current path with `style`
pub fn apply_style<C: Canvas + ?Sized>(canvas: &mut C, style: Style) {
    canvas.set_color(style.color);
    if style.is_fill() {
        canvas.fill();
    } else {
        canvas.set_line_width(style.width);
        canvas.stroke();
    }
}

/// Emit a shape and style it as one step, so nothing can land on the
/// current path in between.
pub fn draw_and_style<C, F>(canvas: &mut C, style: Style, emit: F)
where
    C: Canvas + ?Sized,
    F: FnOnce(&mut C),
{
    emit(canvas);
    apply_style(canvas, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Point;
    use crate::render::colors::OWN;
    use crate::render::recording::{DrawCommand, RecordingCanvas};

    #[test]
    fn test_positive_width_strokes() {
        let mut canvas = RecordingCanvas::new(10, 10);
        apply_style(&mut canvas, Style::stroke(OWN, 2.0));
        assert_eq!(
            canvas.commands(),
            &[
                DrawCommand::SetColor { color: OWN },
                DrawCommand::SetLineWidth { width: 2.0 },
                DrawCommand::Stroke,
            ]
        );
    }

    #[test]
    fn test_zero_negative_or_nan_width_fills() {
        for width in [0.0, -1.0, f64::NAN] {
            assert!(Style::new(OWN, width).is_fill());
            let mut canvas = RecordingCanvas::new(10, 10);
            apply_style(&mut canvas, Style::new(OWN, width));
            assert_eq!(
                canvas.commands(),
                &[DrawCommand::SetColor { color: OWN }, DrawCommand::Fill]
            );
        }
    }

    #[test]
    fn test_draw_and_style_orders_shape_first() {
        let mut canvas = RecordingCanvas::new(10, 10);
        draw_and_style(&mut canvas, Style::fill(OWN), |c| {
            c.circle(Point::new(1.0, 1.0), 1.0)
        });
        assert!(matches!(canvas.commands()[0], DrawCommand::Circle { .. }));
        assert_eq!(canvas.commands().last(), Some(&DrawCommand::Fill));
    }

    #[test]
    fn test_is_fill_discriminates_on_width() {
        assert!(Style::fill(OWN).is_fill());
        assert!(!Style::stroke(OWN, 0.5).is_fill());
    }
}
