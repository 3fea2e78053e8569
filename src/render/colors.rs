//! Color definitions for overlay layers and owners

use serde::{Deserialize, Serialize};

use crate::core::types::PlayerId;

/// RGB color (0.0 to 1.0 per channel).
///
/// Channels are not clamped here; backends decide what out-of-range means.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Quantize to 8-bit channels, clamping to [0, 1] first
    pub fn to_rgb8(&self) -> [u8; 3] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }
}

impl From<[f64; 3]> for Color {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for [f64; 3] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b]
    }
}

pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

/// Background the canvas is reset to between ticks
pub const BACKGROUND: Color = WHITE;

/// Planets nobody owns
pub const NEUTRAL_PLANET: Color = Color::new(0.9, 0.9, 0.9);

/// Our own ships and planets
pub const OWN: Color = Color::new(0.0, 0.0, 1.0);

/// Labels (ids) drawn next to entities
pub const LABEL: Color = BLACK;

/// Color for an entity owned by `owner`, seen from player `me`.
///
/// Opponents fan out from magenta toward yellow as their id grows.
pub fn owner_color(owner: Option<PlayerId>, me: PlayerId) -> Color {
    match owner {
        None => NEUTRAL_PLANET,
        Some(id) if id == me => OWN,
        Some(PlayerId(n)) => {
            let step = (n as f64 * 0.25).fract();
            Color::new(1.0, step, 1.0 - step)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_colors_distinguish_players() {
        let me = PlayerId(0);
        assert_eq!(owner_color(None, me), NEUTRAL_PLANET);
        assert_eq!(owner_color(Some(me), me), OWN);

        let p1 = owner_color(Some(PlayerId(1)), me);
        let p2 = owner_color(Some(PlayerId(2)), me);
        assert_ne!(p1, p2);
        assert_eq!(p1, Color::new(1.0, 0.25, 0.75));
    }

    #[test]
    fn test_to_rgb8_clamps() {
        assert_eq!(Color::new(-0.5, 0.5, 2.0).to_rgb8(), [0, 128, 255]);
        assert_eq!(WHITE.to_rgb8(), [255, 255, 255]);
    }

    #[test]
    fn test_color_serializes_as_triple() {
        let json = serde_json::to_string(&Color::new(0.0, 0.5, 1.0)).unwrap();
        assert_eq!(json, "[0.0,0.5,1.0]");
    }
}
