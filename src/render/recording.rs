//! Canvas backend that records calls instead of rasterizing them.
//!
//! Useful for headless runs and for asserting on exact call sequences.
//! `save` writes the recorded commands as a JSON trace.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::canvas::Canvas;
use super::colors::Color;
use crate::core::error::Result;
use crate::core::types::Point;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    SetColor { color: Color },
    SetLineWidth { width: f64 },
    Circle { center: Point, radius: f64 },
    Line { from: Point, to: Point },
    Arc { center: Point, radius: f64, start: f64, end: f64 },
    Text { text: String, anchor: Point },
    Stroke,
    Fill,
    Clear { color: Color },
}

#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    width: u32,
    height: u32,
    color: Color,
    commands: Vec<DrawCommand>,
    saved: Vec<PathBuf>,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            color: super::colors::BLACK,
            commands: Vec::new(),
            saved: Vec::new(),
        }
    }

    /// Commands issued since the last `clear`
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Paths passed to successful `save` calls, in order
    pub fn saved(&self) -> &[PathBuf] {
        &self.saved
    }

    /// Line segments emitted since the last `clear`
    pub fn lines(&self) -> Vec<(Point, Point)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Line { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
        self.commands.push(DrawCommand::SetColor { color });
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::SetLineWidth { width });
    }

    fn circle(&mut self, center: Point, radius: f64) {
        self.commands.push(DrawCommand::Circle { center, radius });
    }

    fn line(&mut self, from: Point, to: Point) {
        self.commands.push(DrawCommand::Line { from, to });
    }

    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start,
            end,
        });
    }

    fn text(&mut self, text: &str, anchor: Point) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            anchor,
        });
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { color: self.color });
    }

    fn save(&mut self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.commands)?;
        fs::write(path, json)?;
        self.saved.push(path.to_path_buf());
        Ok(())
    }
}

