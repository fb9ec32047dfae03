use egui::{Color32, Pos2};

use super::Element;
use crate::surface::Surface;

/// A freehand polyline drawn by a marker while the pointer is held.
#[derive(Debug, Clone, PartialEq)]
pub struct FreehandStroke {
    points: Vec<Pos2>,
    width: f32,
    color: Color32,
}

impl FreehandStroke {
    /// Start a stroke at `origin`. Style is fixed from here on.
    pub fn new(origin: Pos2, width: f32, color: Color32) -> Self {
        Self {
            points: vec![origin],
            width,
            color,
        }
    }

    pub fn from_points(points: Vec<Pos2>, width: f32, color: Color32) -> Self {
        Self {
            points,
            width,
            color,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// A stroke that never left its first point.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }
}

impl Element for FreehandStroke {
    fn render(&self, surface: &mut dyn Surface) {
        // A click without motion leaves no mark
        if self.is_degenerate() {
            return;
        }
        surface.polyline(&self.points, self.width, self.color);
    }

    fn extend(&mut self, point: Pos2) {
        self.points.push(point);
    }
}
