//! Visual styling for curves, markers, and the axes highlight border.
//!
//! Colors are stored as plain `[u8; 3]` so looks serialize cleanly; the
//! egui binding converts to `Color32` at draw time.

use serde::{Deserialize, Serialize};

/// How a line (and its optional point markers) is drawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CurveLook {
    pub color: [u8; 3],
    /// Opacity in 0..=1 applied to both the stroke and the markers.
    pub alpha: f32,
    pub width: f32,
    pub show_line: bool,
    pub show_points: bool,
    pub point_size: f32,
}

impl Default for CurveLook {
    fn default() -> Self {
        Self {
            color: [255, 255, 255],
            alpha: 1.0,
            width: 1.5,
            show_line: true,
            show_points: false,
            point_size: 2.0,
        }
    }
}

impl CurveLook {
    /// Marker-only variant, the usual look for a draggable point series.
    pub fn points(color: [u8; 3], point_size: f32) -> Self {
        Self {
            color,
            show_line: false,
            show_points: true,
            point_size,
            ..Self::default()
        }
    }

    pub fn color32(&self) -> egui::Color32 {
        let a = (self.alpha.clamp(0.0, 1.0) * 255.0) as u8;
        egui::Color32::from_rgba_unmultiplied(self.color[0], self.color[1], self.color[2], a)
    }
}

/// Border stroke drawn around the currently selected zoom axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightLook {
    pub color: [u8; 3],
    pub width: f32,
}

impl Default for HighlightLook {
    fn default() -> Self {
        Self {
            color: [255, 165, 0],
            width: 2.0,
        }
    }
}

impl HighlightLook {
    pub fn color32(&self) -> egui::Color32 {
        egui::Color32::from_rgb(self.color[0], self.color[1], self.color[2])
    }
}
