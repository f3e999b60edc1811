//! A point series with optional per-point text labels.
//!
//! `LabeledSeries` wraps a line artist on the surface and keeps one text
//! annotation per point when labels are given. Coordinate setters move the
//! labels along with their points, index for index. The point count is
//! fixed at construction; drag and label operations never insert or remove
//! points.

use crate::error::PlotError;
use crate::picker;
use crate::surface::{AxesId, LineId, PlotSurface, TextId};
use crate::validate::{self, LabelInput};

pub struct LabeledSeries {
    line: LineId,
    axes: AxesId,
    len: usize,
    labels: Option<Vec<String>>,
    texts: Vec<TextId>,
}

impl LabeledSeries {
    /// Wrap a line artist, validating the handle and the label input.
    ///
    /// When labels are present, one text annotation per point is created on
    /// the owning axes, displaced by `label_offset` screen points so the
    /// text does not sit on the marker.
    pub fn new(
        surface: &mut dyn PlotSurface,
        line: LineId,
        labels: Option<LabelInput>,
        label_size: f32,
        label_offset: [f32; 2],
    ) -> Result<Self, PlotError> {
        let axes = validate::validate_line(surface, line)?;
        let xs = surface.line_xdata(line);
        let len = xs.len();
        let labels = validate::validate_labels(labels, len)?;

        let mut texts = Vec::new();
        if let Some(labels) = &labels {
            let ys = surface.line_ydata(line);
            for (i, label) in labels.iter().enumerate() {
                texts.push(surface.add_text(axes, xs[i], ys[i], label, label_size, label_offset));
            }
        }

        Ok(Self {
            line,
            axes,
            len,
            labels,
            texts,
        })
    }

    pub fn line(&self) -> LineId {
        self.line
    }

    pub fn axes(&self) -> AxesId {
        self.axes
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn has_labels(&self) -> bool {
        self.labels.is_some()
    }

    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    /// Text annotation for point `index`, if this series is labeled.
    pub fn text(&self, index: usize) -> Option<TextId> {
        self.texts.get(index).copied()
    }

    pub fn xdata(&self, surface: &dyn PlotSurface) -> Vec<f64> {
        surface.line_xdata(self.line)
    }

    pub fn ydata(&self, surface: &dyn PlotSurface) -> Vec<f64> {
        surface.line_ydata(self.line)
    }

    /// Replace the x coordinates. Labels track their points. `xs` must have
    /// exactly [`len`](Self::len) elements; a short vector fails fast.
    pub fn set_xdata(&self, surface: &mut dyn PlotSurface, xs: Vec<f64>) {
        for (i, &text) in self.texts.iter().enumerate() {
            surface.set_text_x(text, xs[i]);
        }
        surface.set_line_xdata(self.line, xs);
    }

    /// Replace the y coordinates, moving labels along.
    pub fn set_ydata(&self, surface: &mut dyn PlotSurface, ys: Vec<f64>) {
        for (i, &text) in self.texts.iter().enumerate() {
            surface.set_text_y(text, ys[i]);
        }
        surface.set_line_ydata(self.line, ys);
    }

    /// Ask the surface for a full redraw.
    pub fn request_redraw(&self, surface: &mut dyn PlotSurface) {
        surface.redraw();
    }

    /// Nearest point to `(x, y)` in raw data coordinates.
    pub fn nearest(&self, surface: &dyn PlotSurface, x: f64, y: f64) -> Option<(usize, f64, f64)> {
        let xs = self.xdata(surface);
        let ys = self.ydata(surface);
        picker::nearest(&xs, &ys, x, y)
    }

    /// Nearest point to `(x, y)` judged by on-screen proximity: each axis
    /// delta is normalized by the axes' current visible range.
    pub fn nearest_normalized(
        &self,
        surface: &dyn PlotSurface,
        x: f64,
        y: f64,
    ) -> Option<(usize, f64)> {
        let (x_min, x_max) = surface.axes_x_range(self.axes);
        let (y_min, y_max) = surface.axes_y_range(self.axes);
        let xs = self.xdata(surface);
        let ys = self.ydata(surface);
        picker::nearest_normalized(&xs, &ys, x, y, x_max - x_min, y_max - y_min)
    }
}
