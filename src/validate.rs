//! Input validation for controller constructors.
//!
//! Controllers accept loosely-specified input: numeric artist ids that may
//! be stale, closures that may not behave like numeric functions, and label
//! input in several shapes. Everything is checked here, once, before any
//! controller state is built; the event handlers can then assume their
//! inputs are sound.

use crate::error::PlotError;
use crate::surface::{AxesId, LineId, PlotSurface};

/// A real-valued function of one real variable, validated and boxed.
pub type CurveFn = Box<dyn Fn(f64) -> f64>;

/// Check that `line` refers to a line on the surface. Returns the owning
/// axes, the piece every controller needs next.
pub fn validate_line(surface: &dyn PlotSurface, line: LineId) -> Result<AxesId, PlotError> {
    surface.line_axes(line).ok_or(PlotError::NotALine)
}

/// Check that `axes` refers to an axes on the surface.
pub fn validate_axes(surface: &dyn PlotSurface, axes: AxesId) -> Result<AxesId, PlotError> {
    if surface.has_axes(axes) {
        Ok(axes)
    } else {
        Err(PlotError::NotAnAxes)
    }
}

/// Check that `f` behaves like a numeric function by probing it at 0.0.
///
/// A function that is singular at the probe point is fine: division by zero
/// produces an infinity in f64 arithmetic and is accepted. A NaN result
/// means the closure does not map numbers to numbers (0/0, sqrt of a
/// negative, a lookup that fell through) and is rejected.
pub fn validate_function<F>(f: F) -> Result<CurveFn, PlotError>
where
    F: Fn(f64) -> f64 + 'static,
{
    if f(0.0).is_nan() {
        return Err(PlotError::NotAFunction);
    }
    Ok(Box::new(f))
}

/// Caller-supplied label input, before validation.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelInput {
    /// One label per data point.
    List(Vec<String>),
    /// A single label, valid only for a single-point series.
    Scalar(String),
}

impl LabelInput {
    /// Read label input from a JSON value, e.g. a plot description file.
    ///
    /// `null` means "no labels". A string or number is a scalar label, an
    /// array of strings/numbers is a label list. Anything else (booleans,
    /// objects, arrays with non-scalar elements) is `BadLabelInput`.
    pub fn from_json(value: &serde_json::Value) -> Result<Option<Self>, PlotError> {
        use serde_json::Value;
        match value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(Self::Scalar(s.clone()))),
            Value::Number(n) => Ok(Some(Self::Scalar(n.to_string()))),
            Value::Array(items) => {
                let mut labels = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(s) => labels.push(s.clone()),
                        Value::Number(n) => labels.push(n.to_string()),
                        _ => return Err(PlotError::BadLabelInput),
                    }
                }
                Ok(Some(Self::List(labels)))
            }
            _ => Err(PlotError::BadLabelInput),
        }
    }
}

impl From<&str> for LabelInput {
    fn from(s: &str) -> Self {
        Self::Scalar(s.to_string())
    }
}

impl From<String> for LabelInput {
    fn from(s: String) -> Self {
        Self::Scalar(s)
    }
}

impl From<f64> for LabelInput {
    fn from(v: f64) -> Self {
        Self::Scalar(v.to_string())
    }
}

impl From<i64> for LabelInput {
    fn from(v: i64) -> Self {
        Self::Scalar(v.to_string())
    }
}

impl From<Vec<String>> for LabelInput {
    fn from(v: Vec<String>) -> Self {
        Self::List(v)
    }
}

impl From<Vec<&str>> for LabelInput {
    fn from(v: Vec<&str>) -> Self {
        Self::List(v.into_iter().map(str::to_string).collect())
    }
}

/// Normalize label input against the series length.
///
/// `None` passes through. A list must match `point_count` exactly. A scalar
/// is only valid for a single-point series and comes back wrapped as a
/// one-element list, so downstream code handles a single uniform shape.
pub fn validate_labels(
    labels: Option<LabelInput>,
    point_count: usize,
) -> Result<Option<Vec<String>>, PlotError> {
    match labels {
        None => Ok(None),
        Some(LabelInput::List(list)) => {
            if list.len() != point_count {
                Err(PlotError::DimensionMismatch {
                    labels: list.len(),
                    points: point_count,
                })
            } else {
                Ok(Some(list))
            }
        }
        Some(LabelInput::Scalar(label)) => {
            if point_count != 1 {
                Err(PlotError::DimensionMismatch {
                    labels: 1,
                    points: point_count,
                })
            } else {
                Ok(Some(vec![label]))
            }
        }
    }
}
