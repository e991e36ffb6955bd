use core::fmt;

use crate::array::Array;
use crate::axis_scale::AxisScale;
use crate::options::Options;
use crate::Color;

/// Discriminant of a [`Trace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceKind {
    Scatter,
    Histogram,
    Heatmap,
}

impl TraceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scatter => "scatter",
            Self::Histogram => "histogram",
            Self::Heatmap => "heatmap",
        }
    }
}

impl fmt::Display for TraceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paired x/y samples drawn as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Scatter {
    /// The x values, stored exactly as given.
    pub x: Array,
    /// The y values, `y.len() == x.len()`.
    pub y: Array,
    pub style: Options,
}

/// A histogram, carried both as a drawable step outline and as raw bins.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// x coordinates of the outline, from `-inf` to `+inf`.
    pub x: Vec<f64>,
    /// y coordinates of the outline.
    pub y: Vec<f64>,
    /// `B + 1` edges for `B` bins.
    pub bin_edges: Vec<f64>,
    /// `B + 2` counts: underflow, one per bin, overflow.
    pub bin_count: Vec<u64>,
    /// Per-bin heights as drawn. Equal to the counts unless density was requested.
    pub hist: Vec<f64>,
    pub density: bool,
    pub style: Options,
}

impl Histogram {
    /// Samples below the first edge.
    pub fn underflow(&self) -> u64 {
        self.bin_count.first().copied().unwrap_or(0)
    }

    /// Samples above the last edge.
    pub fn overflow(&self) -> u64 {
        self.bin_count.last().copied().unwrap_or(0)
    }

    /// Number of bins.
    pub fn bins(&self) -> usize {
        self.bin_edges.len().saturating_sub(1)
    }
}

/// A 2D colored grid. `z` has shape `(y.len(), x.len())`.
///
/// What happens with NaN values in `z` is left to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Row index follows `y`, column index follows `x`.
    pub z: Array,
    pub zscale: AxisScale,
    pub zlabel: Option<String>,
    /// `(zmin, zmax)` as given; ordering is not enforced.
    pub zlim: Option<(f64, f64)>,
    pub style: Options,
}

/// One plotted data series.
#[derive(Debug, Clone, PartialEq)]
pub enum Trace {
    Scatter(Scatter),
    Histogram(Histogram),
    Heatmap(Heatmap),
}

impl Trace {
    pub fn kind(&self) -> TraceKind {
        match self {
            Self::Scatter(_) => TraceKind::Scatter,
            Self::Histogram(_) => TraceKind::Histogram,
            Self::Heatmap(_) => TraceKind::Heatmap,
        }
    }

    /// The resolved style options.
    pub fn style(&self) -> &Options {
        match self {
            Self::Scatter(s) => &s.style,
            Self::Histogram(h) => &h.style,
            Self::Heatmap(h) => &h.style,
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.style().label()
    }

    pub fn color(&self) -> Option<Color> {
        self.style().color()
    }

    pub fn as_scatter(&self) -> Option<&Scatter> {
        match self {
            Self::Scatter(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_histogram(&self) -> Option<&Histogram> {
        match self {
            Self::Histogram(h) => Some(h),
            _ => None,
        }
    }

    pub fn as_heatmap(&self) -> Option<&Heatmap> {
        match self {
            Self::Heatmap(h) => Some(h),
            _ => None,
        }
    }
}
