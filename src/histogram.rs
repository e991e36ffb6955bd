//! Histogram binning and the step outline drawn for a histogram trace.
//!
//! Binning follows the usual conventions of array libraries: bins are
//! half-open `[e_i, e_{i+1})` except the last one which also includes its
//! right edge, and automatic rules pick a bin *width* from the data which is
//! then turned into a number of equal-width bins over the data range.

use core::fmt;
use core::str::FromStr;

use crate::error::FigureError;

/// Upper limit on the number of equal-width bins, whether requested or
/// computed by a [`BinRule`].
pub const MAX_BINS: usize = 1_000_000;

/// Automatic bin width rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BinRule {
    /// The smaller of [`FreedmanDiaconis`](Self::FreedmanDiaconis) and
    /// [`Sturges`](Self::Sturges), or Sturges alone when the IQR is zero.
    #[default]
    Auto,
    /// `ptp / (log2(n) + 1)`.
    Sturges,
    /// `2 * IQR / n^(1/3)`, robust to outliers.
    FreedmanDiaconis,
    /// `(24 * sqrt(pi) / n)^(1/3) * std`.
    Scott,
    /// `ptp / (2 * n^(1/3))`.
    Rice,
    /// `ptp / sqrt(n)`.
    Sqrt,
}

impl BinRule {
    pub const NAMES: [&'static str; 6] = ["auto", "sturges", "fd", "scott", "rice", "sqrt"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Sturges => "sturges",
            Self::FreedmanDiaconis => "fd",
            Self::Scott => "scott",
            Self::Rice => "rice",
            Self::Sqrt => "sqrt",
        }
    }

    /// Bin width for `sorted` finite samples. Zero means "use a single bin".
    fn width(self, sorted: &[f64]) -> f64 {
        let n = sorted.len() as f64;
        let ptp = match (sorted.first(), sorted.last()) {
            (Some(min), Some(max)) => max - min,
            _ => return 0.0,
        };
        match self {
            Self::Auto => {
                let fd = Self::FreedmanDiaconis.width(sorted);
                let sturges = Self::Sturges.width(sorted);
                if fd > 0.0 { fd.min(sturges) } else { sturges }
            }
            Self::Sturges => ptp / (n.log2() + 1.0),
            Self::FreedmanDiaconis => {
                let iqr = percentile(sorted, 75.0) - percentile(sorted, 25.0);
                2.0 * iqr * n.powf(-1.0 / 3.0)
            }
            Self::Scott => {
                let factor = (24.0 * core::f64::consts::PI.sqrt() / n).powf(1.0 / 3.0);
                factor * std_dev(sorted)
            }
            Self::Rice => ptp / (2.0 * n.cbrt()),
            Self::Sqrt => ptp / n.sqrt(),
        }
    }
}

impl FromStr for BinRule {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "sturges" => Ok(Self::Sturges),
            "fd" => Ok(Self::FreedmanDiaconis),
            "scott" => Ok(Self::Scott),
            "rice" => Ok(Self::Rice),
            "sqrt" => Ok(Self::Sqrt),
            _ => Err(FigureError::invalid_value(
                "bins",
                format!("must be one of {:?}", Self::NAMES),
                s,
            )),
        }
    }
}

impl fmt::Display for BinRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the bins of a histogram are chosen.
#[derive(Debug, Clone, PartialEq)]
pub enum Bins {
    /// Width picked by a rule, equal-width bins over the data range.
    Rule(BinRule),
    /// This many equal-width bins over the data range.
    Count(usize),
    /// Explicit, monotonically increasing bin edges.
    Edges(Vec<f64>),
}

impl Default for Bins {
    fn default() -> Self {
        Self::Rule(BinRule::Auto)
    }
}

impl From<BinRule> for Bins {
    fn from(rule: BinRule) -> Self {
        Self::Rule(rule)
    }
}

impl From<usize> for Bins {
    fn from(count: usize) -> Self {
        Self::Count(count)
    }
}

impl From<Vec<f64>> for Bins {
    fn from(edges: Vec<f64>) -> Self {
        Self::Edges(edges)
    }
}

impl<const N: usize> From<[f64; N]> for Bins {
    fn from(edges: [f64; N]) -> Self {
        Self::Edges(edges.to_vec())
    }
}

impl FromStr for Bins {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self::Rule)
    }
}

/// Result of binning: `edges.len() == hist.len() + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Binned {
    pub edges: Vec<f64>,
    /// Per-bin heights, density-normalized when requested.
    pub hist: Vec<f64>,
    /// Raw per-bin counts.
    pub counts: Vec<u64>,
}

/// Bin `samples`, ignoring NaN values.
pub fn bin_samples(samples: &[f64], bins: &Bins, density: bool) -> Result<Binned, FigureError> {
    let mut sorted: Vec<f64> = samples.iter().copied().filter(|v| !v.is_nan()).collect();
    sorted.sort_by(f64::total_cmp);

    let edges = match bins {
        Bins::Edges(edges) => {
            if edges.is_empty() {
                return Err(FigureError::invalid_value(
                    "bins",
                    "must contain at least one edge",
                    "[]",
                ));
            }
            if edges.iter().any(|e| e.is_nan()) || edges.windows(2).any(|w| w[0] > w[1]) {
                return Err(FigureError::invalid_value(
                    "bins",
                    "must increase monotonically",
                    format!("{edges:?}"),
                ));
            }
            edges.clone()
        }
        Bins::Count(0) => {
            return Err(FigureError::invalid_value("bins", "must be positive", 0));
        }
        Bins::Count(count) => {
            let (first, last) = outer_edges(&sorted)?;
            linspace(first, last, checked_bin_count(*count as f64)?)
        }
        Bins::Rule(rule) => {
            let (first, last) = outer_edges(&sorted)?;
            let width = rule.width(&sorted);
            let count = if width > 0.0 {
                checked_bin_count(((last - first) / width).ceil().max(1.0))?
            } else {
                1
            };
            linspace(first, last, count)
        }
    };

    let counts = count_in_bins(&sorted, &edges);
    let hist = if density {
        let total: u64 = counts.iter().sum();
        counts
            .iter()
            .zip(edges.windows(2))
            .map(|(&c, w)| c as f64 / (total as f64 * (w[1] - w[0])))
            .collect()
    } else {
        counts.iter().map(|&c| c as f64).collect()
    };

    Ok(Binned {
        edges,
        hist,
        counts,
    })
}

/// The range spanned by the bins when they are not given explicitly.
fn outer_edges(sorted: &[f64]) -> Result<(f64, f64), FigureError> {
    let (first, last) = match (sorted.first(), sorted.last()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => return Ok((0.0, 1.0)),
    };
    if !first.is_finite() || !last.is_finite() {
        return Err(FigureError::invalid_value(
            "samples",
            "must span a finite range",
            format!("[{first}, {last}]"),
        ));
    }
    if first == last {
        Ok((first - 0.5, last + 0.5))
    } else {
        Ok((first, last))
    }
}

/// Refuse bin counts above [`MAX_BINS`] before anything is allocated.
fn checked_bin_count(count: f64) -> Result<usize, FigureError> {
    if count > MAX_BINS as f64 {
        return Err(FigureError::invalid_value(
            "bins",
            format!("must produce at most {MAX_BINS} bins"),
            count,
        ));
    }
    Ok(count as usize)
}

fn linspace(first: f64, last: f64, bins: usize) -> Vec<f64> {
    let step = (last - first) / bins as f64;
    let mut edges: Vec<f64> = (0..bins).map(|i| first + i as f64 * step).collect();
    edges.push(last);
    edges
}

/// Count sorted samples per bin. Values outside `[edges[0], edges[-1]]` are skipped.
fn count_in_bins(sorted: &[f64], edges: &[f64]) -> Vec<u64> {
    let bins = edges.len().saturating_sub(1);
    let mut counts = vec![0u64; bins];
    if bins == 0 {
        return counts;
    }
    let last_edge = edges[bins];
    for &v in sorted {
        if v < edges[0] || v > last_edge {
            continue;
        }
        // Index of the last edge <= v, clamped so the last bin is closed.
        let idx = edges.partition_point(|&e| e <= v).saturating_sub(1).min(bins - 1);
        counts[idx] += 1;
    }
    counts
}

/// Linear-interpolated percentile of sorted, non-empty data.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let pos = q / 100.0 * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

fn std_dev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    var.sqrt()
}

/// The outline of a histogram as a polyline alternating vertical and
/// horizontal segments, from `x = -inf` to `x = +inf`.
///
/// `underflow` is the height left of the first edge and `overflow` the
/// height right of the last one.
pub fn step_outline(edges: &[f64], hist: &[f64], underflow: f64, overflow: f64) -> (Vec<f64>, Vec<f64>) {
    let mut x = Vec::with_capacity(2 * hist.len() + 4);
    let mut y = Vec::with_capacity(2 * hist.len() + 4);
    x.push(f64::NEG_INFINITY);
    y.push(underflow);

    let mut running = underflow;
    for (&edge, &height) in edges.iter().zip(hist) {
        x.extend([edge, edge]);
        y.extend([running, height]);
        running = height;
    }

    if let Some(&last) = edges.last() {
        x.extend([last, last]);
        y.extend([running, overflow]);
    }
    x.push(f64::INFINITY);
    y.push(overflow);
    (x, y)
}
