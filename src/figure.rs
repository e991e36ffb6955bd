//! The figure: figure-level properties plus an ordered list of traces.
//!
//! A [`Figure`] does not draw anything. It validates and normalizes what the
//! caller hands to it and keeps the result until a renderer reads
//! [`Figure::traces`].

use crate::Color;
use crate::array::Array;
use crate::axis_scale::{Aspect, AxisScale};
use crate::color_cycle::ColorCycle;
use crate::error::FigureError;
use crate::histogram::{Bins, bin_samples, step_outline};
use crate::options::{Options, allowed_options, validate_options};
use crate::property::{Assignment, Property};
use crate::trace::{Heatmap, Histogram, Scatter, Trace, TraceKind};
use crate::value::Value;

/// A titled collection of traces plus axis and display properties.
///
/// # Example
///
/// ```rust
/// use plot_facade::{Figure, Options};
///
/// let mut figure = Figure::new();
/// figure.set([("title", "Measurements"), ("xscale", "log")])?;
/// figure.scatter(vec![1.0, 10.0, 100.0], vec![2.0, 3.0, 4.0], Options::new().with("label", "run 1"))?;
/// assert_eq!(figure.traces().len(), 1);
/// # Ok::<(), plot_facade::FigureError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Figure {
    title: Option<String>,
    subtitle: Option<String>,
    show_title: bool,
    xlabel: Option<String>,
    ylabel: Option<String>,
    xscale: Option<AxisScale>,
    yscale: Option<AxisScale>,
    aspect: Option<Aspect>,
    traces: Vec<Trace>,
    colors: ColorCycle,
}

impl Default for Figure {
    fn default() -> Self {
        Self {
            title: None,
            subtitle: None,
            show_title: true,
            xlabel: None,
            ylabel: None,
            xscale: None,
            yscale: None,
            aspect: None,
            traces: Vec::new(),
            colors: ColorCycle::default(),
        }
    }
}

impl Figure {
    /// Create a new empty figure using the default color palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty figure whose default colors cycle through `palette`.
    pub fn with_palette(palette: impl IntoIterator<Item = Color>) -> Self {
        Self {
            colors: ColorCycle::new(palette),
            ..Self::default()
        }
    }

    // Figure properties ------------------------------------------------

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl ToString) {
        self.title = Some(title.to_string());
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn set_subtitle(&mut self, subtitle: impl ToString) {
        self.subtitle = Some(subtitle.to_string());
    }

    /// Whether the renderer should display the title. Defaults to `true`.
    pub fn show_title(&self) -> bool {
        self.show_title
    }

    pub fn set_show_title(&mut self, show: bool) {
        self.show_title = show;
    }

    pub fn xlabel(&self) -> Option<&str> {
        self.xlabel.as_deref()
    }

    pub fn set_xlabel(&mut self, label: impl ToString) {
        self.xlabel = Some(label.to_string());
    }

    pub fn ylabel(&self) -> Option<&str> {
        self.ylabel.as_deref()
    }

    pub fn set_ylabel(&mut self, label: impl ToString) {
        self.ylabel = Some(label.to_string());
    }

    pub fn xscale(&self) -> Option<AxisScale> {
        self.xscale
    }

    pub fn set_xscale(&mut self, scale: AxisScale) {
        self.xscale = Some(scale);
    }

    pub fn yscale(&self) -> Option<AxisScale> {
        self.yscale
    }

    pub fn set_yscale(&mut self, scale: AxisScale) {
        self.yscale = Some(scale);
    }

    pub fn aspect(&self) -> Option<Aspect> {
        self.aspect
    }

    pub fn set_aspect(&mut self, aspect: Aspect) {
        self.aspect = Some(aspect);
    }

    /// Current value of `property`, or `None` if it was never set.
    pub fn get(&self, property: Property) -> Option<Value> {
        match property {
            Property::Title => self.title.clone().map(Value::Str),
            Property::Subtitle => self.subtitle.clone().map(Value::Str),
            Property::ShowTitle => Some(Value::Bool(self.show_title)),
            Property::XLabel => self.xlabel.clone().map(Value::Str),
            Property::YLabel => self.ylabel.clone().map(Value::Str),
            Property::XScale => self.xscale.map(Value::from),
            Property::YScale => self.yscale.map(Value::from),
            Property::Aspect => self.aspect.map(Value::from),
        }
    }

    /// Set one property by name from a loosely typed value.
    pub fn set_property(&mut self, name: &str, value: impl Into<Value>) -> Result<(), FigureError> {
        self.set([(name, value)])
    }

    /// Set several properties by name.
    ///
    /// Every name and value is validated before anything is applied: on error
    /// the figure is left untouched.
    pub fn set<K, V>(&mut self, entries: impl IntoIterator<Item = (K, V)>) -> Result<(), FigureError>
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut assignments = Vec::new();
        for (key, value) in entries {
            let key = key.as_ref();
            let value = value.into();
            let property: Property = key.parse().map_err(|_| {
                FigureError::invalid_value(key, "cannot be set, invalid property", &value)
            })?;
            assignments.push(property.assignment(&value)?);
        }
        log::debug!(target: "plot_facade", "setting {} figure properties", assignments.len());
        for assignment in assignments {
            self.apply(assignment);
        }
        Ok(())
    }

    fn apply(&mut self, assignment: Assignment) {
        match assignment {
            Assignment::Title(s) => self.title = Some(s),
            Assignment::Subtitle(s) => self.subtitle = Some(s),
            Assignment::ShowTitle(b) => self.show_title = b,
            Assignment::XLabel(s) => self.xlabel = Some(s),
            Assignment::YLabel(s) => self.ylabel = Some(s),
            Assignment::XScale(s) => self.xscale = Some(s),
            Assignment::YScale(s) => self.yscale = Some(s),
            Assignment::Aspect(a) => self.aspect = Some(a),
        }
    }

    // Traces -----------------------------------------------------------

    /// The traces in draw order.
    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    pub fn len(&self) -> usize {
        self.traces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    /// Take the next color from this figure's default color cycle.
    pub fn pick_default_color(&mut self) -> Color {
        self.colors.pick()
    }

    /// Add a scatter trace of paired `x` and `y` values.
    ///
    /// Options: any of `label`, `color`, `marker`, `linestyle`, `linewidth`,
    /// `alpha`. Without a `color` the next default color is used.
    pub fn scatter(
        &mut self,
        x: impl Into<Array>,
        y: impl Into<Array>,
        options: Options,
    ) -> Result<(), FigureError> {
        let mut style = validate_options(allowed_options(TraceKind::Scatter), options)?;
        check_color(&style)?;
        let (x, y) = (x.into(), y.into());
        let (Some(x_len), Some(y_len)) = (x.len(), y.len()) else {
            let name = if x.is_iterable() { "y" } else { "x" };
            return Err(FigureError::NotIterable {
                name: name.to_owned(),
            });
        };
        if x_len != y_len {
            return Err(FigureError::LengthMismatch {
                left: "x",
                right: "y",
                left_len: x_len,
                right_len: y_len,
            });
        }
        self.fill_default_color(&mut style);

        log::debug!(target: "plot_facade", "adding scatter trace with {x_len} points");
        self.traces.push(Trace::Scatter(Scatter { x, y, style }));
        Ok(())
    }

    /// Add a histogram of `samples`.
    ///
    /// NaN samples are ignored. `density` normalizes the bin heights so the
    /// total area is one. The trace stores the histogram outline as a
    /// polyline running from `-inf` to `+inf`, so it can be drawn as a plain
    /// line, plus the raw bin edges and counts.
    ///
    /// Options: any of `label`, `color`, `marker`, `linestyle`, `linewidth`,
    /// `alpha`.
    pub fn histogram(
        &mut self,
        samples: impl Into<Array>,
        density: bool,
        bins: impl Into<Bins>,
        options: Options,
    ) -> Result<(), FigureError> {
        let mut style = validate_options(allowed_options(TraceKind::Histogram), options)?;
        check_color(&style)?;
        let samples = samples.into();
        if !samples.is_iterable() {
            return Err(FigureError::NotIterable {
                name: "samples".to_owned(),
            });
        }
        let binned = bin_samples(samples.values(), &bins.into(), density)?;

        // NaN compares false, so missing samples never land in under/overflow.
        let first = binned.edges[0];
        let last = binned.edges[binned.edges.len() - 1];
        let underflow = samples.values().iter().filter(|&&v| v < first).count() as u64;
        let overflow = samples.values().iter().filter(|&&v| v > last).count() as u64;

        let (x, y) = step_outline(&binned.edges, &binned.hist, underflow as f64, overflow as f64);
        let mut bin_count = Vec::with_capacity(binned.counts.len() + 2);
        bin_count.push(underflow);
        bin_count.extend_from_slice(&binned.counts);
        bin_count.push(overflow);

        self.fill_default_color(&mut style);

        log::debug!(
            target: "plot_facade",
            "adding histogram trace with {} bins (underflow={underflow}, overflow={overflow})",
            binned.counts.len()
        );
        self.traces.push(Trace::Histogram(Histogram {
            x,
            y,
            bin_edges: binned.edges,
            bin_count,
            hist: binned.hist,
            density,
            style,
        }));
        Ok(())
    }

    /// Add a heatmap: `z` is translated into a color at each `(x, y)` cell.
    ///
    /// `x` and `y` must be one dimensional, `z` two dimensional with shape
    /// `(len(y), len(x))`. Options:
    /// - `zscale`: `"lin"` (default) or `"log"`.
    /// - `zlabel`: a string labelling the color dimension.
    /// - `zlim`: `(zmin, zmax)`, two finite numbers.
    /// - `alpha`: transparency.
    ///
    /// NaN values in `z` are kept; how they are drawn is up to the renderer.
    pub fn heatmap(
        &mut self,
        x: impl Into<Array>,
        y: impl Into<Array>,
        z: impl Into<Array>,
        options: Options,
    ) -> Result<(), FigureError> {
        let mut style = validate_options(allowed_options(TraceKind::Heatmap), options)?;

        let zscale = match style.remove("zscale") {
            None => AxisScale::Linear,
            Some(Value::Str(s)) => s.parse().map_err(|_| {
                FigureError::invalid_value("zscale", format!("must be one of {:?}", AxisScale::NAMES), &s)
            })?,
            Some(other) => {
                return Err(FigureError::invalid_value(
                    "zscale",
                    format!("must be one of {:?}", AxisScale::NAMES),
                    other,
                ));
            }
        };
        let zlabel = match style.remove("zlabel") {
            None => None,
            Some(Value::Str(s)) => Some(s),
            Some(other) => {
                return Err(FigureError::InvalidType {
                    name: "zlabel".to_owned(),
                    expected: "a string",
                    received: format!("an object of type {}", other.type_name()),
                });
            }
        };
        let zlim = style.remove("zlim").map(|v| parse_zlim(&v)).transpose()?;

        let (x, y, z) = (x.into(), y.into(), z.into());
        if x.ndim() != 1 || y.ndim() != 1 {
            let (name, received) = if x.ndim() != 1 { ("x", x.shape()) } else { ("y", y.shape()) };
            return Err(FigureError::InvalidShape {
                name: name.to_owned(),
                expected: format!(
                    "one dimensional (x.ndim={}, y.ndim={})",
                    x.ndim(),
                    y.ndim()
                ),
                received: received.to_vec(),
            });
        }
        if z.ndim() != 2 {
            return Err(FigureError::InvalidShape {
                name: "z".to_owned(),
                expected: format!("two dimensional (z.ndim={})", z.ndim()),
                received: z.shape().to_vec(),
            });
        }
        let expected = [y.values().len(), x.values().len()];
        if z.shape() != expected {
            return Err(FigureError::InvalidShape {
                name: "z".to_owned(),
                expected: format!("of shape (len(y), len(x)) = {expected:?}"),
                received: z.shape().to_vec(),
            });
        }

        log::debug!(
            target: "plot_facade",
            "adding heatmap trace of {}x{} cells",
            expected[0],
            expected[1]
        );
        self.traces.push(Trace::Heatmap(Heatmap {
            x: x.into_values(),
            y: y.into_values(),
            z,
            zscale,
            zlabel,
            zlim,
            style,
        }));
        Ok(())
    }

    fn fill_default_color(&mut self, style: &mut Options) {
        if !style.contains("color") {
            style.insert("color", self.colors.pick());
        }
    }
}

/// An explicit `color` option must be a [`Color`].
fn check_color(style: &Options) -> Result<(), FigureError> {
    match style.get("color") {
        None | Some(Value::Color(_)) => Ok(()),
        Some(other) => Err(FigureError::InvalidType {
            name: "color".to_owned(),
            expected: "a color",
            received: format!("{other} ({})", other.type_name()),
        }),
    }
}

fn parse_zlim(value: &Value) -> Result<(f64, f64), FigureError> {
    let limits = match value {
        Value::List(items) if items.len() == 2 => items[0]
            .to_f64()
            .zip(items[1].to_f64())
            .filter(|(min, max)| min.is_finite() && max.is_finite()),
        _ => None,
    };
    limits.ok_or_else(|| {
        FigureError::invalid_value(
            "zlim",
            "must be a tuple of the form (zmin, zmax) with zmin and zmax float numbers",
            value,
        )
    })
}
