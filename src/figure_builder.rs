use crate::Color;
use crate::axis_scale::{Aspect, AxisScale};
use crate::error::FigureError;
use crate::figure::Figure;
use crate::value::Value;

/// Builder for configuring and constructing a [`Figure`].
///
/// Provides a fluent API for setting up the figure-level properties before
/// any trace is added. Unset properties stay unset on the built figure.
///
/// Unlike [`Figure::set_title`] and friends, which store an empty string as
/// given, the `with_title`, `with_subtitle`, `with_x_label` and
/// `with_y_label` methods ignore empty strings and leave the property unset.
/// Use [`with_property`](Self::with_property) to set an empty string
/// explicitly.
///
/// # Example
///
/// ```rust
/// use plot_facade::{AxisScale, FigureBuilder};
///
/// let figure = FigureBuilder::new()
///     .with_title("Basic heatmap plot")
///     .with_x_label("x")
///     .with_y_label("y")
///     .with_y_scale(AxisScale::Logarithmic)
///     .build()?;
/// assert_eq!(figure.xlabel(), Some("x"));
/// # Ok::<(), plot_facade::FigureError>(())
/// ```
#[derive(Debug, Default)]
pub struct FigureBuilder {
    title: Option<String>,
    subtitle: Option<String>,
    show_title: Option<bool>,
    x_label: Option<String>,
    y_label: Option<String>,
    x_scale: Option<AxisScale>,
    y_scale: Option<AxisScale>,
    aspect: Option<Aspect>,
    palette: Option<Vec<Color>>,
    properties: Vec<(String, Value)>,
}

impl FigureBuilder {
    /// Create a new FigureBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the figure title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let t = title.into();
        if !t.is_empty() {
            self.title = Some(t);
        }
        self
    }

    /// Set the figure subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        let s = subtitle.into();
        if !s.is_empty() {
            self.subtitle = Some(s);
        }
        self
    }

    /// Show or hide the title. The title is shown by default.
    pub fn with_show_title(mut self, show: bool) -> Self {
        self.show_title = Some(show);
        self
    }

    /// Set the x-axis label.
    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        let l = label.into();
        if !l.is_empty() {
            self.x_label = Some(l);
        }
        self
    }

    /// Set the y-axis label.
    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        let l = label.into();
        if !l.is_empty() {
            self.y_label = Some(l);
        }
        self
    }

    pub fn with_x_scale(mut self, scale: AxisScale) -> Self {
        self.x_scale = Some(scale);
        self
    }

    pub fn with_y_scale(mut self, scale: AxisScale) -> Self {
        self.y_scale = Some(scale);
        self
    }

    pub fn with_aspect(mut self, aspect: Aspect) -> Self {
        self.aspect = Some(aspect);
        self
    }

    /// Cycle default trace colors through `palette` instead of the built-in one.
    pub fn with_palette(mut self, palette: impl IntoIterator<Item = Color>) -> Self {
        self.palette = Some(palette.into_iter().collect());
        self
    }

    /// Set a property by name, validated on [`build`](Self::build).
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.push((name.into(), value.into()));
        self
    }

    /// Build the Figure. Named properties are applied last and fail the build
    /// if any of them is invalid.
    pub fn build(self) -> Result<Figure, FigureError> {
        let mut f = match self.palette {
            Some(palette) => Figure::with_palette(palette),
            None => Figure::new(),
        };

        if let Some(t) = self.title {
            f.set_title(t);
        }
        if let Some(s) = self.subtitle {
            f.set_subtitle(s);
        }
        if let Some(show) = self.show_title {
            f.set_show_title(show);
        }
        if let Some(x) = self.x_label {
            f.set_xlabel(x);
        }
        if let Some(y) = self.y_label {
            f.set_ylabel(y);
        }
        if let Some(scale) = self.x_scale {
            f.set_xscale(scale);
        }
        if let Some(scale) = self.y_scale {
            f.set_yscale(scale);
        }
        if let Some(aspect) = self.aspect {
            f.set_aspect(aspect);
        }

        f.set(self.properties)?;
        Ok(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;

    #[test]
    fn test_empty_labels_stay_unset() {
        let figure = FigureBuilder::new()
            .with_title("")
            .with_x_label("")
            .build()
            .unwrap();
        assert_eq!(figure.title(), None);
        assert_eq!(figure.xlabel(), None);

        let figure = FigureBuilder::new().with_property("title", "").build().unwrap();
        assert_eq!(figure.title(), Some(""));
    }

    #[test]
    fn test_named_properties() {
        let figure = FigureBuilder::new()
            .with_property("xlabel", "x")
            .with_property("aspect", "equal")
            .build()
            .unwrap();
        assert_eq!(figure.xlabel(), Some("x"));
        assert_eq!(figure.aspect(), Some(Aspect::Equal));

        let err = FigureBuilder::new()
            .with_property("zlabel", "z")
            .build()
            .unwrap_err();
        assert!(matches!(err, FigureError::InvalidValue { .. }));
    }

    #[test]
    fn test_palette() {
        let white = Color::from_rgb8(255, 255, 255);
        let mut figure = FigureBuilder::new().with_palette([white]).build().unwrap();
        figure.scatter(vec![0.0], vec![0.0], Options::new()).unwrap();
        figure.scatter(vec![0.0], vec![0.0], Options::new()).unwrap();
        assert!(figure.traces().iter().all(|t| t.color() == Some(white)));
    }
}
