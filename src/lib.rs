//! A backend-agnostic figure and trace model for plotting.
//!
//! - Describe a figure once (title, labels, axis scales) and add traces
//!   (scatter, histogram, heatmap) through one API
//! - Every input is validated and normalized before it is stored
//! - A renderer for any plotting backend reads the result through
//!   [`Figure::traces`]
//!
//! Quick start:
//!
//! ```rust
//! use plot_facade::{Bins, FigureBuilder, Options};
//!
//! let mut figure = FigureBuilder::new()
//!     .with_title("Samples")
//!     .with_x_label("value")
//!     .build()?;
//! figure.histogram(vec![1.0, 2.0, 2.0, 3.0, f64::NAN], false, Bins::default(), Options::new())?;
//! figure.scatter(vec![0.0, 1.0], vec![1.0, 0.0], Options::new().with("label", "line"))?;
//! assert_eq!(figure.traces().len(), 2);
//! # Ok::<(), plot_facade::FigureError>(())
//! ```
pub mod array;
pub mod axis_scale;
pub mod color_cycle;
pub mod error;
pub mod figure;
pub mod figure_builder;
pub mod histogram;
pub mod options;
pub mod property;
pub mod trace;
pub mod value;

// Iced re-exports.
pub use iced::Color;

// Re-exports of public types.
pub use array::Array;
pub use axis_scale::{Aspect, AxisScale};
pub use color_cycle::{ColorCycle, DEFAULT_COLORS};
pub use error::FigureError;
pub use figure::Figure;
pub use figure_builder::FigureBuilder;
pub use histogram::{BinRule, Bins, MAX_BINS};
pub use options::{Options, allowed_options, validate_options};
pub use property::Property;
pub use trace::{Heatmap, Histogram, Scatter, Trace, TraceKind};
pub use value::Value;
