use core::fmt;
use core::str::FromStr;

use crate::error::FigureError;

/// Axis scaling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisScale {
    /// Linear axis: displayed value is the raw data value.
    #[default]
    Linear,

    /// Logarithmic axis. Only positive values are representable on this axis.
    Logarithmic,
}

impl AxisScale {
    pub const NAMES: [&'static str; 2] = ["lin", "log"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "lin",
            Self::Logarithmic => "log",
        }
    }
}

impl FromStr for AxisScale {
    type Err = FigureError;

    /// Accepts `lin`/`linear` and `log`/`logarithmic`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lin" | "linear" => Ok(Self::Linear),
            "log" | "logarithmic" => Ok(Self::Logarithmic),
            _ => Err(FigureError::invalid_value(
                "scale",
                format!("must be one of {:?}", Self::NAMES),
                s,
            )),
        }
    }
}

impl fmt::Display for AxisScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data aspect ratio handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aspect {
    /// One unit on x spans the same length as one unit on y.
    Equal,
    /// Aspect explicitly left to the renderer.
    Unset,
}

impl Aspect {
    pub const NAMES: [&'static str; 2] = ["equal", "unset"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Unset => "unset",
        }
    }
}

impl FromStr for Aspect {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equal" => Ok(Self::Equal),
            "unset" | "none" => Ok(Self::Unset),
            _ => Err(FigureError::invalid_value(
                "aspect",
                format!("must be one of {:?}", Self::NAMES),
                s,
            )),
        }
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
