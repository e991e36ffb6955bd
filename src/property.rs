use core::fmt;
use core::str::FromStr;

use crate::axis_scale::{Aspect, AxisScale};
use crate::error::FigureError;
use crate::value::Value;

/// A figure-level property, as opposed to a per-trace style option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Title,
    Subtitle,
    ShowTitle,
    XLabel,
    YLabel,
    XScale,
    YScale,
    Aspect,
}

impl Property {
    pub const ALL: [Property; 8] = [
        Self::Title,
        Self::Subtitle,
        Self::ShowTitle,
        Self::XLabel,
        Self::YLabel,
        Self::XScale,
        Self::YScale,
        Self::Aspect,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Subtitle => "subtitle",
            Self::ShowTitle => "show_title",
            Self::XLabel => "xlabel",
            Self::YLabel => "ylabel",
            Self::XScale => "xscale",
            Self::YScale => "yscale",
            Self::Aspect => "aspect",
        }
    }

    /// Check `value` against this property's type and domain.
    pub(crate) fn assignment(self, value: &Value) -> Result<Assignment, FigureError> {
        Ok(match self {
            Self::Title => Assignment::Title(value.to_string()),
            Self::Subtitle => Assignment::Subtitle(value.to_string()),
            Self::XLabel => Assignment::XLabel(value.to_string()),
            Self::YLabel => Assignment::YLabel(value.to_string()),
            Self::ShowTitle => match value.as_bool() {
                Some(show) => Assignment::ShowTitle(show),
                None => {
                    return Err(FigureError::InvalidType {
                        name: self.as_str().to_owned(),
                        expected: "either true or false",
                        received: format!("{value} ({})", value.type_name()),
                    });
                }
            },
            Self::XScale => Assignment::XScale(self.parse_str(value)?),
            Self::YScale => Assignment::YScale(self.parse_str(value)?),
            Self::Aspect => Assignment::Aspect(self.parse_str(value)?),
        })
    }

    /// Parse an enumerated property, reporting errors under this property's name.
    fn parse_str<T: FromStr<Err = FigureError>>(self, value: &Value) -> Result<T, FigureError> {
        let parsed = match value {
            Value::Str(s) => s.parse(),
            other => Err(FigureError::invalid_value("", "must be a string", other)),
        };
        parsed.map_err(|err| match err {
            FigureError::InvalidValue {
                reason, received, ..
            } => FigureError::InvalidValue {
                name: self.as_str().to_owned(),
                reason,
                received,
            },
            other => other,
        })
    }
}

impl FromStr for Property {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| FigureError::invalid_value(s, "cannot be set", "an invalid property"))
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated property value, ready to be applied.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Assignment {
    Title(String),
    Subtitle(String),
    ShowTitle(bool),
    XLabel(String),
    YLabel(String),
    XScale(AxisScale),
    YScale(AxisScale),
    Aspect(Aspect),
}
