use thiserror::Error;

/// Errors that can occur when configuring a figure or adding a trace.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FigureError {
    /// A property or argument received a value of the wrong type.
    #[error("<{name}> expects {expected}, received {received}.")]
    InvalidType {
        name: String,
        expected: &'static str,
        received: String,
    },

    /// A value of the right type but outside its allowed domain.
    #[error("<{name}> {reason}, received {received}.")]
    InvalidValue {
        name: String,
        reason: String,
        received: String,
    },

    /// An array does not have the required dimensions.
    #[error("<{name}> must be {expected}, received shape {received:?}.")]
    InvalidShape {
        name: String,
        expected: String,
        received: Vec<usize>,
    },

    /// An argument that must support iteration is a scalar.
    #[error("<{name}> must be iterable.")]
    NotIterable { name: String },

    /// Paired sequences differ in length.
    #[error("<{left}> and <{right}> must be of the same length but len({left})={left_len} and len({right})={right_len}.")]
    LengthMismatch {
        left: &'static str,
        right: &'static str,
        left_len: usize,
        right_len: usize,
    },

    /// Style keywords not supported by the trace kind.
    #[error("unsupported option(s) {keys:?}, expected any of {allowed:?}.")]
    UnsupportedOption {
        keys: Vec<String>,
        allowed: Vec<&'static str>,
    },
}

impl FigureError {
    pub(crate) fn invalid_value(
        name: impl Into<String>,
        reason: impl Into<String>,
        received: impl ToString,
    ) -> Self {
        Self::InvalidValue {
            name: name.into(),
            reason: reason.into(),
            received: received.to_string(),
        }
    }
}
