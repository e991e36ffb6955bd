//! Keyword style options and their per-trace-kind allow-sets.

use indexmap::IndexMap;

use crate::error::FigureError;
use crate::trace::TraceKind;
use crate::value::Value;
use crate::Color;

/// Style options shared by line-like traces.
const LINE_OPTIONS: &[&str] = &["label", "color", "marker", "linestyle", "linewidth", "alpha"];

/// Options accepted by a heatmap: its style option plus the z-axis extras.
const HEATMAP_OPTIONS: &[&str] = &["alpha", "zscale", "zlabel", "zlim"];

/// The options each trace kind accepts.
pub fn allowed_options(kind: TraceKind) -> &'static [&'static str] {
    match kind {
        TraceKind::Scatter | TraceKind::Histogram => LINE_OPTIONS,
        TraceKind::Heatmap => HEATMAP_OPTIONS,
    }
}

/// Return `options` unchanged if every key is in `allowed`.
///
/// Fails with [`FigureError::UnsupportedOption`] listing every offending key
/// in insertion order.
pub fn validate_options(
    allowed: &'static [&'static str],
    options: Options,
) -> Result<Options, FigureError> {
    let unsupported: Vec<String> = options
        .keys()
        .filter(|key| !allowed.iter().any(|name| name == key))
        .map(str::to_owned)
        .collect();
    if !unsupported.is_empty() {
        return Err(FigureError::UnsupportedOption {
            keys: unsupported,
            allowed: allowed.to_vec(),
        });
    }
    Ok(options)
}

/// An insertion-ordered mapping from option name to [`Value`].
///
/// ```rust
/// use plot_facade::Options;
/// let options = Options::new().with("label", "measured").with("alpha", 0.5);
/// assert_eq!(options.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options(IndexMap<String, Value>);

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an option.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Remove an option, keeping the order of the remaining ones.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `label` option, if it was given as a string.
    pub fn label(&self) -> Option<&str> {
        self.get("label").and_then(Value::as_str)
    }

    /// The `color` option, if it was given as a color.
    pub fn color(&self) -> Option<Color> {
        self.get("color").and_then(Value::as_color)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Options {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subset_passes_unchanged() {
        let options = Options::new().with("label", "a").with("alpha", 0.3);
        let validated = validate_options(LINE_OPTIONS, options.clone()).unwrap();
        assert_eq!(validated, options);
        assert_eq!(validated.keys().collect::<Vec<_>>(), ["label", "alpha"]);
    }

    #[test]
    fn test_bogus_option_rejected() {
        let options = Options::new().with("bogus", 1);
        let err = validate_options(LINE_OPTIONS, options).unwrap_err();
        assert_eq!(
            err,
            FigureError::UnsupportedOption {
                keys: vec!["bogus".to_owned()],
                allowed: LINE_OPTIONS.to_vec(),
            }
        );
    }

    #[test]
    fn test_all_offending_keys_reported() {
        let options = Options::new()
            .with("zeta", 1)
            .with("label", "ok")
            .with("alpha_", 1);
        match validate_options(LINE_OPTIONS, options) {
            Err(FigureError::UnsupportedOption { keys, .. }) => {
                assert_eq!(keys, ["zeta", "alpha_"]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_heatmap_allows_only_alpha_style() {
        let allowed = allowed_options(TraceKind::Heatmap);
        assert!(allowed.contains(&"alpha"));
        assert!(!allowed.contains(&"color"));
        assert!(allowed_options(TraceKind::Scatter).contains(&"linewidth"));
    }
}
