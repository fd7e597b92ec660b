use super::conv::{SeparableFilter, StaticSeparableFilter, BLUR_5TAP};

use serde::Deserialize;

/// Default pyramid depth, matching the comparison tool's `--maxlevels`.
pub const DEFAULT_LEVELS: usize = 8;

/// Options controlling pyramid construction.
#[derive(Clone, Copy, Deserialize)]
pub struct PyramidOptions {
    /// Number of pyramid levels (>= 1).
    #[serde(default = "default_levels")]
    pub levels: usize,
    /// Filter used for the blur stage.
    #[serde(skip)]
    pub filter: StaticSeparableFilter,
}

impl PyramidOptions {
    pub fn new(levels: usize) -> Self {
        Self {
            levels,
            filter: BLUR_5TAP,
        }
    }

    pub fn with_filter(mut self, filter: StaticSeparableFilter) -> Self {
        self.filter = filter;
        self
    }
}

impl Default for PyramidOptions {
    fn default() -> Self {
        Self::new(DEFAULT_LEVELS)
    }
}

fn default_levels() -> usize {
    DEFAULT_LEVELS
}

impl std::fmt::Debug for PyramidOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PyramidOptions")
            .field("levels", &self.levels)
            .field("filter_taps", &self.filter.taps().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{PyramidOptions, DEFAULT_LEVELS};

    #[test]
    fn default_depth_is_eight() {
        assert_eq!(PyramidOptions::default().levels, DEFAULT_LEVELS);
        assert_eq!(DEFAULT_LEVELS, 8);
    }

    #[test]
    fn deserializes_with_default_levels() {
        let opts: PyramidOptions = serde_json::from_str("{}").expect("valid json");
        assert_eq!(opts.levels, DEFAULT_LEVELS);

        let opts: PyramidOptions = serde_json::from_str(r#"{"levels": 3}"#).expect("valid json");
        assert_eq!(opts.levels, 3);
    }
}
