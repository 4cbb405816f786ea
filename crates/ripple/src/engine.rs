// Ripple: the engines with a Settings applied.

use ripple_core::{Diffs, EditSequence, Result};
use ripple_diff::{diff_with, longest_common_subsequence_with};
use ripple_edit::{
    edit_distance_incremental, edit_distance_with, edit_sequence_bounded, IncrementalResult,
};

use crate::settings::{load_settings, Settings};

#[derive(Debug, Clone, Default)]
pub struct Ripple {
    settings: Settings,
}

impl Ripple {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// An engine configured from the platform settings file.
    pub fn from_config() -> Self {
        Self::new(load_settings())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn distance(&self, s: &str, t: &str) -> usize {
        edit_distance_with(s, t, self.settings.strip())
    }

    /// An optimal edit sequence from `s` to `t`. Fails with
    /// [`ripple_core::Error::InputTooLarge`] past the configured cell limit.
    pub fn sequence(&self, s: &str, t: &str) -> Result<EditSequence> {
        edit_sequence_bounded(s, t, self.settings.strip(), self.settings.max_sequence_cells)
    }

    /// Incremental distance. Affix stripping does not apply here since the
    /// prior frontier is tied to the full strings.
    pub fn incremental(
        &self,
        s: &str,
        t: &str,
        prior: Option<&IncrementalResult>,
    ) -> IncrementalResult {
        edit_distance_incremental(s, t, prior)
    }

    pub fn lcs(&self, s: &str, t: &str) -> String {
        longest_common_subsequence_with(s, t, self.settings.lcs_mode)
    }

    pub fn diff(&self, s: &str, t: &str) -> Diffs {
        diff_with(s, t, self.settings.lcs_mode)
    }
}
