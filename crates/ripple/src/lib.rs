// ripple: string edit distance, optimal edit sequences, incremental
// distance, and LCS diffs behind one configurable engine.

pub mod engine;
pub mod settings;

pub use engine::Ripple;
pub use settings::{load_settings, load_settings_from, save_settings, save_settings_to, Settings};

pub use ripple_core::{
    EditOperation, EditSequence, Diffs, Error, Result, RunKind, Strip, TextRun, UniformKind,
    UniformSequence,
};
pub use ripple_diff::{
    diff, diff_unmerged, diff_with, is_subsequence, longest_common_subsequence,
    longest_common_subsequence_with, LcsMode,
};
pub use ripple_edit::{
    edit_distance, edit_distance_incremental, edit_distance_with, edit_sequence,
    edit_sequence_bounded, edit_sequence_with, IncrementalResult,
};
