// ripple-edit: Levenshtein engines.
// Distance-only (two rolling rows), distance with an optimal edit sequence,
// and incremental continuation from a prior result on string prefixes.

mod distance;
mod incremental;
mod sequence;
mod tests;

pub use distance::{edit_distance, edit_distance_with};
pub use incremental::{edit_distance_incremental, IncrementalResult};
pub use sequence::{edit_sequence, edit_sequence_bounded, edit_sequence_with};
