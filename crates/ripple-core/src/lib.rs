// ripple-core: shared value types for the string edit engines.
// Everything here is an immutable value returned to callers; the engines in
// ripple-edit and ripple-diff build these and never mutate them afterwards.

pub mod arena;
pub mod error;
pub mod operation;
pub mod runs;
pub mod sequence;
pub mod strip;

pub use arena::{LinkedSequence, SeqRef, SequenceArena};
pub use error::{Error, Result};
pub use operation::EditOperation;
pub use runs::{Diffs, RunKind, TextRun};
pub use sequence::{EditSequence, UniformKind, UniformSequence};
pub use strip::{strip_common_prefix, strip_common_suffix, Strip};

/// Collect a string into a char buffer. All positions in this workspace are
/// char indices into such a buffer.
pub fn chars_of(s: &str) -> Vec<char> {
    s.chars().collect()
}
