// ripple-diff: LCS-based text diffs.
// Independent of the Levenshtein engines; builds ripple_core::Diffs from the
// longest common subsequence of two strings.

mod diff;
mod lcs;

pub use diff::{diff, diff_unmerged, diff_with};
pub use lcs::{is_subsequence, longest_common_subsequence, longest_common_subsequence_with, LcsMode};
