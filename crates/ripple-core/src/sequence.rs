// Edit sequences: ordered, replayable lists of edit operations.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::arena::LinkedSequence;
use crate::error::Result;
use crate::operation::EditOperation;

// ──────────────────────────────────────────────
// UniformSequence
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniformKind {
    /// Build the string from nothing, one char at a time, left to right.
    Insert,
    /// Erase the string from the front, one char at a time.
    Delete,
}

/// Insert or delete every char of a string, stored as the string itself
/// instead of one operation per char.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformSequence {
    kind: UniformKind,
    chars: Vec<char>,
}

impl UniformSequence {
    pub fn new(kind: UniformKind, chars: &[char]) -> Self {
        Self { kind, chars: chars.to_vec() }
    }

    /// The sequence that turns `""` into `s`.
    pub fn insertions(s: &str) -> Self {
        Self { kind: UniformKind::Insert, chars: s.chars().collect() }
    }

    /// The sequence that turns `s` into `""`.
    pub fn deletions(s: &str) -> Self {
        Self { kind: UniformKind::Delete, chars: s.chars().collect() }
    }

    pub fn kind(&self) -> UniformKind {
        self.kind
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The `i`-th operation. Deletions always hit position 0 since the
    /// string shrinks from the front.
    pub fn op_at(&self, i: usize) -> EditOperation {
        let ch = self.chars[i];
        match self.kind {
            UniformKind::Insert => EditOperation::Insert { pos: i, ch },
            UniformKind::Delete => EditOperation::Delete { pos: 0, ch },
        }
    }

    pub fn operations(&self) -> Vec<EditOperation> {
        (0..self.len()).map(|i| self.op_at(i)).collect()
    }
}

// ──────────────────────────────────────────────
// EditSequence
// ──────────────────────────────────────────────

/// An ordered list of edits that turns one string into another when
/// replayed in order.
#[derive(Debug, Clone)]
pub enum EditSequence {
    /// Materialized operations.
    Array(Vec<EditOperation>),
    /// Chain of operations sharing a prefix with other chains.
    Linked(LinkedSequence),
    /// All-insert or all-delete run over one string.
    Uniform(UniformSequence),
}

impl EditSequence {
    pub fn empty() -> Self {
        Self::Array(Vec::new())
    }

    /// Number of operations. For an optimal sequence this is the edit distance.
    pub fn len(&self) -> usize {
        match self {
            Self::Array(ops) => ops.len(),
            Self::Linked(linked) => linked.len(),
            Self::Uniform(uniform) => uniform.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The operations in replay order. Only the array form avoids a copy.
    pub fn operations(&self) -> Cow<'_, [EditOperation]> {
        match self {
            Self::Array(ops) => Cow::Borrowed(ops),
            Self::Linked(linked) => Cow::Owned(linked.operations()),
            Self::Uniform(uniform) => Cow::Owned(uniform.operations()),
        }
    }

    pub fn iter(&self) -> std::vec::IntoIter<EditOperation> {
        self.operations().into_owned().into_iter()
    }

    /// Replay the operations against `s`.
    ///
    /// Fails with [`crate::Error::PositionOutOfRange`] when `s` is not the
    /// string this sequence was computed for and an operation runs off the
    /// end of the buffer.
    pub fn apply(&self, s: &str) -> Result<String> {
        let mut buf: Vec<char> = s.chars().collect();
        for op in self.operations().iter() {
            op.apply(&mut buf)?;
        }
        Ok(buf.into_iter().collect())
    }

    /// An array-backed copy with every position moved `n` places right.
    /// Used to account for a common prefix stripped before computation.
    pub fn shift(&self, n: usize) -> EditSequence {
        Self::Array(self.operations().iter().map(|op| op.shifted(n)).collect())
    }
}

impl PartialEq for EditSequence {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.operations() == other.operations()
    }
}

impl Eq for EditSequence {}

impl From<Vec<EditOperation>> for EditSequence {
    fn from(ops: Vec<EditOperation>) -> Self {
        Self::Array(ops)
    }
}

impl FromIterator<EditOperation> for EditSequence {
    fn from_iter<I: IntoIterator<Item = EditOperation>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}

impl fmt::Display for EditSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, op) in self.operations().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", op)?;
        }
        f.write_str("]")
    }
}

// Serialized as a flat list of operations regardless of representation.
impl Serialize for EditSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.operations().iter())
    }
}

impl<'de> Deserialize<'de> for EditSequence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<EditOperation>::deserialize(deserializer).map(Self::Array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_insertions_build_string() {
        let seq = EditSequence::Uniform(UniformSequence::insertions("abc"));
        assert_eq!(seq.len(), 3);
        assert_eq!(
            seq.operations().as_ref(),
            &[
                EditOperation::Insert { pos: 0, ch: 'a' },
                EditOperation::Insert { pos: 1, ch: 'b' },
                EditOperation::Insert { pos: 2, ch: 'c' },
            ]
        );
        assert_eq!(seq.apply("").unwrap(), "abc");
    }

    #[test]
    fn uniform_deletions_always_hit_front() {
        let seq = EditSequence::Uniform(UniformSequence::deletions("abc"));
        assert!(seq.iter().all(|op| op.pos() == 0));
        assert_eq!(seq.apply("abc").unwrap(), "");
        // Trailing text past the deleted run is kept
        assert_eq!(seq.apply("abcdef").unwrap(), "def");
    }

    #[test]
    fn empty_sequence_is_identity() {
        let seq = EditSequence::empty();
        assert!(seq.is_empty());
        assert_eq!(seq.apply("unchanged").unwrap(), "unchanged");
        assert_eq!(seq.to_string(), "[]");
    }

    #[test]
    fn shift_moves_every_position() {
        let seq: EditSequence = vec![
            EditOperation::Substitute { pos: 0, ch: 'x' },
            EditOperation::Insert { pos: 1, ch: 'y' },
        ]
        .into();
        let shifted = seq.shift(3);
        assert_eq!(shifted.operations()[0], EditOperation::Substitute { pos: 3, ch: 'x' });
        assert_eq!(shifted.apply("abcd").unwrap(), "abcxy");
    }

    #[test]
    fn shift_of_uniform_deletions_targets_offset() {
        let seq = EditSequence::Uniform(UniformSequence::deletions("bc")).shift(1);
        assert_eq!(seq.apply("abcd").unwrap(), "ad");
    }

    #[test]
    fn apply_to_wrong_string_fails() {
        let seq = EditSequence::Uniform(UniformSequence::deletions("abc"));
        assert!(seq.apply("ab").is_err());
    }

    #[test]
    fn equality_ignores_representation() {
        let uniform = EditSequence::Uniform(UniformSequence::insertions("ab"));
        let array: EditSequence = uniform.iter().collect();
        assert_eq!(uniform, array);
    }

    #[test]
    fn display_lists_operations() {
        let seq: EditSequence = vec![
            EditOperation::Delete { pos: 0, ch: 'a' },
            EditOperation::Insert { pos: 1, ch: 'a' },
        ]
        .into();
        assert_eq!(seq.to_string(), "[-(0, a), +(1, a)]");
    }

    #[test]
    fn serde_round_trip_flattens_representation() {
        let seq = EditSequence::Uniform(UniformSequence::deletions("xy"));
        let json = serde_json::to_string(&seq).unwrap();
        let back: EditSequence = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, EditSequence::Array(_)));
        assert_eq!(back, seq);
    }
}
