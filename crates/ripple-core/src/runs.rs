// Text runs: the human-readable form of a diff.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a [`TextRun`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunKind {
    Match,
    Insert,
    Delete,
    Substitute,
}

/// A contiguous span of text sharing one diff classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TextRun {
    /// Present in both strings.
    Match { text: String },
    /// Present only in the target.
    Insert { text: String },
    /// Present only in the source.
    Delete { text: String },
    /// `from` in the source was replaced by `to` in the target.
    Substitute { from: String, to: String },
}

impl TextRun {
    pub fn matched(text: impl Into<String>) -> Self {
        Self::Match { text: text.into() }
    }

    pub fn insert(text: impl Into<String>) -> Self {
        Self::Insert { text: text.into() }
    }

    pub fn delete(text: impl Into<String>) -> Self {
        Self::Delete { text: text.into() }
    }

    pub fn substitute(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::Substitute {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn kind(&self) -> RunKind {
        match self {
            Self::Match { .. } => RunKind::Match,
            Self::Insert { .. } => RunKind::Insert,
            Self::Delete { .. } => RunKind::Delete,
            Self::Substitute { .. } => RunKind::Substitute,
        }
    }

    /// This run's contribution to the source string (empty for inserts).
    pub fn source_text(&self) -> &str {
        match self {
            Self::Match { text } | Self::Delete { text } => text,
            Self::Substitute { from, .. } => from,
            Self::Insert { .. } => "",
        }
    }

    /// This run's contribution to the target string (empty for deletes).
    pub fn target_text(&self) -> &str {
        match self {
            Self::Match { text } | Self::Insert { text } => text,
            Self::Substitute { to, .. } => to,
            Self::Delete { .. } => "",
        }
    }

    /// The text shown when printing this run: the target side, except for
    /// deletions which only have a source side.
    pub fn text(&self) -> &str {
        match self {
            Self::Delete { text } => text,
            _ => self.target_text(),
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Match { .. } => '=',
            Self::Insert { .. } => '+',
            Self::Delete { .. } => '-',
            Self::Substitute { .. } => '$',
        }
    }

    /// Append `other` to this run if both have the same kind. Returns
    /// `other` back when the kinds differ.
    pub fn merge(&mut self, other: TextRun) -> Option<TextRun> {
        match (self, other) {
            (Self::Match { text }, Self::Match { text: more })
            | (Self::Insert { text }, Self::Insert { text: more })
            | (Self::Delete { text }, Self::Delete { text: more }) => {
                text.push_str(&more);
                None
            }
            (Self::Substitute { from, to }, Self::Substitute { from: f, to: t }) => {
                from.push_str(&f);
                to.push_str(&t);
                None
            }
            (_, other) => Some(other),
        }
    }
}

impl fmt::Display for TextRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.symbol(), self.text())
    }
}

// ──────────────────────────────────────────────
// Diffs
// ──────────────────────────────────────────────

/// An ordered list of text runs describing how one string becomes another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diffs {
    runs: Vec<TextRun>,
}

impl Diffs {
    /// Wrap `runs` as given, without merging.
    pub fn new(runs: Vec<TextRun>) -> Self {
        Self { runs }
    }

    /// Build from `runs`, merging adjacent runs of the same kind and
    /// dropping empty ones.
    pub fn merged<I: IntoIterator<Item = TextRun>>(runs: I) -> Self {
        let mut out: Vec<TextRun> = Vec::new();
        for run in runs {
            if run.source_text().is_empty() && run.target_text().is_empty() {
                continue;
            }
            let leftover = match out.last_mut() {
                Some(last) => last.merge(run),
                None => Some(run),
            };
            if let Some(run) = leftover {
                out.push(run);
            }
        }
        Self { runs: out }
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    pub fn into_runs(self) -> Vec<TextRun> {
        self.runs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TextRun> {
        self.runs.iter()
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Number of chars not covered by a match run.
    pub fn edit_distance(&self) -> usize {
        self.runs
            .iter()
            .filter(|run| run.kind() != RunKind::Match)
            .map(|run| run.text().chars().count())
            .sum()
    }

    /// Concatenation of every non-insert run.
    pub fn source(&self) -> String {
        self.runs.iter().map(TextRun::source_text).collect()
    }

    /// Concatenation of every non-delete run.
    pub fn target(&self) -> String {
        self.runs.iter().map(TextRun::target_text).collect()
    }
}

impl fmt::Display for Diffs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, run) in self.runs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", run)?;
        }
        f.write_str("]")
    }
}

impl IntoIterator for Diffs {
    type Item = TextRun;
    type IntoIter = std::vec::IntoIter<TextRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diffs {
    type Item = &'a TextRun;
    type IntoIter = std::slice::Iter<'a, TextRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}
