// Single-character edit operations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One atomic edit at a char position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditOperation {
    /// Insert `ch` so that it ends up at index `pos`.
    Insert { pos: usize, ch: char },
    /// Remove the char at `pos`. `ch` is the char being removed.
    Delete { pos: usize, ch: char },
    /// Overwrite the char at `pos` with `ch`.
    Substitute { pos: usize, ch: char },
}

impl EditOperation {
    pub fn pos(&self) -> usize {
        match *self {
            Self::Insert { pos, .. } | Self::Delete { pos, .. } | Self::Substitute { pos, .. } => {
                pos
            }
        }
    }

    pub fn ch(&self) -> char {
        match *self {
            Self::Insert { ch, .. } | Self::Delete { ch, .. } | Self::Substitute { ch, .. } => ch,
        }
    }

    /// Short marker used in the textual form: `+`, `-` or `$`.
    pub fn symbol(&self) -> char {
        match self {
            Self::Insert { .. } => '+',
            Self::Delete { .. } => '-',
            Self::Substitute { .. } => '$',
        }
    }

    /// The same operation moved `n` positions to the right.
    pub fn shifted(&self, n: usize) -> Self {
        match *self {
            Self::Insert { pos, ch } => Self::Insert { pos: pos + n, ch },
            Self::Delete { pos, ch } => Self::Delete { pos: pos + n, ch },
            Self::Substitute { pos, ch } => Self::Substitute { pos: pos + n, ch },
        }
    }

    /// Apply this operation to `buf` in place.
    pub fn apply(&self, buf: &mut Vec<char>) -> Result<()> {
        let len = buf.len();
        match *self {
            Self::Insert { pos, ch } if pos <= len => buf.insert(pos, ch),
            Self::Delete { pos, .. } if pos < len => {
                buf.remove(pos);
            }
            Self::Substitute { pos, ch } if pos < len => buf[pos] = ch,
            _ => return Err(Error::PositionOutOfRange { op: *self, len }),
        }
        Ok(())
    }
}

impl fmt::Display for EditOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.symbol(), self.pos(), self.ch())
    }
}
