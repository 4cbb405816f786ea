// Distance-only engine: O(n·m) time, two rows of O(min(n, m)) memory.

use std::ops::RangeInclusive;

use ripple_core::{chars_of, Strip};

/// The parts of a finished table kept for incremental continuation.
#[derive(Debug, Clone)]
pub(crate) struct Frontier {
    /// `A[i][m]` for every row `i` in `0..=n`.
    pub last_column: Vec<usize>,
    /// `A[n][j]` for every column `j` in `0..=m`.
    pub last_row: Vec<usize>,
}

impl Frontier {
    pub fn distance(&self) -> usize {
        self.last_row[self.last_row.len() - 1]
    }
}

/// Levenshtein distance between `s` and `t`, counted in chars.
pub fn edit_distance(s: &str, t: &str) -> usize {
    let s = chars_of(s);
    let t = chars_of(t);
    if s.is_empty() {
        return t.len();
    }
    if t.is_empty() {
        return s.len();
    }
    // The shorter string runs along the row
    let frontier = if t.len() <= s.len() {
        compute(&s, &t)
    } else {
        compute(&t, &s)
    };
    log::debug!(
        "edit_distance: {}x{} chars, distance {}",
        s.len(),
        t.len(),
        frontier.distance()
    );
    frontier.distance()
}

/// [`edit_distance`] after stripping the affixes `strip` allows.
pub fn edit_distance_with(s: &str, t: &str, strip: Strip) -> usize {
    let mut pair = [s, t];
    let prefix = strip.apply(&mut pair);
    log::debug!(
        "edit_distance_with: stripped {} prefix chars, {}+{} bytes remain",
        prefix,
        pair[0].len(),
        pair[1].len()
    );
    edit_distance(pair[0], pair[1])
}

/// Fill the whole table for `s` (rows) against `t` (columns).
pub(crate) fn compute(s: &[char], t: &[char]) -> Frontier {
    let n = s.len();
    let m = t.len();
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut cur = vec![0; m + 1];
    let mut last_column = vec![0; n + 1];
    last_column[0] = prev[m];
    fill_rows(s, t, 1..=n, 0, None, &mut prev, &mut cur, &mut last_column);
    Frontier {
        last_column,
        last_row: prev,
    }
}

/// Fill `rows` of the table from column `j_start` to the last column.
///
/// `prev` holds the row above the first one filled and `cur` is scratch;
/// the two are swapped after every row, so on return `prev` holds the last
/// row filled. Column `j_start` of each row comes from `left_edge[i]` when
/// given, or is `i` (the cost of deleting `s[..i]`) when not. The last cell
/// of every row is recorded in `last_column`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn fill_rows(
    s: &[char],
    t: &[char],
    rows: RangeInclusive<usize>,
    j_start: usize,
    left_edge: Option<&[usize]>,
    prev: &mut Vec<usize>,
    cur: &mut Vec<usize>,
    last_column: &mut [usize],
) {
    let m = t.len();
    for i in rows {
        let s_i = s[i - 1];
        cur[j_start] = match left_edge {
            Some(edge) => edge[i],
            None => i,
        };
        for j in j_start + 1..=m {
            let cost = usize::from(s_i != t[j - 1]);
            cur[j] = (cur[j - 1] + 1).min(prev[j] + 1).min(prev[j - 1] + cost);
        }
        last_column[i] = cur[m];
        std::mem::swap(prev, cur);
    }
}
