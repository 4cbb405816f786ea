//! Incremental edit distance.
//!
//! When both strings only grow at the end (a user typing into two fields, a
//! stream being compared against a reference), the table for the previous
//! prefixes is still valid. Keeping its last row and last column is enough to
//! resume filling the larger table without redoing the settled part.
//!
//! ```text
//!         0 .. m0 | m0+1 .. m
//!       +---------+----------
//!   0   |  prior  |    a
//!  ..   |  table  |    a
//!   n0  |         |    a
//!       +---------+----------
//! n0+1  |    c         c
//!  ..   |    c         c
//!   n   |    c         c
//! ```
//!
//! Region `a` is filled from the prior last column, then the prior last row
//! completes row `n0`, and region `c` is filled normally.

use std::fmt;

use serde::{Deserialize, Serialize};

use ripple_core::chars_of;

use crate::distance::{compute, fill_rows, Frontier};

/// Distance between `s` and `t` together with the table frontier needed to
/// continue once either string is extended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncrementalResult {
    s: String,
    t: String,
    /// `A[i][|t|]` for `i` in `0..=|s|`.
    last_column: Vec<usize>,
    /// `A[|s|][j]` for `j` in `0..=|t|`.
    last_row: Vec<usize>,
    distance: usize,
}

impl IncrementalResult {
    fn new(s: &str, t: &str, frontier: Frontier) -> Self {
        let distance = frontier.distance();
        Self {
            s: s.to_string(),
            t: t.to_string(),
            last_column: frontier.last_column,
            last_row: frontier.last_row,
            distance,
        }
    }

    pub fn s(&self) -> &str {
        &self.s
    }

    pub fn t(&self) -> &str {
        &self.t
    }

    pub fn last_column(&self) -> &[usize] {
        &self.last_column
    }

    pub fn last_row(&self) -> &[usize] {
        &self.last_row
    }

    pub fn distance(&self) -> usize {
        self.distance
    }
}

impl fmt::Display for IncrementalResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IncrementalResult(s={:?}, t={:?}, distance={})",
            self.s, self.t, self.distance
        )
    }
}

/// Edit distance between `s` and `t`, continuing from `prior` when given.
///
/// `prior` must have been computed for a prefix of `s` and a prefix of `t`
/// (either may be the whole string). This is checked only in debug builds;
/// a prior for unrelated strings gives a meaningless distance.
pub fn edit_distance_incremental(
    s: &str,
    t: &str,
    prior: Option<&IncrementalResult>,
) -> IncrementalResult {
    let s_chars = chars_of(s);
    let t_chars = chars_of(t);

    let prior = match prior {
        Some(prior) => prior,
        None => {
            log::debug!(
                "edit_distance_incremental: no prior, {}x{} chars from scratch",
                s_chars.len(),
                t_chars.len()
            );
            return IncrementalResult::new(s, t, compute(&s_chars, &t_chars));
        }
    };

    debug_assert!(s.starts_with(prior.s.as_str()), "prior s is not a prefix of s");
    debug_assert!(t.starts_with(prior.t.as_str()), "prior t is not a prefix of t");
    debug_assert_eq!(prior.last_column.len(), prior.s.chars().count() + 1);
    debug_assert_eq!(prior.last_row.len(), prior.t.chars().count() + 1);

    let n = s_chars.len();
    let m = t_chars.len();
    let n0 = prior.last_column.len() - 1;
    let m0 = prior.last_row.len() - 1;
    log::debug!(
        "edit_distance_incremental: {}x{} chars, resuming from {}x{}",
        n,
        m,
        n0,
        m0
    );

    let mut prev = vec![0; m + 1];
    let mut cur = vec![0; m + 1];
    let mut last_column = vec![0; n + 1];

    // Row 0 right of the prior table
    prev[m0] = prior.last_column[0];
    for (j, cell) in prev.iter_mut().enumerate().skip(m0 + 1) {
        *cell = j;
    }
    last_column[0] = prev[m];

    // Rows 1..=n0 right of the prior table, seeded from its last column
    fill_rows(
        &s_chars,
        &t_chars,
        1..=n0,
        m0,
        Some(prior.last_column.as_slice()),
        &mut prev,
        &mut cur,
        &mut last_column,
    );

    // Row n0 left of the new columns is the prior last row
    prev[..=m0].copy_from_slice(&prior.last_row);

    // Everything below the prior table
    fill_rows(
        &s_chars,
        &t_chars,
        n0 + 1..=n,
        0,
        None,
        &mut prev,
        &mut cur,
        &mut last_column,
    );

    IncrementalResult::new(
        s,
        t,
        Frontier {
            last_column,
            last_row: prev,
        },
    )
}
