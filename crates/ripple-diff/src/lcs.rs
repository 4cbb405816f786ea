// Longest common subsequence.

use std::fmt::Write as _;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use ripple_core::chars_of;

/// How much of the LCS table to keep while computing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LcsMode {
    /// Two rows, recycled. The normal mode.
    #[default]
    Rolling,
    /// The whole table, dumped at trace level once filled. For debugging.
    FullMatrix,
}

/// Whether `a` can be obtained from `b` by deleting chars. O(|a| + |b|).
pub fn is_subsequence(a: &str, b: &str) -> bool {
    let mut rest = b.chars();
    a.chars().all(|c| rest.any(|d| d == c))
}

/// The longest common subsequence of `s` and `t`.
pub fn longest_common_subsequence(s: &str, t: &str) -> String {
    longest_common_subsequence_with(s, t, LcsMode::Rolling)
}

pub fn longest_common_subsequence_with(s: &str, t: &str, mode: LcsMode) -> String {
    let sc = chars_of(s);
    let tc = chars_of(t);
    let n = sc.len();
    let m = tc.len();
    if n == 0 || m == 0 {
        return String::new();
    }
    // The shorter string is often already a subsequence of the longer one
    if n <= m && is_subsequence(s, t) {
        log::debug!("longest_common_subsequence: {} chars, subsequence fast path", n);
        return s.to_string();
    }
    if n > m && is_subsequence(t, s) {
        log::debug!("longest_common_subsequence: {} chars, subsequence fast path", m);
        return t.to_string();
    }

    log::debug!("longest_common_subsequence: {}x{} chars, {:?}", n, m, mode);
    match mode {
        LcsMode::Rolling => rolling(&sc, &tc),
        LcsMode::FullMatrix => full_matrix(&sc, &tc),
    }
}

/// One table cell. Cells that only inherit a neighbour share its text.
#[derive(Debug, Clone)]
struct Subsequence {
    text: Rc<str>,
    chars: usize,
}

impl Subsequence {
    fn empty() -> Self {
        Self {
            text: Rc::from(""),
            chars: 0,
        }
    }

    fn push(&self, ch: char) -> Self {
        let mut text = String::with_capacity(self.text.len() + ch.len_utf8());
        text.push_str(&self.text);
        text.push(ch);
        Self {
            text: text.into(),
            chars: self.chars + 1,
        }
    }
}

/// Fill a cell from its neighbours. On a char match only the diagonal
/// counts; otherwise the longest of diagonal, left and up wins, with ties
/// going to the first seen.
fn fill_cell(
    s_i: char,
    t_j: char,
    diag: &Subsequence,
    left: &Subsequence,
    up: &Subsequence,
) -> Subsequence {
    if s_i == t_j {
        return diag.push(s_i);
    }
    let mut best = diag;
    for candidate in [left, up] {
        if candidate.chars > best.chars {
            best = candidate;
        }
    }
    best.clone()
}

fn rolling(s: &[char], t: &[char]) -> String {
    let m = t.len();
    let mut prev = vec![Subsequence::empty(); m + 1];
    let mut cur = vec![Subsequence::empty(); m + 1];
    for &s_i in s {
        cur[0] = Subsequence::empty();
        for j in 1..=m {
            cur[j] = fill_cell(s_i, t[j - 1], &prev[j - 1], &cur[j - 1], &prev[j]);
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[m].text.to_string()
}

fn full_matrix(s: &[char], t: &[char]) -> String {
    let n = s.len();
    let m = t.len();
    let mut table = vec![vec![Subsequence::empty(); m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            table[i][j] = fill_cell(
                s[i - 1],
                t[j - 1],
                &table[i - 1][j - 1],
                &table[i][j - 1],
                &table[i - 1][j],
            );
        }
    }
    log::trace!("lcs table\n{}", dump(&table));
    table[n][m].text.to_string()
}

fn dump(table: &[Vec<Subsequence>]) -> String {
    let mut out = String::new();
    for row in table {
        for (j, cell) in row.iter().enumerate() {
            if j > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{:?}", &*cell.text);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_subsequence() {
        assert!(is_subsequence("", ""));
        assert!(is_subsequence("", "abc"));
        assert!(is_subsequence("ac", "abc"));
        assert!(is_subsequence("abc", "abc"));
        assert!(!is_subsequence("ca", "abc"));
        assert!(!is_subsequence("abcd", "abc"));
        assert!(is_subsequence("가다", "가나다"));
    }

    #[test]
    fn test_longest_common_subsequence() {
        assert_eq!(longest_common_subsequence("ABCBDAB", "BDCABA"), "BDAB");
        assert_eq!(longest_common_subsequence("frabcodo", "0a12b345"), "ab");
        assert_eq!(longest_common_subsequence("kitten", "sitting"), "ittn");
        assert_eq!(longest_common_subsequence("abc", "xyz"), "");
        assert_eq!(longest_common_subsequence("", "xyz"), "");
    }

    #[test]
    fn shorter_subsequence_is_returned_whole() {
        assert_eq!(longest_common_subsequence("ace", "abcde"), "ace");
        assert_eq!(longest_common_subsequence("abcde", "bd"), "bd");
        assert_eq!(longest_common_subsequence("same", "same"), "same");
    }

    #[test]
    fn modes_agree() {
        for (s, t) in [
            ("ABCBDAB", "BDCABA"),
            ("frabcodo", "0a12b345"),
            ("kitten", "sitting"),
            ("hello world", "hallorathon"),
            ("가나다라", "나라다"),
        ] {
            assert_eq!(
                longest_common_subsequence_with(s, t, LcsMode::Rolling),
                longest_common_subsequence_with(s, t, LcsMode::FullMatrix),
                "{} / {}",
                s,
                t
            );
        }
    }

    #[test]
    fn mode_serde_names() {
        assert_eq!(serde_json::to_string(&LcsMode::FullMatrix).unwrap(), "\"full_matrix\"");
        let mode: LcsMode = serde_json::from_str("\"rolling\"").unwrap();
        assert_eq!(mode, LcsMode::Rolling);
        assert_eq!(LcsMode::default(), LcsMode::Rolling);
    }
}
