// Diff builder: text runs from a longest common subsequence.

use ripple_core::{chars_of, Diffs, TextRun};

use crate::lcs::{longest_common_subsequence_with, LcsMode};

/// Runs describing how `s` becomes `t`, with adjacent runs of the same kind
/// merged.
pub fn diff(s: &str, t: &str) -> Diffs {
    diff_with(s, t, LcsMode::Rolling)
}

pub fn diff_with(s: &str, t: &str, mode: LcsMode) -> Diffs {
    let lcs = longest_common_subsequence_with(s, t, mode);
    let diffs = Diffs::merged(diff_unmerged(s, t, &lcs));
    log::debug!(
        "diff: lcs {} chars, {} runs",
        lcs.chars().count(),
        diffs.len()
    );
    diffs
}

/// Runs for `s` against `t` aligned on `lcs`, one match run per `lcs` char
/// and nothing merged.
///
/// Each `lcs` char is matched at its first occurrence in what remains of
/// `s` and `t`. If `lcs` is not a common subsequence, alignment stops at the
/// first char that cannot be found and the rest is treated as unmatched.
pub fn diff_unmerged(s: &str, t: &str, lcs: &str) -> Diffs {
    let s = chars_of(s);
    let t = chars_of(t);
    let mut runs = Vec::new();
    let mut i = 0;
    let mut j = 0;
    for c in lcs.chars() {
        let found = (
            s[i..].iter().position(|&x| x == c),
            t[j..].iter().position(|&x| x == c),
        );
        let (Some(di), Some(dj)) = found else {
            log::warn!("diff: {:?} is not in both strings, aligning stops here", c);
            break;
        };
        push_unaligned(&mut runs, &s[i..i + di], &t[j..j + dj]);
        runs.push(TextRun::matched(c));
        i += di + 1;
        j += dj + 1;
    }
    push_unaligned(&mut runs, &s[i..], &t[j..]);
    Diffs::new(runs)
}

/// Runs for two spans with nothing in common. The overlap becomes a
/// substitution and the longer span's remainder an insert or delete.
fn push_unaligned(runs: &mut Vec<TextRun>, s: &[char], t: &[char]) {
    let text = |chars: &[char]| chars.iter().collect::<String>();
    match (s.len(), t.len()) {
        (0, 0) => {}
        (0, _) => runs.push(TextRun::insert(text(t))),
        (_, 0) => runs.push(TextRun::delete(text(s))),
        (n, m) if n <= m => {
            runs.push(TextRun::substitute(text(s), text(&t[..n])));
            if n < m {
                runs.push(TextRun::insert(text(&t[n..])));
            }
        }
        (_, m) => {
            runs.push(TextRun::substitute(text(&s[..m]), text(t)));
            runs.push(TextRun::delete(text(&s[m..])));
        }
    }
}
