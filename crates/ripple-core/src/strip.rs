// Common prefix/suffix stripping.
//
// Neither a shared prefix nor a shared suffix changes the edit distance, so
// the engines trim them before filling an O(n·m) table. A stripped suffix can
// be forgotten; a stripped prefix shifts every resulting position.

use serde::{Deserialize, Serialize};

/// Which common affixes an engine may strip before computing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Strip {
    pub prefix: bool,
    pub suffix: bool,
}

impl Strip {
    pub const NONE: Strip = Strip { prefix: false, suffix: false };
    pub const BOTH: Strip = Strip { prefix: true, suffix: true };

    pub fn new(prefix: bool, suffix: bool) -> Self {
        Self { prefix, suffix }
    }

    /// Apply to `pair` in place: suffix first, then prefix. Returns the
    /// number of prefix chars removed.
    pub fn apply(&self, pair: &mut [&str; 2]) -> usize {
        if self.suffix {
            strip_common_suffix(pair);
        }
        if self.prefix {
            strip_common_prefix(pair)
        } else {
            0
        }
    }
}

/// Remove the longest common prefix from both strings. Returns its length
/// in chars.
pub fn strip_common_prefix(pair: &mut [&str; 2]) -> usize {
    let [s, t] = *pair;
    let mut chars = 0;
    let mut bytes = 0;
    for (a, b) in s.chars().zip(t.chars()) {
        if a != b {
            break;
        }
        chars += 1;
        bytes += a.len_utf8();
    }
    if chars > 0 {
        *pair = [&s[bytes..], &t[bytes..]];
    }
    chars
}

/// Remove the longest common suffix from both strings. Returns its length
/// in chars.
pub fn strip_common_suffix(pair: &mut [&str; 2]) -> usize {
    let [s, t] = *pair;
    let mut chars = 0;
    let mut bytes = 0;
    for (a, b) in s.chars().rev().zip(t.chars().rev()) {
        if a != b {
            break;
        }
        chars += 1;
        bytes += a.len_utf8();
    }
    if chars > 0 {
        *pair = [&s[..s.len() - bytes], &t[..t.len() - bytes]];
    }
    chars
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(s: &str, t: &str) -> (usize, [String; 2]) {
        let mut pair = [s, t];
        let n = strip_common_prefix(&mut pair);
        (n, [pair[0].to_string(), pair[1].to_string()])
    }

    fn suffix(s: &str, t: &str) -> (usize, [String; 2]) {
        let mut pair = [s, t];
        let n = strip_common_suffix(&mut pair);
        (n, [pair[0].to_string(), pair[1].to_string()])
    }

    #[test]
    fn test_strip_common_prefix() {
        assert_eq!(prefix("afoo", "abar"), (1, ["foo".into(), "bar".into()]));
        assert_eq!(prefix("ab foo", "ab bar"), (3, ["foo".into(), "bar".into()]));
        assert_eq!(prefix("foo", "bar"), (0, ["foo".into(), "bar".into()]));
        assert_eq!(prefix("", ""), (0, ["".into(), "".into()]));
        assert_eq!(prefix("abc", "ab"), (2, ["c".into(), "".into()]));
    }

    #[test]
    fn test_strip_common_suffix() {
        assert_eq!(suffix("fooa", "bara"), (1, ["foo".into(), "bar".into()]));
        assert_eq!(suffix("fooab ", "barab "), (3, ["foo".into(), "bar".into()]));
        assert_eq!(suffix("foo", "bar"), (0, ["foo".into(), "bar".into()]));
        assert_eq!(suffix("", "x"), (0, ["".into(), "x".into()]));
    }

    #[test]
    fn multibyte_affixes_count_chars() {
        assert_eq!(prefix("日本語", "日本人"), (2, ["語".into(), "人".into()]));
        assert_eq!(suffix("héllo", "jéllo"), (4, ["h".into(), "j".into()]));
    }

    #[test]
    fn apply_strips_suffix_before_prefix() {
        // With the suffix taken first the shared "a" is gone before the
        // prefix pass sees the strings.
        let mut pair = ["aa", "aaa"];
        let prefix = Strip::BOTH.apply(&mut pair);
        assert_eq!(prefix, 0);
        assert_eq!(pair, ["", "a"]);

        let mut pair = ["xab", "xcb"];
        assert_eq!(Strip::NONE.apply(&mut pair), 0);
        assert_eq!(pair, ["xab", "xcb"]);
        assert_eq!(Strip::new(true, false).apply(&mut pair), 1);
        assert_eq!(pair, ["ab", "cb"]);
    }
}
