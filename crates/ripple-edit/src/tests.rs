#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use ripple_core::Strip;

    use crate::{
        edit_distance, edit_distance_incremental, edit_distance_with, edit_sequence,
        edit_sequence_with,
    };

    /// Short strings over a small alphabet so that matches are common.
    fn word() -> impl Strategy<Value = String> {
        "[abc]{0,12}"
    }

    /// Mixed-width chars to exercise char (not byte) positions.
    fn unicode_word() -> impl Strategy<Value = String> {
        "[aé가🦀]{0,8}"
    }

    fn strip_mode() -> impl Strategy<Value = Strip> {
        (any::<bool>(), any::<bool>()).prop_map(|(prefix, suffix)| Strip::new(prefix, suffix))
    }

    // ──────────────────────────────────────────
    // Cross-engine scenarios
    // ──────────────────────────────────────────

    #[test]
    fn test_sequence_length_is_distance() {
        for (s, t) in [
            ("kitten", "sitting"),
            ("elephant", "hippo"),
            ("hippo", "zzzzzzzz"),
            ("bar", "f"),
            ("", "abc"),
            ("abc", ""),
        ] {
            let seq = edit_sequence(s, t).unwrap();
            assert_eq!(seq.len(), edit_distance(s, t), "{} -> {}", s, t);
            assert_eq!(seq.apply(s).unwrap(), t);
        }
    }

    #[test]
    fn test_incremental_agrees_with_scratch() {
        let prior = edit_distance_incremental("Hellr W", "Hello World", None);
        let next = edit_distance_incremental("Hellr Woz", "Hello World", Some(&prior));
        assert_eq!(next.distance(), edit_distance("Hellr Woz", "Hello World"));
    }

    // ──────────────────────────────────────────
    // Properties
    // ──────────────────────────────────────────

    proptest! {
        #[test]
        fn distance_is_symmetric(s in word(), t in word()) {
            prop_assert_eq!(edit_distance(&s, &t), edit_distance(&t, &s));
        }

        #[test]
        fn distance_to_self_is_zero(s in unicode_word()) {
            prop_assert_eq!(edit_distance(&s, &s), 0);
            prop_assert!(edit_sequence(&s, &s).unwrap().is_empty());
        }

        #[test]
        fn distance_to_empty_is_length(s in unicode_word()) {
            prop_assert_eq!(edit_distance(&s, ""), s.chars().count());
            prop_assert_eq!(edit_distance("", &s), s.chars().count());
        }

        #[test]
        fn sequence_replays_to_target(s in unicode_word(), t in unicode_word()) {
            let seq = edit_sequence(&s, &t).unwrap();
            prop_assert_eq!(seq.apply(&s).unwrap(), t);
        }

        #[test]
        fn sequence_is_optimal(s in word(), t in word()) {
            let seq = edit_sequence(&s, &t).unwrap();
            prop_assert_eq!(seq.len(), edit_distance(&s, &t));
        }

        #[test]
        fn triangle_inequality(a in word(), b in word(), c in word()) {
            prop_assert!(edit_distance(&a, &c) <= edit_distance(&a, &b) + edit_distance(&b, &c));
        }

        #[test]
        fn distance_is_bounded_by_longer_length(s in word(), t in word()) {
            let d = edit_distance(&s, &t);
            prop_assert!(d <= s.len().max(t.len()));
            prop_assert!(d >= s.len().abs_diff(t.len()));
        }

        #[test]
        fn incremental_matches_scratch(
            s in word(),
            t in word(),
            cut_s in 0usize..=12,
            cut_t in 0usize..=12,
        ) {
            let s0: String = s.chars().take(cut_s).collect();
            let t0: String = t.chars().take(cut_t).collect();
            let prior = edit_distance_incremental(&s0, &t0, None);
            let next = edit_distance_incremental(&s, &t, Some(&prior));
            let scratch = edit_distance_incremental(&s, &t, None);
            prop_assert_eq!(next.distance(), edit_distance(&s, &t));
            prop_assert_eq!(next, scratch);
        }

        #[test]
        fn incremental_chain_one_char_at_a_time(s in unicode_word(), t in unicode_word()) {
            let s: Vec<char> = s.chars().collect();
            let t: Vec<char> = t.chars().collect();
            let mut prior = edit_distance_incremental("", "", None);
            for k in 1..=s.len().max(t.len()) {
                let s_k: String = s.iter().take(k).collect();
                let t_k: String = t.iter().take(k).collect();
                prior = edit_distance_incremental(&s_k, &t_k, Some(&prior));
                prop_assert_eq!(prior.distance(), edit_distance(&s_k, &t_k));
            }
        }

        #[test]
        fn stripping_is_neutral(s in word(), t in word(), strip in strip_mode()) {
            prop_assert_eq!(edit_distance_with(&s, &t, strip), edit_distance(&s, &t));
            let seq = edit_sequence_with(&s, &t, strip).unwrap();
            prop_assert_eq!(seq.len(), edit_distance(&s, &t));
            prop_assert_eq!(seq.apply(&s).unwrap(), t);
        }
    }
}
