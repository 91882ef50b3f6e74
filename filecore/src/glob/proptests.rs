//! Property-based tests for brace expansion and matching.

use super::{expand, fnmatch, matches, GlobFlags};
use proptest::prelude::*;

fn literal_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_]{0,12}"
}

fn flags_strategy() -> impl Strategy<Value = GlobFlags> {
    (0u32..0x80).prop_map(GlobFlags::from_bits_retain)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // A pattern without metacharacters matches exactly itself.
    #[test]
    fn literal_matches_itself(s in literal_strategy(), flags in flags_strategy()) {
        prop_assert!(fnmatch(&s, &s, flags));
    }

    #[test]
    fn literal_rejects_other_strings(a in literal_strategy(), b in literal_strategy()) {
        prop_assume!(a != b);
        prop_assert!(!matches(&a, &b, GlobFlags::empty()));
    }

    // `*` matches every string that does not start with a dot.
    #[test]
    fn star_matches_undotted(s in "[a-z/]{0,16}") {
        prop_assert!(matches("*", &s, GlobFlags::empty()));
    }

    // Casefold makes case irrelevant for ASCII letters.
    #[test]
    fn casefold_ignores_case(s in "[a-zA-Z]{1,12}") {
        prop_assert!(matches(&s.to_ascii_lowercase(), &s.to_ascii_uppercase(), GlobFlags::CASEFOLD));
    }

    // One group with n plain alternatives yields n patterns.
    #[test]
    fn one_group_expands_per_alternative(
        front in literal_strategy(),
        alts in prop::collection::vec("[a-z]{0,4}", 1..6),
        back in literal_strategy(),
    ) {
        let pattern = format!("{front}{{{}}}{back}", alts.join(","));
        let expected: Vec<String> = alts.iter().map(|alt| format!("{front}{alt}{back}")).collect();
        prop_assert_eq!(expand(&pattern, GlobFlags::empty()), expected);
    }

    // Every alternative is matched through EXTGLOB.
    #[test]
    fn extglob_matches_each_alternative(alts in prop::collection::vec("[a-z]{1,4}", 1..6)) {
        let pattern = format!("x{{{}}}y", alts.join(","));
        for alt in &alts {
            let candidate = format!("x{alt}y");
            prop_assert!(fnmatch(&pattern, &candidate, GlobFlags::EXTGLOB));
        }
    }

    // Escaping every character turns a pattern into a literal.
    #[test]
    fn escaped_metacharacters_are_literal(s in "[*?\\[a-z]{1,10}") {
        let escaped: String = s.chars().flat_map(|c| ['\\', c]).collect();
        prop_assert!(matches(&escaped, &s, GlobFlags::empty()));
    }

    // Matching never panics whatever the input.
    #[test]
    fn matcher_is_total(pattern in "[a-c*?\\[\\]!^{},/\\\\.-]{0,12}", path in "[a-c/.]{0,12}", flags in flags_strategy()) {
        let _ = fnmatch(&pattern, &path, flags);
    }
}
