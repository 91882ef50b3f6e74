//! Property-based tests for the path algebra.

use super::{basename, dirname, dirname_n, extname, join, split};
use proptest::prelude::*;

// Segments may include dots so that extname and hidden names get exercised.
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_.-]{1,12}"
}

// Anything built from names, dots, and separators, including runs of `/`.
fn raw_path_strategy() -> impl Strategy<Value = String> {
    "[a-z./]{1,24}"
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9_-]{1,10}", 1..6).prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Reassembling a path from its parts keeps its last component.
    #[test]
    fn basename_survives_reassembly(path in raw_path_strategy()) {
        let base = basename(&path, None);
        let rebuilt = join(&[dirname(&path).as_str(), base.as_str()]);
        prop_assert_eq!(basename(&rebuilt, None), base);
    }

    // Level zero is the identity.
    #[test]
    fn dirname_level_zero_identity(path in raw_path_strategy()) {
        prop_assert_eq!(dirname_n(&path, 0).unwrap(), path);
    }

    // Each extra level is one more dirname.
    #[test]
    fn dirname_levels_compose(path in raw_path_strategy(), k in 0i64..8) {
        let deeper = dirname_n(&path, k + 1).unwrap();
        let stepped = dirname(&dirname_n(&path, k).unwrap());
        prop_assert_eq!(deeper, stepped);
    }

    // Negative levels are always rejected.
    #[test]
    fn dirname_negative_level_rejected(path in raw_path_strategy(), k in i64::MIN..0) {
        prop_assert!(dirname_n(&path, k).unwrap_err().is_input_error());
    }

    // Joining a directory and a plain name splits back into the same pair.
    #[test]
    fn split_inverts_join(dir in relative_path_strategy(), name in "[a-z0-9_-]{1,10}", rooted in any::<bool>()) {
        let dir = if rooted { format!("/{dir}") } else { dir };
        let joined = join(&[dir.as_str(), name.as_str()]);
        prop_assert_eq!(split(&joined), (dir, name));
    }

    // The extension is always a suffix of the basename.
    #[test]
    fn extname_is_suffix_of_basename(parts in prop::collection::vec(segment_strategy(), 1..5)) {
        let path = parts.join("/");
        let ext = extname(&path);
        prop_assert!(basename(&path, None).ends_with(&ext));
        if !ext.is_empty() {
            prop_assert!(ext.starts_with('.'));
        }
    }

    // Stripping ".*" is the same as stripping the literal extension.
    #[test]
    fn wildcard_suffix_matches_extname(parts in prop::collection::vec(segment_strategy(), 1..5)) {
        let path = parts.join("/");
        let base = basename(&path, None);
        let ext = extname(&path);
        let stripped = basename(&path, Some(".*"));
        prop_assert_eq!(format!("{stripped}{ext}"), base);
    }

    // One separator between parts whatever side it came from.
    #[test]
    fn join_keeps_one_boundary_separator(left in "[a-z]{1,5}/?", right in "/?[a-z]{1,5}") {
        let joined = join(&[left.as_str(), right.as_str()]);
        let expected = format!("{}/{}", left.trim_end_matches('/'), right.trim_start_matches('/'));
        prop_assert_eq!(joined, expected);
    }
}
