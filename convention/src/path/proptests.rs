//! Property-based tests for canonicalization and resolution.

use super::canonicalize::{canonicalize, is_canonical};
use super::resolver::PathResolver;
use crate::extension::ExtensionSet;
use crate::oracle::MemoryOracle;
use proptest::prelude::*;

// Path-like strings with plenty of separator runs
fn messy_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z0-9_.-]{1,8}",
            "/{1,5}",
        ],
        0..12,
    )
    .prop_map(|parts| parts.concat())
}

fn extension_list_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z]{1,6}", 1..6).prop_map(|set| set.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // canonicalize(canonicalize(p)) == canonicalize(p)
    #[test]
    fn canonicalize_idempotent(path in messy_path_strategy()) {
        let once = canonicalize(&path).into_owned();
        let twice = canonicalize(&once).into_owned();
        prop_assert_eq!(once, twice);
    }

    // Output never holds a separator run
    #[test]
    fn canonicalize_leaves_no_runs(path in any::<String>()) {
        prop_assert!(is_canonical(&canonicalize(&path)));
    }

    // Removing every '/' from input and output yields the same text
    #[test]
    fn canonicalize_preserves_other_characters(path in any::<String>()) {
        let strip = |s: &str| s.chars().filter(|c| *c != '/').collect::<String>();
        prop_assert_eq!(strip(&path), strip(&canonicalize(&path)));
    }

    // Separators are kept exactly where a run began
    #[test]
    fn canonicalize_keeps_separator_positions(path in messy_path_strategy()) {
        let before = path.split('/').filter(|s| !s.is_empty()).count();
        let canonical = canonicalize(&path);
        let after = canonical.split('/').filter(|s| !s.is_empty()).count();
        prop_assert_eq!(before, after);
        prop_assert_eq!(path.starts_with('/'), canonical.starts_with('/'));
        prop_assert_eq!(path.ends_with('/'), canonical.ends_with('/'));
    }

    // The resolved resource is always the highest-priority existing probe
    #[test]
    fn find_resource_picks_first_existing(
        base in messy_path_strategy(),
        extensions in extension_list_strategy(),
        present in prop::collection::vec(any::<bool>(), 6),
    ) {
        let set = ExtensionSet::from_extensions(&extensions).unwrap();
        let canonical = canonicalize(&base).into_owned();

        let mut oracle = MemoryOracle::new();
        for (ext, here) in extensions.iter().zip(&present) {
            if *here {
                oracle.insert(format!("{canonical}.{ext}"), ext.clone());
            }
        }
        let expected = extensions
            .iter()
            .zip(&present)
            .find(|(_, here)| **here)
            .map(|(ext, _)| ext.clone());

        let resolver = PathResolver::new(oracle);
        let found = resolver.find_resource(&set, &base).unwrap();

        prop_assert_eq!(found.as_ref().map(|r| r.handle().clone()), expected.clone());
        if let (Some(resource), Some(ext)) = (found, expected) {
            prop_assert_eq!(resource.path(), format!("{canonical}.{ext}"));
        }
    }
}
