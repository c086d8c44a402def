//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat};
use crate::extension::ExtensionSet;
use proptest::prelude::*;
use std::path::PathBuf;

fn result_path_strategy() -> impl Strategy<Value = String> {
    "(/[a-z]{1,8}){1,3}/"
}

fn extensions_strategy() -> impl Strategy<Value = ExtensionSet> {
    prop::collection::btree_set("[a-z]{1,5}", 1..5)
        .prop_map(|set| ExtensionSet::from_extensions(set).unwrap())
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(result_path_strategy()),
        prop::option::of("/[a-z]{1,10}".prop_map(PathBuf::from)),
        prop::option::of(extensions_strategy()),
        prop::option::of(prop_oneof![Just(OutputFormat::Human), Just(OutputFormat::Json)]),
    )
        .prop_map(|(result_path, root, extensions, output_format)| Config {
            result_path,
            root,
            extensions: extensions.map(Into::into),
            output_format,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Set fields of the higher source always win, unset ones never clear
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(&result.result_path, if high.result_path.is_some() { &high.result_path } else { &low.result_path });
        prop_assert_eq!(&result.root, if high.root.is_some() { &high.root } else { &low.root });
        prop_assert_eq!(&result.extensions, if high.extensions.is_some() { &high.extensions } else { &low.extensions });
        prop_assert_eq!(result.output_format, high.output_format.or(low.output_format));
    }

    // Merging a config into itself changes nothing
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &config);
        prop_assert_eq!(result, config);
    }

    // Merging onto defaults reproduces the source
    #[test]
    fn config_merge_onto_default_is_identity(config in config_strategy()) {
        let mut result = Config::default();
        ConfigMerger::merge_into(&mut result, &config);
        prop_assert_eq!(result, config);
    }
}
