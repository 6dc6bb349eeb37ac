//! Property-based tests for configuration merging and YAML round trips.

use super::merger::ConfigMerger;
use super::schema::{Config, SortKey};
use crate::output::OutputFormat;
use proptest::prelude::*;

fn sort_strategy() -> impl Strategy<Value = SortKey> {
    prop_oneof![Just(SortKey::DirsFirst), Just(SortKey::Lexical)]
}

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Plain),
        Just(OutputFormat::Json),
        Just(OutputFormat::Csv)
    ]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("[a-z*?.]{1,12}"),
        prop::option::of(sort_strategy()),
        prop::option::of(format_strategy()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(pattern, sort, format, recursive)| Config {
            pattern,
            sort,
            format,
            recursive,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Each field takes the higher layer's value when set, else the lower one.
    #[test]
    fn merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(&result.pattern, high.pattern.as_ref().or(low.pattern.as_ref()));
        prop_assert_eq!(result.sort, high.sort.or(low.sort));
        prop_assert_eq!(result.format, high.format.or(low.format));
        prop_assert_eq!(result.recursive, high.recursive.or(low.recursive));
    }

    // Merging is idempotent.
    #[test]
    fn merge_idempotent(base in config_strategy(), layer in config_strategy()) {
        let mut once = base;
        ConfigMerger::merge_into(&mut once, &layer);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &layer);
        prop_assert_eq!(once, twice);
    }

    // Serialized configuration parses back unchanged.
    #[test]
    fn yaml_roundtrip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(config, parsed);
    }
}
