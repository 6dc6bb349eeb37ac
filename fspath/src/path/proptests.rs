//! Property-based tests for path composition and text operations.

use super::normalize::resolve_components;
use super::Path;
use proptest::prelude::*;
use std::path::MAIN_SEPARATOR_STR;

fn component_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.-]{1,12}"
}

fn components_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(component_strategy(), 1..8)
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    components_strategy().prop_map(|parts| parts.join(MAIN_SEPARATOR_STR))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Path::join_all(parts) == parts[0] / parts[1] / ...
    #[test]
    fn compose_agrees_with_join_all(parts in components_strategy()) {
        let joined = Path::join_all(&parts);
        let composed = parts[1..]
            .iter()
            .fold(Path::new(parts[0].as_str()), |acc, part| acc / part);
        prop_assert_eq!(joined, composed);
    }

    // Splitting and re-joining gives the original relative path back
    #[test]
    fn split_then_join_roundtrips(text in relative_path_strategy()) {
        let path = Path::new(text.as_str());
        let rebuilt = Path::join_all(path.split());
        prop_assert_eq!(rebuilt, path);
    }

    // Absolute paths roundtrip once the leading separator is restored
    #[cfg(unix)]
    #[test]
    fn split_then_join_absolute(text in relative_path_strategy()) {
        let path = Path::new(format!("/{text}"));
        let rebuilt = Path::new("/") / Path::join_all(path.split());
        prop_assert_eq!(rebuilt, path);
    }

    // Text operations keep the Path type and match the str result
    #[test]
    fn text_ops_match_str(text in "[ a-zA-Z0-9_/.-]{0,24}") {
        let path = Path::new(text.as_str());
        prop_assert_eq!(path.to_uppercase(), text.to_uppercase());
        prop_assert_eq!(path.to_lowercase(), text.to_lowercase());
        prop_assert_eq!(path.replace("/", "-"), text.replace('/', "-"));
        prop_assert_eq!(path.trim(), text.trim());
        prop_assert_eq!(path.slice(..).unwrap(), text.as_str());
    }

    // Folding . and .. is idempotent
    #[test]
    fn resolve_components_idempotent(text in relative_path_strategy()) {
        let once = resolve_components(std::path::Path::new(&text));
        let twice = resolve_components(&once);
        prop_assert_eq!(once, twice);
    }

    // basename + dir recompose to the original when there is a parent
    #[test]
    fn dir_and_basename_recompose(parts in prop::collection::vec(component_strategy(), 2..6)) {
        let path = Path::join_all(&parts);
        prop_assert_eq!(path.dir() / path.basename(), path);
    }
}
