//! Property-based tests for answer parsing.

use super::{is_port, parse_key_value, parse_path_pair, split_list};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every item survives trimmed, non-empty and comma-free
    #[test]
    fn split_list_items_are_clean(line in "[a-z ,]{0,40}") {
        for item in split_list(&line) {
            prop_assert!(!item.is_empty());
            prop_assert_eq!(item.trim(), item.as_str());
            prop_assert!(!item.contains(','));
        }
    }

    // Joining clean items back together is lossless
    #[test]
    fn split_list_recovers_joined_items(items in prop::collection::vec("[a-z0-9_-]{1,8}", 0..6)) {
        let line = items.join(" , ");
        prop_assert_eq!(split_list(&line), items);
    }

    // Anything accepted as a port is all digits
    #[test]
    fn is_port_only_accepts_digits(text in "\\PC{0,8}") {
        if is_port(&text) {
            prop_assert!(text.chars().all(|c| c.is_ascii_digit()));
            prop_assert!(!text.is_empty());
        }
    }

    #[test]
    fn is_port_accepts_any_number(n in any::<u32>()) {
        prop_assert!(is_port(&n.to_string()));
    }

    // The value keeps every '=' after the first one
    #[test]
    fn key_value_splits_on_first_equals(
        key in "[A-Z_]{1,10}",
        value in "[a-z0-9=]{0,12}",
    ) {
        let line = format!("{key}={value}");
        let (k, v) = parse_key_value(&line).unwrap();
        prop_assert_eq!(k, key);
        prop_assert_eq!(v, value);
    }

    #[test]
    fn path_pair_is_verbatim(host in "[a-z/.]{0,10}", container in "[a-z/]{0,10}") {
        let line = format!("{host}:{container}");
        prop_assert_eq!(parse_path_pair(&line).unwrap(), line);
    }
}
