//! Property-based tests for rule override resolution

use csfix_setup::rules::{RuleSet, RuleTable, RuleValue};
use proptest::prelude::*;
use serde_json::Value;

fn rule_value() -> impl Strategy<Value = RuleValue> {
    prop_oneof![
        any::<bool>().prop_map(RuleValue::Flag),
        prop::collection::btree_map("[a-z_]{1,12}", "[a-z]{0,8}", 0..4).prop_map(|options| {
            RuleValue::Options(
                options
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            )
        }),
    ]
}

fn override_sets() -> impl Strategy<Value = RuleSet> {
    let names = prop_oneof![
        "[a-z_]{1,20}",
        prop::sample::select(vec![
            "@PSR2".to_string(),
            "array_syntax".to_string(),
            "binary_operator_spaces".to_string(),
            "single_quote".to_string(),
        ]),
    ];
    prop::collection::btree_map(names, rule_value(), 0..8)
}

proptest! {
    /// Override keys win outright; every other default key is untouched.
    #[test]
    fn test_resolve_is_shallow_replace(overrides in override_sets()) {
        let table = RuleTable::default();
        let resolved = table.resolve(&overrides);

        for (name, value) in &overrides {
            prop_assert_eq!(resolved.get(name), Some(value));
        }
        for (name, value) in table.defaults() {
            if !overrides.contains_key(name) {
                prop_assert_eq!(resolved.get(name), Some(value));
            }
        }
        let expected_len = table
            .defaults()
            .keys()
            .chain(overrides.keys())
            .collect::<std::collections::BTreeSet<_>>()
            .len();
        prop_assert_eq!(resolved.len(), expected_len);
    }
}
