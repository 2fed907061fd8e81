//! Default PHP-CS-Fixer rule table
//!
//! Holds the canonical rule set referenced by the generated `.php_cs.dist`
//! (`Facile\CodingStandards\Rules::getRules`) and the shallow merge used to
//! layer project overrides on top of it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Rule identifier to rule value.
pub type RuleSet = BTreeMap<String, RuleValue>;

/// A single rule: either an on/off flag or a mapping of sub-options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    Flag(bool),
    Options(Map<String, Value>),
}

impl RuleValue {
    /// Build an options value from `(option, value)` pairs.
    pub fn options<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Value)>,
    {
        RuleValue::Options(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        )
    }

    /// Compact single-line rendering used by the CLI.
    pub fn display_value(&self) -> String {
        match self {
            RuleValue::Flag(flag) => flag.to_string(),
            RuleValue::Options(options) => Value::Object(options.clone()).to_string(),
        }
    }
}

/// Rules enabled with their default settings.
const ENABLED_RULES: &[&str] = &[
    "@PSR2",
    "not_operator_with_successor_space",
    "blank_line_after_namespace",
    "blank_line_after_opening_tag",
    "cast_spaces",
    "concat_space",
    "declare_equal_normalize",
    "function_typehint_space",
    "include",
    "lowercase_cast",
    "method_separation",
    "native_function_casing",
    "new_with_braces",
    "no_empty_statement",
    "no_leading_import_slash",
    "no_leading_namespace_whitespace",
    "no_multiline_whitespace_around_double_arrow",
    "no_short_bool_cast",
    "no_singleline_whitespace_before_semicolons",
    "no_spaces_around_offset",
    "no_trailing_comma_in_list_call",
    "no_trailing_comma_in_singleline_array",
    "no_unneeded_control_parentheses",
    "no_unused_imports",
    "no_whitespace_before_comma_in_array",
    "no_whitespace_in_blank_line",
    "normalize_index_brace",
    "object_operator_without_whitespace",
    "pre_increment",
    "return_type_declaration",
    "self_accessor",
    "short_scalar_cast",
    "single_blank_line_before_namespace",
    "single_class_element_per_statement",
    "single_quote",
    "space_after_semicolon",
    "standardize_not_equals",
    "ternary_operator_spaces",
    "trailing_comma_in_multiline_array",
    "trim_array_spaces",
    "unary_operator_spaces",
    "whitespace_after_comma_in_array",
];

/// The built-in rule catalog.
pub fn default_rules() -> RuleSet {
    let mut rules: RuleSet = ENABLED_RULES
        .iter()
        .map(|name| (name.to_string(), RuleValue::Flag(true)))
        .collect();

    rules.insert(
        "array_syntax".to_string(),
        RuleValue::options([("syntax", Value::from("short"))]),
    );
    rules.insert(
        "binary_operator_spaces".to_string(),
        RuleValue::options([
            ("align_double_arrow", Value::Bool(false)),
            ("align_equals", Value::Bool(false)),
        ]),
    );
    rules.insert(
        "no_extra_consecutive_blank_lines".to_string(),
        RuleValue::options([(
            "tokens",
            Value::from(vec![
                "curly_brace_block",
                "extra",
                "parenthesis_brace_block",
                "square_brace_block",
                "throw",
                "use",
            ]),
        )]),
    );
    rules.insert(
        "no_mixed_echo_print".to_string(),
        RuleValue::options([("use", Value::from("echo"))]),
    );

    rules
}

/// Default rules plus override composition.
///
/// The table is a plain value: replacing the defaults yields a new table
/// rather than mutating shared state.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable {
    defaults: RuleSet,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self {
            defaults: default_rules(),
        }
    }
}

impl RuleTable {
    pub fn with_defaults(defaults: RuleSet) -> Self {
        Self { defaults }
    }

    /// Replace the default rule set wholesale. Rule names and values are not validated.
    pub fn replace_defaults(self, rules: RuleSet) -> Self {
        Self { defaults: rules }
    }

    pub fn defaults(&self) -> &RuleSet {
        &self.defaults
    }

    /// Defaults with `overrides` layered on top.
    ///
    /// Merge is shallow: an override for a key replaces the default value for
    /// that key entirely, options included. Unknown keys are added.
    pub fn resolve(&self, overrides: &RuleSet) -> RuleSet {
        let mut resolved = self.defaults.clone();
        for (name, value) in overrides {
            resolved.insert(name.clone(), value.clone());
        }
        resolved
    }
}
