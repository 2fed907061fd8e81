//! `.php_cs.dist` rendering.

/// File name of the generated PHP-CS-Fixer configuration.
pub const CS_CONFIG_FILE_NAME: &str = ".php_cs.dist";

/// Render a string list the way PHP's `var_export` prints an array.
pub fn php_export_list(items: &[String]) -> String {
    let mut output = String::from("array (\n");
    for (index, item) in items.iter().enumerate() {
        output.push_str(&format!("  {} => {},\n", index, php_quote(item)));
    }
    output.push(')');
    output
}

/// Single-quoted PHP string literal.
fn php_quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{}'", escaped)
}

/// Contents of `.php_cs.dist` with the finder restricted to `finder_paths`.
pub fn render_cs_config(finder_paths: &[String]) -> String {
    let paths = php_export_list(finder_paths);
    format!(
        r#"<?php

/*
 * Additional rules or rules to override.
 * These rules will be added to default rules or will override them if the same key already exists.
 */
$additionalRules = [];

$config = PhpCsFixer\Config::create();
$config->setRules(Facile\CodingStandards\Rules::getRules($additionalRules));

$config->setUsingCache(false);
$config->setRiskyAllowed(false);

$finder = PhpCsFixer\Finder::create();
$finder->in({paths});

$config->setFinder($finder);

return $config;
"#
    )
}
