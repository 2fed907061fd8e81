//! csfix-setup: PHP-CS-Fixer project installer
//!
//! Writes a default `.php_cs.dist` into a Composer project and registers the
//! `cs-check` / `cs-fix` scripts in its `composer.json`, asking before each
//! write. Also carries the default style rule table the generated config
//! refers to.

pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod rules;
pub mod setup;
pub mod template;
