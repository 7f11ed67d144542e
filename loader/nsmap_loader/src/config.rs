//! Environment configuration.
//!
//! | Variable          | Meaning                                   | Default |
//! |-------------------|-------------------------------------------|---------|
//! | `NSMAP_EXTENSION` | source extension, leading dot optional    | `php`   |
//! | `NSMAP_SEPARATOR` | namespace separator, one character        | `\`     |
//! | `NSMAP_PREPEND`   | activate ahead of existing resolvers      | `false` |
//!
//! Unset variables fall back to the default. A set but malformed variable is
//! a [`ConfigError`].

use nsmap_registry::ResolveOptions;

use crate::error::ConfigError;

pub const EXTENSION_VAR: &str = "NSMAP_EXTENSION";
pub const SEPARATOR_VAR: &str = "NSMAP_SEPARATOR";
pub const PREPEND_VAR: &str = "NSMAP_PREPEND";

/// Loader settings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoaderConfig {
    pub options: ResolveOptions,
    /// Passed as `prepend` when activating against a host.
    pub prepend: bool,
}

impl LoaderConfig {
    /// Read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through `lookup` (variable name → value).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = LoaderConfig::default();

        if let Some(value) = lookup(SEPARATOR_VAR) {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(separator), None) => config.options.namespace_separator = separator,
                _ => {
                    return Err(ConfigError::InvalidSeparator {
                        var: SEPARATOR_VAR,
                        value,
                    })
                }
            }
        }

        if let Some(value) = lookup(EXTENSION_VAR) {
            let options = std::mem::take(&mut config.options).extension(value.trim());
            if options.extension.is_empty() {
                return Err(ConfigError::EmptyExtension { var: EXTENSION_VAR });
            }
            config.options = options;
        }

        if let Some(value) = lookup(PREPEND_VAR) {
            config.prepend = match value.trim() {
                "" | "0" | "false" => false,
                "1" | "true" => true,
                _ => {
                    return Err(ConfigError::InvalidFlag {
                        var: PREPEND_VAR,
                        value,
                    })
                }
            };
        }

        Ok(config)
    }
}
