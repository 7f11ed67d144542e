//! Resolution options shared by normalization, probing and resolution.

/// Default namespace separator (`Vendor\Package\Type`).
pub const DEFAULT_NAMESPACE_SEPARATOR: char = '\\';

/// Default source file extension, without the leading dot.
pub const DEFAULT_EXTENSION: &str = "php";

/// How symbolic names are split and which files they map to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Character separating namespace segments in prefixes and names.
    pub namespace_separator: char,
    /// Extension appended to every composed path, without the leading dot.
    pub extension: String,
}

impl ResolveOptions {
    /// Options with a custom separator and the default extension.
    pub fn with_separator(namespace_separator: char) -> Self {
        ResolveOptions {
            namespace_separator,
            ..Self::default()
        }
    }

    /// Replace the extension. A leading dot is stripped.
    #[must_use]
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        let mut extension = extension.into();
        if extension.starts_with('.') {
            extension.remove(0);
        }
        self.extension = extension;
        self
    }
}

impl Default for ResolveOptions {
    fn default() -> Self {
        ResolveOptions {
            namespace_separator: DEFAULT_NAMESPACE_SEPARATOR,
            extension: DEFAULT_EXTENSION.to_owned(),
        }
    }
}
