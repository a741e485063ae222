//! Namespace resolution context.
//!
//! Description text inside a docblock may reference class names that are
//! relative to the namespace and `use` imports of the file the docblock
//! appears in.  [`Context`] carries that information from the caller to
//! the description factory.  The tag parsers never interpret it — they
//! forward it verbatim.

use std::collections::HashMap;

/// The namespace and import aliases surrounding a docblock.
///
/// Captured by whoever walked the PHP source (this crate does not) and
/// handed through to the [`DescriptionFactory`](crate::DescriptionFactory)
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    namespace: String,
    aliases: HashMap<String, String>,
}

impl Context {
    /// Create a context for the given namespace.
    ///
    /// Leading and trailing `\` separators are trimmed, so `\App\Models`
    /// and `App\Models` produce the same context.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into().trim_matches('\\').to_string(),
            aliases: HashMap::new(),
        }
    }

    /// Register a `use` import alias (e.g. `Model` → `App\Models\Model`).
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>, fqn: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), fqn.into());
        self
    }

    /// The namespace the docblock appears in (empty for the global
    /// namespace).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The registered `use` import aliases, keyed by alias.
    pub fn aliases(&self) -> &HashMap<String, String> {
        &self.aliases
    }
}
