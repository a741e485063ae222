//! Docblock tag value objects.
//!
//! One submodule per tag.  All three tags share the version-vector body
//! grammar; [`Deprecated`] additionally accepts a vector-less body as
//! plain description text, which makes it the forgiving one of the
//! family.  The [`Tag`] trait carries what external formatters need: the
//! fixed tag name and the canonical rendering.

mod deprecated;
mod since;
mod version;

pub use deprecated::Deprecated;
pub use since::Since;
pub use version::Version;

use std::fmt;

use serde::Serialize;

/// Common surface of a parsed docblock tag.
///
/// The tag name is fixed per type and never settable; the body renders
/// through [`fmt::Display`].
pub trait Tag: fmt::Display {
    /// The tag name without the leading `@` (e.g. `deprecated`).
    fn name(&self) -> &'static str;

    /// Render the full tag: `@name` followed by the body, trimmed at both
    /// ends.
    ///
    ///   - `@deprecated 1.2.0 Use Replacement instead.`
    ///   - `@deprecated` (empty body)
    fn render(&self) -> String {
        format!("@{} {}", self.name(), self).trim().to_string()
    }
}

/// Any tag this crate can parse, as produced by registry dispatch.
///
/// Implements [`Tag`] and [`fmt::Display`] by delegating to the wrapped
/// tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tag", rename_all = "lowercase")]
pub enum AnyTag {
    Deprecated(Deprecated),
    Since(Since),
    Version(Version),
}

impl Tag for AnyTag {
    fn name(&self) -> &'static str {
        match self {
            AnyTag::Deprecated(tag) => tag.name(),
            AnyTag::Since(tag) => tag.name(),
            AnyTag::Version(tag) => tag.name(),
        }
    }
}

impl fmt::Display for AnyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyTag::Deprecated(tag) => fmt::Display::fmt(tag, f),
            AnyTag::Since(tag) => fmt::Display::fmt(tag, f),
            AnyTag::Version(tag) => fmt::Display::fmt(tag, f),
        }
    }
}

impl From<Deprecated> for AnyTag {
    fn from(tag: Deprecated) -> Self {
        AnyTag::Deprecated(tag)
    }
}

impl From<Since> for AnyTag {
    fn from(tag: Since) -> Self {
        AnyTag::Since(tag)
    }
}

impl From<Version> for AnyTag {
    fn from(tag: Version) -> Self {
        AnyTag::Version(tag)
    }
}
