//! The `@deprecated` tag.
//!
//! Marks the annotated element as scheduled for removal.  The body is an
//! optional version vector (the release in which the element became
//! deprecated) followed by optional free-form description text:
//!
//! ```text
//! @deprecated
//! @deprecated 1.2.0
//! @deprecated 1.2.0 Use Replacement::make() instead.
//! @deprecated Use Replacement::make() instead.
//! ```
//!
//! Unlike [`Since`](crate::Since) and [`Version`](crate::Version), a body
//! that does not start with a version vector is still a valid
//! `@deprecated` tag — the whole body is read as description text, with
//! no attempt to salvage a near-miss vector out of it.

use std::fmt;

use serde::Serialize;

use crate::context::Context;
use crate::description::{Description, DescriptionFactory};
use crate::error::TagError;
use crate::vector::split_version_vector;

use super::Tag;

/// An immutable `@deprecated` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deprecated {
    version: Option<String>,
    description: Option<Description>,
}

impl Deprecated {
    /// The tag name, without the leading `@`.
    pub const NAME: &'static str = "deprecated";

    /// Build a tag from already-separated parts.
    ///
    /// `version` is optional, but when present it must be non-empty —
    /// `Some("")` is rejected with [`TagError::EmptyVersion`].
    pub fn new(
        version: Option<String>,
        description: Option<Description>,
    ) -> Result<Self, TagError> {
        if version.as_deref() == Some("") {
            return Err(TagError::EmptyVersion);
        }
        Ok(Self {
            version,
            description,
        })
    }

    /// Parse a raw tag body.
    ///
    /// Handles common formats:
    ///   - `` (blank) → no version, no description
    ///   - `1.2.0` → version only
    ///   - `1.2.0 Use Replacement instead.` → version and description
    ///   - `GIT: $Id: b6e485 $ see notes` → VCS vector and description
    ///   - `Use Replacement instead.` → description only
    ///
    /// The description factory parses whatever follows the version vector,
    /// or the whole body when no vector matches; `context` is forwarded to
    /// it verbatim.  A factory is required whenever the body is non-blank,
    /// otherwise construction fails with
    /// [`TagError::MissingDescriptionFactory`].
    pub fn parse(
        body: &str,
        factory: Option<&dyn DescriptionFactory>,
        context: Option<&Context>,
    ) -> Result<Self, TagError> {
        if body.trim().is_empty() {
            return Ok(Self {
                version: None,
                description: None,
            });
        }
        let Some(factory) = factory else {
            return Err(TagError::MissingDescriptionFactory);
        };

        match split_version_vector(body) {
            Some((vector, rest)) => Ok(Self {
                version: Some(vector.to_string()),
                description: Some(factory.parse(rest, context)),
            }),
            // No vector — the entire body is description text.
            None => Ok(Self {
                version: None,
                description: Some(factory.parse(body, context)),
            }),
        }
    }

    /// The version vector, verbatim as written, if one was present.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// The parsed description, if one was present.
    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }
}

impl Tag for Deprecated {
    fn name(&self) -> &'static str {
        Self::NAME
    }
}

impl fmt::Display for Deprecated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(version) = &self.version {
            f.write_str(version)?;
        }
        if let Some(description) = &self.description {
            f.write_str(" ")?;
            f.write_str(description.render())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::PassthroughFactory;

    // ─── Direct construction ────────────────────────────────────────────

    #[test]
    fn new_accepts_absent_version() {
        let tag = Deprecated::new(None, None).unwrap();
        assert_eq!(tag.version(), None);
        assert!(tag.description().is_none());
    }

    #[test]
    fn new_rejects_empty_version() {
        assert_eq!(
            Deprecated::new(Some(String::new()), None),
            Err(TagError::EmptyVersion)
        );
    }

    #[test]
    fn new_accepts_whitespace_version() {
        // Only the empty string is invalid; whitespace is a non-empty value.
        let tag = Deprecated::new(Some(" ".to_string()), None).unwrap();
        assert_eq!(tag.version(), Some(" "));
    }

    // ─── Parsing ────────────────────────────────────────────────────────

    #[test]
    fn blank_body_parses_to_empty_tag() {
        for body in ["", "   ", "\n\t "] {
            let tag = Deprecated::parse(body, None, None).unwrap();
            assert_eq!(tag.version(), None);
            assert!(tag.description().is_none());
        }
    }

    #[test]
    fn version_and_description() {
        let tag =
            Deprecated::parse("1.2.0 use Bar instead", Some(&PassthroughFactory), None).unwrap();
        assert_eq!(tag.version(), Some("1.2.0"));
        assert_eq!(tag.description().unwrap().render(), "use Bar instead");
    }

    #[test]
    fn version_only_still_gets_a_description() {
        // The factory runs on the (empty) remainder, so the description is
        // present but renders to nothing.
        let tag = Deprecated::parse("1.2.0", Some(&PassthroughFactory), None).unwrap();
        assert_eq!(tag.version(), Some("1.2.0"));
        assert_eq!(tag.description().unwrap().render(), "");
    }

    #[test]
    fn vcs_vector() {
        let tag = Deprecated::parse(
            "git:$Id: abcdef$ see changelog",
            Some(&PassthroughFactory),
            None,
        )
        .unwrap();
        assert_eq!(tag.version(), Some("git:$Id: abcdef$"));
        assert_eq!(tag.description().unwrap().render(), "see changelog");
    }

    #[test]
    fn body_without_vector_is_all_description() {
        let tag =
            Deprecated::parse("use Bar instead", Some(&PassthroughFactory), None).unwrap();
        assert_eq!(tag.version(), None);
        assert_eq!(tag.description().unwrap().render(), "use Bar instead");
    }

    #[test]
    fn near_miss_vector_falls_back_whole() {
        // An unterminated VCS marker is not a vector; no partial credit.
        let tag = Deprecated::parse(
            "git:$unterminated see docs",
            Some(&PassthroughFactory),
            None,
        )
        .unwrap();
        assert_eq!(tag.version(), None);
        assert_eq!(
            tag.description().unwrap().render(),
            "git:$unterminated see docs"
        );
    }

    #[test]
    fn zero_body_is_a_version() {
        // `0` is a digit-led token: a release vector, not a blank body.
        let tag = Deprecated::parse("0", Some(&PassthroughFactory), None).unwrap();
        assert_eq!(tag.version(), Some("0"));
    }

    #[test]
    fn missing_factory_fails_for_any_non_blank_body() {
        assert_eq!(
            Deprecated::parse("1.2.0 use Bar instead", None, None),
            Err(TagError::MissingDescriptionFactory)
        );
        assert_eq!(
            Deprecated::parse("use Bar instead", None, None),
            Err(TagError::MissingDescriptionFactory)
        );
    }

    #[test]
    fn display_concatenates_version_and_description() {
        let tag =
            Deprecated::parse("1.2.0 use Bar instead", Some(&PassthroughFactory), None).unwrap();
        assert_eq!(tag.to_string(), "1.2.0 use Bar instead");
    }
}
