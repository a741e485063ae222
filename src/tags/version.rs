//! The `@version` tag.
//!
//! Records the version of the annotated element at the time the docblock
//! was written — a release identifier or, commonly, a keyword-expanded
//! VCS revision marker:
//!
//! ```text
//! @version 1.0.1
//! @version GIT: $Id: b6e485 $
//! ```
//!
//! As with [`Since`](crate::Since), a non-blank body that does not start
//! with a version vector is not a `@version` tag; [`Version::parse`]
//! reports it as `Ok(None)`.

use std::fmt;

use serde::Serialize;

use crate::context::Context;
use crate::description::{Description, DescriptionFactory};
use crate::error::TagError;
use crate::vector::split_version_vector;

use super::Tag;

/// An immutable `@version` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Version {
    version: Option<String>,
    description: Option<Description>,
}

impl Version {
    /// The tag name, without the leading `@`.
    pub const NAME: &'static str = "version";

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
    /// A blank body yields an empty tag.  A non-blank body must start with
    /// a version vector; `Ok(None)` means it did not and is therefore not
    /// a `@version` tag.  On a match the remainder goes to the description
    /// factory, which must then be present or construction fails with
    /// [`TagError::MissingDescriptionFactory`].
    pub fn parse(
        body: &str,
        factory: Option<&dyn DescriptionFactory>,
        context: Option<&Context>,
    ) -> Result<Option<Self>, TagError> {
        if body.trim().is_empty() {
            return Ok(Some(Self {
                version: None,
                description: None,
            }));
        }
        let Some((vector, rest)) = split_version_vector(body) else {
            return Ok(None);
        };
        let Some(factory) = factory else {
            return Err(TagError::MissingDescriptionFactory);
        };

        Ok(Some(Self {
            version: Some(vector.to_string()),
            description: Some(factory.parse(rest, context)),
        }))
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

impl Tag for Version {
    fn name(&self) -> &'static str {
        Self::NAME
    }
}

impl fmt::Display for Version {
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

    #[test]
    fn blank_body_is_an_empty_tag() {
        let tag = Version::parse("", None, None).unwrap().unwrap();
        assert_eq!(tag.version(), None);
        assert!(tag.description().is_none());
    }

    #[test]
    fn vcs_revision_marker() {
        let tag = Version::parse("GIT: $Id: b6e485 $", Some(&PassthroughFactory), None)
            .unwrap()
            .unwrap();
        assert_eq!(tag.version(), Some("GIT: $Id: b6e485 $"));
        assert_eq!(tag.description().unwrap().render(), "");
    }

    #[test]
    fn release_vector_and_description() {
        let tag = Version::parse("1.0.1 stable line", Some(&PassthroughFactory), None)
            .unwrap()
            .unwrap();
        assert_eq!(tag.version(), Some("1.0.1"));
        assert_eq!(tag.description().unwrap().render(), "stable line");
    }

    #[test]
    fn vectorless_body_is_not_a_version_tag() {
        assert_eq!(
            Version::parse("not a version", Some(&PassthroughFactory), None),
            Ok(None)
        );
    }

    #[test]
    fn missing_factory_fails_after_a_match() {
        assert_eq!(
            Version::parse("1.0.1 stable line", None, None),
            Err(TagError::MissingDescriptionFactory)
        );
    }

    #[test]
    fn empty_version_is_rejected_directly() {
        assert_eq!(
            Version::new(Some(String::new()), None),
            Err(TagError::EmptyVersion)
        );
    }
}
