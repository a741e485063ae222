//! The `@since` tag.
//!
//! Records the release in which the annotated element first became
//! available:
//!
//! ```text
//! @since 0.4.0
//! @since 0.4.0 First shipped with the 0.4 series.
//! ```
//!
//! The body grammar is shared with [`Deprecated`](crate::Deprecated), but
//! the fallback is not: a non-blank body that does not start with a
//! version vector is not a `@since` tag at all, and [`Since::parse`]
//! reports it as `Ok(None)`.

use std::fmt;

use serde::Serialize;

use crate::context::Context;
use crate::description::{Description, DescriptionFactory};
use crate::error::TagError;
use crate::vector::split_version_vector;

use super::Tag;

/// An immutable `@since` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Since {
    version: Option<String>,
    description: Option<Description>,
}

impl Since {
    /// The tag name, without the leading `@`.
    pub const NAME: &'static str = "since";

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
    /// a `@since` tag.  On a match the remainder goes to the description
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

impl Tag for Since {
    fn name(&self) -> &'static str {
        Self::NAME
    }
}

impl fmt::Display for Since {
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
