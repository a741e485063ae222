//! Tag-name dispatch.
//!
//! An external docblock tokenizer splits a `/** ... */` comment into
//! pairs of tag name and raw body text; this module maps each name to the
//! parser that understands the body.  The mapping is a `const` table
//! resolved at compile time — no runtime registration.
//!
//! The tokenizer itself is not part of this crate: dispatch starts from
//! an already-separated `(name, body)` pair.

use crate::context::Context;
use crate::description::DescriptionFactory;
use crate::error::TagError;
use crate::tags::{AnyTag, Deprecated, Since, Version};

/// The tag names this crate has parsers for, and which parser owns each.
const TAGS: &[(&str, TagKind)] = &[
    ("deprecated", TagKind::Deprecated),
    ("since", TagKind::Since),
    ("version", TagKind::Version),
];

/// A tag-parsing capability, one per supported tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Deprecated,
    Since,
    Version,
}

impl TagKind {
    /// Look up the parser for a tag name (without the leading `@`).
    ///
    /// Matching is case-sensitive — PHPDoc tag names are lowercase, and
    /// `@Deprecated` is somebody else's annotation.  Returns `None` for
    /// unknown names.
    pub fn by_name(name: &str) -> Option<TagKind> {
        for &(tag, kind) in TAGS {
            if tag == name {
                return Some(kind);
            }
        }
        None
    }

    /// The tag name this parser is registered under.
    pub fn name(self) -> &'static str {
        match self {
            TagKind::Deprecated => Deprecated::NAME,
            TagKind::Since => Since::NAME,
            TagKind::Version => Version::NAME,
        }
    }

    /// Parse a tag body with this parser.
    ///
    /// `Ok(None)` means the body is not a valid tag of this kind (only
    /// `@since` and `@version` can say so; `@deprecated` accepts every
    /// body).  Errors are the caller-contract violations described on
    /// [`TagError`], surfaced unchanged.
    pub fn parse(
        self,
        body: &str,
        factory: Option<&dyn DescriptionFactory>,
        context: Option<&Context>,
    ) -> Result<Option<AnyTag>, TagError> {
        match self {
            TagKind::Deprecated => {
                Deprecated::parse(body, factory, context).map(|tag| Some(AnyTag::Deprecated(tag)))
            }
            TagKind::Since => Ok(Since::parse(body, factory, context)?.map(AnyTag::Since)),
            TagKind::Version => Ok(Version::parse(body, factory, context)?.map(AnyTag::Version)),
        }
    }
}

/// Parse a `(name, body)` pair handed over by a docblock tokenizer.
///
/// Composes [`TagKind::by_name`] and [`TagKind::parse`]: unknown tag
/// names yield `Ok(None)`, as does a body that is not a valid tag of the
/// named kind.
pub fn parse_tag(
    name: &str,
    body: &str,
    factory: Option<&dyn DescriptionFactory>,
    context: Option<&Context>,
) -> Result<Option<AnyTag>, TagError> {
    let Some(kind) = TagKind::by_name(name) else {
        tracing::debug!("no parser registered for tag `@{name}`");
        return Ok(None);
    };
    kind.parse(body, factory, context)
}
