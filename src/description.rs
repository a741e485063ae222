//! Tag description handling.
//!
//! Tag bodies end in free-form description text.  Turning that text into
//! something rich (inline tag resolution, type references) is the job of
//! a separate component; the tags in this crate only need two things: a
//! value they can store and re-render ([`Description`]) and an injected
//! collaborator that produces it ([`DescriptionFactory`]).
//!
//! [`PassthroughFactory`] is the standard implementation: it keeps the
//! text exactly as given.

use std::fmt;

use serde::Serialize;

use crate::context::Context;

/// Parsed description text attached to a tag.
///
/// Opaque to the tag parsers — they store whatever the factory produced
/// and append its rendered form after the version vector when converting
/// the tag back to text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Description {
    body: String,
}

impl Description {
    /// Wrap already-parsed description text.
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// The canonical textual form of the description.
    pub fn render(&self) -> &str {
        &self.body
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}

/// Capability to parse raw description text into a [`Description`].
///
/// A factory must be supplied whenever a tag body contains any text to
/// describe — see [`Deprecated::parse`](crate::Deprecated::parse).  The
/// resolution context, when given, is forwarded verbatim; implementations
/// may use it to resolve namespace-relative references, or ignore it.
pub trait DescriptionFactory {
    /// Parse `body` into a structured description.
    fn parse(&self, body: &str, context: Option<&Context>) -> Description;
}

/// Description factory that keeps the text verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughFactory;

impl DescriptionFactory for PassthroughFactory {
    fn parse(&self, body: &str, _context: Option<&Context>) -> Description {
        Description::new(body)
    }
}
