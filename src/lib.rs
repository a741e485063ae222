//! Structured parsing and rendering for the PHPDoc tags that carry a
//! version vector: `@deprecated`, `@since`, and `@version`.
//!
//! A docblock tokenizer (not part of this crate) splits a `/** ... */`
//! comment into pairs of tag name and raw body text.  This crate takes
//! over from there: it recognises the optional *version vector* at the
//! start of the body — a release identifier such as `1.2.0` or a VCS
//! revision marker such as `GIT: $Id: b6e485 $` — hands the remaining
//! text to an injected description parser, and packages the result as an
//! immutable value object that renders back to canonical text.
//!
//! ```
//! use phpdoc_tags::{Deprecated, PassthroughFactory, Tag};
//!
//! let tag = Deprecated::parse(
//!     "1.2.0 Use Replacement::make() instead.",
//!     Some(&PassthroughFactory),
//!     None,
//! )?;
//!
//! assert_eq!(tag.version(), Some("1.2.0"));
//! assert_eq!(tag.to_string(), "1.2.0 Use Replacement::make() instead.");
//! assert_eq!(tag.render(), "@deprecated 1.2.0 Use Replacement::make() instead.");
//! # Ok::<(), phpdoc_tags::TagError>(())
//! ```
//!
//! The pieces:
//!
//! - [`split_version_vector`]: the version-vector grammar itself.
//! - [`Deprecated`], [`Since`], [`Version`]: one immutable value object
//!   per tag, with [`AnyTag`] as the sum over them.
//! - [`DescriptionFactory`] / [`Description`]: the injected collaborator
//!   seam for description parsing — rich parsing (inline tags, type
//!   references) belongs to the caller; [`PassthroughFactory`] keeps the
//!   text verbatim.
//! - [`Context`]: opaque namespace context forwarded to the factory.
//! - [`TagKind`] / [`parse_tag`]: compile-time tag-name dispatch for an
//!   external tokenizer.
//!
//! All values are immutable once built and freely shareable across
//! threads; parsing has no side effects beyond the factory call.

mod context;
mod description;
mod error;
mod registry;
mod tags;
mod vector;

pub use context::Context;
pub use description::{Description, DescriptionFactory, PassthroughFactory};
pub use error::TagError;
pub use registry::{TagKind, parse_tag};
pub use tags::{AnyTag, Deprecated, Since, Tag, Version};
pub use vector::split_version_vector;
