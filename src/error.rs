//! Tag construction errors.
//!
//! Only two failure modes exist, and both are contract violations at the
//! call site rather than data problems: constructing a tag directly with
//! an empty (but present) version string, and parsing a non-empty tag
//! body without supplying a description factory.  A version vector that
//! fails to match is *not* an error — the tag parsers express that
//! outcome through their return values instead.

/// Error raised when a tag cannot be constructed.
///
/// Every variant is synchronous and surfaced to the immediate caller;
/// nothing is logged, swallowed, or retried internally.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TagError {
    /// A version string was supplied but empty.  Version vectors are
    /// optional; when present they must be non-empty.
    #[error("version must be a non-empty string when present")]
    EmptyVersion,

    /// A non-empty tag body requires a description factory to parse its
    /// description text, and none was supplied.
    #[error("a description factory is required to parse a non-empty tag body")]
    MissingDescriptionFactory,
}
