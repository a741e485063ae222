//! Version-vector matching.
//!
//! The `@deprecated`, `@since`, and `@version` tag bodies may begin with a
//! *version vector*: either a conventional release identifier or a
//! version-control marker.  This module anchors that grammar at the start
//! of a tag body and splits the vector off from the free-form description
//! text that follows.
//!
//! Two forms are recognised:
//!
//!   - Release form: a token starting with a decimal digit, running to the
//!     next whitespace — `1.2.0`, `2.0.0-beta.1`, `20121114`.
//!   - VCS form: the VCS name, a colon, and a `$`-delimited revision
//!     marker — `git:$Id$`, `GIT: $Id: b6e485 $` — the keyword-expansion
//!     convention CVS, SVN, and GIT share.
//!
//! Matching is case-sensitive and anchored: a body that merely contains a
//! vector somewhere past its start does not match.

use memchr::memchr;

/// Byte length of a release-form vector at the start of `body`.
///
/// A release vector is any token that starts with an ASCII digit; it
/// extends to the first whitespace character (or the end of the body).
pub(crate) fn release_form_end(body: &str) -> Option<usize> {
    if !body.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    Some(body.find(char::is_whitespace).unwrap_or(body.len()))
}

/// Byte length of a VCS-form vector at the start of `body`.
///
/// The form is `name:$payload$` with optional whitespace after the colon
/// (newlines included):
///
///   - `git:$Id$`
///   - `GIT: $Id: b6e485 $`
///   - `svn:$Revision: 42 $`
///
/// The name must be non-empty and free of whitespace and `:`; the payload
/// must be non-empty and free of `$`.
pub(crate) fn vcs_form_end(body: &str) -> Option<usize> {
    // The name cannot contain a colon, so the first colon in the body is
    // the delimiter.
    let colon = memchr(b':', body.as_bytes())?;
    if colon == 0 || body[..colon].chars().any(char::is_whitespace) {
        return None;
    }

    // Optional whitespace between the colon and the opening `$`.
    let after_colon = &body[colon + 1..];
    let ws = after_colon.len() - after_colon.trim_start().len();

    let payload = after_colon[ws..].strip_prefix('$')?;
    let close = memchr(b'$', payload.as_bytes())?;
    if close == 0 {
        // `$$` — an empty marker is not a revision.
        return None;
    }

    // name + ':' + whitespace + '$' + payload + '$'
    Some(colon + 1 + ws + 1 + close + 1)
}

/// Split the leading version vector off a tag body.
///
/// On a match, returns `(vector, remainder)`: the vector text exactly as
/// written, and whatever follows it with the intervening whitespace run
/// consumed.  Both pieces borrow from `body`.
///
///   - `"1.2.0 use Replacement"` → `("1.2.0", "use Replacement")`
///   - `"GIT: $Id: b6e485 $ see notes"` → `("GIT: $Id: b6e485 $", "see notes")`
///   - `"1.2.0"` → `("1.2.0", "")`
///   - `"use Replacement"` → `None`
///
/// The release form is tried first and wins whenever the body starts with
/// a digit, so `1.0:$x$` matches as the release vector `1.0:$x$` rather
/// than as a VCS marker.
pub fn split_version_vector(body: &str) -> Option<(&str, &str)> {
    let end = release_form_end(body).or_else(|| vcs_form_end(body))?;
    let (vector, rest) = body.split_at(end);
    tracing::trace!("matched version vector `{vector}`");
    Some((vector, rest.trim_start()))
}
