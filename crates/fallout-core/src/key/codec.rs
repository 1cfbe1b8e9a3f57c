//! Reversible escaping of primary-key text for URL path segments.
//!
//! Every reserved character becomes `_XX` (uppercase hex of its code point).
//! `_` is itself reserved, so every literal `_` in a quoted token starts an
//! escape triplet and `unquote(quote(s)) == s` holds for all inputs.

use std::borrow::Cow;
use thiserror::Error as ThisError;

/// Characters that are escaped by [`quote`].
pub const RESERVED: &str = ":/_#?;@&=+$,\"<>%\\";

const ESCAPE: char = '_';

///
/// KeyDecodeError
///
/// Malformed escape found by strict decoding.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum KeyDecodeError {
    #[error("truncated escape at byte {offset}: '_{segment}'")]
    Truncated { offset: usize, segment: String },

    #[error("invalid hex escape at byte {offset}: '_{segment}'")]
    InvalidHex { offset: usize, segment: String },
}

fn is_reserved(c: char) -> bool {
    RESERVED.contains(c)
}

/// Escape every reserved character in `raw`.
///
/// Borrows the input when nothing needs escaping.
#[must_use]
pub fn quote(raw: &str) -> Cow<'_, str> {
    if !raw.chars().any(is_reserved) {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len() + 8);
    for c in raw.chars() {
        if is_reserved(c) {
            // reserved chars are all ASCII
            out.push_str(&format!("{ESCAPE}{:02X}", u32::from(c)));
        } else {
            out.push(c);
        }
    }

    Cow::Owned(out)
}

/// Undo [`quote`], falling back to literal text for malformed escapes.
///
/// A segment after `_` whose first two characters are not hex digits (or that
/// is shorter than two characters) is emitted verbatim with its leading `_`.
#[must_use]
pub fn unquote(token: &str) -> Cow<'_, str> {
    if !token.contains(ESCAPE) {
        return Cow::Borrowed(token);
    }

    let mut segments = token.split(ESCAPE);
    let mut out = String::with_capacity(token.len());
    out.push_str(segments.next().unwrap_or_default());

    for segment in segments {
        match decode_escape(segment) {
            Some((c, rest)) => {
                out.push(c);
                out.push_str(rest);
            }
            None => {
                out.push(ESCAPE);
                out.push_str(segment);
            }
        }
    }

    Cow::Owned(out)
}

/// Undo [`quote`], rejecting any malformed escape.
pub fn try_unquote(token: &str) -> Result<String, KeyDecodeError> {
    let mut segments = token.split(ESCAPE);
    let first = segments.next().unwrap_or_default();
    let mut out = String::with_capacity(token.len());
    out.push_str(first);

    let mut offset = first.len();
    for segment in segments {
        if segment.chars().take(2).count() < 2 {
            return Err(KeyDecodeError::Truncated {
                offset,
                segment: segment.to_string(),
            });
        }
        let Some((c, rest)) = decode_escape(segment) else {
            return Err(KeyDecodeError::InvalidHex {
                offset,
                segment: segment.to_string(),
            });
        };

        out.push(c);
        out.push_str(rest);
        offset += ESCAPE.len_utf8() + segment.len();
    }

    Ok(out)
}

// Decode the two leading hex digits of a segment into one character.
fn decode_escape(segment: &str) -> Option<(char, &str)> {
    let mut chars = segment.char_indices();
    let (_, hi) = chars.next()?;
    let (_, lo) = chars.next()?;
    let hi = hi.to_digit(16)?;
    let lo = lo.to_digit(16)?;

    // both digits are ASCII, so the remainder starts at byte 2
    let value = u8::try_from(hi * 16 + lo).ok()?;

    Some((char::from(value), &segment[2..]))
}
