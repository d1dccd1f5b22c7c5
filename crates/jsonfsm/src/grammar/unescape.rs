//! Decoding of JSON string escapes.
//!
//! `\uXXXX` escapes are UTF-16 code units: a high surrogate followed by a
//! low surrogate escape decodes to one scalar value. Unpaired surrogates
//! cannot be represented in a Rust string and are either refused or
//! replaced with U+FFFD.
use alloc::{borrow::Cow, string::String};
use core::str::Chars;

/// A malformed escape or an unpaired surrogate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct InvalidEscape;

fn hex4(chars: &mut Chars<'_>) -> Result<u32, InvalidEscape> {
    let mut unit = 0;
    for _ in 0..4 {
        let digit = chars.next().and_then(|c| c.to_digit(16)).ok_or(InvalidEscape)?;
        unit = unit * 16 + digit;
    }
    Ok(unit)
}

fn lone_surrogate(replace: bool) -> Result<char, InvalidEscape> {
    if replace {
        Ok(char::REPLACEMENT_CHARACTER)
    } else {
        Err(InvalidEscape)
    }
}

/// Decodes the escapes in `raw`, the text between a string's quotes.
///
/// Input without a backslash is returned as is.
pub(crate) fn unescape(raw: &str, replace_invalid_surrogates: bool) -> Result<Cow<'_, str>, InvalidEscape> {
    if !raw.contains('\\') {
        return Ok(Cow::Borrowed(raw));
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let decoded = match chars.next().ok_or(InvalidEscape)? {
            '"' => '"',
            '\\' => '\\',
            '/' => '/',
            'b' => '\u{8}',
            'f' => '\u{c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'u' | 'U' => match hex4(&mut chars)? {
                high @ 0xD800..=0xDBFF => {
                    let mut ahead = chars.clone();
                    let low = match (ahead.next(), ahead.next()) {
                        (Some('\\'), Some('u' | 'U')) => hex4(&mut ahead).ok(),
                        _ => None,
                    };
                    match low {
                        Some(low @ 0xDC00..=0xDFFF) => {
                            chars = ahead;
                            let scalar = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                            char::from_u32(scalar).ok_or(InvalidEscape)?
                        }
                        // Leave whatever follows to be decoded on its own.
                        _ => lone_surrogate(replace_invalid_surrogates)?,
                    }
                }
                0xDC00..=0xDFFF => lone_surrogate(replace_invalid_surrogates)?,
                unit => char::from_u32(unit).ok_or(InvalidEscape)?,
            },
            _ => return Err(InvalidEscape),
        };
        out.push(decoded);
    }
    Ok(Cow::Owned(out))
}
