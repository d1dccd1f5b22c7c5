//! A JSON value model with an RFC 7159 parser built on a table-driven
//! grammar engine.
//!
//! - [`Value`] is the document model: a tagged union of null, boolean,
//!   signed and unsigned integer, real, string, array and object, with
//!   auto-vivifying indexing, lossy coercion ([`Value::get`]) and text
//!   output through [`Display`](core::fmt::Display).
//! - [`Grammar`] recognizes JSON text with static transition tables run by
//!   the [`fsm`] engine and reports what it finds to a [`SaxContext`].
//!   [`DomBuilder`] is the consumer that builds a [`Value`].
//! - [`Value::to_bytes`] and [`Value::from_bytes`] convert to and from a
//!   compact binary form.
//!
//! ```
//! let v: jsonfsm::Value = r#"{"n": [-5, 5, 5.0]}"#.parse().unwrap();
//! assert!(v["n"][0].is_signed());
//! assert!(v["n"][1].is_unsigned());
//! assert!(v["n"][2].is_real());
//! assert_eq!(v["n"][2].get(0i32), 5);
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod codec;
mod coerce;
mod dom;
mod error;
pub mod fsm;
mod grammar;
mod index;
mod iter;
mod options;
mod path;
mod sax;
mod text;
mod value;

#[cfg(any(test, feature = "serde"))]
mod serde_impls;

#[cfg(test)]
mod tests;

use core::str::FromStr;

pub use coerce::Coerce;
pub use dom::DomBuilder;
pub use error::{DecodeError, EncodeError, ErrorCode, ParseError};
pub use grammar::Grammar;
pub use iter::Iter;
pub use options::{DEFAULT_MAX_DEPTH, ParserOptions};
pub use path::{PathComponent, PathComponentFrom};
pub use sax::SaxContext;
pub use text::PrettyConfig;
pub use value::{Array, Kind, Map, Value};

#[doc(hidden)]
pub use alloc::vec;

/// Parses a JSON document with default options.
///
/// # Errors
///
/// A [`ParseError`] if `text` is not exactly one JSON value.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    parse_with_options(text, ParserOptions::default())
}

/// Parses a JSON document.
///
/// # Errors
///
/// A [`ParseError`] if `text` is not exactly one JSON value, see
/// [`Grammar::parse`].
pub fn parse_with_options(text: &str, options: ParserOptions) -> Result<Value, ParseError> {
    let mut builder = DomBuilder::new();
    Grammar::rfc7159().parse(text, &mut builder, options)?;
    Ok(builder.finish())
}

impl Value {
    /// Replaces `self` with the document in `text`.
    ///
    /// On failure `self` is left `Null`.
    ///
    /// # Errors
    ///
    /// As [`parse`].
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonfsm::{ErrorCode, Value};
    ///
    /// let mut v = Value::from(1);
    /// let err = v.parse(r#"{"a":1"#).unwrap_err();
    /// assert_eq!(err.code(), ErrorCode::BadJson);
    /// assert!(v.is_null());
    /// ```
    pub fn parse(&mut self, text: &str) -> Result<(), ParseError> {
        match parse(text) {
            Ok(v) => {
                *self = v;
                Ok(())
            }
            Err(err) => {
                *self = Value::Null;
                Err(err)
            }
        }
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Builds a `Vec<PathComponent>` from a mixed list of keys and indices.
///
/// ```rust
/// use jsonfsm::{PathComponent, path};
///
/// let p = path![0, "foo", 2];
/// assert_eq!(
///     p,
///     vec![
///         PathComponent::Index(0),
///         PathComponent::Key("foo".into()),
///         PathComponent::Index(2)
///     ]
/// );
/// ```
#[macro_export]
macro_rules! path {
    ( $( $elem:expr ),* $(,)? ) => {{
        $crate::vec![$(<$crate::PathComponent as $crate::PathComponentFrom<_>>::from_path_component($elem)),*]
    }};
}
