//! Private binary encoding of [`Value`].
//!
//! Each value is a tag byte ([`Kind`] as `u8`) followed by its payload:
//!
//! | kind     | payload                                                      |
//! |----------|--------------------------------------------------------------|
//! | null     | none                                                         |
//! | boolean  | one byte, `0` or `1`                                         |
//! | integer  | `i64`, big-endian                                            |
//! | uinteger | `u64`, big-endian                                            |
//! | real     | `f64` bits, big-endian                                       |
//! | string   | `u32` byte length, UTF-8 bytes                               |
//! | array    | `u32` element count, elements                                |
//! | object   | `u32` member count, then per member a string-encoded key and |
//! |          | the value                                                    |
//!
//! The format is not versioned. Decoding never panics; malformed input is
//! reported as a [`DecodeError`].
//!
//! Every value encodes, but decoding refuses containers nested deeper than
//! [`DEFAULT_MAX_DEPTH`](crate::DEFAULT_MAX_DEPTH) with
//! [`DecodeError::TooDeep`], so only values within that depth round-trip.
use alloc::{string::String, vec::Vec};

use bytes::{Buf, BufMut};

use crate::{
    error::{DecodeError, EncodeError},
    options::DEFAULT_MAX_DEPTH,
    value::{Array, Kind, Map, Value},
};

fn put_len<B: BufMut>(buf: &mut B, len: usize) -> Result<(), EncodeError> {
    let len = u32::try_from(len).map_err(|_| EncodeError::LengthOverflow(len))?;
    buf.put_u32(len);
    Ok(())
}

fn put_str<B: BufMut>(buf: &mut B, s: &str) -> Result<(), EncodeError> {
    put_len(buf, s.len())?;
    buf.put_slice(s.as_bytes());
    Ok(())
}

fn need<B: Buf>(buf: &B, n: usize) -> Result<(), DecodeError> {
    if buf.remaining() < n {
        Err(DecodeError::UnexpectedEnd)
    } else {
        Ok(())
    }
}

fn get_len<B: Buf>(buf: &mut B) -> Result<usize, DecodeError> {
    need(buf, 4)?;
    Ok(buf.get_u32() as usize)
}

fn get_str<B: Buf>(buf: &mut B) -> Result<String, DecodeError> {
    let len = get_len(buf)?;
    need(buf, len)?;
    let mut bytes = alloc::vec![0; len];
    buf.copy_to_slice(&mut bytes);
    String::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8)
}

impl Value {
    /// Appends the binary encoding of `self` to `buf`.
    ///
    /// # Errors
    ///
    /// [`EncodeError::LengthOverflow`] if a string, array or object is
    /// longer than the 32-bit length prefix allows. Bytes written before the
    /// failure are left in `buf`.
    pub fn try_encode<B: BufMut>(&self, buf: &mut B) -> Result<(), EncodeError> {
        buf.put_u8(self.kind() as u8);
        match self {
            Value::Null => {}
            Value::Boolean(b) => buf.put_u8(u8::from(*b)),
            Value::Integer(n) => buf.put_i64(*n),
            Value::UInteger(n) => buf.put_u64(*n),
            Value::Real(n) => buf.put_f64(*n),
            Value::String(s) => put_str(buf, s)?,
            Value::Array(a) => {
                put_len(buf, a.len())?;
                for v in a {
                    v.try_encode(buf)?;
                }
            }
            Value::Object(o) => {
                put_len(buf, o.len())?;
                for (k, v) in o {
                    put_str(buf, k)?;
                    v.try_encode(buf)?;
                }
            }
        }
        Ok(())
    }

    /// Appends the binary encoding of `self` to `buf`.
    ///
    /// # Panics
    ///
    /// If a string or container exceeds `u32::MAX` elements; use
    /// [`try_encode`](Self::try_encode) to handle that case.
    pub fn encode<B: BufMut>(&self, buf: &mut B) {
        if let Err(err) = self.try_encode(buf) {
            panic!("cannot encode value: {err}");
        }
    }

    /// Encodes `self` into a fresh byte vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonfsm::Value;
    ///
    /// let v = jsonfsm::parse(r#"{"k":[1,-2,3.5,"s",null,true]}"#).unwrap();
    /// assert_eq!(Value::from_bytes(&v.to_bytes()), Ok(v));
    /// assert_eq!(Value::from(true).to_bytes(), [1, 1]);
    /// ```
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode(&mut out);
        out
    }

    /// Decodes one value from the front of `buf`, leaving any bytes after it.
    ///
    /// # Errors
    ///
    /// A [`DecodeError`] describing the first malformed byte sequence.
    pub fn decode<B: Buf>(buf: &mut B) -> Result<Value, DecodeError> {
        decode_at(buf, 0)
    }

    /// Decodes a value that must span all of `bytes`.
    ///
    /// # Errors
    ///
    /// As [`decode`](Self::decode), plus [`DecodeError::TrailingBytes`] when
    /// input remains after the value.
    pub fn from_bytes(mut bytes: &[u8]) -> Result<Value, DecodeError> {
        let v = Self::decode(&mut bytes)?;
        if bytes.is_empty() {
            Ok(v)
        } else {
            Err(DecodeError::TrailingBytes(bytes.len()))
        }
    }
}

fn decode_at<B: Buf>(buf: &mut B, depth: usize) -> Result<Value, DecodeError> {
    need(buf, 1)?;
    let tag = buf.get_u8();
    let kind = Kind::from_tag(tag).ok_or(DecodeError::UnknownTag(tag))?;
    Ok(match kind {
        Kind::Null => Value::Null,
        Kind::Boolean => {
            need(buf, 1)?;
            match buf.get_u8() {
                0 => Value::Boolean(false),
                1 => Value::Boolean(true),
                other => return Err(DecodeError::InvalidBoolean(other)),
            }
        }
        Kind::Integer => {
            need(buf, 8)?;
            Value::Integer(buf.get_i64())
        }
        Kind::UInteger => {
            need(buf, 8)?;
            Value::UInteger(buf.get_u64())
        }
        Kind::Real => {
            need(buf, 8)?;
            Value::Real(buf.get_f64())
        }
        Kind::String => Value::String(get_str(buf)?),
        Kind::Array => {
            if depth >= DEFAULT_MAX_DEPTH {
                return Err(DecodeError::TooDeep);
            }
            let n = get_len(buf)?;
            // Every element takes at least one byte.
            let mut a = Array::with_capacity(n.min(buf.remaining()));
            for _ in 0..n {
                a.push(decode_at(buf, depth + 1)?);
            }
            Value::Array(a)
        }
        Kind::Object => {
            if depth >= DEFAULT_MAX_DEPTH {
                return Err(DecodeError::TooDeep);
            }
            let n = get_len(buf)?;
            let mut o = Map::new();
            for _ in 0..n {
                let k = get_str(buf)?;
                let v = decode_at(buf, depth + 1)?;
                o.insert(k, v);
            }
            Value::Object(o)
        }
    })
}
