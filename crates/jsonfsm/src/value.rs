//! JSON value types.
//!
//! This module defines the [`Value`] enum, which represents any JSON value as
//! a discriminated union, together with its type queries, strict accessors and
//! container operations. Indexing, coercion, traversal, text output and the
//! binary codec live in sibling modules.
use alloc::{collections::BTreeMap, string::String, vec::Vec};
use core::mem;

pub type Map = BTreeMap<String, Value>;
pub type Array = Vec<Value>;

/// A JSON value as defined by [RFC 7159].
///
/// Exactly one kind is live at a time. Integers keep their signedness as
/// parsed: `-5` is an [`Integer`], `5` is a [`UInteger`] and `5.0` is a
/// [`Real`].
///
/// # Examples
///
/// ```
/// use jsonfsm::Value;
///
/// let mut v = Value::Null;
/// v["a"]["b"] = 1.into();
/// v["list"][2] = true.into();
/// assert_eq!(v.to_string(), r#"{"a":{"b":1},"list":[null,null,true]}"#);
/// ```
///
/// [RFC 7159]: https://datatracker.ietf.org/doc/html/rfc7159
/// [`Integer`]: Value::Integer
/// [`UInteger`]: Value::UInteger
/// [`Real`]: Value::Real
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    UInteger(u64),
    Real(f64),
    String(String),
    Array(Array),
    Object(Map),
}

/// The discriminant of a [`Value`].
///
/// The numeric values are the tag bytes of the binary format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Kind {
    Null = 0,
    Boolean = 1,
    Integer = 2,
    UInteger = 3,
    Real = 4,
    String = 5,
    Array = 6,
    Object = 7,
}

impl Kind {
    pub(crate) fn from_tag(tag: u8) -> Option<Self> {
        Some(match tag {
            0 => Self::Null,
            1 => Self::Boolean,
            2 => Self::Integer,
            3 => Self::UInteger,
            4 => Self::Real,
            5 => Self::String,
            6 => Self::Array,
            7 => Self::Object,
            _ => return None,
        })
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    #[allow(clippy::cast_possible_wrap)]
                    Self::Integer(v as i64)
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Self::UInteger(v as u64)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Real(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl Value {
    /// Creates an empty array.
    #[must_use]
    pub fn array() -> Self {
        Self::Array(Array::new())
    }

    /// Creates an empty object.
    #[must_use]
    pub fn object() -> Self {
        Self::Object(Map::new())
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Null => Kind::Null,
            Self::Boolean(_) => Kind::Boolean,
            Self::Integer(_) => Kind::Integer,
            Self::UInteger(_) => Kind::UInteger,
            Self::Real(_) => Kind::Real,
            Self::String(_) => Kind::String,
            Self::Array(_) => Kind::Array,
            Self::Object(_) => Kind::Object,
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` for both [`Integer`] and [`UInteger`].
    ///
    /// Use [`is_signed`](Self::is_signed) or
    /// [`is_unsigned`](Self::is_unsigned) to tell them apart.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonfsm::Value;
    ///
    /// assert!(Value::from(-1).is_integer());
    /// assert!(Value::from(1u8).is_integer());
    /// assert!(!Value::from(1.0).is_integer());
    /// ```
    ///
    /// [`Integer`]: Value::Integer
    /// [`UInteger`]: Value::UInteger
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::UInteger(..))
    }

    #[must_use]
    pub fn is_signed(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    #[must_use]
    pub fn is_unsigned(&self) -> bool {
        matches!(self, Self::UInteger(..))
    }

    #[must_use]
    pub fn is_real(&self) -> bool {
        matches!(self, Self::Real(..))
    }

    #[must_use]
    pub fn is_number(&self) -> bool {
        self.is_integer() || self.is_real()
    }

    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Null, booleans, numbers and strings are scalars.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        !self.is_container()
    }

    /// Checks if value is a container (array or object).
    #[must_use]
    pub fn is_container(&self) -> bool {
        self.is_array() || self.is_object()
    }

    /// Number of elements: 0 for null, the length of an array or object, and
    /// 1 for every scalar (a string counts as one value, not its length).
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonfsm::Value;
    ///
    /// assert_eq!(Value::Null.size(), 0);
    /// assert_eq!(Value::from("hello").size(), 1);
    /// assert_eq!(Value::from_iter([Value::Null, Value::Null]).size(), 2);
    /// ```
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Self::Null => 0,
            Self::Array(a) => a.len(),
            Self::Object(o) => o.len(),
            _ => 1,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    /// Returns the value as `i64` if it is an integer that fits.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::UInteger(n) => i64::try_from(*n).ok(),
            _ => None,
        }
    }

    /// Returns the value as `u64` if it is a non-negative integer.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Integer(n) => u64::try_from(*n).ok(),
            Self::UInteger(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns any number kind as `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::UInteger(n) => Some(*n as f64),
            Self::Real(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_string_mut(&mut self) -> Option<&mut String> {
        if let Self::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        if let Self::Array(a) = self {
            Some(a)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        if let Self::Array(a) = self {
            Some(a)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        if let Self::Object(o) = self {
            Some(o)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        if let Self::Object(o) = self {
            Some(o)
        } else {
            None
        }
    }

    /// Looks up a member of an object. Returns `None` for a missing key and
    /// for every value that is not an object.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|o| o.get(key))
    }

    #[must_use]
    pub fn find_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.as_object_mut().and_then(|o| o.get_mut(key))
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Erases a member of an object, returning it.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.as_object_mut().and_then(|o| o.remove(key))
    }

    /// Erases an element of an array, shifting the tail down.
    pub fn remove_index(&mut self, index: usize) -> Option<Value> {
        let a = self.as_array_mut()?;
        (index < a.len()).then(|| a.remove(index))
    }

    /// Appends `v` to an array, turning null into an empty array first.
    ///
    /// # Panics
    ///
    /// If the value is neither null nor an array.
    pub fn push(&mut self, v: impl Into<Value>) {
        self.as_array_or_convert().push(v.into());
    }

    /// Inserts a member into an object, turning null into an empty object
    /// first. Returns the previous value under `key`.
    ///
    /// # Panics
    ///
    /// If the value is neither null nor an object.
    pub fn insert(&mut self, key: impl Into<String>, v: impl Into<Value>) -> Option<Value> {
        self.as_object_or_convert().insert(key.into(), v.into())
    }

    /// Resets the value to null.
    pub fn clear(&mut self) {
        *self = Self::Null;
    }

    /// Moves the value out, leaving null in its place.
    #[must_use]
    pub fn take(&mut self) -> Value {
        mem::take(self)
    }

    pub(crate) fn as_array_or_convert(&mut self) -> &mut Array {
        if self.is_null() {
            *self = Self::array();
        }
        match self {
            Self::Array(a) => a,
            other => panic!("expected an array or null, found {:?}", other.kind()),
        }
    }

    pub(crate) fn as_object_or_convert(&mut self) -> &mut Map {
        if self.is_null() {
            *self = Self::object();
        }
        match self {
            Self::Object(o) => o,
            other => panic!("expected an object or null, found {:?}", other.kind()),
        }
    }
}
