use alloc::string::{String, ToString};

use crate::value::Value;

/// A component in the path to a JSON value: an object key or an array index.
///
/// Paths are slices of components, built most easily with the
/// [`path!`](crate::path!) macro.
///
/// # Examples
///
/// ```
/// use jsonfsm::PathComponent;
///
/// let key = PathComponent::Key("foo".to_string());
/// assert_eq!(key.as_key(), Some("foo"));
///
/// let idx: PathComponent = PathComponent::Index(3);
/// assert_eq!(idx.as_index(), Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathComponent<K = String> {
    Key(K),
    Index(usize),
}

impl<K: AsRef<str>> PathComponent<K> {
    #[must_use]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Key(k) => Some(k.as_ref()),
            Self::Index(_) => None,
        }
    }

    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Key(_) => None,
            Self::Index(i) => Some(*i),
        }
    }

    /// Converts a borrowed component into an owned one.
    #[must_use]
    pub fn to_owned_component(&self) -> PathComponent {
        match self {
            Self::Key(k) => PathComponent::Key(k.as_ref().to_string()),
            Self::Index(i) => PathComponent::Index(*i),
        }
    }
}

// Convenient conversions so users can write `path![0, "foo"]` etc.
macro_rules! impl_from_int_for_pathcomponent {
    ($($t:ty),*) => {
        $(
            impl From<$t> for PathComponent {
                fn from(i: $t) -> Self {
                    #[allow(clippy::cast_possible_truncation)]
                    PathComponent::Index(i as usize)
                }
            }
        )*
    };
}

impl_from_int_for_pathcomponent!(u8, u16, u32, u64, usize);

impl From<&str> for PathComponent {
    fn from(s: &str) -> Self {
        Self::Key(s.to_string())
    }
}

impl From<String> for PathComponent {
    fn from(s: String) -> Self {
        Self::Key(s)
    }
}

#[doc(hidden)]
pub trait PathComponentFrom<T> {
    fn from_path_component(value: T) -> PathComponent;
}

macro_rules! impl_integer_as_path_component {
    ($($t:ty),+) => {
        $(
            impl PathComponentFrom<$t> for PathComponent {
                fn from_path_component(value: $t) -> Self {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    PathComponent::Index(value as usize)
                }
            }
        )+
    };
}
impl_integer_as_path_component!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl PathComponentFrom<&str> for PathComponent {
    fn from_path_component(value: &str) -> Self {
        PathComponent::Key(value.to_string())
    }
}

impl PathComponentFrom<String> for PathComponent {
    fn from_path_component(value: String) -> Self {
        PathComponent::Key(value)
    }
}

impl Value {
    /// Follows `path` from this value, returning the value it leads to.
    ///
    /// A key step only descends into objects and an index step only into
    /// arrays; any other step yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonfsm::path;
    ///
    /// let v = jsonfsm::parse(r#"{"a":[10,{"b":true}]}"#).unwrap();
    /// assert_eq!(v.pointer(&path!["a", 1, "b"]), Some(&true.into()));
    /// assert_eq!(v.pointer(&path!["a", 5]), None);
    /// ```
    #[must_use]
    pub fn pointer<K: AsRef<str>>(&self, path: &[PathComponent<K>]) -> Option<&Value> {
        path.iter().try_fold(self, |v, pc| match (pc, v) {
            (PathComponent::Key(k), Value::Object(o)) => o.get(k.as_ref()),
            (PathComponent::Index(i), Value::Array(a)) => a.get(*i),
            _ => None,
        })
    }

    #[must_use]
    pub fn pointer_mut<K: AsRef<str>>(&mut self, path: &[PathComponent<K>]) -> Option<&mut Value> {
        path.iter().try_fold(self, |v, pc| match (pc, v) {
            (PathComponent::Key(k), Value::Object(o)) => o.get_mut(k.as_ref()),
            (PathComponent::Index(i), Value::Array(a)) => a.get_mut(*i),
            _ => None,
        })
    }
}
