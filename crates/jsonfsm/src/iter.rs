use alloc::collections::btree_map;
use core::{iter::FusedIterator, slice};

use crate::{path::PathComponent, value::Value};

/// Iterator over the children of a [`Value`], created by [`Value::iter`].
///
/// Array elements come with their index, object members with their key in
/// key order. Scalars have no children.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: IterInner<'a>,
}

#[derive(Debug, Clone)]
enum IterInner<'a> {
    Empty,
    Array(core::iter::Enumerate<slice::Iter<'a, Value>>),
    Object(btree_map::Iter<'a, alloc::string::String, Value>),
}

impl<'a> Iterator for Iter<'a> {
    type Item = (PathComponent<&'a str>, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Empty => None,
            IterInner::Array(it) => it.next().map(|(i, v)| (PathComponent::Index(i), v)),
            IterInner::Object(it) => it.next().map(|(k, v)| (PathComponent::Key(k.as_str()), v)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IterInner::Empty => (0, Some(0)),
            IterInner::Array(it) => it.size_hint(),
            IterInner::Object(it) => it.size_hint(),
        }
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

impl Value {
    /// Iterates over the children of an array or object.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonfsm::PathComponent;
    ///
    /// let v = jsonfsm::parse(r#"{"b":2,"a":1}"#).unwrap();
    /// let keys: Vec<_> = v.iter().map(|(pc, _)| pc).collect();
    /// assert_eq!(keys, [PathComponent::Key("a"), PathComponent::Key("b")]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        let inner = match self {
            Value::Array(a) => IterInner::Array(a.iter().enumerate()),
            Value::Object(o) => IterInner::Object(o.iter()),
            _ => IterInner::Empty,
        };
        Iter { inner }
    }

    /// Iterates over the child values only.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.iter().map(|(_, v)| v)
    }
}

impl<'a> IntoIterator for &'a Value {
    type Item = (PathComponent<&'a str>, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::{PathComponent, Value};

    #[test]
    fn array_yields_indices_in_order() {
        let v: Value = ["x", "y"].into_iter().map(Value::from).collect();
        let items: Vec<_> = v.iter().collect();
        assert_eq!(
            items,
            [
                (PathComponent::<&str>::Index(0), &Value::from("x")),
                (PathComponent::<&str>::Index(1), &Value::from("y")),
            ]
        );
        assert_eq!(v.iter().len(), 2);
    }

    #[test]
    fn scalars_have_no_children() {
        assert_eq!(Value::from(1).iter().count(), 0);
        assert_eq!(Value::Null.values().count(), 0);
    }

    #[test]
    fn objects_iterate_by_key() {
        let mut v = Value::Null;
        v["z"] = Value::from(1);
        v["m"] = Value::from(2);
        let mut keys = Vec::new();
        for (pc, _) in &v {
            if let PathComponent::Key(k) = pc {
                keys.push(k);
            }
        }
        assert_eq!(keys, ["m", "z"]);
        let sum: i64 = v.values().filter_map(Value::as_i64).sum();
        assert_eq!(sum, 3);
    }
}
