//! `[]` indexing for [`Value`].
//!
//! Mutable indexing auto-vivifies: a null turns into an array (integer index)
//! or an object (key index), arrays grow with nulls up to the requested
//! position, and absent keys are inserted as null. Shared indexing never
//! mutates and yields a null for anything that is not there.
use alloc::string::String;
use core::ops::{Index, IndexMut};

use crate::value::Value;

static NULL: Value = Value::Null;

impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        self.as_array().and_then(|a| a.get(index)).unwrap_or(&NULL)
    }
}

impl IndexMut<usize> for Value {
    /// # Panics
    ///
    /// If the value is neither null nor an array.
    fn index_mut(&mut self, index: usize) -> &mut Value {
        let a = self.as_array_or_convert();
        if index >= a.len() {
            a.resize(index + 1, Value::Null);
        }
        &mut a[index]
    }
}

impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.find(key).unwrap_or(&NULL)
    }
}

impl IndexMut<&str> for Value {
    /// # Panics
    ///
    /// If the value is neither null nor an object.
    fn index_mut(&mut self, key: &str) -> &mut Value {
        let o = self.as_object_or_convert();
        // Two lookups avoid allocating the key when it is already present.
        if !o.contains_key(key) {
            o.insert(key.into(), Value::Null);
        }
        o.get_mut(key).unwrap_or_else(|| unreachable!())
    }
}

impl Index<&String> for Value {
    type Output = Value;

    fn index(&self, key: &String) -> &Value {
        &self[key.as_str()]
    }
}

impl IndexMut<&String> for Value {
    fn index_mut(&mut self, key: &String) -> &mut Value {
        &mut self[key.as_str()]
    }
}

impl Index<String> for Value {
    type Output = Value;

    fn index(&self, key: String) -> &Value {
        &self[key.as_str()]
    }
}

impl IndexMut<String> for Value {
    fn index_mut(&mut self, key: String) -> &mut Value {
        self.as_object_or_convert().entry(key).or_insert(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Value;

    #[test]
    fn sparse_array_growth() {
        let mut v = Value::Null;
        v[0] = Value::from("x");
        v[3] = Value::from("y");
        assert!(v.is_array());
        assert_eq!(v.size(), 4);
        assert!(v[1].is_null());
        assert!(v[2].is_null());
        assert_eq!(v[3], Value::from("y"));
    }

    #[test]
    fn repeated_index_does_not_extend() {
        let mut v = Value::Null;
        v[5] = Value::from(1);
        let first = v[5].clone();
        let _ = &mut v[5];
        assert_eq!(v.size(), 6);
        assert_eq!(v[5], first);
    }

    #[test]
    fn key_chains_create_objects() {
        let mut v = Value::Null;
        v["a"]["b"] = Value::from(1);
        assert!(v.is_object());
        assert!(v["a"].is_object());
        assert_eq!(v["a"]["b"], Value::from(1));
        let key = String::from("c");
        v[&key] = Value::array();
        v[key.clone()][0] = Value::from(true);
        assert_eq!(v["c"].size(), 1);
        assert_eq!(v[&key][0], Value::from(true));
    }

    #[test]
    fn shared_index_yields_null() {
        let v = Value::from(3);
        assert!(v[0].is_null());
        assert!(v["a"].is_null());
        let arr: Value = [Value::from(1)].into_iter().collect();
        assert!(arr[9].is_null());
        assert_eq!(arr.size(), 1);
    }

    #[test]
    #[should_panic(expected = "expected an object or null")]
    fn key_index_on_array_panics() {
        let mut v = Value::array();
        v["a"] = Value::Null;
    }

    #[test]
    #[should_panic(expected = "expected an array or null")]
    fn position_index_on_string_panics() {
        let mut v = Value::from("s");
        v[0] = Value::Null;
    }
}
