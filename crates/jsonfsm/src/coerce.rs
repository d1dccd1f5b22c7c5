//! Lossy, kind-spanning conversions out of a [`Value`].
//!
//! [`Value::fetch`] dispatches on the stored kind and hands the payload to the
//! matching [`Coerce`] constructor, so a number can be read as a string, a
//! boolean as an integer, and so on. Use the strict `as_*` accessors on
//! [`Value`] when the kind matters.
use alloc::{
    string::{String, ToString},
    vec,
    vec::Vec,
};

use crate::{
    text,
    value::{Array, Map, Value},
};

/// Conversion target for [`Value::fetch`] and [`Value::get`].
///
/// Each method receives the payload of one value kind. Returning `None`
/// means the payload has no meaningful conversion, in which case
/// [`Value::get`] falls back to its default. Every method defaults to `None`,
/// so custom types only implement the kinds they accept.
///
/// # Examples
///
/// ```
/// use jsonfsm::{Coerce, Value};
///
/// #[derive(Debug, PartialEq)]
/// struct Celsius(f64);
///
/// impl Coerce for Celsius {
///     fn from_f64(n: f64) -> Option<Self> {
///         Some(Celsius(n))
///     }
///     fn from_u64(n: u64) -> Option<Self> {
///         Some(Celsius(n as f64))
///     }
/// }
///
/// assert_eq!(Value::from(21u8).fetch::<Celsius>(), Some(Celsius(21.0)));
/// assert_eq!(Value::from("hot").fetch::<Celsius>(), None);
/// ```
#[allow(unused_variables)]
pub trait Coerce: Sized {
    fn from_null() -> Option<Self> {
        None
    }
    fn from_bool(b: bool) -> Option<Self> {
        None
    }
    fn from_i64(n: i64) -> Option<Self> {
        None
    }
    fn from_u64(n: u64) -> Option<Self> {
        None
    }
    fn from_f64(n: f64) -> Option<Self> {
        None
    }
    fn from_string(s: &str) -> Option<Self> {
        None
    }
    fn from_array(a: &Array) -> Option<Self> {
        None
    }
    fn from_object(o: &Map) -> Option<Self> {
        None
    }
}

impl Value {
    /// Converts the value to `T`, whatever its kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonfsm::Value;
    ///
    /// assert_eq!(Value::from(true).fetch::<i32>(), Some(1));
    /// assert_eq!(Value::from(" 42 ").fetch::<u8>(), Some(42));
    /// assert_eq!(Value::from(2.5).fetch::<String>(), Some("2.5".to_string()));
    /// assert_eq!(Value::Null.fetch::<String>(), Some(String::new()));
    /// assert_eq!(Value::from(300).fetch::<u8>(), None);
    /// ```
    #[must_use]
    pub fn fetch<T: Coerce>(&self) -> Option<T> {
        match self {
            Value::Null => T::from_null(),
            Value::Boolean(b) => T::from_bool(*b),
            Value::Integer(n) => T::from_i64(*n),
            Value::UInteger(n) => T::from_u64(*n),
            Value::Real(n) => T::from_f64(*n),
            Value::String(s) => T::from_string(s),
            Value::Array(a) => T::from_array(a),
            Value::Object(o) => T::from_object(o),
        }
    }

    /// Like [`fetch`](Self::fetch), returning `default` when there is no
    /// conversion.
    #[must_use]
    pub fn get<T: Coerce>(&self, default: T) -> T {
        self.fetch().unwrap_or(default)
    }

    #[must_use]
    pub fn get_or_default<T: Coerce + Default>(&self) -> T {
        self.fetch().unwrap_or_default()
    }
}

impl Coerce for bool {
    fn from_null() -> Option<Self> {
        Some(false)
    }
    fn from_bool(b: bool) -> Option<Self> {
        Some(b)
    }
    fn from_i64(n: i64) -> Option<Self> {
        Some(n != 0)
    }
    fn from_u64(n: u64) -> Option<Self> {
        Some(n != 0)
    }
    fn from_f64(n: f64) -> Option<Self> {
        Some(n != 0.0)
    }
    fn from_string(s: &str) -> Option<Self> {
        Some(!matches!(s.trim(), "" | "false" | "0"))
    }
    fn from_array(a: &Array) -> Option<Self> {
        Some(!a.is_empty())
    }
    fn from_object(o: &Map) -> Option<Self> {
        Some(!o.is_empty())
    }
}

macro_rules! impl_coerce_integer {
    ($($t:ty),*) => {
        $(
            impl Coerce for $t {
                fn from_null() -> Option<Self> {
                    Some(0)
                }
                fn from_bool(b: bool) -> Option<Self> {
                    Some(<$t>::from(b))
                }
                fn from_i64(n: i64) -> Option<Self> {
                    <$t>::try_from(n).ok()
                }
                fn from_u64(n: u64) -> Option<Self> {
                    <$t>::try_from(n).ok()
                }
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_precision_loss,
                    clippy::cast_sign_loss,
                    clippy::cast_lossless
                )]
                // `MIN` is a power of two and converts exactly; `MAX + 1` does
                // too, while `MAX` itself rounds up for the 64-bit widths.
                fn from_f64(n: f64) -> Option<Self> {
                    (n.is_finite() && n >= <$t>::MIN as f64 && n < <$t>::MAX as f64 + 1.0)
                        .then(|| n as $t)
                }
                fn from_string(s: &str) -> Option<Self> {
                    let s = s.trim();
                    s.parse::<$t>()
                        .ok()
                        .or_else(|| s.parse::<f64>().ok().and_then(Self::from_f64))
                }
                fn from_array(a: &Array) -> Option<Self> {
                    <$t>::try_from(a.len()).ok()
                }
                fn from_object(o: &Map) -> Option<Self> {
                    <$t>::try_from(o.len()).ok()
                }
            }
        )*
    };
}

impl_coerce_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_coerce_float {
    ($($t:ty),*) => {
        $(
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            impl Coerce for $t {
                fn from_null() -> Option<Self> {
                    Some(0.0)
                }
                fn from_bool(b: bool) -> Option<Self> {
                    Some(if b { 1.0 } else { 0.0 })
                }
                fn from_i64(n: i64) -> Option<Self> {
                    Some(n as $t)
                }
                fn from_u64(n: u64) -> Option<Self> {
                    Some(n as $t)
                }
                fn from_f64(n: f64) -> Option<Self> {
                    Some(n as $t)
                }
                fn from_string(s: &str) -> Option<Self> {
                    s.trim().parse().ok()
                }
                fn from_array(a: &Array) -> Option<Self> {
                    Some(a.len() as $t)
                }
                fn from_object(o: &Map) -> Option<Self> {
                    Some(o.len() as $t)
                }
            }
        )*
    };
}

impl_coerce_float!(f32, f64);

impl Coerce for String {
    fn from_null() -> Option<Self> {
        Some(String::new())
    }
    fn from_bool(b: bool) -> Option<Self> {
        Some(b.to_string())
    }
    fn from_i64(n: i64) -> Option<Self> {
        Some(n.to_string())
    }
    fn from_u64(n: u64) -> Option<Self> {
        Some(n.to_string())
    }
    fn from_f64(n: f64) -> Option<Self> {
        let mut s = String::new();
        text::write_real(&mut s, n).ok()?;
        Some(s)
    }
    fn from_string(s: &str) -> Option<Self> {
        Some(s.into())
    }
    fn from_array(a: &Array) -> Option<Self> {
        let mut s = String::new();
        text::write_array(&mut s, a).ok()?;
        Some(s)
    }
    fn from_object(o: &Map) -> Option<Self> {
        let mut s = String::new();
        text::write_object(&mut s, o).ok()?;
        Some(s)
    }
}

impl Coerce for Array {
    fn from_null() -> Option<Self> {
        Some(Vec::new())
    }
    fn from_bool(b: bool) -> Option<Self> {
        Some(vec![Value::Boolean(b)])
    }
    fn from_i64(n: i64) -> Option<Self> {
        Some(vec![Value::Integer(n)])
    }
    fn from_u64(n: u64) -> Option<Self> {
        Some(vec![Value::UInteger(n)])
    }
    fn from_f64(n: f64) -> Option<Self> {
        Some(vec![Value::Real(n)])
    }
    fn from_string(s: &str) -> Option<Self> {
        Some(vec![Value::String(s.into())])
    }
    fn from_array(a: &Array) -> Option<Self> {
        Some(a.clone())
    }
    fn from_object(o: &Map) -> Option<Self> {
        Some(o.values().cloned().collect())
    }
}

impl Coerce for Map {
    fn from_null() -> Option<Self> {
        Some(Map::new())
    }
    fn from_array(a: &Array) -> Option<Self> {
        Some(
            a.iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v.clone()))
                .collect(),
        )
    }
    fn from_object(o: &Map) -> Option<Self> {
        Some(o.clone())
    }
}

impl Coerce for Value {
    fn from_null() -> Option<Self> {
        Some(Value::Null)
    }
    fn from_bool(b: bool) -> Option<Self> {
        Some(Value::Boolean(b))
    }
    fn from_i64(n: i64) -> Option<Self> {
        Some(Value::Integer(n))
    }
    fn from_u64(n: u64) -> Option<Self> {
        Some(Value::UInteger(n))
    }
    fn from_f64(n: f64) -> Option<Self> {
        Some(Value::Real(n))
    }
    fn from_string(s: &str) -> Option<Self> {
        Some(Value::String(s.into()))
    }
    fn from_array(a: &Array) -> Option<Self> {
        Some(Value::Array(a.clone()))
    }
    fn from_object(o: &Map) -> Option<Self> {
        Some(Value::Object(o.clone()))
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec};

    use crate::{Map, Value};

    #[test]
    fn null_yields_defaults() {
        assert_eq!(Value::Null.fetch::<i32>(), Some(0));
        assert_eq!(Value::Null.fetch::<bool>(), Some(false));
        assert_eq!(Value::Null.fetch::<f64>(), Some(0.0));
        assert_eq!(Value::Null.fetch::<Map>(), Some(Map::new()));
    }

    #[test]
    fn numbers_cross_signedness() {
        assert_eq!(Value::from(-5).fetch::<i64>(), Some(-5));
        assert_eq!(Value::from(-5).fetch::<u64>(), None);
        assert_eq!(Value::from(-5).get(7u64), 7);
        assert_eq!(Value::from(5u64).fetch::<i8>(), Some(5));
        assert_eq!(Value::from(2.9).fetch::<i32>(), Some(2));
        assert_eq!(Value::from(f64::NAN).fetch::<i32>(), None);
        assert_eq!(Value::from(1e300).fetch::<i64>(), None);
    }

    #[test]
    fn reals_at_the_integer_bounds() {
        let two_63 = 9_223_372_036_854_775_808.0;
        assert_eq!(Value::from(two_63).fetch::<i64>(), None);
        assert_eq!(Value::from(-two_63).fetch::<i64>(), Some(i64::MIN));
        assert_eq!(Value::from(two_63).fetch::<u64>(), Some(1 << 63));
        assert_eq!(Value::from(18_446_744_073_709_551_616.0).fetch::<u64>(), None);
        assert_eq!(Value::from("9223372036854775808").fetch::<i64>(), None);
        assert_eq!(Value::from(127.9).fetch::<i8>(), Some(127));
        assert_eq!(Value::from(128.0).fetch::<i8>(), None);
        assert_eq!(Value::from(-128.0).fetch::<i8>(), Some(-128));
        assert_eq!(Value::from(4_294_967_295.0).fetch::<u32>(), Some(u32::MAX));
        assert_eq!(Value::from(4_294_967_296.0).fetch::<u32>(), None);
    }

    #[test]
    fn strings_parse_on_demand() {
        assert_eq!(Value::from("12").fetch::<i32>(), Some(12));
        assert_eq!(Value::from("12.75").fetch::<i32>(), Some(12));
        assert_eq!(Value::from("abc").fetch::<i32>(), None);
        assert_eq!(Value::from("abc").get(-1), -1);
        assert_eq!(Value::from("0.5").fetch::<f64>(), Some(0.5));
        assert_eq!(Value::from("false").fetch::<bool>(), Some(false));
        assert_eq!(Value::from("yes").fetch::<bool>(), Some(true));
    }

    #[test]
    fn containers_report_size_and_text() {
        let v = Value::from_iter([Value::from(1), Value::from("a")]);
        assert_eq!(v.fetch::<usize>(), Some(2));
        assert_eq!(v.fetch::<bool>(), Some(true));
        assert_eq!(v.get_or_default::<String>(), r#"[1,"a"]"#);
        let m = v.fetch::<Map>().unwrap();
        assert_eq!(m.get("1"), Some(&Value::from("a")));
        assert_eq!(Value::from(4).fetch::<Map>(), None);
    }

    #[test]
    fn scalars_wrap_into_arrays() {
        assert_eq!(
            Value::from(true).fetch::<crate::Array>(),
            Some(vec![Value::from(true)])
        );
        assert_eq!(Value::from(5.0).fetch::<String>().as_deref(), Some("5.0"));
        assert_eq!(Value::from(3).fetch::<Value>(), Some(Value::from(3)));
    }
}
