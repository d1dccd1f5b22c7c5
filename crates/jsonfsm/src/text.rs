//! RFC 7159 text output.
//!
//! [`Display`](core::fmt::Display) renders compact JSON; [`Value::write_pretty`]
//! renders an indented form. Both reparse to an equal [`Value`] as long as
//! every real is finite (non-finite reals are written as `null`).
use alloc::string::String;
use core::fmt::{self, Write};

use crate::value::{Map, Value};

/// Layout of [`Value::write_pretty`] output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrettyConfig {
    /// Spaces per nesting level.
    pub indent: usize,
    /// Whether a space follows the `:` of each object member.
    pub space_after_colon: bool,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self {
            indent: 4,
            space_after_colon: true,
        }
    }
}

/// Writes `src` escaped for inclusion between the quotes of a JSON string.
///
/// Quotes, backslashes and control characters are escaped, using the short
/// forms where JSON has one. U+2028 and U+2029 are escaped as well since
/// pre-2019 JavaScript parsers reject them raw.
pub(crate) fn write_escaped_string<W: Write>(f: &mut W, src: &str) -> fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\u{8}' => f.write_str("\\b")?,
            '\u{c}' => f.write_str("\\f")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{2028}' | '\u{2029}' => write!(f, "\\u{:04X}", c as u32)?,
            c if c.is_control() && (c as u32) <= 0xFFFF => write!(f, "\\u{:04X}", c as u32)?,
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Reals always carry a decimal point or an exponent so that they parse back
/// as reals rather than integers.
pub(crate) fn write_real<W: Write>(f: &mut W, n: f64) -> fmt::Result {
    if n.is_finite() {
        write!(f, "{n:?}")
    } else {
        f.write_str("null")
    }
}

fn write_quoted<W: Write>(f: &mut W, s: &str) -> fmt::Result {
    f.write_char('"')?;
    write_escaped_string(f, s)?;
    f.write_char('"')
}

pub(crate) fn write_array<W: Write>(f: &mut W, a: &[Value]) -> fmt::Result {
    f.write_char('[')?;
    for (i, v) in a.iter().enumerate() {
        if i > 0 {
            f.write_char(',')?;
        }
        write_compact(f, v)?;
    }
    f.write_char(']')
}

pub(crate) fn write_object<W: Write>(f: &mut W, o: &Map) -> fmt::Result {
    f.write_char('{')?;
    for (i, (k, v)) in o.iter().enumerate() {
        if i > 0 {
            f.write_char(',')?;
        }
        write_quoted(f, k)?;
        f.write_char(':')?;
        write_compact(f, v)?;
    }
    f.write_char('}')
}

fn write_compact<W: Write>(f: &mut W, v: &Value) -> fmt::Result {
    match v {
        Value::Null => f.write_str("null"),
        Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
        Value::Integer(n) => write!(f, "{n}"),
        Value::UInteger(n) => write!(f, "{n}"),
        Value::Real(n) => write_real(f, *n),
        Value::String(s) => write_quoted(f, s),
        Value::Array(a) => write_array(f, a),
        Value::Object(o) => write_object(f, o),
    }
}

fn write_indent<W: Write>(f: &mut W, width: usize) -> fmt::Result {
    for _ in 0..width {
        f.write_char(' ')?;
    }
    Ok(())
}

fn write_pretty_at<W: Write>(f: &mut W, v: &Value, cfg: &PrettyConfig, depth: usize) -> fmt::Result {
    match v {
        Value::Array(a) if !a.is_empty() => {
            f.write_str("[\n")?;
            for (i, item) in a.iter().enumerate() {
                if i > 0 {
                    f.write_str(",\n")?;
                }
                write_indent(f, cfg.indent * (depth + 1))?;
                write_pretty_at(f, item, cfg, depth + 1)?;
            }
            f.write_char('\n')?;
            write_indent(f, cfg.indent * depth)?;
            f.write_char(']')
        }
        Value::Object(o) if !o.is_empty() => {
            f.write_str("{\n")?;
            for (i, (k, item)) in o.iter().enumerate() {
                if i > 0 {
                    f.write_str(",\n")?;
                }
                write_indent(f, cfg.indent * (depth + 1))?;
                write_quoted(f, k)?;
                f.write_str(if cfg.space_after_colon { ": " } else { ":" })?;
                write_pretty_at(f, item, cfg, depth + 1)?;
            }
            f.write_char('\n')?;
            write_indent(f, cfg.indent * depth)?;
            f.write_char('}')
        }
        scalar_or_empty => write_compact(f, scalar_or_empty),
    }
}

impl Value {
    /// Writes indented JSON text.
    ///
    /// # Errors
    ///
    /// Propagates errors from the writer.
    pub fn write_pretty<W: Write>(&self, f: &mut W, cfg: &PrettyConfig) -> fmt::Result {
        write_pretty_at(f, self, cfg, 0)
    }

    /// Renders indented JSON text with the default [`PrettyConfig`].
    ///
    /// # Examples
    ///
    /// ```
    /// let v = jsonfsm::parse(r#"{"a":[1,{}]}"#).unwrap();
    /// assert_eq!(v.to_pretty_string(), "{\n    \"a\": [\n        1,\n        {}\n    ]\n}");
    /// ```
    #[must_use]
    pub fn to_pretty_string(&self) -> String {
        let mut s = String::new();
        let _ = self.write_pretty(&mut s, &PrettyConfig::default());
        s
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_compact(f, self)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use super::{PrettyConfig, write_escaped_string};
    use crate::Value;

    fn escape_string(src: &str) -> String {
        let mut result = String::new();
        write_escaped_string(&mut result, src).unwrap();
        result
    }

    #[test]
    fn escapes_short_forms_and_controls() {
        assert_eq!(escape_string("a\"b\\c"), r#"a\"b\\c"#);
        assert_eq!(escape_string("\n\t\r\u{8}\u{c}"), r"\n\t\r\b\f");
        assert_eq!(escape_string("\u{1}\u{7f}"), r"\u0001\u007F");
        assert_eq!(escape_string("\u{2028}é"), "\\u2028é");
    }

    #[test]
    fn reals_keep_their_kind() {
        assert_eq!(Value::from(5.0).to_string(), "5.0");
        assert_eq!(Value::from(-0.25).to_string(), "-0.25");
        assert_eq!(Value::from(1e300).to_string(), "1e300");
        assert_eq!(Value::from(f64::NAN).to_string(), "null");
        assert_eq!(Value::from(f64::INFINITY).to_string(), "null");
    }

    #[test]
    fn compact_output() {
        let mut v = Value::Null;
        v["b"][1] = Value::Null;
        v["b"][0] = Value::from(true);
        v["a"] = Value::from(-1);
        v["s"] = Value::from("x\"y");
        assert_eq!(v.to_string(), r#"{"a":-1,"b":[true,null],"s":"x\"y"}"#);
        assert_eq!(Value::array().to_string(), "[]");
        assert_eq!(Value::object().to_string(), "{}");
    }

    #[test]
    fn pretty_with_custom_config() {
        let mut v = Value::Null;
        v["k"][0] = Value::from(1u8);
        let mut out = String::new();
        v.write_pretty(
            &mut out,
            &PrettyConfig {
                indent: 2,
                space_after_colon: false,
            },
        )
        .unwrap();
        assert_eq!(out, "{\n  \"k\":[\n    1\n  ]\n}");
        assert_eq!(Value::from("x").to_pretty_string(), "\"x\"");
    }
}
