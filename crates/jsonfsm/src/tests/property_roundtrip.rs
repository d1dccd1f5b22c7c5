use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use crate::{Grammar, ParserOptions, PrettyConfig, Value};

fn tests() -> u64 {
    #[cfg(not(feature = "test-fast"))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(feature = "test-fast")]
    let tests = 10;
    tests
}

/// Property: the binary form decodes to an equal value.
#[test]
fn binary_roundtrip() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value) -> bool {
        Value::from_bytes(&value.to_bytes()) == Ok(value)
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Value) -> bool);
}

/// Property: compact and pretty text both parse back to an equal value,
/// whatever the options (as long as the nesting fits).
#[test]
fn text_roundtrip() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value, options: ParserOptions, indent: u8) -> bool {
        let mut pretty = String::new();
        let cfg = PrettyConfig {
            indent: usize::from(indent % 9),
            space_after_colon: indent % 2 == 0,
        };
        value.write_pretty(&mut pretty, &cfg).unwrap();

        crate::parse_with_options(&value.to_string(), options).as_ref() == Ok(&value)
            && crate::parse_with_options(&pretty, options).as_ref() == Ok(&value)
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Value, ParserOptions, u8) -> bool);
}

/// Property: `serde_json` reads our text as the same value, and we read
/// `serde_json`'s.
#[test]
fn serde_json_agrees_on_values() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value) -> bool {
        let ours = value.to_string();
        let theirs = serde_json::to_string(&value).unwrap();
        serde_json::from_str::<Value>(&ours).ok().as_ref() == Some(&value)
            && crate::parse(&theirs).as_ref() == Ok(&value)
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Value) -> bool);
}

/// Property: on any prefix of a valid document, we accept exactly when
/// `serde_json` does.
#[test]
fn serde_json_agrees_on_acceptance() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value, cut: usize) -> bool {
        let text = value.to_string();
        let chars: Vec<char> = text.chars().collect();
        let prefix: String = chars[..cut % (chars.len() + 1)].iter().collect();

        let ours = Grammar::rfc7159().validate(&prefix, ParserOptions::default()).is_ok();
        let theirs = serde_json::from_str::<serde_json::Value>(&prefix).is_ok();
        ours == theirs
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Value, usize) -> bool);
}

#[quickcheck]
fn containers_iterate_their_size(value: Value) -> bool {
    let expected = if value.is_container() { value.size() } else { 0 };
    value.iter().len() == expected && value.values().count() == expected
}

#[quickcheck]
fn binary_keeps_signed_kind(n: i64) -> bool {
    let v = Value::Integer(n);
    Value::from_bytes(&v.to_bytes()) == Ok(v)
}
