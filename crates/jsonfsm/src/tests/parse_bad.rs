use alloc::string::ToString;

use rstest::rstest;

use crate::{DEFAULT_MAX_DEPTH, ErrorCode, ParserOptions, Value};

#[rstest]
#[case::empty("", ErrorCode::BadJson)]
#[case::only_whitespace(" \n ", ErrorCode::BadJson)]
#[case::bom("\u{feff}[]", ErrorCode::BadJson)]
#[case::bad_literal("nul", ErrorCode::BadJson)]
#[case::capitalized_literal("True", ErrorCode::BadJson)]
#[case::lone_minus("-", ErrorCode::BadJson)]
#[case::leading_plus("+1", ErrorCode::BadJson)]
#[case::trailing_comma("[1,]", ErrorCode::BadJson)]
#[case::missing_comma("[1 2]", ErrorCode::BadJson)]
#[case::leading_zero_in_array("[01]", ErrorCode::BadJson)]
#[case::unclosed_object(r#"{"a":1"#, ErrorCode::BadJson)]
#[case::missing_colon(r#"{"a" 1}"#, ErrorCode::BadJson)]
#[case::bare_key("{a:1}", ErrorCode::BadJson)]
#[case::colon_in_array(r#"["a" : 1]"#, ErrorCode::BadJson)]
#[case::unknown_escape(r#""\x""#, ErrorCode::BadJson)]
#[case::short_unicode_escape(r#""\u004""#, ErrorCode::BadJson)]
#[case::raw_control_char("\"\t\"", ErrorCode::BadJson)]
#[case::unterminated_string(r#""abc"#, ErrorCode::BadJson)]
#[case::trailing_garbage("{} x", ErrorCode::ExcessSource)]
#[case::two_documents("[] []", ErrorCode::ExcessSource)]
#[case::leading_zero("01", ErrorCode::ExcessSource)]
#[case::no_fraction_digits("[1.]", ErrorCode::BadNumber)]
#[case::dangling_point("1.", ErrorCode::BadNumber)]
#[case::fraction_before_exponent("-1.e5", ErrorCode::BadNumber)]
#[case::no_exponent_digits("1e", ErrorCode::BadNumber)]
#[case::signed_empty_exponent("1e+", ErrorCode::BadNumber)]
#[case::real_overflow("1e400", ErrorCode::BadNumber)]
#[case::lone_high_surrogate(r#""\ud800""#, ErrorCode::BadNumber)]
#[case::lone_low_surrogate(r#""\udc00x""#, ErrorCode::BadNumber)]
#[case::surrogate_in_value(r#"{"k":"\ud800"}"#, ErrorCode::BadNumber)]
#[case::surrogate_in_key(r#"{"\ud800":1}"#, ErrorCode::BadNumber)]
fn rejects(#[case] text: &str, #[case] code: ErrorCode) {
    let err = crate::parse(text).unwrap_err();
    assert_eq!(err.code(), code, "{text:?}: {err}");
}

#[test]
fn failed_parse_leaves_null() {
    let mut v = crate::parse(r#"{"keep": true}"#).unwrap();
    let err = v.parse(r#"{"a":1"#).unwrap_err();
    assert_eq!(err.code(), ErrorCode::BadJson);
    assert_eq!(v, Value::Null);

    let mut v = Value::from(1);
    assert!(v.parse("[1.]").is_err());
    assert!(v.is_null());
}

#[test]
fn nesting_limit() {
    let options = ParserOptions {
        max_depth: 16,
        ..ParserOptions::default()
    };
    let ok = "[".repeat(16) + &"]".repeat(16);
    assert!(crate::parse_with_options(&ok, options).is_ok());

    let deep = "[".repeat(17) + &"]".repeat(17);
    let err = crate::parse_with_options(&deep, options).unwrap_err();
    assert_eq!(err.code(), ErrorCode::TooDeep);
    assert_eq!(err.offset(), 16);

    let objects = r#"{"a":"#.repeat(17) + "null" + &"}".repeat(17);
    let err = crate::parse_with_options(&objects, options).unwrap_err();
    assert_eq!(err.code(), ErrorCode::TooDeep);
}

#[test]
fn runaway_nesting_is_rejected_before_the_stack_runs_out() {
    let handle = std::thread::spawn(|| {
        let arrays = crate::parse(&"[".repeat(100_000)).unwrap_err();
        let objects = crate::parse(&r#"{"k":"#.repeat(100_000)).unwrap_err();
        (arrays, objects)
    });
    let (arrays, objects) = handle.join().unwrap();
    assert_eq!(arrays.code(), ErrorCode::TooDeep);
    assert_eq!(arrays.offset(), DEFAULT_MAX_DEPTH);
    assert_eq!(objects.code(), ErrorCode::TooDeep);
    assert_eq!(objects.offset(), 5 * DEFAULT_MAX_DEPTH);
}

#[test]
fn surrogates_can_be_replaced() {
    let options = ParserOptions {
        replace_invalid_surrogates: true,
        ..ParserOptions::default()
    };
    let v = crate::parse_with_options(r#"["\ud800", "\udc00A"]"#, options).unwrap();
    assert_eq!(v[0], Value::from("\u{FFFD}"));
    assert_eq!(v[1], Value::from("\u{FFFD}A"));
}

#[test]
fn error_display_includes_position() {
    let err = crate::parse("[true,\n fals]").unwrap_err();
    assert_eq!(err.code(), ErrorCode::BadJson);
    assert_eq!(err.to_string(), "bad json at 2:6");

    let err = crate::parse("{\"n\": 1.}").unwrap_err();
    assert_eq!(err.to_string(), "bad number at 1:9");
}
