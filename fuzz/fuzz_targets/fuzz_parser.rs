#![no_main]

use arbitrary::Arbitrary;
use jsonfsm::{ErrorCode, ParserOptions, Value};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    replace_invalid_surrogates: bool,
    max_depth: u8,
    text: &'a str,
}

fn parser(input: &Input<'_>) {
    let options = ParserOptions {
        max_depth: usize::from(input.max_depth),
        replace_invalid_surrogates: input.replace_invalid_surrogates,
    };
    let ours = jsonfsm::parse_with_options(input.text, options);

    if let Err(err) = &ours {
        assert!(err.offset() <= input.text.len(), "{err:?}");
        assert_ne!(err.code(), ErrorCode::Aborted);
    }

    // serde_json stops at 128 levels and never replaces surrogates.
    if options.max_depth >= 128 && !options.replace_invalid_surrogates {
        let theirs = serde_json::from_str::<serde_json::Value>(input.text);
        match (&ours, &theirs) {
            (Ok(_), Err(e)) if e.to_string().contains("recursion limit") => {}
            (Err(err), Ok(_)) if err.code() == ErrorCode::TooDeep => {}
            _ => assert_eq!(ours.is_ok(), theirs.is_ok(), "{:?}", input.text),
        }
    }

    if let Ok(value) = ours {
        let text = value.to_string();
        let again = jsonfsm::parse_with_options(&text, options).expect("compact output parses");
        assert_eq!(again, value);
        assert_eq!(Value::from_bytes(&value.to_bytes()), Ok(value));
    }
}

fuzz_target!(|input: Input<'_>| parser(&input));
