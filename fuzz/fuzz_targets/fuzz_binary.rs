#![no_main]

use jsonfsm::Value;
use libfuzzer_sys::fuzz_target;

// Compares encodings rather than values so NaN payloads still check out.
fuzz_target!(|data: &[u8]| {
    if let Ok(value) = Value::from_bytes(data) {
        let bytes = value.to_bytes();
        let again = Value::from_bytes(&bytes).expect("encoded value decodes");
        assert_eq!(again.to_bytes(), bytes);
    }
});
