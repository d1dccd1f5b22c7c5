/// Receiver of parse events, in document order.
///
/// `name` is the member key when the value sits directly inside an object
/// and `""` otherwise; closing events repeat the name their container was
/// opened with. Returning `false` from any method stops the parse, which
/// then fails with [`ErrorCode::Aborted`](crate::ErrorCode::Aborted).
///
/// Every method defaults to accepting the event, so a consumer only
/// implements what it is interested in.
///
/// A parse that fails may still have delivered events for the part of the
/// input that was recognized before the failure. It always ends with
/// `on_end_json(false)`, unless the consumer itself stopped the parse.
///
/// # Examples
///
/// ```
/// use jsonfsm::{Grammar, ParserOptions, SaxContext};
///
/// #[derive(Default)]
/// struct Keys(Vec<String>);
///
/// impl SaxContext for Keys {
///     fn on_integer_value(&mut self, name: &str, _: i64) -> bool {
///         self.0.push(name.to_owned());
///         true
///     }
///     fn on_uinteger_value(&mut self, name: &str, _: u64) -> bool {
///         self.0.push(name.to_owned());
///         true
///     }
/// }
///
/// let mut keys = Keys::default();
/// Grammar::rfc7159()
///     .parse(r#"{"a":1,"b":"x","c":-2}"#, &mut keys, ParserOptions::default())
///     .unwrap();
/// assert_eq!(keys.0, ["a", "c"]);
/// ```
pub trait SaxContext {
    fn on_begin_json(&mut self) -> bool {
        true
    }

    /// Called once the grammar has finished with the document, with whether
    /// it was recognized. Not called after a method has returned `false`.
    fn on_end_json(&mut self, success: bool) -> bool {
        let _ = success;
        true
    }

    fn on_begin_object(&mut self, name: &str) -> bool {
        let _ = name;
        true
    }

    fn on_end_object(&mut self, name: &str) -> bool {
        let _ = name;
        true
    }

    fn on_begin_array(&mut self, name: &str) -> bool {
        let _ = name;
        true
    }

    fn on_end_array(&mut self, name: &str) -> bool {
        let _ = name;
        true
    }

    fn on_null_value(&mut self, name: &str) -> bool {
        let _ = name;
        true
    }

    fn on_boolean_value(&mut self, name: &str, value: bool) -> bool {
        let _ = (name, value);
        true
    }

    /// A number written with a minus sign and no fraction or exponent that
    /// fits `i64`.
    fn on_integer_value(&mut self, name: &str, value: i64) -> bool {
        let _ = (name, value);
        true
    }

    /// A number with no sign, fraction or exponent that fits `u64`.
    fn on_uinteger_value(&mut self, name: &str, value: u64) -> bool {
        let _ = (name, value);
        true
    }

    /// Any other number.
    fn on_real_value(&mut self, name: &str, value: f64) -> bool {
        let _ = (name, value);
        true
    }

    /// A string with its escapes decoded.
    fn on_string_value(&mut self, name: &str, value: &str) -> bool {
        let _ = (name, value);
        true
    }
}

/// Accepts every event; parsing with it only recognizes the input.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Recognizer;

impl SaxContext for Recognizer {}
