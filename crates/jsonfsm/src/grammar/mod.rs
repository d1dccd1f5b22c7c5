//! The RFC 7159 grammar and the context that turns its matches into
//! [`SaxContext`] events.
mod tables;
mod unescape;

use alloc::{string::String, vec::Vec};
use core::{fmt, mem};

use log::{debug, trace};

use crate::{
    error::{ErrorCode, ParseError},
    fsm::{Context, Halt, Machine, Span, Transition},
    options::ParserOptions,
    sax::{Recognizer, SaxContext},
};

use unescape::{InvalidEscape, unescape};

/// Tags attached to grammar rows, interpreted by [`ParseContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    BeginJson,
    SuccessEndJson,
    FailedEndJson,
    FalseValue,
    NullValue,
    TrueValue,
    NumberSign,
    NumberIntegral,
    NumberFrac,
    NumberExp,
    NumberValue,
    MalformedNumber,
    StringValue,
    BeginMember,
    EndMember,
    BeginObject,
    EndObject,
    BeginArray,
    EndArray,
}

/// The pieces of the number being matched. Each is reset on every number,
/// since optional parts report an empty span when absent.
#[derive(Debug, Clone, Copy, Default)]
struct NumberSpans {
    sign: Span,
    integral: Span,
    frac: Span,
    exp: Span,
}

struct ParseContext<'a, 's> {
    text: &'a str,
    sax: &'s mut dyn SaxContext,
    options: ParserOptions,
    member_name: String,
    number: NumberSpans,
    objects: Vec<String>,
    arrays: Vec<String>,
    depth: usize,
    error: Option<(ErrorCode, Option<usize>)>,
    ended: bool,
}

impl<'a, 's> ParseContext<'a, 's> {
    fn new(text: &'a str, sax: &'s mut dyn SaxContext, options: ParserOptions) -> Self {
        Self {
            text,
            sax,
            options,
            member_name: String::new(),
            number: NumberSpans::default(),
            objects: Vec::new(),
            arrays: Vec::new(),
            depth: 0,
            error: None,
            ended: false,
        }
    }

    /// Records the first error; always returns `false` so callers can halt
    /// with it directly.
    fn fail(&mut self, code: ErrorCode, at: Option<usize>) -> bool {
        if self.error.is_none() {
            trace!("{code} at {at:?}");
            self.error = Some((code, at));
        }
        false
    }

    fn decode(&mut self, quoted: Span) -> Option<String> {
        let text = self.text;
        let raw = &text[quoted.start + 1..quoted.end - 1];
        match unescape(raw, self.options.replace_invalid_surrogates) {
            Ok(s) => Some(s.into_owned()),
            Err(InvalidEscape) => {
                self.fail(ErrorCode::BadNumber, Some(quoted.start));
                None
            }
        }
    }

    fn number_value(&mut self) -> bool {
        let (text, n) = (self.text, self.number);
        let name = mem::take(&mut self.member_name);
        let start = n.sign.start;

        if n.frac.is_empty() && n.exp.is_empty() {
            let int = &text[start..n.integral.end];
            if n.sign.is_empty() {
                if let Ok(u) = int.parse::<u64>() {
                    return self.sax.on_uinteger_value(&name, u);
                }
            } else if let Ok(i) = int.parse::<i64>() {
                return self.sax.on_integer_value(&name, i);
            }
        }

        match text[start..n.exp.end].parse::<f64>() {
            Ok(r) if r.is_finite() => self.sax.on_real_value(&name, r),
            _ => self.fail(ErrorCode::BadNumber, Some(start)),
        }
    }

    fn enter(&mut self, at: usize) -> bool {
        if self.depth >= self.options.max_depth {
            return self.fail(ErrorCode::TooDeep, Some(at));
        }
        self.depth += 1;
        true
    }
}

impl Context for ParseContext<'_, '_> {
    type Action = Action;

    fn on_action(&mut self, action: Action, span: Span, _matched: &[u8]) -> bool {
        match action {
            Action::BeginJson => self.sax.on_begin_json(),
            Action::SuccessEndJson => {
                self.ended = true;
                if span.end < self.text.len() {
                    self.fail(ErrorCode::ExcessSource, Some(span.end));
                    let _ = self.sax.on_end_json(false);
                    return false;
                }
                self.sax.on_end_json(true)
            }
            Action::FailedEndJson => {
                self.ended = true;
                self.fail(ErrorCode::BadJson, None);
                self.sax.on_end_json(false)
            }
            Action::FalseValue => {
                let name = mem::take(&mut self.member_name);
                self.sax.on_boolean_value(&name, false)
            }
            Action::TrueValue => {
                let name = mem::take(&mut self.member_name);
                self.sax.on_boolean_value(&name, true)
            }
            Action::NullValue => {
                let name = mem::take(&mut self.member_name);
                self.sax.on_null_value(&name)
            }
            Action::NumberSign => {
                self.number.sign = span;
                true
            }
            Action::NumberIntegral => {
                self.number.integral = span;
                true
            }
            Action::NumberFrac => {
                self.number.frac = span;
                true
            }
            Action::NumberExp => {
                self.number.exp = span;
                true
            }
            Action::NumberValue => self.number_value(),
            Action::MalformedNumber => {
                self.fail(ErrorCode::BadNumber, Some(span.start));
                true
            }
            Action::StringValue => {
                let Some(value) = self.decode(span) else {
                    return false;
                };
                let name = mem::take(&mut self.member_name);
                self.sax.on_string_value(&name, &value)
            }
            Action::BeginMember => match self.decode(span) {
                Some(name) => {
                    self.member_name = name;
                    true
                }
                None => false,
            },
            Action::EndMember => {
                self.member_name.clear();
                true
            }
            Action::BeginObject => {
                if !self.enter(span.start) {
                    return false;
                }
                let name = mem::take(&mut self.member_name);
                let ok = self.sax.on_begin_object(&name);
                self.objects.push(name);
                ok
            }
            Action::EndObject => {
                self.depth = self.depth.saturating_sub(1);
                let name = self.objects.pop().unwrap_or_default();
                self.sax.on_end_object(&name)
            }
            Action::BeginArray => {
                if !self.enter(span.start) {
                    return false;
                }
                let name = mem::take(&mut self.member_name);
                let ok = self.sax.on_begin_array(&name);
                self.arrays.push(name);
                ok
            }
            Action::EndArray => {
                self.depth = self.depth.saturating_sub(1);
                let name = self.arrays.pop().unwrap_or_default();
                self.sax.on_end_array(&name)
            }
        }
    }
}

/// A JSON grammar, shared read-only by every parse that uses it.
pub struct Grammar {
    json_text: &'static [Transition<Action>],
}

static RFC7159: Grammar = Grammar {
    json_text: &tables::JSON_TEXT,
};

impl fmt::Debug for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grammar")
            .field("rows", &self.json_text.len())
            .finish_non_exhaustive()
    }
}

impl Grammar {
    /// The RFC 7159 grammar: any JSON value, surrounded by optional
    /// whitespace, as a document.
    #[must_use]
    pub fn rfc7159() -> &'static Grammar {
        &RFC7159
    }

    /// Parses `text`, reporting what it contains to `sax`.
    ///
    /// # Errors
    ///
    /// A [`ParseError`] when `text` is not a single JSON value, when a
    /// number or escape cannot be decoded, when nesting exceeds
    /// [`ParserOptions::max_depth`] or when `sax` stops the parse.
    pub fn parse(&self, text: &str, sax: &mut dyn SaxContext, options: ParserOptions) -> Result<(), ParseError> {
        debug!("parsing {} bytes", text.len());
        let mut machine = Machine::new(text.as_bytes(), ParseContext::new(text, sax, options));
        let outcome = machine.exec(self.json_text);
        let furthest = machine.furthest();
        let mut ctx = machine.into_context();

        let (code, at) = match (outcome, ctx.error) {
            (Ok(Some(end)), _) if end == text.len() => {
                debug!("parse succeeded");
                return Ok(());
            }
            (Ok(Some(end)), _) => (ErrorCode::ExcessSource, Some(end)),
            (Ok(None), _) => (ErrorCode::BadJson, None),
            (Err(_), Some(recorded)) => recorded,
            (Err(Halt::Aborted), None) => (ErrorCode::Aborted, None),
            (Err(Halt::Rejected), None) => (ErrorCode::BadJson, None),
        };
        // A consumer that stopped the parse hears nothing more.
        if !ctx.ended && code != ErrorCode::Aborted {
            let _ = ctx.sax.on_end_json(false);
        }
        let err = ParseError::at(code, text, at.unwrap_or(furthest));
        debug!("parse failed: {err}");
        Err(err)
    }

    /// Checks that `text` is a JSON document without building anything.
    ///
    /// # Errors
    ///
    /// As [`parse`](Self::parse).
    pub fn validate(&self, text: &str, options: ParserOptions) -> Result<(), ParseError> {
        self.parse(text, &mut Recognizer, options)
    }
}

#[cfg(test)]
mod tests {
    use super::{Grammar, tables};
    use crate::{
        ErrorCode, ParserOptions, SaxContext,
        fsm::{Context, Machine, Span, Transition},
    };

    fn code(text: &str) -> Option<ErrorCode> {
        Grammar::rfc7159()
            .validate(text, ParserOptions::default())
            .err()
            .map(|e| e.code())
    }

    /// Accepts every action without any side effects.
    struct Quiet;

    impl Context for Quiet {
        type Action = super::Action;

        fn on_action(&mut self, action: super::Action, _: Span, _: &[u8]) -> bool {
            action != super::Action::MalformedNumber
        }
    }

    fn matched(table: &[Transition<super::Action>], text: &str) -> Option<usize> {
        Machine::new(text.as_bytes(), Quiet).exec(table).ok().flatten()
    }

    #[test]
    fn number_table_boundaries() {
        assert_eq!(matched(&tables::NUMBER, "0"), Some(1));
        assert_eq!(matched(&tables::NUMBER, "-12.50e+3,"), Some(9));
        assert_eq!(matched(&tables::NUMBER, "012"), Some(1));
        assert_eq!(matched(&tables::NUMBER, "-"), None);
        assert_eq!(matched(&tables::NUMBER, "+1"), None);
        assert_eq!(matched(&tables::NUMBER, ".5"), None);
    }

    #[test]
    fn string_table_boundaries() {
        assert_eq!(matched(&tables::STRING, r#""""#), Some(2));
        assert_eq!(matched(&tables::STRING, r#""a\"b" tail"#), Some(6));
        assert_eq!(matched(&tables::STRING, "\"tab\there\""), None);
        assert_eq!(matched(&tables::STRING, r#""\q""#), None);
        assert_eq!(matched(&tables::STRING, r#""\u12G4""#), None);
        assert_eq!(matched(&tables::STRING, r#""open"#), None);
    }

    #[test]
    fn value_alternatives() {
        for text in ["false", "null", "true", "-1", "\"s\"", "{}", "[]"] {
            assert_eq!(matched(&tables::VALUE, text), Some(text.len()), "{text}");
        }
        assert_eq!(matched(&tables::VALUE, "nul"), None);
    }

    #[test]
    fn error_codes() {
        assert_eq!(code("  {}  "), None);
        assert_eq!(code("{} x"), Some(ErrorCode::ExcessSource));
        assert_eq!(code("[1.]"), Some(ErrorCode::BadNumber));
        assert_eq!(code("1e"), Some(ErrorCode::BadNumber));
        assert_eq!(code("1e999"), Some(ErrorCode::BadNumber));
        assert_eq!(code("{\"a\":1"), Some(ErrorCode::BadJson));
        assert_eq!(code(""), Some(ErrorCode::BadJson));
        assert_eq!(code(r#""\ud800""#), Some(ErrorCode::BadNumber));
    }

    #[test]
    fn depth_limit() {
        let options = ParserOptions {
            max_depth: 2,
            ..ParserOptions::default()
        };
        let g = Grammar::rfc7159();
        assert!(g.validate("[{}]", options).is_ok());
        let err = g.validate("[{\"a\":[]}]", options).unwrap_err();
        assert_eq!(err.code(), ErrorCode::TooDeep);
        assert_eq!(err.offset(), 6);
    }

    #[test]
    fn error_positions() {
        let g = Grammar::rfc7159();
        let err = g.validate("{} x", ParserOptions::default()).unwrap_err();
        assert_eq!((err.line, err.column), (1, 4));
        let err = g.validate("[1,\n  tru]", ParserOptions::default()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::BadJson);
        assert_eq!((err.line, err.column), (2, 6));
    }

    #[derive(Default)]
    struct StopAt {
        seen: usize,
        limit: usize,
        ended: Option<bool>,
    }

    impl SaxContext for StopAt {
        fn on_end_json(&mut self, success: bool) -> bool {
            self.ended = Some(success);
            true
        }

        fn on_uinteger_value(&mut self, _: &str, _: u64) -> bool {
            self.seen += 1;
            self.seen < self.limit
        }
    }

    #[test]
    fn consumer_abort() {
        let mut sax = StopAt {
            limit: 2,
            ..StopAt::default()
        };
        let err = Grammar::rfc7159()
            .parse("[1,2,3]", &mut sax, ParserOptions::default())
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::Aborted);
        assert_eq!(sax.seen, 2);
        assert_eq!(sax.ended, None);
    }

    #[test]
    fn end_json_reports_outcome() {
        let mut sax = StopAt {
            limit: usize::MAX,
            ..StopAt::default()
        };
        Grammar::rfc7159().parse("7", &mut sax, ParserOptions::default()).unwrap();
        assert_eq!(sax.ended, Some(true));

        let mut sax = StopAt {
            limit: usize::MAX,
            ..StopAt::default()
        };
        assert!(Grammar::rfc7159().parse("7 7", &mut sax, ParserOptions::default()).is_err());
        assert_eq!(sax.ended, Some(false));

        for text in ["[1.]", "1e+", r#""\udc00""#, "[[[]]]"] {
            let mut sax = StopAt {
                limit: usize::MAX,
                ..StopAt::default()
            };
            let options = ParserOptions {
                max_depth: 2,
                ..ParserOptions::default()
            };
            assert!(Grammar::rfc7159().parse(text, &mut sax, options).is_err(), "{text}");
            assert_eq!(sax.ended, Some(false), "{text}");
        }
    }
}
