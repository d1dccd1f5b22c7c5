//! RFC 7159 as transition tables.
//!
//! ```text
//! JSON-text = ws value ws
//! value     = false / null / true / number / string / object / array
//! object    = begin-object [ member *( value-separator member ) ] end-object
//! member    = string name-separator value
//! array     = begin-array [ value *( value-separator value ) ] end-array
//! number    = [ minus ] int [ frac ] [ exp ]
//! int       = zero / ( digit1-9 *DIGIT )
//! frac      = decimal-point 1*DIGIT
//! exp       = e [ minus / plus ] 1*DIGIT
//! string    = quotation-mark *char quotation-mark
//! char      = unescaped / escape ( ["\/bfnrt] / u 4HEXDIG )
//! unescaped = %x20-21 / %x23-5B / %x5D-10FFFF
//! ```
//!
//! Every alternative of `value` starts with a different character, so a
//! failed alternative never leaves events behind for a parse that goes on
//! to succeed.
use super::Action::{self, *};
use crate::fsm::{END, Matcher::*, Status::*, Transition, UNBOUNDED};

type T = Transition<Action>;

const WS: &str = " \t\n\r";
const DIGIT: &str = "0123456789";
const HEXDIGIT: &str = "0123456789ABCDEFabcdef";

const WS_ANY: crate::fsm::Matcher<Action> = RptOneOf {
    set: WS,
    min: 0,
    max: UNBOUNDED,
};

const DIGITS_ANY: crate::fsm::Matcher<Action> = RptOneOf {
    set: DIGIT,
    min: 0,
    max: UNBOUNDED,
};

const DIGITS_SOME: crate::fsm::Matcher<Action> = RptOneOf {
    set: DIGIT,
    min: 1,
    max: UNBOUNDED,
};

// A decimal point or exponent marker commits the number: missing digits
// after it reject the whole document rather than backtracking.
static EXP: [T; 4] = [
    T::new(1, END, OneOf("eE"), Normal, None),
    T::new(2, END, OptOneOf("-+"), Normal, None),
    T::new(END, 3, DIGITS_SOME, Accept, None),
    T::new(END, END, Nothing, Reject, Some(MalformedNumber)),
];

static FRAC: [T; 3] = [
    T::new(1, END, OneOf("."), Normal, None),
    T::new(END, 2, DIGITS_SOME, Accept, None),
    T::new(END, END, Nothing, Reject, Some(MalformedNumber)),
];

static DECIMAL: [T; 2] = [
    T::new(1, END, OneOf("123456789"), Normal, None),
    T::new(END, END, DIGITS_ANY, Accept, None),
];

static INT: [T; 2] = [
    T::new(END, 1, OneOf("0"), Accept, None),
    T::new(END, END, Tr(&DECIMAL), Accept, None),
];

pub(super) static NUMBER: [T; 4] = [
    T::new(1, 1, OptOneOf("-"), Normal, Some(NumberSign)),
    T::new(2, END, Tr(&INT), Normal, Some(NumberIntegral)),
    T::new(3, END, OptTr(&FRAC), Normal, Some(NumberFrac)),
    T::new(END, END, OptTr(&EXP), Accept, Some(NumberExp)),
];

const fn punct(c: &'static str) -> [T; 3] {
    [
        T::new(1, END, WS_ANY, Normal, None),
        T::new(2, END, OneOf(c), Normal, None),
        T::new(END, END, WS_ANY, Accept, None),
    ]
}

static BEGIN_ARRAY: [T; 3] = punct("[");
static END_ARRAY: [T; 3] = punct("]");
static BEGIN_OBJECT: [T; 3] = punct("{");
static END_OBJECT: [T; 3] = punct("}");
static NAME_SEPARATOR: [T; 3] = punct(":");
static VALUE_SEPARATOR: [T; 3] = punct(",");

static UNESCAPED: [T; 3] = [
    T::new(END, 1, Range('\u{20}', '\u{21}'), Accept, None),
    T::new(END, 2, Range('\u{23}', '\u{5B}'), Accept, None),
    T::new(END, END, Range('\u{5D}', '\u{10FFFF}'), Accept, None),
];

static UNICODE: [T; 2] = [
    T::new(1, END, OneOf("uU"), Normal, None),
    T::new(
        END,
        END,
        RptOneOf {
            set: HEXDIGIT,
            min: 4,
            max: 4,
        },
        Accept,
        None,
    ),
];

static ESCAPED_CHAR: [T; 2] = [
    T::new(END, 1, OneOf("\"\\/bfnrt"), Accept, None),
    T::new(END, END, Tr(&UNICODE), Accept, None),
];

static ESCAPED: [T; 2] = [
    T::new(1, END, OneOf("\\"), Normal, None),
    T::new(END, END, Tr(&ESCAPED_CHAR), Accept, None),
];

static CHAR: [T; 2] = [
    T::new(END, 1, Tr(&UNESCAPED), Accept, None),
    T::new(END, END, Tr(&ESCAPED), Accept, None),
];

pub(super) static STRING: [T; 3] = [
    T::new(1, END, OneOf("\""), Normal, None),
    T::new(
        2,
        END,
        RptTr {
            table: &CHAR,
            min: 0,
            max: UNBOUNDED,
        },
        Normal,
        None,
    ),
    T::new(END, END, OneOf("\""), Accept, None),
];

pub(super) static VALUE: [T; 7] = [
    T::new(END, 1, Seq("false"), Accept, Some(FalseValue)),
    T::new(END, 2, Seq("null"), Accept, Some(NullValue)),
    T::new(END, 3, Seq("true"), Accept, Some(TrueValue)),
    T::new(END, 4, Tr(&NUMBER), Accept, Some(NumberValue)),
    T::new(END, 5, Tr(&STRING), Accept, Some(StringValue)),
    T::new(END, 6, Tr(&OBJECT), Accept, None),
    T::new(END, END, Tr(&ARRAY), Accept, None),
];

static MEMBER: [T; 3] = [
    T::new(1, END, Tr(&STRING), Normal, Some(BeginMember)),
    T::new(2, END, Tr(&NAME_SEPARATOR), Normal, None),
    T::new(END, END, Tr(&VALUE), Accept, Some(EndMember)),
];

static NEXT_MEMBER: [T; 2] = [
    T::new(1, END, Tr(&VALUE_SEPARATOR), Normal, None),
    T::new(END, END, Tr(&MEMBER), Accept, None),
];

static OBJECT_BODY: [T; 2] = [
    T::new(1, END, Tr(&MEMBER), Normal, None),
    T::new(
        END,
        END,
        RptTr {
            table: &NEXT_MEMBER,
            min: 0,
            max: UNBOUNDED,
        },
        Accept,
        None,
    ),
];

static OBJECT: [T; 3] = [
    T::new(1, END, Tr(&BEGIN_OBJECT), Normal, Some(BeginObject)),
    T::new(2, END, OptTr(&OBJECT_BODY), Normal, None),
    T::new(END, END, Tr(&END_OBJECT), Accept, Some(EndObject)),
];

static NEXT_VALUE: [T; 2] = [
    T::new(1, END, Tr(&VALUE_SEPARATOR), Normal, None),
    T::new(END, END, Tr(&VALUE), Accept, None),
];

static ARRAY_BODY: [T; 2] = [
    T::new(1, END, Tr(&VALUE), Normal, None),
    T::new(
        END,
        END,
        RptTr {
            table: &NEXT_VALUE,
            min: 0,
            max: UNBOUNDED,
        },
        Accept,
        None,
    ),
];

static ARRAY: [T; 3] = [
    T::new(1, END, Tr(&BEGIN_ARRAY), Normal, Some(BeginArray)),
    T::new(2, END, OptTr(&ARRAY_BODY), Normal, None),
    T::new(END, END, Tr(&END_ARRAY), Accept, Some(EndArray)),
];

pub(super) static JSON_TEXT: [T; 6] = [
    T::new(1, END, Nothing, Normal, Some(BeginJson)),
    T::new(2, END, WS_ANY, Normal, None),
    T::new(3, 5, Tr(&VALUE), Normal, None),
    T::new(4, END, WS_ANY, Normal, None),
    T::new(END, END, Nothing, Accept, Some(SuccessEndJson)),
    T::new(END, END, Nothing, Reject, Some(FailedEndJson)),
];
