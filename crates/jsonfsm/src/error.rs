use thiserror::Error;

/// Stable error codes reported by the text parser and the binary decoder.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Structural decode failure on the binary path.
    #[error("parse error")]
    ParseError,
    /// Malformed numeric literal or undecodable unicode escape.
    #[error("bad number")]
    BadNumber,
    /// The input does not match the JSON grammar.
    #[error("bad json")]
    BadJson,
    /// A complete JSON value was followed by non-whitespace input.
    #[error("excess source")]
    ExcessSource,
    /// A SAX consumer asked the parser to stop.
    #[error("aborted by consumer")]
    Aborted,
    /// Containers are nested deeper than the configured limit.
    #[error("nesting too deep")]
    TooDeep,
}

/// A failed text parse: the error code and where in the input it occurred.
///
/// `line` and `column` are 1-based and count characters, not bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{code} at {line}:{column}")]
pub struct ParseError {
    pub(crate) code: ErrorCode,
    pub(crate) offset: usize,
    pub line: usize,
    pub column: usize,
}

impl ParseError {
    pub(crate) fn at(code: ErrorCode, input: &str, offset: usize) -> Self {
        let offset = offset.min(input.len());
        let mut line = 1;
        let mut column = 1;
        for c in input[..offset].chars() {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Self {
            code,
            offset,
            line,
            column,
        }
    }

    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Byte offset into the input.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Failures of [`Value::decode`](crate::Value::decode) and friends.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown value tag {0:#04x}")]
    UnknownTag(u8),
    #[error("invalid boolean byte {0:#04x}")]
    InvalidBoolean(u8),
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("string payload is not valid UTF-8")]
    InvalidUtf8,
    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),
    #[error("nesting too deep")]
    TooDeep,
}

impl DecodeError {
    /// Every binary failure reports as [`ErrorCode::ParseError`].
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        ErrorCode::ParseError
    }
}

/// Failures of [`Value::try_encode`](crate::Value::try_encode).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// A string, array or object longer than the 32-bit length prefix
    /// allows.
    #[error("length {0} does not fit the 32-bit prefix")]
    LengthOverflow(usize),
}
