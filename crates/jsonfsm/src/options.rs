/// Default nesting limit for arrays and objects, shared by the text parser
/// and the binary decoder.
///
/// Each nesting level costs the grammar engine several stack frames; this
/// limit keeps a full-depth parse within a 2 MiB thread stack, the default
/// for spawned threads, even in unoptimized builds.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for the JSON parser.
///
/// # Examples
///
/// ```rust
/// use jsonfsm::{ParserOptions, Value};
///
/// let options = ParserOptions {
///     replace_invalid_surrogates: true,
///     ..Default::default()
/// };
/// let v = jsonfsm::parse_with_options(r#""\ud800""#, options).unwrap();
/// assert_eq!(v, Value::from("\u{FFFD}"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum nesting depth of arrays and objects.
    ///
    /// Exceeding it fails the parse with
    /// [`ErrorCode::TooDeep`](crate::ErrorCode::TooDeep). The grammar engine
    /// recurses several frames per nesting level, so the limit also bounds
    /// stack usage: raising it far past [`DEFAULT_MAX_DEPTH`] needs a
    /// correspondingly larger thread stack.
    ///
    /// # Default
    ///
    /// [`DEFAULT_MAX_DEPTH`]
    pub max_depth: usize,

    /// Whether an unpaired UTF-16 surrogate escape (`"\ud800"`) decodes to
    /// U+FFFD instead of failing.
    ///
    /// Rust strings cannot hold lone surrogates, so by default such input
    /// fails with [`ErrorCode::BadNumber`](crate::ErrorCode::BadNumber).
    ///
    /// # Default
    ///
    /// `false`
    pub replace_invalid_surrogates: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            replace_invalid_surrogates: false,
        }
    }
}
