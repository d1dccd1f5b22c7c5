//! A table-driven recognizer for grammars written as transition tables.
//!
//! A grammar is a set of `static` [`Transition`] tables that may reference
//! each other (and themselves) through [`Matcher::Tr`] and friends. Running
//! a table with a [`Machine`] walks its rows starting at row `0`:
//!
//! - when a row's matcher matches, its action (if any) is handed to the
//!   [`Context`] together with the matched span, then the row's [`Status`]
//!   decides what happens next: `Accept` leaves the table successfully,
//!   `Reject` halts the whole run, `Normal` continues at `on_match`;
//! - when it does not match, nothing is consumed and the machine continues at
//!   `on_fail`, or fails the table if `on_fail` is [`END`].
//!
//! Actions are plain tags; the context decides what each one means. The
//! tables carry no state of their own, so one set of tables serves any
//! number of concurrent runs.
use core::fmt;

use bstr::decode_utf8;
use log::trace;

/// Row index meaning "leave the table".
pub const END: usize = usize::MAX;

/// Upper repetition bound meaning "no limit".
pub const UNBOUNDED: usize = usize::MAX;

/// What a row does after its matcher succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Normal,
    Accept,
    Reject,
}

/// The test a row applies at the current position.
#[derive(Clone, Copy)]
pub enum Matcher<A: 'static> {
    /// Always matches, consuming nothing.
    Nothing,
    /// The exact sequence.
    Seq(&'static str),
    /// One character from the set.
    OneOf(&'static str),
    /// One character from the set, or nothing.
    OptOneOf(&'static str),
    /// One character in the inclusive range.
    Range(char, char),
    /// A nested table.
    Tr(&'static [Transition<A>]),
    /// A nested table, or nothing.
    OptTr(&'static [Transition<A>]),
    /// Between `min` and `max` characters from the set.
    RptOneOf {
        set: &'static str,
        min: usize,
        max: usize,
    },
    /// Between `min` and `max` consecutive matches of a nested table.
    RptTr {
        table: &'static [Transition<A>],
        min: usize,
        max: usize,
    },
}

// Tables may be cyclic, so nested tables print as their row count only.
impl<A: 'static> fmt::Debug for Matcher<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Nothing => f.write_str("Nothing"),
            Matcher::Seq(s) => f.debug_tuple("Seq").field(s).finish(),
            Matcher::OneOf(s) => f.debug_tuple("OneOf").field(s).finish(),
            Matcher::OptOneOf(s) => f.debug_tuple("OptOneOf").field(s).finish(),
            Matcher::Range(lo, hi) => f.debug_tuple("Range").field(lo).field(hi).finish(),
            Matcher::Tr(t) => write!(f, "Tr([{} rows])", t.len()),
            Matcher::OptTr(t) => write!(f, "OptTr([{} rows])", t.len()),
            Matcher::RptOneOf { set, min, max } => f
                .debug_struct("RptOneOf")
                .field("set", set)
                .field("min", min)
                .field("max", max)
                .finish(),
            Matcher::RptTr { table, min, max } => write!(f, "RptTr([{} rows], {min}, {max})", table.len()),
        }
    }
}

/// One row of a transition table.
#[derive(Debug, Clone, Copy)]
pub struct Transition<A: 'static> {
    pub on_match: usize,
    pub on_fail: usize,
    pub matcher: Matcher<A>,
    pub status: Status,
    pub action: Option<A>,
}

impl<A: 'static> Transition<A> {
    #[must_use]
    pub const fn new(
        on_match: usize,
        on_fail: usize,
        matcher: Matcher<A>,
        status: Status,
        action: Option<A>,
    ) -> Self {
        Self {
            on_match,
            on_fail,
            matcher,
            status,
            action,
        }
    }
}

/// Byte range of a match within the machine's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Receives the actions attached to matching rows.
pub trait Context {
    type Action: Copy + 'static;

    /// Handles `action` for the input bytes `matched` (at `span`).
    /// Returning `false` halts the run with [`Halt::Aborted`].
    fn on_action(&mut self, action: Self::Action, span: Span, matched: &[u8]) -> bool;
}

/// Why a run stopped before finishing its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    /// A `Reject` row matched.
    Rejected,
    /// The context returned `false` from an action.
    Aborted,
}

impl fmt::Display for Halt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Halt::Rejected => "rejected",
            Halt::Aborted => "aborted",
        })
    }
}

/// Runs transition tables over a byte input on behalf of a [`Context`].
///
/// Input is decoded as UTF-8 on the fly; an invalid sequence matches
/// nothing.
pub struct Machine<'a, C: Context> {
    input: &'a [u8],
    ctx: C,
    furthest: usize,
}

impl<'a, C: Context> Machine<'a, C> {
    pub fn new(input: &'a [u8], ctx: C) -> Self {
        Self {
            input,
            ctx,
            furthest: 0,
        }
    }

    /// Runs `table` from the start of the input.
    ///
    /// Returns `Ok(Some(end))` when the table matched `input[..end]` and
    /// `Ok(None)` when it did not match.
    ///
    /// # Errors
    ///
    /// A [`Halt`] if a `Reject` row matched or an action returned `false`.
    pub fn exec(&mut self, table: &[Transition<C::Action>]) -> Result<Option<usize>, Halt> {
        self.run(table, 0)
    }

    /// Largest byte offset the machine has inspected so far.
    #[must_use]
    pub fn furthest(&self) -> usize {
        self.furthest
    }

    pub fn context(&self) -> &C {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.ctx
    }

    pub fn into_context(self) -> C {
        self.ctx
    }

    fn touch(&mut self, pos: usize) {
        self.furthest = self.furthest.max(pos);
    }

    fn char_at(&mut self, pos: usize) -> Option<(char, usize)> {
        self.touch(pos);
        let rest = self.input.get(pos..)?;
        match decode_utf8(rest) {
            (Some(c), len) => Some((c, len)),
            (None, _) => None,
        }
    }

    fn one_of(&mut self, set: &str, pos: usize) -> Option<usize> {
        match self.char_at(pos) {
            Some((c, len)) if set.contains(c) => Some(pos + len),
            _ => None,
        }
    }

    fn run(&mut self, table: &[Transition<C::Action>], start: usize) -> Result<Option<usize>, Halt> {
        let mut pos = start;
        let mut row = 0;
        while let Some(t) = table.get(row) {
            let Some(end) = self.matches(&t.matcher, pos)? else {
                if t.on_fail == END {
                    return Ok(None);
                }
                row = t.on_fail;
                continue;
            };

            if let Some(action) = t.action {
                let span = Span { start: pos, end };
                if !self.ctx.on_action(action, span, &self.input[pos..end]) {
                    trace!("action aborted the run at byte {end}");
                    return Err(Halt::Aborted);
                }
            }

            match t.status {
                Status::Accept => return Ok(Some(end)),
                Status::Reject => {
                    trace!("reject row {row} matched at byte {pos}");
                    return Err(Halt::Rejected);
                }
                Status::Normal if t.on_match == END => return Ok(Some(end)),
                Status::Normal => {
                    row = t.on_match;
                    pos = end;
                }
            }
        }
        // Falling off the rows is a malformed table; treat it as no match.
        Ok(None)
    }

    fn matches(&mut self, matcher: &Matcher<C::Action>, pos: usize) -> Result<Option<usize>, Halt> {
        Ok(match *matcher {
            Matcher::Nothing => Some(pos),
            Matcher::Seq(seq) => {
                let rest = self.input.get(pos..).unwrap_or_default();
                let common = rest
                    .iter()
                    .zip(seq.as_bytes())
                    .take_while(|(a, b)| a == b)
                    .count();
                self.touch(pos + common);
                (common == seq.len()).then_some(pos + common)
            }
            Matcher::OneOf(set) => self.one_of(set, pos),
            Matcher::OptOneOf(set) => Some(self.one_of(set, pos).unwrap_or(pos)),
            Matcher::Range(lo, hi) => match self.char_at(pos) {
                Some((c, len)) if (lo..=hi).contains(&c) => Some(pos + len),
                _ => None,
            },
            Matcher::Tr(table) => self.run(table, pos)?,
            Matcher::OptTr(table) => Some(self.run(table, pos)?.unwrap_or(pos)),
            Matcher::RptOneOf { set, min, max } => {
                let mut p = pos;
                let mut count = 0;
                while count < max {
                    let Some(next) = self.one_of(set, p) else {
                        break;
                    };
                    p = next;
                    count += 1;
                }
                (count >= min).then_some(p)
            }
            Matcher::RptTr { table, min, max } => {
                let mut p = pos;
                let mut count = 0;
                while count < max {
                    let Some(next) = self.run(table, p)? else {
                        break;
                    };
                    count += 1;
                    if next == p {
                        break;
                    }
                    p = next;
                }
                (count >= min).then_some(p)
            }
        })
    }
}
