//! # regex surface syntax
//!
//! Parses regex text directly into an
//! [`Operator`](crate::operator::Operator) tree — no intermediate
//! bracket-extracted list representation. Twelve characters are
//! reserved and must be escaped with `\` to match literally: `(`, `)`,
//! `[`, `]`, `|`, `*`, `+`, `?`, `\`, `;`, `.`, `-`. Everything else may
//! be written as-is. Multiple
//! characters in sequence are concatenated implicitly; `|` alternates;
//! `*`/`+`/`?` are Kleene star/plus/optional on the immediately
//! preceding item; `(`/`)` group; `[a-b]` is a single collation range.
//!
//! - `(ab)+c` accepts strings starting with "ab" repeated one or more
//!   times, followed by "c".
//! - `c(a|b)*c` accepts any string starting and ending with "c" with
//!   any number of "a"s and "b"s in between.
//!
//! Leading and trailing whitespace is ignored; whitespace within the
//! expression is significant (and, since space is not reserved, matches
//! literally).

mod regex;

use crate::operator::Operator;
use nom::{combinator::all_consuming, error::Error, Finish};

/// Parses a regular expression according to the format above. The whole
/// string must be parsable, otherwise this function errors. This only
/// performs the grammar pass — [`crate::regex::compile`] wraps this with
/// the empty-pattern and malformed-collation error classification that
/// [`crate::regex::RegexParseError`] reports.
pub(crate) fn regex(input: &str) -> Result<Operator, Error<&str>> {
    all_consuming(regex::full_regex)(input)
        .finish()
        .map(|(_, op)| op)
}
