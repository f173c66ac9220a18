//! Regex surface-syntax grammar: a direct precedence-climbing descent
//! from `alternation` down to `atom`, using plain recursive [`nom`]
//! combinators rather than a bracket-extraction-then-list-rewrite pass.
//!
//! Precedence, loosest to tightest: alternation, concatenation, unary
//! postfix, atom — unary binds tighter than concatenation binds tighter
//! than alternation, by construction, since each level only ever calls
//! into the next-tighter one.

use crate::operator::{is_reserved_char, Operator};
use nom::branch::alt;
use nom::bytes::complete::take;
use nom::character::complete::{char as nom_char, one_of};
use nom::combinator::{map, opt, verify};
use nom::multi::{many1, separated_list1};
use nom::sequence::{delimited, pair, preceded, separated_pair};
use nom::IResult;

pub(crate) fn full_regex(input: &str) -> IResult<&str, Operator> {
    expression(input.trim())
}

fn expression(input: &str) -> IResult<&str, Operator> {
    alternation(input)
}

fn alternation(input: &str) -> IResult<&str, Operator> {
    map(
        separated_list1(nom_char('|'), sequence),
        left_fold(Operator::Alternation),
    )(input)
}

fn sequence(input: &str) -> IResult<&str, Operator> {
    map(many1(unary), left_fold(Operator::Concatenation))(input)
}

/// The left-associative binary-operator fold shared by `alternation`
/// (builds `Alternation`) and `sequence` (builds `Concatenation`): a
/// single item passes through unchanged, multiple items combine
/// pairwise left to right.
fn left_fold(
    combine: impl Fn(Box<Operator>, Box<Operator>) -> Operator,
) -> impl Fn(Vec<Operator>) -> Operator {
    move |mut items| {
        let first = items.remove(0);
        items
            .into_iter()
            .fold(first, |acc, next| combine(Box::new(acc), Box::new(next)))
    }
}

fn unary(input: &str) -> IResult<&str, Operator> {
    map(pair(atom, opt(one_of("*+?"))), |(operand, suffix)| {
        match suffix {
            Some('*') => Operator::KleeneStar(Box::new(operand)),
            Some('+') => Operator::KleenePlus(Box::new(operand)),
            Some('?') => Operator::QuestionMark(Box::new(operand)),
            None => operand,
            Some(_) => unreachable!("one_of only yields one of the chars it's given"),
        }
    })(input)
}

fn atom(input: &str) -> IResult<&str, Operator> {
    alt((grouped, collation, escaped, literal))(input)
}

fn grouped(input: &str) -> IResult<&str, Operator> {
    delimited(nom_char('('), expression, nom_char(')'))(input)
}

/// `[lo-hi]`: a single range per bracket. A bracket
/// whose range is syntactically well-formed but inverted (`hi < lo`)
/// reports a recoverable [`nom::Err::Error`] at the bracket's opening
/// `[`, which is how callers of [`super::regex`] end up seeing it
/// surfaced as a malformed-collation parse error rather than as a
/// silently-accepted empty automaton.
fn collation(input: &str) -> IResult<&str, Operator> {
    let (rest, (lo, hi)) = delimited(
        nom_char('['),
        separated_pair(single_char, nom_char('-'), single_char),
        nom_char(']'),
    )(input)?;
    match Operator::collation(lo, hi) {
        Ok(op) => Ok((rest, op)),
        Err(_) => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Verify,
        ))),
    }
}

fn escaped(input: &str) -> IResult<&str, Operator> {
    map(preceded(nom_char('\\'), single_char), Operator::Single)(input)
}

fn literal(input: &str) -> IResult<&str, Operator> {
    map(
        verify(single_char, |&c| !is_reserved_char(c)),
        Operator::Single,
    )(input)
}

fn single_char(input: &str) -> IResult<&str, char> {
    map(take(1usize), |s: &str| {
        s.chars().next().expect("take(1) always yields one char")
    })(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Operator {
        let (rest, op) = full_regex(input).unwrap();
        assert_eq!(rest, "", "leftover input: {rest:?}");
        op
    }

    #[test]
    fn single_literal() {
        assert_eq!(parse("a"), Operator::Single('a'));
    }

    #[test]
    fn concatenation_of_literals() {
        assert_eq!(
            parse("ab"),
            Operator::Concatenation(
                Box::new(Operator::Single('a')),
                Box::new(Operator::Single('b'))
            )
        );
    }

    #[test]
    fn alternation_binds_looser_than_concatenation() {
        assert_eq!(
            parse("ab|c"),
            Operator::Alternation(
                Box::new(Operator::Concatenation(
                    Box::new(Operator::Single('a')),
                    Box::new(Operator::Single('b'))
                )),
                Box::new(Operator::Single('c'))
            )
        );
    }

    #[test]
    fn unary_binds_tighter_than_concatenation() {
        assert_eq!(
            parse("ab*"),
            Operator::Concatenation(
                Box::new(Operator::Single('a')),
                Box::new(Operator::KleeneStar(Box::new(Operator::Single('b'))))
            )
        );
    }

    #[test]
    fn grouping_overrides_precedence() {
        assert_eq!(
            parse("(ab)*"),
            Operator::KleeneStar(Box::new(Operator::Concatenation(
                Box::new(Operator::Single('a')),
                Box::new(Operator::Single('b'))
            )))
        );
    }

    #[test]
    fn collation_range() {
        assert_eq!(parse("[a-c]"), Operator::Collation('a', 'c'));
    }

    #[test]
    fn escaped_metacharacter_is_literal() {
        assert_eq!(parse("\\("), Operator::Single('('));
    }
}
