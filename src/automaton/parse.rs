//! Parsing the automaton text form described in spec.md §6.1:
//!
//! ```text
//! <comma-separated state names>
//! <comma-separated input symbols>
//! <comma-separated accept-state names>
//! <start-state name>
//! <zero or more transition lines, each: src,symbol->dst>
//! ```
//!
//! As with the teacher's `dandy::parser`/`dandy::nfa::parse` split, this is
//! two stages: [`nom`] combinators here produce a [`ParsedAutomaton`]
//! without checking any cross-referential invariant, and `TryFrom` then
//! validates it into a real [`Automaton`], reporting an
//! [`AutomatonParseError`] on the same kinds of defect
//! `dandy::nfa::parse::NfaParseError` reports (unknown states, missing
//! start state, duplicate names).

use crate::automaton::Automaton;
use crate::state::Symbol;
use nom::bytes::complete::{tag, take_till1, take_until};
use nom::character::complete::{char as nom_char, line_ending, space0};
use nom::combinator::{all_consuming, eof, map};
use nom::multi::{many0, separated_list1};
use nom::sequence::{delimited, terminated, tuple};
use nom::{Finish, IResult};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// The result of the grammar pass: syntactically well-formed, but not yet
/// checked for missing states, a missing start state, or duplicate names.
#[derive(Debug, Clone)]
pub struct ParsedAutomaton<'a> {
    pub states: Vec<&'a str>,
    pub inputs: Vec<&'a str>,
    pub accept: Vec<&'a str>,
    pub start: &'a str,
    pub transitions: Vec<(&'a str, &'a str, &'a str)>,
}

#[derive(Debug, Error, PartialEq)]
pub enum AutomatonParseError<'a> {
    #[error("syntax error in automaton text form near: {0:?}")]
    Syntax(String),
    #[error("state '{0}' is referenced but was not declared in the states line")]
    UnknownState(&'a str),
    #[error("'{0}' is not a single character and cannot be a transition symbol")]
    InvalidSymbol(&'a str),
    #[error("there is no start state")]
    MissingStartState,
    #[error("state '{0}' is declared more than once")]
    DuplicateStateName(&'a str),
    #[error("'{0}' appears twice in the input alphabet")]
    DuplicateAlphabetSymbol(&'a str),
}

/// Parses the text form. The whole input must be consumed, otherwise this
/// reports a syntax error with the unparsed remainder.
pub fn parse(input: &str) -> Result<ParsedAutomaton<'_>, AutomatonParseError<'_>> {
    all_consuming(full_automaton)(input.trim_start())
        .finish()
        .map(|(_, parsed)| parsed)
        .map_err(|e: nom::error::Error<&str>| AutomatonParseError::Syntax(e.input.to_string()))
}

fn full_automaton(input: &str) -> IResult<&str, ParsedAutomaton<'_>> {
    map(
        tuple((
            terminated(comma_list, line_ending),
            terminated(comma_list, line_ending),
            terminated(comma_list, line_ending),
            terminated(token, alt_line_end),
            many0(terminated(transition_line, alt_line_end)),
        )),
        |(states, inputs, accept, start, transitions)| ParsedAutomaton {
            states,
            inputs,
            accept,
            start,
            transitions,
        },
    )(input)
}

fn alt_line_end(input: &str) -> IResult<&str, &str> {
    nom::branch::alt((line_ending, eof))(input)
}

fn comma_list(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(nom_char(','), token)(input)
}

fn token(input: &str) -> IResult<&str, &str> {
    map(
        delimited(
            space0,
            take_till1(|c: char| c == ',' || c == '\n' || c == '\r'),
            space0,
        ),
        str::trim,
    )(input)
}

fn transition_line(input: &str) -> IResult<&str, (&str, &str, &str)> {
    let (rest, src) = delimited(space0, take_until(","), space0)(input)?;
    let (rest, _) = nom_char(',')(rest)?;
    let (rest, symbol) = delimited(space0, take_until("->"), space0)(rest)?;
    let (rest, _) = tag("->")(rest)?;
    let (rest, dst) = delimited(space0, take_till1(|c: char| c == '\n' || c == '\r'), space0)(rest)?;
    Ok((rest, (src.trim(), symbol.trim(), dst.trim())))
}

impl<'a> TryFrom<ParsedAutomaton<'a>> for Automaton {
    type Error = AutomatonParseError<'a>;

    fn try_from(parsed: ParsedAutomaton<'a>) -> Result<Self, Self::Error> {
        use AutomatonParseError::*;

        let mut alphabet = HashSet::new();
        for &sym in &parsed.inputs {
            if !alphabet.insert(sym) {
                return Err(DuplicateAlphabetSymbol(sym));
            }
        }

        let mut name_to_id = HashMap::new();
        for &name in &parsed.states {
            if name_to_id.insert(name, name_to_id.len()).is_some() {
                return Err(DuplicateStateName(name));
            }
        }

        let start_id = *name_to_id.get(parsed.start).ok_or(MissingStartState)?;

        let mut accept = HashSet::new();
        for &name in &parsed.accept {
            accept.insert(*name_to_id.get(name).ok_or(UnknownState(name))?);
        }

        let mut char_alphabet = HashSet::new();
        for &sym in &parsed.inputs {
            if let Symbol::Char(c) = parse_symbol(sym)? {
                char_alphabet.insert(c);
            }
        }

        let mut automaton = Automaton::empty_with_states(&parsed.states);
        for (src, symbol, dst) in parsed.transitions {
            let src_id = *name_to_id.get(src).ok_or(UnknownState(src))?;
            let dst_id = *name_to_id.get(dst).ok_or(UnknownState(dst))?;
            let sym = parse_symbol(symbol)?;
            automaton.add_transition(src_id, sym, dst_id);
        }

        automaton.inputs = char_alphabet;
        automaton.start = start_id;
        automaton.accept = accept;

        Ok(automaton)
    }
}

fn parse_symbol(text: &str) -> Result<Symbol, AutomatonParseError<'_>> {
    if text == "$" {
        return Ok(Symbol::Epsilon);
    }
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Symbol::Char(c)),
        _ => Err(AutomatonParseError::InvalidSymbol(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_validates_minimal_automaton() {
        let text = "s0,s1\na,b\ns1\ns0\ns0,a->s1\ns1,b->s1\n";
        let parsed = parse(text).unwrap();
        let automaton: Automaton = parsed.try_into().unwrap();
        let mut eval = automaton.evaluator();
        eval.enter(Symbol::Char('a')).unwrap();
        eval.enter(Symbol::Char('b')).unwrap();
        assert!(eval.is_accepting());
    }

    #[test]
    fn epsilon_nfa_with_dollar_symbol() {
        let text = "s0,s1,s2\na,$\ns2\ns0\ns0,$->s1\ns1,a->s2\n";
        let parsed = parse(text).unwrap();
        let automaton: Automaton = parsed.try_into().unwrap();
        let mut eval = automaton.evaluator();
        eval.enter(Symbol::Char('a')).unwrap();
        assert!(eval.is_accepting());
    }

    #[test]
    fn rejects_unknown_state_in_transition() {
        let text = "s0,s1\na\ns1\ns0\ns0,a->s2\n";
        let parsed = parse(text).unwrap();
        let result: Result<Automaton, _> = parsed.try_into();
        assert_eq!(result, Err(AutomatonParseError::UnknownState("s2")));
    }

    #[test]
    fn rejects_missing_start_state() {
        let text = "s0,s1\na\ns1\nzzz\ns0,a->s1\n";
        let parsed = parse(text).unwrap();
        let result: Result<Automaton, _> = parsed.try_into();
        assert_eq!(result, Err(AutomatonParseError::MissingStartState));
    }
}
