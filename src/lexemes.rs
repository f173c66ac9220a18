//! Canonical process-wide compiled regexes (spec.md §6.4), consumed by
//! whatever lexer sits on top of this crate (out of scope here, per
//! spec.md §1). Each is compiled exactly once, on first access, and
//! lives for the remainder of the process — the textbook use case for
//! [`lazy_static::lazy_static!`], and the same pattern the pack itself
//! reaches for when a table of compiled-once regexes is needed (see
//! DESIGN.md for the grounding).
//!
//! `NUMBER` is not in spec.md's canonical list, but original_source's
//! `grammar/regular_expressions.py` defines it alongside `FLOAT`; it's
//! restored here since it costs nothing once `FLOAT`'s pattern exists
//! (see SPEC_FULL.md §4).

use crate::regex::Regex;
use lazy_static::lazy_static;

fn compile(pattern: &str, name: &str) -> Regex {
    crate::regex::compile(pattern, name)
        .unwrap_or_else(|e| panic!("lexemes::{name} failed to compile {pattern:?}: {e}"))
}

lazy_static! {
    /// `[0-9]+`
    pub static ref INTEGER: Regex = compile("[0-9]+", "INTEGER");
    /// `([a-z]|[A-Z]|_)([a-z]|[A-Z]|[0-9]|_)*`
    pub static ref VARIABLE: Regex = compile(
        "([a-z]|[A-Z]|_)([a-z]|[A-Z]|[0-9]|_)*",
        "VARIABLE"
    );
    /// `([0-9]+\.[0-9]*)|([0-9]*\.[0-9]+)`
    pub static ref FLOAT: Regex = compile(
        "([0-9]+\\.[0-9]*)|([0-9]*\\.[0-9]+)",
        "FLOAT"
    );
    /// `([0-9]*\.?[0-9]+)|([0-9]+\.?[0-9]*)`, restored from original_source.
    pub static ref NUMBER: Regex = compile(
        "([0-9]*\\.?[0-9]+)|([0-9]+\\.?[0-9]*)",
        "NUMBER"
    );

    pub static ref LEFT_PAREN: Regex = compile("\\(", "LEFT_PAREN");
    pub static ref RIGHT_PAREN: Regex = compile("\\)", "RIGHT_PAREN");
    pub static ref LEFT_BRACKET: Regex = compile("\\[", "LEFT_BRACKET");
    pub static ref RIGHT_BRACKET: Regex = compile("\\]", "RIGHT_BRACKET");
    pub static ref ASSIGN: Regex = compile("=", "ASSIGN");
    pub static ref EQUALS: Regex = compile("==", "EQUALS");
    pub static ref NOT_EQUALS: Regex = compile("!=", "NOT_EQUALS");
    pub static ref LESS_THAN: Regex = compile("<", "LESS_THAN");
    pub static ref LESS_EQUALS: Regex = compile("<=", "LESS_EQUALS");
    pub static ref GREATER_THAN: Regex = compile(">", "GREATER_THAN");
    pub static ref GREATER_EQUALS: Regex = compile(">=", "GREATER_EQUALS");
    pub static ref PLUS: Regex = compile("\\+", "PLUS");
    pub static ref MINUS: Regex = compile("\\-", "MINUS");
    pub static ref TIMES: Regex = compile("\\*", "TIMES");
    pub static ref DIVIDE: Regex = compile("/", "DIVIDE");
    pub static ref SEMICOLON: Regex = compile("\\;", "SEMICOLON");
    pub static ref COLON: Regex = compile(":", "COLON");
    pub static ref COMMA: Regex = compile(",", "COMMA");
    pub static ref NEWLINE: Regex = compile("\n", "NEWLINE");
    pub static ref TAB: Regex = compile("\t", "TAB");
    pub static ref QUOTE: Regex = compile("\"", "QUOTE");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_scenarios() {
        assert!(INTEGER.check("0"));
        assert!(INTEGER.check("123"));
        assert!(!INTEGER.check(""));
        assert!(!INTEGER.check("1a"));
    }

    #[test]
    fn variable_scenarios() {
        assert!(VARIABLE.check("x"));
        assert!(VARIABLE.check("_x1"));
        assert!(!VARIABLE.check("1x"));
        assert!(!VARIABLE.check(""));
    }

    #[test]
    fn float_requires_a_decimal_point() {
        assert!(FLOAT.check("1.5"));
        assert!(FLOAT.check("1."));
        assert!(FLOAT.check(".5"));
        assert!(!FLOAT.check("5"));
    }

    #[test]
    fn number_accepts_integers_too() {
        assert!(NUMBER.check("5"));
        assert!(NUMBER.check("5.5"));
        assert!(!NUMBER.check(""));
    }

    #[test]
    fn punctuation_literals_match_exactly_themselves() {
        assert!(EQUALS.check("=="));
        assert!(!EQUALS.check("="));
        assert!(LESS_EQUALS.check("<="));
        assert!(!LESS_EQUALS.check("<"));
        assert!(NEWLINE.check("\n"));
        assert!(!NEWLINE.check(" "));
    }
}
