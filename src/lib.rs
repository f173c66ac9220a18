//! # dandy
//!
//! `dandy` compiles a regular expression into a Thompson-constructed
//! ε-NFA and executes that automaton to decide string membership. It
//! also exposes the automaton's text-serialization format directly (for
//! hand-written or tooling-generated automata that didn't come from a
//! regex at all), and a secondary stack-PDA engine sharing the same
//! state-graph primitives.
//!
//! ## Usage
//!
//! ```rust
//! use dandy::regex::compile;
//!
//! let variable = compile("([a-z]|[A-Z]|_)([a-z]|[A-Z]|[0-9]|_)*", "VARIABLE").unwrap();
//! assert!(variable.check("_x1"));
//! assert!(!variable.check("1x"));
//!
//! let integer = compile("[0-9]+", "INTEGER").unwrap();
//! assert!(integer.check("123"));
//! assert!(!integer.check(""));
//! ```
//!
//! Automata can also be built directly from the text form described
//! below, without going through a regex at all:
//!
//! ```rust
//! use dandy::automaton::Automaton;
//! use dandy::state::Symbol;
//!
//! let text = "s0,s1\na,b\ns1\ns0\ns0,a->s1\ns1,b->s1\n";
//! let automaton: Automaton = dandy::automaton::parse::parse(text).unwrap().try_into().unwrap();
//! let mut eval = automaton.evaluator();
//! eval.enter(Symbol::Char('a')).unwrap();
//! eval.enter(Symbol::Char('b')).unwrap();
//! assert!(eval.is_accepting());
//! ```
//!
//! ## Automaton text form
//!
//! A newline-separated block of five sections: comma-separated state
//! names, comma-separated input symbols, comma-separated accept-state
//! names, the start-state name, and zero or more transition lines of the
//! form `src,symbol->dst`. Whitespace around commas and names is
//! ignored. The ε-symbol defaults to the literal `$` and is implicitly a
//! member of the alphabet.
//!
//! ## Regex surface syntax
//!
//! See [`parser`] for the full grammar; briefly, `xy` concatenates,
//! `x|y` alternates, `x*`/`x+`/`x?` are Kleene star/plus/optional,
//! `(…)` groups, `[a-b]` is a single collation range, and `\c` escapes
//! one of the twelve reserved characters to match it literally.
//!
//! ## Canonical compiled regexes
//!
//! [`lexemes`] exposes a set of process-wide compiled regexes for the
//! tokens a lexer built on top of this crate would typically need:
//! `INTEGER`, `VARIABLE`, `FLOAT`, `NUMBER`, and one per common
//! punctuation/operator token.
//!
//! ## Concurrency
//!
//! An [`automaton::Automaton`] is immutable once built and holds no
//! interior mutability, so it may be shared freely across threads. All
//! the mutable state of a run (the current set of active states) lives
//! in a separate [`automaton::Evaluator`], borrowed from the automaton
//! it steps over — construct one evaluator per thread that needs to
//! drive the same compiled automaton concurrently.

pub mod automaton;
pub mod lexemes;
pub mod operator;
pub mod parser;
pub mod pda;
pub mod regex;
pub mod state;
