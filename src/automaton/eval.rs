//! NFA execution engine: tracks the current set of active states under
//! epsilon-closure semantics and answers acceptance queries.
//!
//! `Evaluator` is a lifetime-bound execution context distinct from the
//! (here, immutable) automaton it steps over, so the automaton itself
//! stays shareable across threads while each evaluator is exclusively
//! owned by whichever thread is driving it.

use crate::automaton::Automaton;
use crate::state::{StateId, Symbol};
use std::collections::HashSet;
use thiserror::Error;

/// Raised by [`Evaluator::enter`] when the given symbol is not a member
/// of the automaton's input alphabet. [`crate::regex::Regex::check`]
/// catches this and reports a clean `false` rather than propagating it,
/// per spec.md §7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("'{0}' is not in the automaton's input alphabet")]
pub struct EnterError(pub char);

/// The current set of active states for one run of an [`Automaton`].
/// Constructed already epsilon-closed over the start state; every
/// subsequent `enter` re-closes over epsilon after following the given
/// symbol, so the invariant "current set is epsilon-closed" holds between
/// calls.
#[derive(Clone, Debug)]
pub struct Evaluator<'a> {
    automaton: &'a Automaton,
    current: HashSet<StateId>,
}

impl<'a> Evaluator<'a> {
    pub(super) fn new(automaton: &'a Automaton) -> Self {
        let mut eval = Evaluator {
            automaton,
            current: HashSet::new(),
        };
        eval.reset();
        eval
    }

    /// Resets the current set to the epsilon closure of the start state.
    /// Idempotent: calling `reset` twice in a row leaves the current set
    /// identical to calling it once.
    pub fn reset(&mut self) {
        self.current = self
            .automaton
            .epsilon_closure(&HashSet::from([self.automaton.start()]));
    }

    /// Follows `symbol` from every currently active state, then
    /// epsilon-closes the result. If no state has a transition on
    /// `symbol`, the current set becomes empty (a dead, non-accepting,
    /// non-raising state) — unless `symbol` isn't in the alphabet at all,
    /// in which case this fails fast instead.
    pub fn enter(&mut self, symbol: Symbol) -> Result<(), EnterError> {
        if let Symbol::Char(c) = symbol {
            if !self.automaton.inputs().contains(&c) {
                return Err(EnterError(c));
            }
        }

        let next: HashSet<StateId> = self
            .current
            .iter()
            .flat_map(|&s| self.automaton.states()[s].forward(symbol))
            .collect();
        self.current = self.automaton.epsilon_closure(&next);
        Ok(())
    }

    /// Convenience for stepping a whole string of single-character
    /// symbols; stops (returning the error) at the first symbol outside
    /// the alphabet.
    pub fn enter_str(&mut self, text: &str) -> Result<(), EnterError> {
        for c in text.chars() {
            self.enter(Symbol::Char(c))?;
        }
        Ok(())
    }

    pub fn current(&self) -> &HashSet<StateId> {
        &self.current
    }

    pub fn is_accepting(&self) -> bool {
        !self.current.is_disjoint(self.automaton.accept())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_is_idempotent() {
        let a = Automaton::single('a').kleene();
        let mut eval = a.evaluator();
        let after_one_reset = eval.current().clone();
        eval.reset();
        assert_eq!(eval.current(), &after_one_reset);
    }

    #[test]
    fn enter_rejects_symbol_outside_alphabet() {
        let a = Automaton::single('a');
        let mut eval = a.evaluator();
        assert_eq!(eval.enter(Symbol::Char('b')), Err(EnterError('b')));
    }

    #[test]
    fn enter_sequence_matches_whole_string() {
        let a = Automaton::single('a').concatenate(&Automaton::single('b'));
        let mut eval = a.evaluator();
        eval.enter(Symbol::Char('a')).unwrap();
        eval.enter(Symbol::Char('b')).unwrap();
        assert!(eval.is_accepting());
    }

    #[test]
    fn dead_state_does_not_raise() {
        let a = Automaton::single('a').concatenate(&Automaton::single('b'));
        let mut eval = a.evaluator();
        eval.enter(Symbol::Char('a')).unwrap();
        eval.enter(Symbol::Char('a')).unwrap(); // dead end, but valid alphabet member
        assert!(!eval.is_accepting());
        assert!(eval.current().is_empty());
    }
}
