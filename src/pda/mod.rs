//! # Stack PDA engine
//!
//! A deterministic pushdown automaton sharing [`crate::state`]'s
//! arena-of-indices shape with [`crate::automaton::Automaton`]. Each
//! [`PdaState`]'s transitions are keyed by a pair (input symbol,
//! stack-top symbol) rather than by input symbol alone, and each firing
//! carries a sequence of symbols to push.

pub mod eval;

pub use eval::PdaEvaluator;

use crate::state::Symbol;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

pub type PdaStateId = usize;

/// A push state: like [`crate::state::State`], but transitions are
/// keyed by (input symbol or ε, stack-top symbol) and each firing
/// carries a stack-push sequence. `push` may contain [`Symbol::Epsilon`]
/// entries, meaning "push nothing" at that position — filtered out
/// before actually touching the stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PdaState {
    name: Rc<str>,
    transitions: HashMap<(Symbol, char), (PdaStateId, Vec<Symbol>)>,
}

impl PdaState {
    pub fn new(name: impl Into<Rc<str>>) -> Self {
        PdaState {
            name: name.into(),
            transitions: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a transition firing on `(input, stack_top)`, moving to
    /// `target` and pushing `push` (applied left to right, so the last
    /// non-epsilon entry ends up on top of the stack).
    pub fn add_transition(
        &mut self,
        input: Symbol,
        stack_top: char,
        target: PdaStateId,
        push: Vec<Symbol>,
    ) {
        self.transitions.insert((input, stack_top), (target, push));
    }

    fn forward(&self, input: Symbol, stack_top: char) -> Option<(PdaStateId, Vec<Symbol>)> {
        self.transitions.get(&(input, stack_top)).cloned()
    }
}

/// An owned, deterministic stack machine: states, a start state, an
/// accept set, and the designated bottom-of-stack symbol pushed at
/// reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pda {
    states: Vec<PdaState>,
    start: PdaStateId,
    accept: HashSet<PdaStateId>,
    start_stack_symbol: char,
}

impl Pda {
    pub fn new(
        states: Vec<PdaState>,
        start: PdaStateId,
        accept: HashSet<PdaStateId>,
        start_stack_symbol: char,
    ) -> Self {
        Pda {
            states,
            start,
            accept,
            start_stack_symbol,
        }
    }

    pub fn states(&self) -> &[PdaState] {
        &self.states
    }

    pub fn start(&self) -> PdaStateId {
        self.start
    }

    pub fn accept(&self) -> &HashSet<PdaStateId> {
        &self.accept
    }

    pub fn start_stack_symbol(&self) -> char {
        self.start_stack_symbol
    }

    pub fn evaluator(&self) -> PdaEvaluator<'_> {
        PdaEvaluator::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Symbol;

    /// Balanced-parentheses PDA over three control states: `bottom`
    /// (stack holds only the `$` marker, the sole accept state), `mid`
    /// (at least one `(` is still open) and `just_closed`, a transient
    /// state reached right after popping a `(` for a `)` — its only
    /// job is to ε-peek the newly exposed top, push it back unchanged,
    /// and settle into `bottom` or `mid` accordingly. This peek step is
    /// exactly what an ε-input transition is for: deciding the next
    /// control state from what's now on top of the stack, without
    /// consuming input.
    fn balanced_parens_pda() -> Pda {
        const BOTTOM: PdaStateId = 0;
        const MID: PdaStateId = 1;
        const JUST_CLOSED: PdaStateId = 2;

        let mut bottom = PdaState::new("bottom");
        bottom.add_transition(
            Symbol::Char('('),
            '$',
            MID,
            vec![Symbol::Char('$'), Symbol::Char('(')],
        );

        let mut mid = PdaState::new("mid");
        mid.add_transition(
            Symbol::Char('('),
            '(',
            MID,
            vec![Symbol::Char('('), Symbol::Char('(')],
        );
        mid.add_transition(Symbol::Char(')'), '(', JUST_CLOSED, vec![]);

        let mut just_closed = PdaState::new("just_closed");
        just_closed.add_transition(Symbol::Epsilon, '$', BOTTOM, vec![Symbol::Char('$')]);
        just_closed.add_transition(Symbol::Epsilon, '(', MID, vec![Symbol::Char('(')]);

        Pda::new(
            vec![bottom, mid, just_closed],
            BOTTOM,
            HashSet::from([BOTTOM]),
            '$',
        )
    }

    #[test]
    fn accepts_balanced_parentheses() {
        let pda = balanced_parens_pda();
        let mut eval = pda.evaluator();
        assert!(eval.run("(())"));
        assert!(eval.run("()()"));
        assert!(!eval.run("(()"));
        assert!(!eval.run(")("));
    }
}
