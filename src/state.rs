//! State graph primitives shared by [`crate::automaton`] and [`crate::pda`].
//!
//! States live in an arena (a plain `Vec`) owned by their automaton; a
//! [`StateId`] is just an index into that arena. This sidesteps the
//! self-referential-graph problem that a cyclic automaton (every Kleene
//! loop is a cycle) would otherwise cause for an owning-pointer
//! representation, and makes deep-copy and alias-renaming a matter of
//! copying the arena and remapping indices rather than walking a graph of
//! `Rc`/`RefCell` nodes.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

/// An atomic input token, or the distinguished epsilon (free) transition.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Symbol {
    Char(char),
    Epsilon,
}

impl Symbol {
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }

    pub fn char(self) -> Option<char> {
        match self {
            Symbol::Char(c) => Some(c),
            Symbol::Epsilon => None,
        }
    }
}

/// Index of a state within the arena of the automaton that owns it. Not
/// meaningful across automata.
pub type StateId = usize;

/// A state in a non-deterministic automaton: a name and a mapping from
/// [`Symbol`] to the set of states reachable by one transition on that
/// symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    name: Rc<str>,
    transitions: HashMap<Symbol, HashSet<StateId>>,
}

impl State {
    pub fn new(name: impl Into<Rc<str>>) -> Self {
        State {
            name: name.into(),
            transitions: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Changes this state's identity. Used by alias renaming during
    /// composition, when a state copied in from another automaton's
    /// arena collides in name with one already present in the result.
    pub fn rename(&mut self, new_name: impl Into<Rc<str>>) {
        self.name = new_name.into();
    }

    /// Adds `target` to the successor set for `symbol`.
    pub fn add_transition(&mut self, symbol: Symbol, target: StateId) {
        self.transitions.entry(symbol).or_default().insert(target);
    }

    /// The successor set for `symbol` (empty if there is none).
    pub fn forward(&self, symbol: Symbol) -> HashSet<StateId> {
        self.transitions.get(&symbol).cloned().unwrap_or_default()
    }

    pub fn transitions(&self) -> &HashMap<Symbol, HashSet<StateId>> {
        &self.transitions
    }

    /// Remaps every transition target through `f`, used when splicing an
    /// operand's arena into a composed result at some index offset.
    pub(crate) fn remap(&mut self, f: impl Fn(StateId) -> StateId) {
        self.transitions = self
            .transitions
            .drain()
            .map(|(sym, targets)| (sym, targets.into_iter().map(&f).collect()))
            .collect();
    }
}
