//! # ε-NFA automata
//!
//! [`Automaton`] represents an ε-NFA: an owned state graph with a
//! distinguished start state and a set of accept states. It is the value
//! type that [`crate::operator::Operator::execute`] produces, and that
//! [`crate::regex::Regex`] stores once compiled.
//!
//! An `Automaton` is immutable once built — all the interesting mutation
//! (tracking which states are "currently active" while stepping through
//! an input string) happens in a separate [`Evaluator`], borrowed from the
//! automaton it evaluates. This split mirrors the strategy spec.md's
//! concurrency section mandates for implementations that want to share a
//! compiled automaton across threads: the immutable half can be shared
//! freely, and each thread gets its own evaluator.
//!
//! Composition (union, concatenation, Kleene closure) never mutates an
//! operand: every operation deep-copies the states it needs into a fresh
//! result automaton, renaming on name collision so that every state in
//! the result has a name unique within it.

use crate::state::{State, StateId, Symbol};
use std::collections::HashSet;
use std::rc::Rc;

pub mod eval;
pub mod parse;

pub use eval::{EnterError, Evaluator};
pub use parse::{AutomatonParseError, ParsedAutomaton};

/// An ε-NFA: states, the subset of symbols actually used as input labels,
/// a start state and a set of accept states.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Automaton {
    states: Vec<State>,
    inputs: HashSet<char>,
    start: StateId,
    accept: HashSet<StateId>,
}

impl Automaton {
    fn empty() -> Self {
        Automaton {
            states: Vec::new(),
            inputs: HashSet::new(),
            start: 0,
            accept: HashSet::new(),
        }
    }

    fn push_state(&mut self, name: impl Into<Rc<str>>) -> StateId {
        let id = self.states.len();
        self.states.push(State::new(name));
        id
    }

    /// Builds an automaton whose arena has exactly `names`, in order,
    /// with no transitions yet and start/accept left at their defaults.
    /// Used by the text-form parser, which already knows the full state
    /// set from the states line before it has seen any transitions.
    pub(crate) fn empty_with_states(names: &[&str]) -> Automaton {
        let mut a = Automaton::empty();
        for &name in names {
            a.push_state(name);
        }
        a
    }

    fn add_transition(&mut self, from: StateId, symbol: Symbol, to: StateId) {
        self.states[from].add_transition(symbol, to);
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn accept(&self) -> &HashSet<StateId> {
        &self.accept
    }

    /// The alphabet of actual characters this automaton transitions on.
    /// Does not include the epsilon symbol, which is always implicitly
    /// available regardless of alphabet membership.
    pub fn inputs(&self) -> &HashSet<char> {
        &self.inputs
    }

    /// The smallest superset of `from` closed under epsilon transitions,
    /// computed by a worklist fixed-point. A fresh worklist and
    /// accumulator are allocated on every call (no shared mutable default
    /// state is threaded between calls, cf. spec.md's design note on the
    /// original's mutable-default-argument footgun).
    pub fn epsilon_closure(&self, from: &HashSet<StateId>) -> HashSet<StateId> {
        let mut closure: HashSet<StateId> = from.clone();
        let mut worklist: Vec<StateId> = from.iter().copied().collect();
        while let Some(state) = worklist.pop() {
            for target in self.states[state].forward(Symbol::Epsilon) {
                if closure.insert(target) {
                    worklist.push(target);
                }
            }
        }
        closure
    }

    /// A fresh evaluator with its current set reset to the epsilon
    /// closure of the start state.
    pub fn evaluator(&self) -> Evaluator<'_> {
        Evaluator::new(self)
    }

    /// Copies every state of `other` into `self`'s arena, renaming any
    /// state whose name collides with one already present. Returns the
    /// mapping from `other`'s original state ids to their ids in `self`.
    fn splice_in(&mut self, other: &Automaton, counter: &mut usize) -> Vec<StateId> {
        let mut existing_names: HashSet<Rc<str>> =
            self.states.iter().map(|s| Rc::from(s.name())).collect();
        let offset = self.states.len();
        let mapping: Vec<StateId> = (0..other.states.len()).map(|i| offset + i).collect();

        for state in &other.states {
            let mut copy = state.clone();
            if existing_names.contains(state.name()) {
                let fresh = fresh_name(&existing_names, counter);
                existing_names.insert(fresh.clone());
                copy.rename(fresh);
            } else {
                existing_names.insert(Rc::from(state.name()));
            }
            copy.remap(|old| mapping[old]);
            self.states.push(copy);
        }

        self.inputs.extend(other.inputs.iter().copied());
        mapping
    }

    /// An independent automaton with the same structure and language, but
    /// entirely freshly named states (used by [`Operator::execute`] for
    /// `KleenePlus`, which needs two non-aliased copies of its operand's
    /// fragment).
    ///
    /// [`Operator::execute`]: crate::operator::Operator::execute
    pub fn deep_copy(&self) -> Automaton {
        let mut counter = 0;
        let mut used = HashSet::new();
        let states = self
            .states
            .iter()
            .map(|s| {
                let mut copy = s.clone();
                let fresh = fresh_name(&used, &mut counter);
                used.insert(fresh.clone());
                copy.rename(fresh);
                copy
            })
            .collect();
        Automaton {
            states,
            inputs: self.inputs.clone(),
            start: self.start,
            accept: self.accept.clone(),
        }
    }

    /// Thompson alternation: a fresh start epsilon-branches to both
    /// operands' starts, and both operands' accepts epsilon-join a fresh
    /// accept.
    pub fn union(&self, other: &Automaton) -> Automaton {
        let mut result = Automaton::empty();
        let mut counter = 0;
        let left = result.splice_in(self, &mut counter);
        let right = result.splice_in(other, &mut counter);

        let existing_names: HashSet<Rc<str>> =
            result.states.iter().map(|s| Rc::from(s.name())).collect();
        let new_start = result.push_state(fresh_name(&existing_names, &mut counter));
        let existing_names: HashSet<Rc<str>> =
            result.states.iter().map(|s| Rc::from(s.name())).collect();
        let new_accept = result.push_state(fresh_name(&existing_names, &mut counter));

        result.add_transition(new_start, Symbol::Epsilon, left[self.start]);
        result.add_transition(new_start, Symbol::Epsilon, right[other.start]);
        for &a in &self.accept {
            result.add_transition(left[a], Symbol::Epsilon, new_accept);
        }
        for &a in &other.accept {
            result.add_transition(right[a], Symbol::Epsilon, new_accept);
        }

        result.start = new_start;
        result.accept = HashSet::from([new_accept]);
        result
    }

    /// Thompson concatenation: every accept of `self` epsilon-transitions
    /// into the start of `other`.
    pub fn concatenate(&self, other: &Automaton) -> Automaton {
        let mut result = Automaton::empty();
        let mut counter = 0;
        let left = result.splice_in(self, &mut counter);
        let right = result.splice_in(other, &mut counter);

        for &a in &self.accept {
            result.add_transition(left[a], Symbol::Epsilon, right[other.start]);
        }

        result.start = left[self.start];
        result.accept = other.accept.iter().map(|&a| right[a]).collect();
        result
    }

    /// Thompson Kleene star: a fresh start/accept pair wraps the operand,
    /// with epsilon edges for "zero matches", "repeat" and "done".
    pub fn kleene(&self) -> Automaton {
        let mut result = Automaton::empty();
        let mut counter = 0;
        let inner = result.splice_in(self, &mut counter);

        let existing_names: HashSet<Rc<str>> =
            result.states.iter().map(|s| Rc::from(s.name())).collect();
        let new_start = result.push_state(fresh_name(&existing_names, &mut counter));
        let existing_names: HashSet<Rc<str>> =
            result.states.iter().map(|s| Rc::from(s.name())).collect();
        let new_accept = result.push_state(fresh_name(&existing_names, &mut counter));

        result.add_transition(new_start, Symbol::Epsilon, inner[self.start]);
        result.add_transition(new_start, Symbol::Epsilon, new_accept);
        for &a in &self.accept {
            result.add_transition(inner[a], Symbol::Epsilon, inner[self.start]);
            result.add_transition(inner[a], Symbol::Epsilon, new_accept);
        }

        result.start = new_start;
        result.accept = HashSet::from([new_accept]);
        result
    }

    /// `?`: an epsilon shortcut in parallel with the operand, from its
    /// start directly to each of its accepts. This is spec.md's chosen
    /// reading of the Open Question around `QuestionMark`'s composition
    /// (see DESIGN.md), rather than the original's `start·end + item`.
    pub fn optional(&self) -> Automaton {
        let mut result = self.deep_copy();
        let accepts: Vec<StateId> = result.accept.iter().copied().collect();
        for accept in accepts {
            result.add_transition(result.start, Symbol::Epsilon, accept);
        }
        result
    }

    /// The primitive single-symbol fragment: `s0 --c--> s1`.
    pub fn single(c: char) -> Automaton {
        let mut a = Automaton::empty();
        a.inputs.insert(c);
        let s0 = a.push_state("s0");
        let s1 = a.push_state("s1");
        a.add_transition(s0, Symbol::Char(c), s1);
        a.start = s0;
        a.accept = HashSet::from([s1]);
        a
    }

    /// The collation fragment for `[lo-hi]`: one transition per character
    /// in the inclusive range. Precondition: `lo <= hi`, enforced by
    /// [`crate::operator::Operator::collation`] at construction time.
    pub(crate) fn collation(lo: char, hi: char) -> Automaton {
        debug_assert!(lo <= hi);
        let mut a = Automaton::empty();
        let c0 = a.push_state("c0");
        let c1 = a.push_state("c1");
        for code in (lo as u32)..=(hi as u32) {
            if let Some(c) = char::from_u32(code) {
                a.inputs.insert(c);
                a.add_transition(c0, Symbol::Char(c), c1);
            }
        }
        a.start = c0;
        a.accept = HashSet::from([c1]);
        a
    }
}

fn fresh_name(existing: &HashSet<Rc<str>>, counter: &mut usize) -> Rc<str> {
    loop {
        let candidate: Rc<str> = Rc::from(format!("q{counter}"));
        *counter += 1;
        if !existing.contains(&candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepts(a: &Automaton, s: &str) -> bool {
        let mut eval = a.evaluator();
        for c in s.chars() {
            if eval.enter(Symbol::Char(c)).is_err() {
                return false;
            }
        }
        eval.is_accepting()
    }

    #[test]
    fn single_symbol() {
        let a = Automaton::single('a');
        assert!(accepts(&a, "a"));
        assert!(!accepts(&a, ""));
        assert!(!accepts(&a, "aa"));
        assert!(!accepts(&a, "b"));
    }

    #[test]
    fn union_accepts_either() {
        let a = Automaton::single('a').union(&Automaton::single('b'));
        assert!(accepts(&a, "a"));
        assert!(accepts(&a, "b"));
        assert!(!accepts(&a, "ab"));
        assert!(!accepts(&a, ""));
    }

    #[test]
    fn concatenation_accepts_sequence() {
        let a = Automaton::single('a').concatenate(&Automaton::single('b'));
        assert!(accepts(&a, "ab"));
        assert!(!accepts(&a, "a"));
        assert!(!accepts(&a, "ba"));
    }

    #[test]
    fn kleene_accepts_zero_or_more() {
        let a = Automaton::single('a').kleene();
        assert!(accepts(&a, ""));
        assert!(accepts(&a, "a"));
        assert!(accepts(&a, "aaaa"));
        assert!(!accepts(&a, "ab"));
    }

    #[test]
    fn optional_accepts_zero_or_one() {
        let a = Automaton::single('a').optional();
        assert!(accepts(&a, ""));
        assert!(accepts(&a, "a"));
        assert!(!accepts(&a, "aa"));
    }

    #[test]
    fn composition_produces_unique_state_names() {
        let a = Automaton::single('a');
        let b = Automaton::single('a'); // same internal names "s0"/"s1"
        let u = a.union(&b);
        let names: HashSet<&str> = u.states().iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), u.states().len());
        for state in u.states() {
            for targets in state.transitions().values() {
                for &t in targets {
                    assert!(t < u.states().len());
                }
            }
        }
    }

    #[test]
    fn deep_copy_preserves_language_and_renames() {
        let a = Automaton::single('a').kleene();
        let b = a.deep_copy();
        assert!(accepts(&b, ""));
        assert!(accepts(&b, "aaa"));
        let a_names: HashSet<&str> = a.states().iter().map(|s| s.name()).collect();
        let b_names: HashSet<&str> = b.states().iter().map(|s| s.name()).collect();
        assert!(a_names.is_disjoint(&b_names));
    }

    #[test]
    fn epsilon_closure_is_idempotent() {
        let a = Automaton::single('a').kleene();
        let once = a.epsilon_closure(&HashSet::from([a.start()]));
        let twice = a.epsilon_closure(&once);
        assert_eq!(once, twice);
    }
}
