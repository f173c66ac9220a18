//! Execution engine for [`crate::pda::Pda`]: pop-then-probe stepping,
//! with [`PdaEvaluator::step`] trying an ε-input transition before a
//! literal-input one, `step_epsilon` draining ε-moves once input runs
//! out, and `run` the consume-then-drain-epsilons driver loop.

use crate::pda::{Pda, PdaStateId};
use crate::state::Symbol;
use std::collections::VecDeque;

/// A run of a [`Pda`]: current control state, the stack (grown/shrunk
/// at its back), and whether the machine has entered the (implicit,
/// unrepresented) failure configuration. Like [`crate::automaton::Evaluator`],
/// this borrows the program it steps over rather than owning a copy of it.
#[derive(Clone, Debug)]
pub struct PdaEvaluator<'a> {
    pda: &'a Pda,
    current: PdaStateId,
    stack: Vec<char>,
    failed: bool,
}

impl<'a> PdaEvaluator<'a> {
    pub(super) fn new(pda: &'a Pda) -> Self {
        let mut eval = PdaEvaluator {
            pda,
            current: pda.start(),
            stack: Vec::new(),
            failed: false,
        };
        eval.reset();
        eval
    }

    /// Current state ← start; stack ← `[start_stack_symbol]`; clears
    /// the failure flag.
    pub fn reset(&mut self) {
        self.current = self.pda.start();
        self.stack.clear();
        self.stack.push(self.pda.start_stack_symbol());
        self.failed = false;
    }

    pub fn is_accepting(&self) -> bool {
        !self.failed && self.pda.accept().contains(&self.current)
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// One step of the engine for input symbol `value`. Returns `true`
    /// if `value` was consumed, `false` if an ε-move
    /// fired instead (the caller should retry the same `value`).
    ///
    /// If the stack is already empty, or neither an ε-input nor a
    /// `value`-input transition fires on the popped symbol, this enters
    /// the failure configuration (`has_failed` becomes true) and
    /// returns `true`, so a caller driving this in a loop treats the
    /// symbol as "dealt with" rather than retrying it forever.
    pub fn step(&mut self, value: char) -> bool {
        if self.failed {
            return true;
        }
        let Some(top) = self.stack.pop() else {
            self.failed = true;
            return true;
        };

        if let Some((target, push)) = self.pda.states()[self.current].forward(Symbol::Epsilon, top)
        {
            self.push_all(&push);
            self.current = target;
            return false;
        }

        if let Some((target, push)) = self.pda.states()[self.current].forward(Symbol::Char(value), top)
        {
            self.push_all(&push);
            self.current = target;
            return true;
        }

        self.failed = true;
        true
    }

    /// Fires one ε-input transition on the current top of stack, if
    /// any. Matches `_access_epsilon`: a failed probe does not restore
    /// the popped symbol — the stack permanently loses it. Returns
    /// whether a transition fired.
    pub fn step_epsilon(&mut self) -> bool {
        if self.failed {
            return false;
        }
        let Some(top) = self.stack.pop() else {
            return false;
        };
        match self.pda.states()[self.current].forward(Symbol::Epsilon, top) {
            Some((target, push)) => {
                self.push_all(&push);
                self.current = target;
                true
            }
            None => false,
        }
    }

    fn push_all(&mut self, push: &[Symbol]) {
        for symbol in push {
            if let Symbol::Char(c) = symbol {
                self.stack.push(*c);
            }
        }
    }

    /// Drives this evaluator over `input` left to right: consume symbols
    /// using `step`'s consumed/not-consumed signal, then, once input is
    /// exhausted, keep firing `step_epsilon`
    /// until accepting or no ε-move is available. True iff all input was
    /// consumed and the resulting terminal configuration is accepting.
    pub fn run(&mut self, input: &str) -> bool {
        self.reset();
        let mut pending: VecDeque<char> = input.chars().collect();

        while let Some(&value) = pending.front() {
            if self.failed {
                break;
            }
            if self.step(value) {
                pending.pop_front();
            }
        }

        if self.failed || !pending.is_empty() {
            return false;
        }

        while !self.is_accepting() && self.step_epsilon() {}

        self.is_accepting()
    }
}
