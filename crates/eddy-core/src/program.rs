//! The pure half of a unit: model, messages, commands and `update`

use crate::Command;
use std::fmt::Debug;

/// A model paired with the command it asks the runtime to perform
///
/// This is what `update` returns and what the engine stores. Observers only
/// ever see the model half.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<M, C> {
    /// The next model
    pub model: M,
    /// The side effect to perform (or the "no effect" command)
    pub cmd: C,
}

impl<M, C> Transition<M, C> {
    /// Create a transition
    pub fn new(model: M, cmd: C) -> Self {
        Self { model, cmd }
    }

    /// Split into `(model, cmd)`
    pub fn into_parts(self) -> (M, C) {
        (self.model, self.cmd)
    }
}

impl<M, C> From<(M, C)> for Transition<M, C> {
    fn from((model, cmd): (M, C)) -> Self {
        Self { model, cmd }
    }
}

/// The state-transition function of one independent unit
///
/// `update` must be pure and total: no I/O, no hidden state, and a
/// `match` over every message variant so the compiler rejects an
/// unhandled case. Stale or inapplicable messages return the model
/// unchanged with the "no effect" command.
pub trait Program: Send + Sync + 'static {
    /// Full observable state of the unit
    type Model: Clone + PartialEq + Debug + Send + Sync + 'static;
    /// Events driving transitions
    type Msg: Debug + Send + 'static;
    /// Side effects requested by transitions
    type Cmd: Command;

    /// Compute the next model and command
    fn update(&self, model: &Self::Model, msg: Self::Msg) -> Transition<Self::Model, Self::Cmd>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_parts() {
        let t: Transition<u32, ()> = (5, ()).into();
        assert_eq!(t, Transition::new(5, ()));
        assert_eq!(t.into_parts(), (5, ()));
    }
}
